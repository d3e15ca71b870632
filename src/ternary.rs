// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Conditional-presence shorthand.  The border tables in the energy
/// and cost code read much better as one line per neighbour than as
/// `cargo fmt`'s five-line `if` blocks.
///
/// `cq!(cond => a)` is `Some(a)` when `cond` holds and `None`
/// otherwise, which is how a neighbour that may not exist is spelled.
/// `a` is only evaluated when `cond` holds.
#[macro_export]
macro_rules! cq {
    ($condition: expr => $present: expr) => {
        if $condition {
            Some($present)
        } else {
            None
        }
    };
}
