// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Progress reporting for the command line tool.
//!
//! `level_for` turns the `-v`/`-q` flags into a `LevelFilter`, and
//! `init_with_level` installs a `log` backend that writes each record
//! to stderr, stamped with the seconds since start-up.  Stdout is left
//! alone so a carved image can be piped out of the tool.  Records from
//! `debug` and `trace` also name the module they came from, which is
//! how per-seam progress can be told apart from the tool's own chatter.

use log::{Level, LevelFilter, Log, Metadata, Record};
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

struct Progress {
    started: Instant,
}

fn render(elapsed: Duration, record: &Record) -> String {
    let stamp = elapsed.as_secs_f64();
    match record.level() {
        Level::Debug | Level::Trace => format!(
            "[{:8.3}s {:<5} {}] {}",
            stamp,
            record.level(),
            record.target(),
            record.args()
        ),
        level => format!("[{:8.3}s {:<5}] {}", stamp, level, record.args()),
    }
}

impl Log for Progress {
    // The global max level is the only filter; `set_max_level` owns it.
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = render(self.started.elapsed(), record);
            let _ = writeln!(io::stderr().lock(), "{}", line);
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static PROGRESS: OnceLock<Progress> = OnceLock::new();

/// Install the stderr backend at `level`.  Later calls change nothing:
/// neither the backend nor the level it was installed with.
pub fn init_with_level(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    let mut first = false;
    let progress = PROGRESS.get_or_init(|| {
        first = true;
        Progress {
            started: Instant::now(),
        }
    });
    if first {
        log::set_logger(progress)?;
        log::set_max_level(level);
    }
    Ok(())
}

/// Map a `-v` count onto a level; `quiet` wins over any count.
pub fn level_for(verbosity: u64, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
