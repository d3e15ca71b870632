// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{crate_version, value_t, App, Arg};
use failure::{format_err, Error};
use log::info;
use pgmseam::logger::{init_with_level, level_for};
use pgmseam::pgm::MAX_MAX_VALUE;
use pgmseam::raster::{energy_to_luma, load_raster, save_raster};
use pgmseam::{carve_image, compute_energy, Grid, PgmImage};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process;

fn is_pgm(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("pgm"))
        .unwrap_or(false)
}

// photo.pgm -> photo_processed.pgm, next to the input.
fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .unwrap_or_else(|| OsStr::new("image"))
        .to_string_lossy();
    let ext = input
        .extension()
        .unwrap_or_else(|| OsStr::new("pgm"))
        .to_string_lossy();
    input.with_file_name(format!("{}_processed.{}", stem, ext))
}

fn load(path: &Path) -> Result<PgmImage, Error> {
    Ok(if is_pgm(path) {
        PgmImage::load(path)?
    } else {
        load_raster(path)?
    })
}

fn save(image: &PgmImage, path: &Path) -> Result<(), Error> {
    if is_pgm(path) {
        image.save(path, Some(&path.to_string_lossy()))?;
    } else {
        save_raster(image, path)?;
    }
    Ok(())
}

fn save_energy(grid: &Grid<i32>, path: &Path) -> Result<(), Error> {
    let energy = compute_energy(grid)?;
    if is_pgm(path) {
        let peak = energy.iter().copied().max().unwrap_or(0).max(1);
        // 16-bit inputs can peak above what a graymap may declare.
        let (energy, peak) = if peak > MAX_MAX_VALUE {
            let scale = |e: i32| (i64::from(e) * i64::from(MAX_MAX_VALUE) / i64::from(peak)) as i32;
            (energy.map(scale), MAX_MAX_VALUE)
        } else {
            (energy, peak)
        };
        PgmImage::new(energy, peak).save(path, Some(&path.to_string_lossy()))?;
    } else {
        energy_to_luma(&energy)?
            .save(path)
            .map_err(|err| format_err!("{}", err))?;
    }
    Ok(())
}

fn run() -> Result<(), Error> {
    let matches = App::new("pgmseam")
        .version(crate_version!())
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Seam carving for grayscale images")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("vertical")
                .long("vertical")
                .value_name("N")
                .help("Vertical seams to remove; each narrows the image by one")
                .takes_value(true)
                .default_value("0"),
        )
        .arg(
            Arg::with_name("horizontal")
                .long("horizontal")
                .value_name("N")
                .help("Horizontal seams to remove; each shortens the image by one")
                .takes_value(true)
                .default_value("0"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("PATH")
                .help("Where to write the carved image [default: <input>_processed.<ext>]")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .value_name("PATH")
                .help("Also write the energy map of the input")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("More progress on stderr (repeat for more)"),
        )
        .arg(
            Arg::with_name("quiet")
                .short("q")
                .long("quiet")
                .help("No progress output at all"),
        )
        .get_matches();

    init_with_level(level_for(
        matches.occurrences_of("verbose"),
        matches.is_present("quiet"),
    ))?;

    let vertical = value_t!(matches, "vertical", usize).unwrap_or_else(|e| e.exit());
    let horizontal = value_t!(matches, "horizontal", usize).unwrap_or_else(|e| e.exit());
    let input = matches
        .value_of_os("input")
        .map(PathBuf::from)
        .ok_or_else(|| format_err!("no input image given"))?;
    let output = matches
        .value_of_os("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| default_output(&input));

    let image = load(&input)?;
    info!(
        "loaded {} ({}x{})",
        input.display(),
        image.grid.width(),
        image.grid.height()
    );

    if let Some(path) = matches.value_of_os("energy") {
        save_energy(&image.grid, Path::new(path))?;
        info!("wrote energy map to {}", Path::new(path).display());
    }

    let carved = carve_image(&image, vertical, horizontal)?;
    info!("carved to {}x{}", carved.grid.width(), carved.grid.height());

    save(&carved, &output)?;
    info!("wrote {}", output.display());
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("pgmseam: {}", err);
        for cause in err.iter_causes() {
            eprintln!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}
