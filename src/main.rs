//! BitBoard Checkers, a two-player console game.
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
#![warn(missing_docs, missing_debug_implementations, unused_extern_crates)]
#![warn(clippy::unimplemented, clippy::todo)]
#![warn(clippy::option_unwrap_used, clippy::result_unwrap_used)]

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use clap::{App, Arg, ArgMatches, crate_version};
use log::info;
use simplelog::{WriteLogger, LevelFilter, Config};
use bitcheckers::Error;
use bitcheckers::config::Settings;
use bitcheckers::console::{Console, Outcome};

fn main() -> Result<(), Error> {
    let matches =
        App::new("BitBoard Checkers")
            .version(crate_version!())
            .author("Mike Leany")
            .about("Two-player checkers on an 8x8 board, played at the console.")
            .arg(Arg::with_name("log")
                .long("log")
                .short("l")
                .help("Turns on logging"))
            .arg(Arg::with_name("log-file")
                .long("log-file")
                .value_name("LOG_FILE")
                .takes_value(true)
                .default_value("bitcheckers.log")
                .help("Sets the log file if logging is turned on"))
            .arg(Arg::with_name("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .takes_value(true)
                .default_value("info")
                .possible_values(&["off", "error", "warn", "info", "debug", "trace"])
                .help("Sets the log level if logging is turned on"))
            .arg(Arg::with_name("config")
                .long("config")
                .short("c")
                .value_name("FILE")
                .takes_value(true)
                .help("Reads settings from FILE instead of ~/.bitcheckers/config.yaml"))
            .arg(Arg::with_name("script")
                .long("script")
                .short("s")
                .value_name("FILE")
                .takes_value(true)
                .help("Reads moves from FILE instead of standard input"))
            .arg(Arg::with_name("dump")
                .long("dump")
                .help("Prints the four bitboards in hexadecimal below each board"))
            .arg(Arg::with_name("no-intro")
                .long("no-intro")
                .help("Skips the welcome message"))
            .get_matches();

    let config_file = matches.value_of_os("config")
        .map(PathBuf::from)
        .unwrap_or_else(Settings::default_path);
    let settings = apply_args(Settings::load(&config_file)?, &matches);

    let log_level = settings.level_filter()?;
    let _logger = if log_level != LevelFilter::Off {
        WriteLogger::init(
            log_level,
            Config::default(),
            File::create(&settings.log_file).map_err(|err| {
                Error::from(format!("{}: {}", settings.log_file.display(), err))
            })?)
    } else {
        WriteLogger::init(LevelFilter::Off, Config::default(), io::sink())
    };
    info!("settings: {:?}", settings);

    match matches.value_of_os("script") {
        Some(script) => {
            let path = PathBuf::from(script);
            let file = File::open(&path)
                .map_err(|err| Error::from(format!("{}: {}", path.display(), err)))?;
            play(BufReader::new(file), &settings)
        },
        None => {
            let stdin = io::stdin();
            let input = stdin.lock();
            play(input, &settings)
        },
    }
}

/// Overrides settings from the configuration file with those given on the command line.
fn apply_args(mut settings: Settings, matches: &ArgMatches<'_>) -> Settings {
    if matches.is_present("log") {
        settings.log = true;
    }
    if matches.occurrences_of("log-file") > 0 {
        if let Some(file) = matches.value_of_os("log-file") {
            settings.log_file = PathBuf::from(file);
        }
    }
    if matches.occurrences_of("log-level") > 0 {
        if let Some(level) = matches.value_of("log-level") {
            settings.log_level = level.to_owned();
        }
    }
    if matches.is_present("dump") {
        settings.dump_bitboards = true;
    }
    if matches.is_present("no-intro") {
        settings.show_intro = false;
    }

    settings
}

fn play<R: BufRead>(input: R, settings: &Settings) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut console = Console::new(input, stdout.lock());
    console.dump_bitboards(settings.dump_bitboards);

    if settings.show_intro {
        console.intro()?;
    }

    match console.run()? {
        Outcome::Finished(result) => info!("game over: {}", result),
        Outcome::Quit => info!("game abandoned"),
        Outcome::InputEnded => info!("input ended before the game was decided"),
    }

    Ok(())
}
