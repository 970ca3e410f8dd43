//! Settings read from `~/.bitcheckers/config.yaml`
//
//  Copyright 2020 Michael Leany
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
//! Every field is optional. A missing file, or a missing field, takes the default. For example:
//!
//! ```yaml
//! log: true
//! log_file: /tmp/bitcheckers.log
//! log_level: debug
//! dump_bitboards: false
//! show_intro: true
//! ```
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};
use simplelog::LevelFilter;
use crate::Error;

/// Name of the directory under the user's home directory
pub const APP_DIR: &str = ".bitcheckers";

/// Name of the settings file within `APP_DIR`
pub const CONFIG_FILE: &str = "config.yaml";

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Settings for a console game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Turns on logging
    pub log: bool,
    /// The log file if logging is turned on
    pub log_file: PathBuf,
    /// One of `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Prints the four bitboards in hexadecimal below each board
    pub dump_bitboards: bool,
    /// Prints the welcome message and move format before the first board
    pub show_intro: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            log: false,
            log_file: PathBuf::from("bitcheckers.log"),
            log_level: "info".to_owned(),
            dump_bitboards: false,
            show_intro: true,
        }
    }
}

impl Settings {
    /// Returns `~/.bitcheckers/config.yaml`, or `./.bitcheckers/config.yaml` if the home
    /// directory is unknown.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
            .join(CONFIG_FILE)
    }

    /// Reads settings from `path`. Returns the defaults if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but can't be read or isn't valid YAML.
    pub fn load(path: &Path) -> Result<Settings, Error> {
        if !path.exists() {
            return Ok(Settings::default());
        }

        let s = read_to_string(path)
            .map_err(|err| Error::from(format!("{}: {}", path.display(), err)))?;
        Settings::from_yaml(&s)
            .map_err(|err| Error::from(format!("{}: {}", path.display(), err)))
    }

    /// Parses settings from a YAML string. An empty document gives the defaults.
    pub fn from_yaml(s: &str) -> Result<Settings, Error> {
        if s.trim().is_empty() {
            Ok(Settings::default())
        } else {
            Ok(serde_yaml::from_str(s)?)
        }
    }

    /// Returns the log level to use, which is `Off` unless logging is turned on.
    ///
    /// # Errors
    ///
    /// Returns an error if `log_level` is not a valid level.
    pub fn level_filter(&self) -> Result<LevelFilter, Error> {
        if !self.log {
            return Ok(LevelFilter::Off);
        }

        match self.log_level.as_str() {
            "off" => Ok(LevelFilter::Off),
            "error" => Ok(LevelFilter::Error),
            "warn" => Ok(LevelFilter::Warn),
            "info" => Ok(LevelFilter::Info),
            "debug" => Ok(LevelFilter::Debug),
            "trace" => Ok(LevelFilter::Trace),
            level => Err(Error::from(format!("{}: invalid log level", level))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        assert_eq!(Settings::from_yaml("").unwrap(), Settings::default());
        assert_eq!(Settings::from_yaml("  \n").unwrap(), Settings::default());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let settings = Settings::from_yaml("log: true\nlog_level: debug\n").unwrap();

        assert!(settings.log);
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.log_file, PathBuf::from("bitcheckers.log"));
        assert!(settings.show_intro);
        assert!(!settings.dump_bitboards);
    }

    #[test]
    fn all_fields() {
        let yaml = "log: true\n\
                    log_file: game.log\n\
                    log_level: trace\n\
                    dump_bitboards: true\n\
                    show_intro: false\n";
        let settings = Settings::from_yaml(yaml).unwrap();

        assert_eq!(settings, Settings {
            log: true,
            log_file: PathBuf::from("game.log"),
            log_level: "trace".to_owned(),
            dump_bitboards: true,
            show_intro: false,
        });
    }

    #[test]
    fn rejects_bad_yaml() {
        assert!(Settings::from_yaml("log: [").is_err());
        assert!(Settings::from_yaml("show_intro: maybe").is_err());
    }

    #[test]
    fn level_filter() {
        let mut settings = Settings::default();
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Off);

        settings.log = true;
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Info);

        settings.log_level = "warn".to_owned();
        assert_eq!(settings.level_filter().unwrap(), LevelFilter::Warn);

        settings.log_level = "loud".to_owned();
        assert_eq!(settings.level_filter().unwrap_err().message(), "loud: invalid log level");
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = Path::new("/nonexistent/bitcheckers/config.yaml");
        assert_eq!(Settings::load(path).unwrap(), Settings::default());
    }

    #[test]
    fn default_path_ends_with_config_file() {
        let path = Settings::default_path();
        assert!(path.ends_with(Path::new(APP_DIR).join(CONFIG_FILE)));
    }
}
