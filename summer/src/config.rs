// SPDX-License-Identifier: CC0-1.0

//! Command line and environment configuration.

use std::ffi::OsString;
use std::path::PathBuf;

use log::LevelFilter;

use crate::error::Error;

/// Environment variable holding the log level.
pub const LOG_ENV: &str = "SUMMER_LOG";

/// Level used when [`LOG_ENV`] is unset or unparsable.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Everything a run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File to hash.
    pub path: PathBuf,
    /// Maximum level written to stderr.
    pub log_level: LevelFilter,
}

impl Config {
    /// Builds the configuration from the raw arguments (program name first) and
    /// the value of [`LOG_ENV`].
    pub fn new<I>(args: I, log_var: Option<OsString>) -> Result<Config, Error>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args: Vec<OsString> = args.into_iter().skip(1).collect();
        if args.len() != 1 {
            return Err(Error::Usage { got: args.len() });
        }
        let path = PathBuf::from(args.remove(0));
        Ok(Config { path, log_level: log_level(log_var) })
    }
}

/// Parses a log level, falling back to [`DEFAULT_LOG_LEVEL`].
pub fn log_level(var: Option<OsString>) -> LevelFilter {
    var.and_then(|v| v.to_str()?.trim().parse().ok()).unwrap_or(DEFAULT_LOG_LEVEL)
}
