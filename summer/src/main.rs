// SPDX-License-Identifier: CC0-1.0

//! `summer`: print the SHA-256 digest of a file.
//!
//! ```text
//! summer <path>
//! ```
//!
//! Prints 64 lowercase hex characters and a newline on success. Exits with 2
//! when not given exactly one argument and with 3 when the file cannot be
//! opened or read to completion. Set `SUMMER_LOG` (`error` .. `trace`) for
//! diagnostics on stderr.

mod config;
mod error;
mod logger;

use std::env;
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;

use hashes::pad::padded_block_count;
use hashes::{DigestEngine, Hash};

use crate::config::{Config, DEFAULT_LOG_LEVEL, LOG_ENV};
use crate::error::Error;

fn main() -> ExitCode {
    let config = Config::new(env::args_os(), env::var_os(LOG_ENV));
    let level = config.as_ref().map_or(DEFAULT_LOG_LEVEL, |config| config.log_level);
    if let Err(e) = logger::init(level) {
        eprintln!("warning: {}", e);
    }

    match config.and_then(|config| run(&config)) {
        Ok(hash) => {
            println!("{}", hash);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(config: &Config) -> Result<Hash, Error> {
    let path = &config.path;
    let open_err = |source| Error::Open { path: path.clone(), source };

    let file = File::open(path).map_err(open_err)?;
    let metadata = file.metadata().map_err(open_err)?;
    if metadata.is_file() {
        log::info!(
            "hashing {} ({} bytes, {} blocks)",
            path.display(),
            metadata.len(),
            padded_block_count(metadata.len())
        );
    }

    let mut engine = DigestEngine::new();
    let got = engine
        .read_from(BufReader::new(file))
        .map_err(|source| Error::Read { path: path.clone(), source })?;

    if metadata.is_file() && got < metadata.len() {
        return Err(Error::Truncated { path: path.clone(), expected: metadata.len(), got });
    }
    Ok(engine.finalize())
}

fn report(e: &Error) {
    let mut msg = format!("error: {}", e);
    let mut source = std::error::Error::source(e);
    while let Some(s) = source {
        msg.push_str(": ");
        msg.push_str(&s.to_string());
        source = s.source();
    }
    eprintln!("{}", msg);
    if let Error::Usage { .. } = e {
        eprintln!("usage: summer <path>");
    }
}
