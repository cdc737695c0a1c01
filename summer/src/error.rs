// SPDX-License-Identifier: CC0-1.0

//! Errors reported by the `summer` binary.

use std::path::PathBuf;
use std::{fmt, io};

use internals::write_err;

/// Why a digest could not be printed.
#[derive(Debug)]
pub enum Error {
    /// Not exactly one path argument.
    Usage {
        /// Number of arguments given.
        got: usize,
    },
    /// The file could not be opened or inspected.
    Open {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// Reading the file failed part way.
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file ended before the size reported when it was opened.
    Truncated {
        /// File that failed.
        path: PathBuf,
        /// Size reported by the file system.
        expected: u64,
        /// Bytes actually read.
        got: u64,
    },
}

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match *self {
            Error::Usage { .. } => 2,
            Error::Open { .. } | Error::Read { .. } | Error::Truncated { .. } => 3,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Error::*;

        match *self {
            Usage { got } => write!(f, "expected exactly one file path argument, got {}", got),
            Open { ref path, ref source } => write_err!(f, "error opening file {}", path.display(); source),
            Read { ref path, ref source } => write_err!(f, "error reading file {}", path.display(); source),
            Truncated { ref path, expected, got } =>
                write!(f, "file {} ended after {} of {} bytes", path.display(), got, expected),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        use Error::*;

        match *self {
            Open { ref source, .. } | Read { ref source, .. } => Some(source),
            Usage { .. } | Truncated { .. } => None,
        }
    }
}
