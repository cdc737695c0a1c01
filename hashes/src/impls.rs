// SPDX-License-Identifier: CC0-1.0

//! `std` Impls.
//!
//! Implementations of traits defined in `std` and not in `core`.

use std::io;

use crate::{DigestEngine, FromSliceError};

impl io::Write for DigestEngine {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.input(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl std::error::Error for FromSliceError {}
