// SPDX-License-Identifier: CC0-1.0

//! Streaming SHA-256 computation.

use core::cmp;
#[cfg(feature = "std")]
use std::io;

use crate::block::MessageBlock;
use crate::compress::{compress, WorkingState};
use crate::pad::{Padder, Window, BLOCK_SIZE};
use crate::schedule::MessageSchedule;
use crate::Hash;

/// Engine to compute the SHA-256 digest of a message fed in arbitrary pieces.
///
/// The engine owns everything one digest computation needs: the working state,
/// the partially filled block and the padder with its byte count. Independent
/// engines share nothing and may run on different threads.
#[derive(Clone, Debug)]
pub struct DigestEngine {
    state: WorkingState,
    buffer: [u8; BLOCK_SIZE],
    buffered: usize,
    padder: Padder,
    blocks: u64,
}

impl Default for DigestEngine {
    fn default() -> Self {
        DigestEngine::new()
    }
}

impl DigestEngine {
    /// Creates an engine seeded with the initial hash value.
    pub const fn new() -> Self {
        DigestEngine {
            state: WorkingState::new(),
            buffer: [0; BLOCK_SIZE],
            buffered: 0,
            padder: Padder::new(),
            blocks: 0,
        }
    }

    /// Adds `data` to the message. Every full block is compressed right away.
    pub fn input(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            let take = cmp::min(BLOCK_SIZE - self.buffered, data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered == BLOCK_SIZE {
                if let Some(step) = self.padder.push(Window::Data(&self.buffer)) {
                    self.process_block(&step.block);
                }
                self.buffered = 0;
            }
        }
    }

    /// Reads `reader` to the end and adds everything to the message.
    ///
    /// Reads at most one block at a time and never ahead of the data it
    /// compresses. Interrupted reads are retried; any other error is returned
    /// and leaves the engine holding a prefix of the message. Returns the
    /// number of bytes read.
    #[cfg(feature = "std")]
    pub fn read_from<R: io::Read>(&mut self, mut reader: R) -> io::Result<u64> {
        let mut window = [0u8; BLOCK_SIZE];
        let mut total = 0u64;
        loop {
            match reader.read(&mut window) {
                Ok(0) => return Ok(total),
                Ok(n) => {
                    self.input(&window[..n]);
                    total += n as u64;
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Number of message bytes fed so far.
    pub fn n_bytes_hashed(&self) -> u64 {
        self.padder.length() + self.buffered as u64
    }

    /// Number of blocks run through the compression function so far.
    pub fn blocks_compressed(&self) -> u64 {
        self.blocks
    }

    /// The working state after the blocks compressed so far.
    pub fn midstate(&self) -> WorkingState {
        self.state
    }

    /// Pads the message, compresses the remaining blocks and returns the digest.
    pub fn finalize(mut self) -> Hash {
        let tail = self.buffer;
        let mut window = if self.buffered == 0 && self.padder.length() > 0 {
            Window::Exhausted
        } else {
            Window::Tail(&tail[..self.buffered])
        };
        while let Some(step) = self.padder.push(window) {
            self.process_block(&step.block);
            window = Window::Exhausted;
        }
        log::debug!("sha256: {} bytes in {} blocks", self.padder.length(), self.blocks);

        Hash::from_byte_array(self.state.to_bytes())
    }

    fn process_block(&mut self, block: &[u8; BLOCK_SIZE]) {
        let schedule = MessageSchedule::expand(&MessageBlock::from_bytes(block));
        compress(&mut self.state, &schedule);
        self.blocks += 1;
    }
}
