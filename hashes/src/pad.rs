// SPDX-License-Identifier: CC0-1.0

//! Message padding.
//!
//! SHA-256 consumes the message in 64-byte blocks. After the last input byte a
//! single stop bit (the byte `0x80`) is appended, then zeros, then the message
//! length in bits as a big-endian `u64` occupying the last 8 bytes of the final
//! block. Depending on how much of the last block the input fills, the stop byte
//! and the length may spill into one extra block.
//!
//! The padding is modelled as a small state machine. [`transition`] is a pure
//! function from the current [`PadState`] and the next [`Window`] of input to
//! the block to compress and the state that follows; [`Padder`] wraps it with
//! the running byte count.

use crate::block::MessageBlock;

/// Size of a SHA-256 message block, in bytes.
pub const BLOCK_SIZE: usize = 64;

/// Offset of the 64-bit length field in the final block.
const LENGTH_OFFSET: usize = BLOCK_SIZE - 8;

const BLOCK_SIZE_U64: u64 = BLOCK_SIZE as u64;
const LENGTH_OFFSET_U64: u64 = LENGTH_OFFSET as u64;

const STOP_BYTE: u8 = 0x80;

/// Progress of the padding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PadState {
    /// Input is still being consumed; neither stop byte nor length written.
    Streaming,
    /// Input is exhausted and the stop byte was written, the length is pending.
    StopByteEmitted,
    /// The block carrying the length has been produced.
    Done,
}

/// The next slice of input offered to the padder.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Window<'a> {
    /// A full block of input. More input may follow.
    Data(&'a [u8; BLOCK_SIZE]),
    /// The final bytes of the input, at most [`BLOCK_SIZE`] of them.
    Tail(&'a [u8]),
    /// There is no input left.
    Exhausted,
}

impl Window<'_> {
    /// Number of input bytes in this window.
    pub fn len(&self) -> usize {
        match *self {
            Window::Data(data) => data.len(),
            Window::Tail(tail) => tail.len(),
            Window::Exhausted => 0,
        }
    }

    /// Whether this window carries no input bytes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Which of the six padding situations produced a block.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PadCase {
    /// A full block of input with more to come.
    Data,
    /// Input tail, stop byte, zeros and the length all fit in this block.
    TailWithLength,
    /// Input tail fills the block exactly; stop byte and length follow.
    TailExact,
    /// Input tail and stop byte fit but the length does not.
    TailNoRoom,
    /// Stop byte at offset zero followed by the length.
    StopAndLength,
    /// All zeros except the length.
    LengthOnly,
}

impl PadCase {
    /// Whether the block carries the length field, ending the message.
    pub fn is_final(self) -> bool {
        matches!(self, PadCase::TailWithLength | PadCase::StopAndLength | PadCase::LengthOnly)
    }
}

/// One block produced by [`transition`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    /// The 64 bytes to compress.
    pub block: [u8; BLOCK_SIZE],
    /// The padding situation that produced `block`.
    pub case: PadCase,
    /// State to continue from.
    pub next: PadState,
}

impl Step {
    /// Packs the produced bytes into words ready for the message schedule.
    pub fn message_block(&self) -> MessageBlock {
        MessageBlock::from_bytes(&self.block)
    }
}

/// Computes the padded block for `window` in `state`.
///
/// `bit_len` is the length of the whole message in bits; it is only written
/// into blocks that carry the length field. Returns `None` once `state` is
/// [`PadState::Done`], and for windows that cannot follow `state`: input after
/// the stop byte was written, or a tail longer than a block.
pub fn transition(state: PadState, window: Window<'_>, bit_len: u64) -> Option<Step> {
    let mut block = [0u8; BLOCK_SIZE];
    let (case, next) = match (state, window) {
        (PadState::Done, _) => return None,
        (PadState::StopByteEmitted, window) if !window.is_empty() => return None,
        (PadState::Streaming, Window::Tail(tail)) if tail.len() > BLOCK_SIZE => return None,
        (PadState::StopByteEmitted, _) => {
            write_length(&mut block, bit_len);
            (PadCase::LengthOnly, PadState::Done)
        }
        (PadState::Streaming, Window::Data(data)) => {
            block = *data;
            (PadCase::Data, PadState::Streaming)
        }
        (PadState::Streaming, Window::Tail(tail)) if tail.len() == BLOCK_SIZE => {
            block.copy_from_slice(tail);
            (PadCase::TailExact, PadState::Streaming)
        }
        (PadState::Streaming, Window::Tail(tail)) => {
            block[..tail.len()].copy_from_slice(tail);
            block[tail.len()] = STOP_BYTE;
            if tail.len() < LENGTH_OFFSET {
                write_length(&mut block, bit_len);
                (PadCase::TailWithLength, PadState::Done)
            } else {
                (PadCase::TailNoRoom, PadState::StopByteEmitted)
            }
        }
        (PadState::Streaming, Window::Exhausted) => {
            block[0] = STOP_BYTE;
            write_length(&mut block, bit_len);
            (PadCase::StopAndLength, PadState::Done)
        }
    };
    Some(Step { block, case, next })
}

fn write_length(block: &mut [u8; BLOCK_SIZE], bit_len: u64) {
    block[LENGTH_OFFSET..].copy_from_slice(&bit_len.to_be_bytes());
}

/// Message length in bits as stored in the length field.
///
/// The field holds the length modulo 2^64, so this never overflows.
pub const fn bit_length(bytes: u64) -> u64 {
    bytes << 3
}

/// Number of blocks a message of `len` bytes pads to.
pub const fn padded_block_count(len: u64) -> u64 {
    let extra = if len % BLOCK_SIZE_U64 < LENGTH_OFFSET_U64 { 1 } else { 2 };
    len / BLOCK_SIZE_U64 + extra
}

/// Running padder: the [`PadState`] together with the number of bytes seen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Padder {
    state: PadState,
    length: u64,
}

impl Default for Padder {
    fn default() -> Self {
        Padder::new()
    }
}

impl Padder {
    /// Creates a padder for an empty message.
    pub const fn new() -> Self {
        Padder { state: PadState::Streaming, length: 0 }
    }

    /// Current state.
    pub const fn state(&self) -> PadState {
        self.state
    }

    /// Number of input bytes pushed so far.
    pub const fn length(&self) -> u64 {
        self.length
    }

    /// Consumes `window` and returns the block to compress.
    ///
    /// Returns `None` after the final block was produced, or when `window` is
    /// refused by [`transition`]; a refused window is not counted.
    pub fn push(&mut self, window: Window<'_>) -> Option<Step> {
        let length = self.length.wrapping_add(window.len() as u64);
        let step = transition(self.state, window, bit_length(length))?;
        self.length = length;
        log::trace!("padding: {:?} after {} bytes", step.case, self.length);
        self.state = step.next;
        Some(step)
    }
}

/// Iterator over the padded blocks of an in-memory message.
#[derive(Clone, Debug)]
pub struct Blocks<'a> {
    rest: &'a [u8],
    tail_sent: bool,
    padder: Padder,
}

impl<'a> Blocks<'a> {
    /// Pads `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Blocks { rest: data, tail_sent: false, padder: Padder::new() }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let window = if self.tail_sent {
            Window::Exhausted
        } else if self.rest.len() > BLOCK_SIZE {
            let (head, rest) = self.rest.split_at(BLOCK_SIZE);
            self.rest = rest;
            Window::Data(head.try_into().expect("64 byte slice"))
        } else {
            self.tail_sent = true;
            Window::Tail(self.rest)
        };
        self.padder.push(window)
    }
}

#[cfg(test)]
mod tests {
    use std::vec::Vec;

    use super::*;

    const INPUT: [u8; 256] = [0x61; 256];

    fn cases(len: usize) -> Vec<PadCase> {
        Blocks::new(&INPUT[..len]).map(|s| s.case).collect()
    }

    #[test]
    fn boundary_lengths_hit_every_case() {
        use PadCase::*;

        assert_eq!(cases(0), [TailWithLength]);
        assert_eq!(cases(55), [TailWithLength]);
        assert_eq!(cases(56), [TailNoRoom, LengthOnly]);
        assert_eq!(cases(63), [TailNoRoom, LengthOnly]);
        assert_eq!(cases(64), [TailExact, StopAndLength]);
        assert_eq!(cases(119), [Data, TailWithLength]);
        assert_eq!(cases(120), [Data, TailNoRoom, LengthOnly]);
        assert_eq!(cases(128), [Data, TailExact, StopAndLength]);
    }

    #[test]
    fn fifty_six_bytes_pad_to_two_blocks() {
        let blocks: Vec<Step> = Blocks::new(&INPUT[..56]).collect();
        assert_eq!(blocks.len(), 2);

        let mut first = [0u8; BLOCK_SIZE];
        first[..56].copy_from_slice(&INPUT[..56]);
        first[56] = 0x80;
        assert_eq!(blocks[0].block, first);
        assert_eq!(blocks[0].next, PadState::StopByteEmitted);

        // 56 * 8 = 448 = 0x1c0
        let mut second = [0u8; BLOCK_SIZE];
        second[62] = 0x01;
        second[63] = 0xc0;
        assert_eq!(blocks[1].block, second);
        assert_eq!(blocks[1].next, PadState::Done);
    }

    #[test]
    fn abc_fits_one_block() {
        let blocks: Vec<Step> = Blocks::new(b"abc").collect();
        assert_eq!(blocks.len(), 1);

        let block = blocks[0].message_block();
        assert_eq!(block[0], 0x61626380);
        assert_eq!(block[14], 0);
        assert_eq!(block[15], 24);
    }

    #[test]
    fn padded_length_is_multiple_of_block() {
        for len in 0..INPUT.len() {
            let blocks: Vec<Step> = Blocks::new(&INPUT[..len]).collect();
            assert_eq!(blocks.len() as u64, padded_block_count(len as u64), "len {}", len);
            assert!(blocks.len() * BLOCK_SIZE * 8 >= len * 8 + 65);

            let (last, init) = blocks.split_last().unwrap();
            assert!(last.case.is_final());
            assert!(init.iter().all(|s| !s.case.is_final()));
            assert_eq!(last.block[56..], bit_length(len as u64).to_be_bytes());
        }
    }

    #[test]
    fn exact_tail_defers_stop_byte() {
        let data = [0xffu8; BLOCK_SIZE];
        let step = transition(PadState::Streaming, Window::Tail(&data), 512).unwrap();
        assert_eq!(step.case, PadCase::TailExact);
        assert_eq!(step.block, data);
        assert_eq!(step.next, PadState::Streaming);

        let step = transition(step.next, Window::Exhausted, 512).unwrap();
        assert_eq!(step.case, PadCase::StopAndLength);
        assert_eq!(step.block[0], 0x80);
        assert!(step.block[1..62].iter().all(|&b| b == 0));
        assert_eq!(step.block[62..], [0x02, 0x00]);
    }

    #[test]
    fn done_produces_nothing() {
        assert_eq!(transition(PadState::Done, Window::Exhausted, 0), None);

        let mut padder = Padder::new();
        assert!(padder.push(Window::Tail(b"abc")).is_some());
        assert_eq!(padder.state(), PadState::Done);
        assert_eq!(padder.push(Window::Exhausted), None);
        assert_eq!(padder.length(), 3);
    }

    #[test]
    fn input_after_stop_byte_is_refused() {
        let data = [0x61u8; BLOCK_SIZE];
        let mut padder = Padder::new();
        let step = padder.push(Window::Tail(&data[..60])).unwrap();
        assert_eq!(step.case, PadCase::TailNoRoom);

        assert_eq!(padder.push(Window::Data(&data)), None);
        assert_eq!(padder.push(Window::Tail(&data[..4])), None);
        assert_eq!(padder.state(), PadState::StopByteEmitted);
        assert_eq!(padder.length(), 60);

        // 60 * 8 = 480 = 0x1e0
        let step = padder.push(Window::Exhausted).unwrap();
        assert_eq!(step.case, PadCase::LengthOnly);
        assert_eq!(step.block[62..], [0x01, 0xe0]);
        assert_eq!(padder.state(), PadState::Done);
    }

    #[test]
    fn oversized_tail_is_refused() {
        let data = [0u8; BLOCK_SIZE + 1];
        assert_eq!(transition(PadState::Streaming, Window::Tail(&data), 0), None);

        let mut padder = Padder::new();
        assert_eq!(padder.push(Window::Tail(&data)), None);
        assert_eq!(padder.state(), PadState::Streaming);
        assert_eq!(padder.length(), 0);
    }

    #[test]
    fn length_field_for_huge_messages() {
        // Largest message FIPS 180-4 allows: 2^64 - 1 bits, rounded down to bytes.
        let max = (1u64 << 61) - 1;
        assert_eq!(bit_length(max), 0xffff_ffff_ffff_fff8);

        let step = transition(PadState::StopByteEmitted, Window::Exhausted, bit_length(max)).unwrap();
        assert_eq!(step.case, PadCase::LengthOnly);
        assert_eq!(step.block[56..], [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xf8]);

        // Beyond the limit the field keeps the low 64 bits instead of overflowing.
        assert_eq!(bit_length(u64::MAX), u64::MAX - 7);
        assert_eq!(padded_block_count(u64::MAX), u64::MAX / 64 + 2);
    }
}
