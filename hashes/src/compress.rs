// SPDX-License-Identifier: CC0-1.0

//! The SHA-256 compression function.

use core::ops::Index;

use crate::consts::{INITIAL_HASH, ROUND_CONSTANTS};
use crate::schedule::{MessageSchedule, SCHEDULE_WORDS};

/// `Ch(x, y, z)`: each bit of `x` chooses between the bits of `y` and `z`.
#[allow(non_snake_case)]
pub const fn Ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (!x & z)
}

/// `Maj(x, y, z)`: bitwise majority vote.
#[allow(non_snake_case)]
pub const fn Maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) ^ (x & z) ^ (y & z)
}

/// `Σ0(x) = ROTR2(x) ^ ROTR13(x) ^ ROTR22(x)`
#[allow(non_snake_case)]
pub const fn Sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

/// `Σ1(x) = ROTR6(x) ^ ROTR11(x) ^ ROTR25(x)`
#[allow(non_snake_case)]
pub const fn Sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

/// The eight registers `a..h` carried from block to block.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WorkingState(pub(crate) [u32; 8]);

impl Default for WorkingState {
    fn default() -> Self {
        WorkingState::new()
    }
}

impl WorkingState {
    /// State seeded with the initial hash value.
    pub const fn new() -> Self {
        WorkingState(INITIAL_HASH)
    }

    /// Returns the registers `a..h`.
    pub const fn words(&self) -> &[u32; 8] {
        &self.0
    }

    /// Serializes the registers big-endian, `a` first.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut ret = [0; 32];
        for (val, ret_bytes) in self.0.iter().zip(ret.chunks_exact_mut(4)) {
            ret_bytes.copy_from_slice(&val.to_be_bytes());
        }
        ret
    }
}

impl Index<usize> for WorkingState {
    type Output = u32;

    #[inline]
    fn index(&self, index: usize) -> &u32 {
        &self.0[index]
    }
}

/// Runs the 64 rounds over `w` and adds the result into `state`.
pub fn compress(state: &mut WorkingState, w: &MessageSchedule) {
    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = state.0;

    for i in 0..SCHEDULE_WORDS {
        let t1 = h
            .wrapping_add(Sigma1(e))
            .wrapping_add(Ch(e, f, g))
            .wrapping_add(ROUND_CONSTANTS[i])
            .wrapping_add(w[i]);
        let t2 = Sigma0(a).wrapping_add(Maj(a, b, c));
        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    for (reg, val) in state.0.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *reg = reg.wrapping_add(val);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::MessageBlock;

    #[test]
    fn choice_and_majority() {
        assert_eq!(Ch(u32::MAX, 0x1234_5678, 0x9abc_def0), 0x1234_5678);
        assert_eq!(Ch(0, 0x1234_5678, 0x9abc_def0), 0x9abc_def0);
        assert_eq!(Ch(0xffff_0000, 0x1234_5678, 0x9abc_def0), 0x1234_def0);

        assert_eq!(Maj(0xff00_ff00, 0x0ff0_0ff0, 0x00ff_00ff), 0x0ff0_0ff0);
        assert_eq!(Maj(0xdead_beef, 0xdead_beef, 0), 0xdead_beef);
    }

    #[test]
    fn big_sigmas() {
        assert_eq!(Sigma0(1), 0x4008_0400);
        assert_eq!(Sigma1(1), 0x0420_0080);
        assert_eq!(Sigma0(0), 0);
        assert_eq!(Sigma1(u32::MAX), u32::MAX);
    }

    #[test]
    fn compress_abc_block() {
        let mut bytes = [0u8; 64];
        bytes[..4].copy_from_slice(b"abc\x80");
        bytes[63] = 24;
        let schedule = MessageSchedule::expand(&MessageBlock::from_bytes(&bytes));

        let mut state = WorkingState::new();
        compress(&mut state, &schedule);
        assert_eq!(
            state.words(),
            &[
                0xba7816bf, 0x8f01cfea, 0x414140de, 0x5dae2223, 0xb00361a3, 0x96177a9c, 0xb410ff61,
                0xf20015ad,
            ]
        );
        assert_eq!(state.to_bytes()[..4], [0xba, 0x78, 0x16, 0xbf]);
    }

    #[test]
    fn state_depends_on_previous_block() {
        let schedule = MessageSchedule::expand(&MessageBlock([0; 16]));

        let mut once = WorkingState::new();
        compress(&mut once, &schedule);
        let mut twice = once;
        compress(&mut twice, &schedule);

        assert_ne!(once, WorkingState::new());
        assert_ne!(once, twice);
    }
}
