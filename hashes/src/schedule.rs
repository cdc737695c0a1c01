// SPDX-License-Identifier: CC0-1.0

//! Message schedule expansion.

use core::ops::Index;

use crate::block::{MessageBlock, BLOCK_WORDS};

/// Number of words in a [`MessageSchedule`], one per compression round.
pub const SCHEDULE_WORDS: usize = 64;

/// `σ0(x) = ROTR7(x) ^ ROTR18(x) ^ SHR3(x)`
pub const fn sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

/// `σ1(x) = ROTR17(x) ^ ROTR19(x) ^ SHR10(x)`
pub const fn sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// The 64 words fed to the compression rounds for one block.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MessageSchedule(pub(crate) [u32; SCHEDULE_WORDS]);

impl MessageSchedule {
    /// Expands `block`: the first 16 words are copied, every later word mixes
    /// four earlier ones.
    pub fn expand(block: &MessageBlock) -> Self {
        let mut w = [0u32; SCHEDULE_WORDS];
        w[..BLOCK_WORDS].copy_from_slice(block.words());
        for i in BLOCK_WORDS..SCHEDULE_WORDS {
            w[i] = sigma1(w[i - 2])
                .wrapping_add(w[i - 7])
                .wrapping_add(sigma0(w[i - 15]))
                .wrapping_add(w[i - 16]);
        }
        MessageSchedule(w)
    }

    /// Returns the words of this schedule.
    pub const fn words(&self) -> &[u32; SCHEDULE_WORDS] {
        &self.0
    }
}

impl Index<usize> for MessageSchedule {
    type Output = u32;

    #[inline]
    fn index(&self, index: usize) -> &u32 {
        &self.0[index]
    }
}
