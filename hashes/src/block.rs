// SPDX-License-Identifier: CC0-1.0

//! 512-bit message blocks.

use core::ops::Index;

use crate::pad::BLOCK_SIZE;

/// Number of 32-bit words in a [`MessageBlock`].
pub const BLOCK_WORDS: usize = 16;

/// One padded 512-bit block as sixteen big-endian words.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MessageBlock(pub(crate) [u32; BLOCK_WORDS]);

impl MessageBlock {
    /// Packs a 64-byte window into words, most significant byte first.
    ///
    /// The result does not depend on the host byte order.
    pub const fn from_bytes(bytes: &[u8; BLOCK_SIZE]) -> Self {
        let mut words = [0u32; BLOCK_WORDS];
        let mut i = 0;
        while i < BLOCK_WORDS {
            words[i] = read_u32(bytes, i * 4);
            i += 1;
        }
        MessageBlock(words)
    }

    /// Returns the words of this block.
    pub const fn words(&self) -> &[u32; BLOCK_WORDS] {
        &self.0
    }
}

impl Index<usize> for MessageBlock {
    type Output = u32;

    #[inline]
    fn index(&self, index: usize) -> &u32 {
        &self.0[index]
    }
}

#[allow(clippy::identity_op)] // more readble
const fn read_u32(bytes: &[u8], index: usize) -> u32 {
    ((bytes[index + 0] as u32) << 24)
        | ((bytes[index + 1] as u32) << 16)
        | ((bytes[index + 2] as u32) << 8)
        | ((bytes[index + 3] as u32) << 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_words_big_endian() {
        let mut bytes = [0u8; BLOCK_SIZE];
        bytes[..4].copy_from_slice(&[0x61, 0x62, 0x63, 0x80]);
        bytes[60..].copy_from_slice(&[0x00, 0x00, 0x00, 0x18]);

        let block = MessageBlock::from_bytes(&bytes);
        assert_eq!(block[0], 0x61626380);
        assert_eq!(block[15], 0x00000018);
        assert!(block.words()[1..15].iter().all(|&w| w == 0));
    }

    #[test]
    fn every_byte_lands_in_its_word() {
        let mut bytes = [0u8; BLOCK_SIZE];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let block = MessageBlock::from_bytes(&bytes);
        for (i, word) in block.words().iter().enumerate() {
            let base = (i * 4) as u8;
            assert_eq!(word.to_be_bytes(), [base, base + 1, base + 2, base + 3]);
        }
    }
}
