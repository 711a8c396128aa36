//! Block representation helpers.

use core::convert::TryInto;

use crate::error::{Error, Result};

/// Block size in bytes.
pub const BLOCK_BYTES: usize = 16;

/// AES block of 16 bytes.
pub type Block = [u8; BLOCK_BYTES];

/// Copies a caller-supplied slice into a block, rejecting any length but 16.
pub fn block_from_slice(bytes: &[u8]) -> Result<Block> {
    bytes
        .try_into()
        .map_err(|_| Error::InvalidBlockLength(bytes.len()))
}

/// Packs four big-endian words into a block (word 0 is bytes 0..4).
pub fn block_from_words(words: [u32; 4]) -> Block {
    let mut block = [0u8; BLOCK_BYTES];
    for (chunk, word) in block.chunks_exact_mut(4).zip(words) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    block
}

/// Splits a block into four big-endian words.
pub fn block_to_words(block: &Block) -> [u32; 4] {
    let mut words = [0u32; 4];
    for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    words
}
