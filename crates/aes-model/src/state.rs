//! The 4x4 cipher state.
//!
//! `State` is indexed `[row][column]`. Byte `i` of the input block lands at
//! `[i % 4][i / 4]`, so each group of four consecutive block bytes forms one
//! column (column-major fill). Serialising walks the same mapping back.

use core::fmt;

use crate::block::{Block, BLOCK_BYTES};

/// Working state for one block operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State(pub [[u8; 4]; 4]);

impl State {
    /// Loads a block in column-major order.
    pub fn from_block(block: &Block) -> Self {
        let mut rows = [[0u8; 4]; 4];
        for (i, byte) in block.iter().enumerate() {
            rows[i % 4][i / 4] = *byte;
        }
        Self(rows)
    }

    /// Serialises the state back to a block in column-major order.
    pub fn to_block(&self) -> Block {
        let mut block = [0u8; BLOCK_BYTES];
        for (i, byte) in block.iter_mut().enumerate() {
            *byte = self.0[i % 4][i / 4];
        }
        block
    }

    /// Copies out column `col`, top to bottom.
    #[inline]
    pub fn column(&self, col: usize) -> [u8; 4] {
        [self.0[0][col], self.0[1][col], self.0[2][col], self.0[3][col]]
    }

    /// Overwrites column `col`.
    #[inline]
    pub fn set_column(&mut self, col: usize, column: [u8; 4]) {
        for (row, byte) in column.into_iter().enumerate() {
            self.0[row][col] = byte;
        }
    }

    /// Borrows row `row`, left to right.
    #[inline]
    pub fn row(&self, row: usize) -> &[u8; 4] {
        &self.0[row]
    }

    /// Mutably borrows row `row`.
    #[inline]
    pub fn row_mut(&mut self, row: usize) -> &mut [u8; 4] {
        &mut self.0[row]
    }

    /// Applies `f` to every byte.
    #[inline]
    pub fn map_bytes(&mut self, f: impl Fn(u8) -> u8) {
        for row in self.0.iter_mut() {
            for byte in row.iter_mut() {
                *byte = f(*byte);
            }
        }
    }
}

impl From<Block> for State {
    fn from(block: Block) -> Self {
        Self::from_block(&block)
    }
}

impl From<State> for Block {
    fn from(state: State) -> Self {
        state.to_block()
    }
}

/// Renders the block serialisation as 32 hex digits.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_block()))
    }
}
