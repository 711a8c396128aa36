//! Forward and inverse cipher pipelines, plus the slice-level entry points.

use crate::block::{block_from_slice, Block};
use crate::error::Result;
use crate::key::Key;
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};
use crate::schedule::RoundKeySchedule;
use crate::state::State;
use crate::trace::{RoundObserver, Step};

/// Which pipeline to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Plaintext to ciphertext.
    Encipher,
    /// Ciphertext to plaintext.
    Decipher,
}

/// Encrypts one block with pre-expanded round keys, reporting every step.
pub fn encrypt_block_with<O: RoundObserver>(
    block: &Block,
    schedule: &RoundKeySchedule,
    observer: &mut O,
) -> Block {
    let nr = schedule.rounds();
    let mut state = State::from_block(block);
    observer.observe(0, Step::Input, &state);

    add_round_key(&mut state, schedule.round_key(0));
    observer.observe(0, Step::AddRoundKey, &state);

    for round in 1..nr {
        sub_bytes(&mut state);
        observer.observe(round, Step::SubBytes, &state);
        shift_rows(&mut state);
        observer.observe(round, Step::ShiftRows, &state);
        mix_columns(&mut state);
        observer.observe(round, Step::MixColumns, &state);
        add_round_key(&mut state, schedule.round_key(round));
        observer.observe(round, Step::AddRoundKey, &state);
    }

    sub_bytes(&mut state);
    observer.observe(nr, Step::SubBytes, &state);
    shift_rows(&mut state);
    observer.observe(nr, Step::ShiftRows, &state);
    add_round_key(&mut state, schedule.round_key(nr));
    observer.observe(nr, Step::AddRoundKey, &state);

    state.to_block()
}

/// Decrypts one block with pre-expanded round keys, reporting every step.
///
/// Round keys are consumed from `Nr` down to 0.
pub fn decrypt_block_with<O: RoundObserver>(
    block: &Block,
    schedule: &RoundKeySchedule,
    observer: &mut O,
) -> Block {
    let nr = schedule.rounds();
    let mut state = State::from_block(block);
    observer.observe(nr, Step::Input, &state);

    add_round_key(&mut state, schedule.round_key(nr));
    observer.observe(nr, Step::AddRoundKey, &state);

    for round in (1..nr).rev() {
        inv_shift_rows(&mut state);
        observer.observe(round, Step::InvShiftRows, &state);
        inv_sub_bytes(&mut state);
        observer.observe(round, Step::InvSubBytes, &state);
        add_round_key(&mut state, schedule.round_key(round));
        observer.observe(round, Step::AddRoundKey, &state);
        inv_mix_columns(&mut state);
        observer.observe(round, Step::InvMixColumns, &state);
    }

    inv_shift_rows(&mut state);
    observer.observe(0, Step::InvShiftRows, &state);
    inv_sub_bytes(&mut state);
    observer.observe(0, Step::InvSubBytes, &state);
    add_round_key(&mut state, schedule.round_key(0));
    observer.observe(0, Step::AddRoundKey, &state);

    state.to_block()
}

/// Encrypts a single 16-byte block under a 16, 24 or 32-byte key.
///
/// The key is validated before the block, and both before any transform runs.
pub fn encrypt_block(key: &[u8], plaintext: &[u8]) -> Result<Block> {
    let cipher = Aes::from_slice(key)?;
    cipher.encrypt(plaintext)
}

/// Decrypts a single 16-byte block under a 16, 24 or 32-byte key.
pub fn decrypt_block(key: &[u8], ciphertext: &[u8]) -> Result<Block> {
    let cipher = Aes::from_slice(key)?;
    cipher.decrypt(ciphertext)
}

/// A key with its schedule expanded once, for many block operations.
///
/// Immutable after construction, so one instance can be shared freely
/// between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aes {
    schedule: RoundKeySchedule,
}

impl Aes {
    /// Expands `key`.
    pub fn new(key: &Key) -> Self {
        Self {
            schedule: RoundKeySchedule::new(key),
        }
    }

    /// Validates and expands a raw key.
    pub fn from_slice(key: &[u8]) -> Result<Self> {
        Ok(Self::new(&Key::try_from(key)?))
    }

    /// Wraps an already expanded schedule.
    pub fn from_schedule(schedule: RoundKeySchedule) -> Self {
        Self { schedule }
    }

    /// The expanded round keys.
    pub fn schedule(&self) -> &RoundKeySchedule {
        &self.schedule
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block_with(block, &self.schedule, &mut ())
    }

    /// Decrypts one block.
    pub fn decrypt_block(&self, block: &Block) -> Block {
        decrypt_block_with(block, &self.schedule, &mut ())
    }

    /// Encrypts one block, reporting every intermediate state to `observer`.
    pub fn encrypt_block_traced<O: RoundObserver>(&self, block: &Block, observer: &mut O) -> Block {
        encrypt_block_with(block, &self.schedule, observer)
    }

    /// Decrypts one block, reporting every intermediate state to `observer`.
    pub fn decrypt_block_traced<O: RoundObserver>(&self, block: &Block, observer: &mut O) -> Block {
        decrypt_block_with(block, &self.schedule, observer)
    }

    /// Runs the pipeline selected by `direction`.
    pub fn process_block(&self, direction: Direction, block: &Block) -> Block {
        match direction {
            Direction::Encipher => self.encrypt_block(block),
            Direction::Decipher => self.decrypt_block(block),
        }
    }

    /// Encrypts a caller-supplied slice, which must be exactly 16 bytes.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Block> {
        let block = block_from_slice(plaintext)?;
        Ok(self.encrypt_block(&block))
    }

    /// Decrypts a caller-supplied slice, which must be exactly 16 bytes.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Block> {
        let block = block_from_slice(ciphertext)?;
        Ok(self.decrypt_block(&block))
    }
}
