//! Bit-exact AES reference model for checking a hardware implementation.
//!
//! The crate follows FIPS-197 step for step and provides:
//! - GF(2^8) arithmetic, S-box tables and the round-constant generator.
//! - Key expansion for 128, 192 and 256-bit keys into owned round keys.
//! - Single-block encryption and decryption (ECB), optionally traced step by
//!   step so intermediate states can be diffed against a simulator log.
//!
//! The implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod error;
pub mod gf;
mod key;
mod rcon;
mod round;
mod sbox;
mod schedule;
mod state;
mod trace;

pub use crate::block::{block_from_slice, block_from_words, block_to_words, Block, BLOCK_BYTES};
pub use crate::cipher::{
    decrypt_block, decrypt_block_with, encrypt_block, encrypt_block_with, Aes, Direction,
};
pub use crate::error::{Error, Result};
pub use crate::key::{Key, KeySize};
pub use crate::rcon::{rcon, Rcon, RCON_PERIOD};
pub use crate::round::{
    add_round_key, inv_mix_column, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_column,
    mix_columns, shift_rows, sub_bytes,
};
pub use crate::sbox::{inv_sbox, sbox, INV_SBOX, SBOX};
pub use crate::schedule::{expand_key, round_keys, RoundKey, RoundKeySchedule};
pub use crate::state::State;
pub use crate::trace::{RoundObserver, Step, Trace, TraceEvent};
