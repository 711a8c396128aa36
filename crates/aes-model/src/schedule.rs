//! Key expansion into an owned round-key schedule.

use core::fmt;

use crate::block::{block_from_words, block_to_words, Block};
use crate::error::Result;
use crate::key::{Key, KeySize};
use crate::rcon::Rcon;
use crate::sbox::sbox;

/// One 16-byte round key.
pub type RoundKey = Block;

/// Expanded round keys: exactly `Nr + 1` independently owned 16-byte keys.
///
/// Round keys never share storage, so decryption can walk them in reverse and
/// a verification harness can hold on to any one of them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RoundKeySchedule {
    size: KeySize,
    keys: Vec<RoundKey>,
}

#[inline]
fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

#[inline]
fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

impl RoundKeySchedule {
    /// Runs the key expansion for `key`.
    pub fn new(key: &Key) -> Self {
        let size = key.size();
        let nk = size.nk();
        let total = 4 * size.round_keys();

        let mut w: Vec<u32> = Vec::with_capacity(total);
        for chunk in key.as_bytes().chunks_exact(4) {
            w.push(u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
        }

        let mut rcon = Rcon::new();
        for i in nk..total {
            let mut temp = w[i - 1];
            if i % nk == 0 {
                let rc = rcon.next().unwrap_or_default();
                temp = sub_word(rot_word(temp)) ^ (u32::from(rc) << 24);
            } else if nk == 8 && i % nk == 4 {
                temp = sub_word(temp);
            }
            w.push(w[i - nk] ^ temp);
        }

        let keys = w
            .chunks_exact(4)
            .map(|words| block_from_words([words[0], words[1], words[2], words[3]]))
            .collect();

        Self { size, keys }
    }

    /// Key-size variant the schedule was expanded for.
    pub fn key_size(&self) -> KeySize {
        self.size
    }

    /// Number of cipher rounds (Nr).
    pub fn rounds(&self) -> usize {
        self.size.nr()
    }

    /// Number of round keys (Nr + 1).
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false; a schedule holds at least eleven keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns round key `round` (0..=Nr).
    ///
    /// # Panics
    ///
    /// Panics if `round > Nr`.
    #[inline]
    pub fn round_key(&self, round: usize) -> &RoundKey {
        &self.keys[round]
    }

    /// Round key `round` as four big-endian words, the layout of a hardware dump.
    pub fn round_key_words(&self, round: usize) -> [u32; 4] {
        block_to_words(self.round_key(round))
    }

    /// All round keys in schedule order.
    pub fn round_keys(&self) -> &[RoundKey] {
        &self.keys
    }

    /// Iterates the round keys in schedule order.
    pub fn iter(&self) -> core::slice::Iter<'_, RoundKey> {
        self.keys.iter()
    }
}

impl<'a> IntoIterator for &'a RoundKeySchedule {
    type Item = &'a RoundKey;
    type IntoIter = core::slice::Iter<'a, RoundKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One line per round key, `rk[NN] <32 hex digits>`.
impl fmt::Display for RoundKeySchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (round, key) in self.keys.iter().enumerate() {
            writeln!(f, "rk[{round:02}] {}", hex::encode(key))?;
        }
        Ok(())
    }
}

/// Expands a 16, 24 or 32-byte key.
pub fn expand_key(key: &[u8]) -> Result<RoundKeySchedule> {
    let key = Key::try_from(key)?;
    Ok(RoundKeySchedule::new(&key))
}

/// Ordered round keys of `schedule`, for diffing against a round-key dump.
pub fn round_keys(schedule: &RoundKeySchedule) -> &[RoundKey] {
    schedule.round_keys()
}
