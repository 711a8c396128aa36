//! Key types and key-size variants.

use core::convert::TryFrom;

use crate::error::{Error, Result};

/// AES key-size variant. Selected once from the key length; every other
/// size-dependent quantity is derived from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeySize {
    /// 128-bit key: Nk = 4, Nr = 10.
    Aes128,
    /// 192-bit key: Nk = 6, Nr = 12.
    Aes192,
    /// 256-bit key: Nk = 8, Nr = 14.
    Aes256,
}

impl KeySize {
    /// All variants, smallest first.
    pub const ALL: [KeySize; 3] = [KeySize::Aes128, KeySize::Aes192, KeySize::Aes256];

    /// Selects the variant for a key of `len` bytes.
    pub const fn from_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(Self::Aes128),
            24 => Ok(Self::Aes192),
            32 => Ok(Self::Aes256),
            other => Err(Error::InvalidKeyLength(other)),
        }
    }

    /// Key length in 32-bit words (Nk).
    pub const fn nk(self) -> usize {
        match self {
            Self::Aes128 => 4,
            Self::Aes192 => 6,
            Self::Aes256 => 8,
        }
    }

    /// Number of rounds (Nr).
    pub const fn nr(self) -> usize {
        match self {
            Self::Aes128 => 10,
            Self::Aes192 => 12,
            Self::Aes256 => 14,
        }
    }

    /// Number of round keys in the expanded schedule (Nr + 1).
    pub const fn round_keys(self) -> usize {
        self.nr() + 1
    }

    /// Key length in bytes.
    pub const fn bytes(self) -> usize {
        self.nk() * 4
    }

    /// Key length in bits.
    pub const fn bits(self) -> usize {
        self.bytes() * 8
    }
}

/// An AES key. Immutable once built; the variant fixes its length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// 128-bit key.
    Aes128([u8; 16]),
    /// 192-bit key.
    Aes192([u8; 24]),
    /// 256-bit key.
    Aes256([u8; 32]),
}

impl Key {
    /// Builds a key from big-endian words (4, 6 or 8 of them).
    pub fn from_words(words: &[u32]) -> Result<Self> {
        let mut bytes = [0u8; 32];
        if words.len() > 8 {
            return Err(Error::InvalidKeyLength(words.len() * 4));
        }
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(words) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Self::try_from(&bytes[..words.len() * 4])
    }

    /// Returns the variant.
    pub const fn size(&self) -> KeySize {
        match self {
            Self::Aes128(_) => KeySize::Aes128,
            Self::Aes192(_) => KeySize::Aes192,
            Self::Aes256(_) => KeySize::Aes256,
        }
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Aes128(k) => k,
            Self::Aes192(k) => k,
            Self::Aes256(k) => k,
        }
    }
}

impl TryFrom<&[u8]> for Key {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        // `from_len` has already rejected every other length, so the array
        // conversions below cannot fail.
        Ok(match KeySize::from_len(bytes.len())? {
            KeySize::Aes128 => Self::Aes128(copy_array(bytes)),
            KeySize::Aes192 => Self::Aes192(copy_array(bytes)),
            KeySize::Aes256 => Self::Aes256(copy_array(bytes)),
        })
    }
}

fn copy_array<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    out
}

impl From<[u8; 16]> for Key {
    fn from(value: [u8; 16]) -> Self {
        Self::Aes128(value)
    }
}

impl From<[u8; 24]> for Key {
    fn from(value: [u8; 24]) -> Self {
        Self::Aes192(value)
    }
}

impl From<[u8; 32]> for Key {
    fn from(value: [u8; 32]) -> Self {
        Self::Aes256(value)
    }
}
