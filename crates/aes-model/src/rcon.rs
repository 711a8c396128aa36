//! Round constants for key expansion.
//!
//! The sequence starts at `0x01` and each element is the `xtime` of the
//! previous one. Key expansion consumes at most ten of them (AES-128), but the
//! generator is unbounded; the sequence repeats with period [`RCON_PERIOD`].

use crate::gf::xtime;

/// Multiplicative order of `x` in GF(2^8) mod `0x11b`.
pub const RCON_PERIOD: usize = 51;

/// Iterator over the round-constant sequence.
#[derive(Clone, Copy, Debug)]
pub struct Rcon {
    next: u8,
}

impl Rcon {
    /// Starts the sequence at `0x01`.
    pub const fn new() -> Self {
        Self { next: 0x01 }
    }
}

impl Default for Rcon {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Rcon {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        let value = self.next;
        self.next = xtime(value);
        Some(value)
    }
}

/// Returns element `n` (0-indexed) of the sequence.
pub const fn rcon(n: usize) -> u8 {
    let mut value = 0x01u8;
    let mut i = 0;
    while i < n % RCON_PERIOD {
        value = xtime(value);
        i += 1;
    }
    value
}
