//! GF(2^8) arithmetic under the AES reduction polynomial x^8 + x^4 + x^3 + x + 1.
//!
//! The fixed multipliers are the ones MixColumns and its inverse need. They are
//! built from [`xtime`] the same way a hardware datapath chains doublers, so a
//! mismatch against RTL points at a single stage.

/// Low byte of the reduction polynomial `0x11b`.
pub const REDUCTION: u8 = 0x1b;

/// Multiplies by `x` (doubling), reducing modulo `0x11b`.
#[inline]
pub const fn xtime(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCTION
    } else {
        shifted
    }
}

/// Multiplies by 2.
#[inline]
pub const fn gmul2(byte: u8) -> u8 {
    xtime(byte)
}

/// Multiplies by 3.
#[inline]
pub const fn gmul3(byte: u8) -> u8 {
    xtime(byte) ^ byte
}

/// Multiplies by 9.
#[inline]
pub const fn gmul9(byte: u8) -> u8 {
    xtime(xtime(xtime(byte))) ^ byte
}

/// Multiplies by 11.
#[inline]
pub const fn gmul11(byte: u8) -> u8 {
    gmul9(byte) ^ xtime(byte)
}

/// Multiplies by 13.
#[inline]
pub const fn gmul13(byte: u8) -> u8 {
    gmul9(byte) ^ xtime(xtime(byte))
}

/// Multiplies by 14.
#[inline]
pub const fn gmul14(byte: u8) -> u8 {
    let x2 = xtime(byte);
    let x4 = xtime(x2);
    let x8 = xtime(x4);
    x2 ^ x4 ^ x8
}

/// General shift-and-add multiplication of two field elements.
pub const fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Multiplicative inverse, with `inverse(0) == 0` as AES defines it.
pub const fn inverse(byte: u8) -> u8 {
    // x^254 == x^-1 for every non-zero x.
    let mut result = 1u8;
    let mut base = byte;
    let mut exp = 254u8;
    while exp != 0 {
        if exp & 1 != 0 {
            result = gmul(result, base);
        }
        base = gmul(base, base);
        exp >>= 1;
    }
    if byte == 0 {
        0
    } else {
        result
    }
}
