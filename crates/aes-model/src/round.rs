//! AES round transformations over [`State`].

use crate::gf::{gmul11, gmul13, gmul14, gmul2, gmul3, gmul9};
use crate::sbox::{inv_sbox, sbox};
use crate::state::State;

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut State) {
    state.map_bytes(sbox);
}

/// Applies the inverse SubBytes transformation.
#[inline]
pub fn inv_sub_bytes(state: &mut State) {
    state.map_bytes(inv_sbox);
}

/// Performs ShiftRows in place: row `r` rotates left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut State) {
    for r in 1..4 {
        state.row_mut(r).rotate_left(r);
    }
}

/// Performs the inverse of ShiftRows in place: row `r` rotates right by `r`.
#[inline]
pub fn inv_shift_rows(state: &mut State) {
    for r in 1..4 {
        state.row_mut(r).rotate_right(r);
    }
}

/// Multiplies one column by the MixColumns matrix
/// `[[2,3,1,1],[1,2,3,1],[1,1,2,3],[3,1,1,2]]`.
pub fn mix_column(col: [u8; 4]) -> [u8; 4] {
    let [a0, a1, a2, a3] = col;
    [
        gmul2(a0) ^ gmul3(a1) ^ a2 ^ a3,
        a0 ^ gmul2(a1) ^ gmul3(a2) ^ a3,
        a0 ^ a1 ^ gmul2(a2) ^ gmul3(a3),
        gmul3(a0) ^ a1 ^ a2 ^ gmul2(a3),
    ]
}

/// Multiplies one column by the inverse matrix
/// `[[14,11,13,9],[9,14,11,13],[13,9,14,11],[11,13,9,14]]`.
pub fn inv_mix_column(col: [u8; 4]) -> [u8; 4] {
    let [a0, a1, a2, a3] = col;
    [
        gmul14(a0) ^ gmul11(a1) ^ gmul13(a2) ^ gmul9(a3),
        gmul9(a0) ^ gmul14(a1) ^ gmul11(a2) ^ gmul13(a3),
        gmul13(a0) ^ gmul9(a1) ^ gmul14(a2) ^ gmul11(a3),
        gmul11(a0) ^ gmul13(a1) ^ gmul9(a2) ^ gmul14(a3),
    ]
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut State) {
    for col in 0..4 {
        let mixed = mix_column(state.column(col));
        state.set_column(col, mixed);
    }
}

/// Inverse MixColumns over all four columns.
#[inline]
pub fn inv_mix_columns(state: &mut State) {
    for col in 0..4 {
        let mixed = inv_mix_column(state.column(col));
        state.set_column(col, mixed);
    }
}

/// Adds (XORs) a round key into the state. Round-key byte `i` meets state
/// byte `i`, i.e. key word `c` is XORed into column `c`.
#[inline]
pub fn add_round_key(state: &mut State, round_key: &[u8; 16]) {
    for col in 0..4 {
        let mut column = state.column(col);
        for (byte, k) in column.iter_mut().zip(&round_key[col * 4..col * 4 + 4]) {
            *byte ^= *k;
        }
        state.set_column(col, column);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Block;
    use proptest::prelude::*;

    fn state_of(hex_block: &str) -> State {
        let bytes: Block = hex::decode(hex_block).unwrap().try_into().unwrap();
        State::from_block(&bytes)
    }

    const MIXER_VECTORS: [([u8; 4], [u8; 4]); 6] = [
        ([0xdb, 0x13, 0x53, 0x45], [0x8e, 0x4d, 0xa1, 0xbc]),
        ([0xf2, 0x0a, 0x22, 0x5c], [0x9f, 0xdc, 0x58, 0x9d]),
        ([0x01, 0x01, 0x01, 0x01], [0x01, 0x01, 0x01, 0x01]),
        ([0xc6, 0xc6, 0xc6, 0xc6], [0xc6, 0xc6, 0xc6, 0xc6]),
        ([0xd4, 0xd4, 0xd4, 0xd5], [0xd5, 0xd5, 0xd7, 0xd6]),
        ([0x2d, 0x26, 0x31, 0x4c], [0x4d, 0x7e, 0xbd, 0xf8]),
    ];

    #[test]
    fn mix_column_known_vectors() {
        for (input, expected) in MIXER_VECTORS {
            assert_eq!(mix_column(input), expected, "mix {input:02x?}");
            assert_eq!(inv_mix_column(expected), input, "inv mix {expected:02x?}");
        }
    }

    #[test]
    fn inv_mix_column_uses_all_four_operands() {
        // Changing only the lower two bytes must change the output.
        let a = inv_mix_column([0x10, 0x20, 0x00, 0x00]);
        let b = inv_mix_column([0x10, 0x20, 0x02, 0x03]);
        assert_ne!(a, b);
    }

    #[test]
    fn shift_rows_moves_row_r_left_by_r() {
        let mut state = State([
            [0, 1, 2, 3],
            [10, 11, 12, 13],
            [20, 21, 22, 23],
            [30, 31, 32, 33],
        ]);
        shift_rows(&mut state);
        assert_eq!(
            state.0,
            [
                [0, 1, 2, 3],
                [11, 12, 13, 10],
                [22, 23, 20, 21],
                [33, 30, 31, 32],
            ]
        );
        inv_shift_rows(&mut state);
        assert_eq!(state.0[3], [30, 31, 32, 33]);
    }

    #[test]
    fn fips_197_round_one_steps() {
        // FIPS-197 Appendix B, round 1.
        let mut state = state_of("193de3bea0f4e22b9ac68d2ae9f84808");
        sub_bytes(&mut state);
        assert_eq!(state, state_of("d42711aee0bf98f1b8b45de51e415230"));
        shift_rows(&mut state);
        assert_eq!(state, state_of("d4bf5d30e0b452aeb84111f11e2798e5"));
        mix_columns(&mut state);
        assert_eq!(state, state_of("046681e5e0cb199a48f8d37a2806264c"));
        let round_key: Block = hex::decode("a0fafe1788542cb123a339392a6c7605")
            .unwrap()
            .try_into()
            .unwrap();
        add_round_key(&mut state, &round_key);
        assert_eq!(state, state_of("a49c7ff2689f352b6b5bea43026a5049"));
    }

    #[test]
    fn inverse_steps_undo_forward_steps() {
        let original = state_of("00112233445566778899aabbccddeeff");
        let mut state = original;
        sub_bytes(&mut state);
        inv_sub_bytes(&mut state);
        shift_rows(&mut state);
        inv_shift_rows(&mut state);
        mix_columns(&mut state);
        inv_mix_columns(&mut state);
        add_round_key(&mut state, &[0x5a; 16]);
        add_round_key(&mut state, &[0x5a; 16]);
        assert_eq!(state, original);
    }

    proptest! {
        #[test]
        fn inv_mix_inverts_mix(col: [u8; 4]) {
            prop_assert_eq!(inv_mix_column(mix_column(col)), col);
            prop_assert_eq!(mix_column(inv_mix_column(col)), col);
        }
    }
}
