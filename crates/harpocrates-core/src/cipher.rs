//! Single-block encryption and decryption.

use crate::block::{pack, unpack, Block, Lut};
use crate::consts::N_ROUNDS;
use crate::round::{add_round_constants, sub_columns, sub_left_to_right, sub_right_to_left};

/// Encrypts one 16-byte block under the look-up table.
pub fn encrypt_block(lut: &Lut, plain: &Block) -> Block {
    let mut state = pack(plain);
    for round in 0..N_ROUNDS {
        sub_left_to_right(&mut state, lut);
        add_round_constants(&mut state, round);
        sub_columns(&mut state, lut);
        sub_right_to_left(&mut state, lut);
    }
    unpack(&state)
}

/// Decrypts one 16-byte block under the inverse look-up table.
///
/// The in-round order differs from encryption: column substitution runs
/// before the round-constant addition, and the constant schedule is walked
/// backwards. With `inv_lut` the functional inverse of the encrypting
/// table, this reverses [`encrypt_block`] exactly.
pub fn decrypt_block(inv_lut: &Lut, cipher: &Block) -> Block {
    let mut state = pack(cipher);
    for round in 0..N_ROUNDS {
        sub_left_to_right(&mut state, inv_lut);
        sub_columns(&mut state, inv_lut);
        add_round_constants(&mut state, N_ROUNDS - 1 - round);
        sub_right_to_left(&mut state, inv_lut);
    }
    unpack(&state)
}
