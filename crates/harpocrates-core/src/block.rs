//! Block and state representations.

use crate::consts::{BLOCK_LEN, N_ROWS};

/// A 16-byte cipher block.
pub type Block = [u8; BLOCK_LEN];

/// A permutation of `0..=255` serving as the cipher's secret.
pub type Lut = [u8; 256];

/// The 8×16 bit matrix in flight during one block operation, stored as
/// eight 16-bit rows. Matrix cell `(r, c)` is bit `15 - c` of row `r`.
pub type State = [u16; N_ROWS];

/// Packs a block into the row matrix, big-endian per two-byte pair.
#[inline]
pub fn pack(block: &Block) -> State {
    let mut state = [0u16; N_ROWS];
    for (row, pair) in state.iter_mut().zip(block.chunks_exact(2)) {
        *row = u16::from_be_bytes([pair[0], pair[1]]);
    }
    state
}

/// Unpacks the row matrix back into a byte block.
#[inline]
pub fn unpack(state: &State) -> Block {
    let mut block = [0u8; BLOCK_LEN];
    for (pair, row) in block.chunks_exact_mut(2).zip(state.iter()) {
        pair.copy_from_slice(&row.to_be_bytes());
    }
    block
}
