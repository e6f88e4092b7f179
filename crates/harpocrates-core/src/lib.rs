//! Reference implementation of the Harpocrates block transformation.
//!
//! Harpocrates encrypts 16-byte blocks for data-at-rest under a secret
//! 256-byte permutation (the look-up table) rather than a short key. This
//! crate provides:
//! - Packing between byte blocks and the 8×16-bit row matrix.
//! - The round primitives: the two convoluted substitutions, the bit-column
//!   substitution, and the rotating round-constant schedule.
//! - Single-block encryption and decryption.
//!
//! The round function performs data-dependent look-ups into the table and is
//! therefore not constant-time; it must not be treated as side-channel
//! hardened. Table generation and multi-block driving live in the companion
//! `harpocrates-gen` and `harpocrates-runtime` crates.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod consts;
mod round;

pub use crate::block::{pack, unpack, Block, Lut, State};
pub use crate::cipher::{decrypt_block, encrypt_block};
pub use crate::consts::{BLOCK_LEN, N_COLS, N_ROUNDS, N_ROWS, RC};
pub use crate::round::{add_round_constants, sub_columns, sub_left_to_right, sub_right_to_left};
