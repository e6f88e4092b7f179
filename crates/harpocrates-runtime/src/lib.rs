//! Keyed Harpocrates cipher and bulk multi-block driver.
//!
//! Builds on `harpocrates-core` (the block transformation) and
//! `harpocrates-gen` (secret-material generation) to provide:
//! - Free bulk functions applying the block routines independently across
//!   buffers whose length is a multiple of 16 bytes.
//! - [`Harpocrates`], a keyed cipher owning a table and its inverse, with
//!   best-effort zeroisation on drop.
//!
//! Blocks carry no chaining dependency, so the `parallel` cargo feature may
//! fan them out across a rayon pool without changing any output byte.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bulk;
mod cipher;
mod error;

pub use crate::bulk::{decrypt, decrypt_in_place, encrypt, encrypt_in_place};
pub use crate::cipher::Harpocrates;
pub use crate::error::Error;

pub use harpocrates_core::{decrypt_block, encrypt_block, Block, Lut, BLOCK_LEN};
