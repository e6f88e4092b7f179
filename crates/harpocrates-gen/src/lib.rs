//! Secret-material generation for the Harpocrates cipher.
//!
//! The cipher's secret is a permutation of the 256-byte space. This crate
//! produces uniform random permutations, from a caller-supplied CSPRNG or
//! the operating-system entropy source, and derives the inverse table the
//! decryption path requires, validating that supplied tables really are
//! bijections.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod lut;

pub use crate::error::Error;
pub use crate::lut::{derive_inverse_lut, generate_lut, generate_lut_with, is_permutation};
