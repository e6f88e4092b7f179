//! Keyed cipher with table lifecycle management.

use core::fmt;

use harpocrates_core::{decrypt_block, encrypt_block, Block, Lut};
use harpocrates_gen::{derive_inverse_lut, generate_lut, generate_lut_with};
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::bulk;
use crate::error::Error;

/// A Harpocrates cipher keyed by a look-up table and its inverse.
///
/// Both tables are read-only for the lifetime of the value; re-keying means
/// constructing a new cipher. The tables are wiped on drop (best effort;
/// copies the optimizer or OS may have made are out of reach).
pub struct Harpocrates {
    lut: Lut,
    inv_lut: Lut,
}

impl Harpocrates {
    /// Keys a cipher with a fresh uniform random table from OS entropy.
    ///
    /// The only suspension point in the crate: the call may block briefly
    /// while the entropy source warms up, and fails with
    /// [`harpocrates_gen::Error::EntropyUnavailable`] if it cannot deliver.
    pub fn generate() -> Result<Self, harpocrates_gen::Error> {
        let mut lut = [0u8; 256];
        generate_lut(&mut lut)?;
        Ok(Self::from_generated(lut))
    }

    /// Keys a cipher from a caller-supplied randomness source.
    ///
    /// Intended for reproducible setups (tests, fixtures); production keys
    /// should come from [`Harpocrates::generate`].
    pub fn from_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut lut = [0u8; 256];
        generate_lut_with(rng, &mut lut);
        Self::from_generated(lut)
    }

    /// Keys a cipher from an existing table, deriving its inverse.
    ///
    /// Fails with [`harpocrates_gen::Error::InvalidLut`] if the table is not
    /// a permutation of `0..=255`.
    pub fn from_lut(lut: Lut) -> Result<Self, harpocrates_gen::Error> {
        let inv_lut = derive_inverse_lut(&lut)?;
        Ok(Self { lut, inv_lut })
    }

    fn from_generated(lut: Lut) -> Self {
        let inv_lut = derive_inverse_lut(&lut).expect("generated table is a permutation");
        Self { lut, inv_lut }
    }

    /// The encrypting table.
    pub fn lut(&self) -> &Lut {
        &self.lut
    }

    /// The decrypting (inverse) table.
    pub fn inverse_lut(&self) -> &Lut {
        &self.inv_lut
    }

    /// Encrypts one 16-byte block.
    pub fn encrypt_block(&self, plain: &Block) -> Block {
        encrypt_block(&self.lut, plain)
    }

    /// Decrypts one 16-byte block.
    pub fn decrypt_block(&self, cipher: &Block) -> Block {
        decrypt_block(&self.inv_lut, cipher)
    }

    /// Bulk-encrypts `input` into `output`; see [`bulk::encrypt`](crate::encrypt).
    pub fn encrypt(&self, input: &[u8], output: &mut [u8]) -> Result<(), Error> {
        bulk::encrypt(&self.lut, input, output)
    }

    /// Bulk-decrypts `input` into `output`; see [`bulk::decrypt`](crate::decrypt).
    pub fn decrypt(&self, input: &[u8], output: &mut [u8]) -> Result<(), Error> {
        bulk::decrypt(&self.inv_lut, input, output)
    }

    /// Bulk-encrypts a buffer in place.
    pub fn encrypt_in_place(&self, data: &mut [u8]) -> Result<(), Error> {
        bulk::encrypt_in_place(&self.lut, data)
    }

    /// Bulk-decrypts a buffer in place.
    pub fn decrypt_in_place(&self, data: &mut [u8]) -> Result<(), Error> {
        bulk::decrypt_in_place(&self.inv_lut, data)
    }
}

impl Drop for Harpocrates {
    fn drop(&mut self) {
        self.lut.zeroize();
        self.inv_lut.zeroize();
    }
}

// The tables are the secret; keep them out of debug output and logs.
impl fmt::Debug for Harpocrates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Harpocrates").finish_non_exhaustive()
    }
}
