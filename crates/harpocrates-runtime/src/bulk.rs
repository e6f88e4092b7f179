//! Bulk application of the block routines over multi-block buffers.
//!
//! Every 16-byte block is transformed independently with the same read-only
//! table; there is no chaining IV and no ordering guarantee between blocks.
//! Length checks run before any byte is written, so a failed call leaves
//! the output untouched.

use harpocrates_core::{decrypt_block, encrypt_block, Block, Lut, BLOCK_LEN};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Error;

fn check_len(len: usize) -> Result<(), Error> {
    if len % BLOCK_LEN != 0 {
        return Err(Error::InvalidLength(len));
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn transform_into(input: &[u8], output: &mut [u8], f: impl Fn(&Block) -> Block + Sync) {
    output
        .par_chunks_exact_mut(BLOCK_LEN)
        .zip(input.par_chunks_exact(BLOCK_LEN))
        .for_each(|(dst, src)| {
            let block: &Block = src.try_into().expect("chunk is exactly one block");
            dst.copy_from_slice(&f(block));
        });
}

#[cfg(not(feature = "parallel"))]
fn transform_into(input: &[u8], output: &mut [u8], f: impl Fn(&Block) -> Block) {
    for (dst, src) in output
        .chunks_exact_mut(BLOCK_LEN)
        .zip(input.chunks_exact(BLOCK_LEN))
    {
        let block: &Block = src.try_into().expect("chunk is exactly one block");
        dst.copy_from_slice(&f(block));
    }
}

#[cfg(feature = "parallel")]
fn transform_in_place(data: &mut [u8], f: impl Fn(&Block) -> Block + Sync) {
    data.par_chunks_exact_mut(BLOCK_LEN).for_each(|chunk| {
        let mut block = [0u8; BLOCK_LEN];
        block.copy_from_slice(chunk);
        chunk.copy_from_slice(&f(&block));
    });
}

#[cfg(not(feature = "parallel"))]
fn transform_in_place(data: &mut [u8], f: impl Fn(&Block) -> Block) {
    for chunk in data.chunks_exact_mut(BLOCK_LEN) {
        let mut block = [0u8; BLOCK_LEN];
        block.copy_from_slice(chunk);
        chunk.copy_from_slice(&f(&block));
    }
}

/// Encrypts `input` into `output`, block by block.
///
/// Both buffers must have equal length, a multiple of 16 bytes; zero length
/// is a no-op. Fails with [`Error::InvalidLength`] before writing anything.
/// A length mismatch between the buffers is a caller bug and panics.
pub fn encrypt(lut: &Lut, input: &[u8], output: &mut [u8]) -> Result<(), Error> {
    assert_eq!(
        input.len(),
        output.len(),
        "input and output buffers must have equal length"
    );
    check_len(input.len())?;
    transform_into(input, output, |block| encrypt_block(lut, block));
    Ok(())
}

/// Decrypts `input` into `output`, block by block, under the inverse table.
///
/// Same contract as [`encrypt`].
pub fn decrypt(inv_lut: &Lut, input: &[u8], output: &mut [u8]) -> Result<(), Error> {
    assert_eq!(
        input.len(),
        output.len(),
        "input and output buffers must have equal length"
    );
    check_len(input.len())?;
    transform_into(input, output, |block| decrypt_block(inv_lut, block));
    Ok(())
}

/// Encrypts a buffer in place, block by block.
pub fn encrypt_in_place(lut: &Lut, data: &mut [u8]) -> Result<(), Error> {
    check_len(data.len())?;
    transform_in_place(data, |block| encrypt_block(lut, block));
    Ok(())
}

/// Decrypts a buffer in place, block by block, under the inverse table.
pub fn decrypt_in_place(inv_lut: &Lut, data: &mut [u8]) -> Result<(), Error> {
    check_len(data.len())?;
    transform_in_place(data, |block| decrypt_block(inv_lut, block));
    Ok(())
}
