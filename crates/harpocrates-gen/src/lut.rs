//! Look-up table generation and inversion.

use harpocrates_core::Lut;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::Error;

/// Fills `lut` with a uniform random permutation of `0..=255`.
///
/// Identity fill followed by a Fisher–Yates shuffle. The index drawn for
/// position `i` is uniform over `[i, 255]` (no modulo reduction), so every
/// permutation is equally likely. The caller chooses the randomness source;
/// for key material it must be cryptographically strong.
pub fn generate_lut_with<R: RngCore + CryptoRng>(rng: &mut R, lut: &mut Lut) {
    for (i, slot) in lut.iter_mut().enumerate() {
        *slot = i as u8;
    }
    for i in 0..255 {
        let j = rng.gen_range(i..256);
        lut.swap(i, j);
    }
}

/// Fills `lut` with a uniform random permutation drawn from OS entropy.
///
/// A ChaCha20 generator is seeded from the operating-system source; there
/// is no wall-clock fallback for key material. Fails with
/// [`Error::EntropyUnavailable`] if the source cannot produce seed bytes.
pub fn generate_lut(lut: &mut Lut) -> Result<(), Error> {
    let mut seed = [0u8; 32];
    OsRng
        .try_fill_bytes(&mut seed)
        .map_err(Error::EntropyUnavailable)?;
    let mut rng = ChaCha20Rng::from_seed(seed);
    generate_lut_with(&mut rng, lut);
    Ok(())
}

/// Returns true if `lut` is a bijection of `0..=255`.
pub fn is_permutation(lut: &Lut) -> bool {
    let mut seen = [false; 256];
    for &value in lut.iter() {
        if seen[value as usize] {
            return false;
        }
        seen[value as usize] = true;
    }
    true
}

/// Derives the inverse table satisfying `inverse[lut[i]] == i`.
///
/// A destination written twice means `lut` maps two inputs to one output;
/// the derivation fails with [`Error::InvalidLut`]. The inverse must be
/// re-derived whenever the forward table changes.
pub fn derive_inverse_lut(lut: &Lut) -> Result<Lut, Error> {
    let mut inverse = [0u8; 256];
    let mut seen = [false; 256];
    for (i, &value) in lut.iter().enumerate() {
        if seen[value as usize] {
            return Err(Error::InvalidLut);
        }
        seen[value as usize] = true;
        inverse[value as usize] = i as u8;
    }
    Ok(inverse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_table_is_a_permutation() {
        for seed in 0u8..8 {
            let mut rng = ChaCha20Rng::from_seed([seed; 32]);
            let mut lut = [0u8; 256];
            generate_lut_with(&mut rng, &mut lut);
            assert!(is_permutation(&lut));
        }
    }

    #[test]
    fn os_entropy_generation_yields_a_permutation() {
        let mut lut = [0u8; 256];
        generate_lut(&mut lut).expect("OS entropy should be available");
        assert!(is_permutation(&lut));
    }

    #[test]
    fn inverse_composes_to_identity_both_ways() {
        let mut rng = ChaCha20Rng::from_seed([0x42u8; 32]);
        let mut lut = [0u8; 256];
        generate_lut_with(&mut rng, &mut lut);
        let inverse = derive_inverse_lut(&lut).expect("generated table is a permutation");
        for i in 0..256 {
            assert_eq!(inverse[lut[i] as usize] as usize, i);
            assert_eq!(lut[inverse[i] as usize] as usize, i);
        }
    }

    #[test]
    fn rejects_duplicate_entries() {
        let mut lut: Lut = core::array::from_fn(|i| i as u8);
        lut[1] = 0; // lut[0] == lut[1] == 0
        assert!(!is_permutation(&lut));
        assert!(matches!(derive_inverse_lut(&lut), Err(Error::InvalidLut)));
    }

    #[test]
    fn identity_is_its_own_inverse() {
        let identity: Lut = core::array::from_fn(|i| i as u8);
        let inverse = derive_inverse_lut(&identity).expect("identity is a permutation");
        assert_eq!(inverse, identity);
    }
}
