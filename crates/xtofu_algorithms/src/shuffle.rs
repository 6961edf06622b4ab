//! Fisher–Yates shuffling with an injected randomness source.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use xtofu_foundation::{Result, Value};

use crate::guard;

/// Shuffles a homogeneous array in place.
///
/// Walks from the last index down to 1, swapping each element with one
/// chosen uniformly from `0..=i`.
///
/// # Errors
///
/// Fails with an invalid operation error for non-arrays and a type mismatch
/// for heterogeneous arrays.
pub fn shuffle<R: Rng + ?Sized>(array: &mut Value, rng: &mut R) -> Result<()> {
    let array = guard::array_mut(array, "shuffle")?;
    guard::homogeneous(array, "shuffle")?;
    fisher_yates(array.as_mut_slice(), rng);
    Ok(())
}

/// Shuffles with a `ChaCha8Rng` seeded from `seed`.
///
/// The same seed always yields the same permutation.
///
/// # Errors
///
/// Same as [`shuffle`].
pub fn shuffle_seeded(array: &mut Value, seed: u64) -> Result<()> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    shuffle(array, &mut rng)
}

/// Shuffles only the elements in `start..end`.
///
/// # Errors
///
/// As [`shuffle`], plus a bad range error unless `start <= end <= len`.
pub fn shuffle_range<R: Rng + ?Sized>(
    array: &mut Value,
    start: usize,
    end: usize,
    rng: &mut R,
) -> Result<()> {
    let array = guard::array_mut(array, "shuffle_range")?;
    guard::homogeneous(array, "shuffle_range")?;
    guard::range(start, end, array.len(), "shuffle_range")?;
    fisher_yates(&mut array.as_mut_slice()[start..end], rng);
    Ok(())
}

fn fisher_yates<R: Rng + ?Sized>(items: &mut [Value], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
