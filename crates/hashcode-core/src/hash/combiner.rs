//! HashCombiner - positional hash accumulation

use super::field_hash::FieldHash;
use crate::domain::FieldEntry;

/// Initial accumulator value of a fresh [`HashCombiner`].
pub const HASH_SEED: i32 = 17;

/// Factor applied to the accumulator before each fold.
pub const HASH_MULTIPLIER: i32 = 23;

/// Accumulates a hash code from an ordered sequence of field values.
///
/// Each fold computes `accumulator * 23 + value_hash` with wrapping `i32`
/// arithmetic, so overflow never fails and folding is order-sensitive:
/// folding `a` then `b` differs from `b` then `a` whenever the two hashes
/// differ.
///
/// Folding after [`finalize`](Self::finalize) is allowed, but a caller that
/// wants *the* hash of an entity must finalize only after its last fold.
///
/// # Examples
///
/// ```
/// use hashcode_core::HashCombiner;
///
/// let hash = HashCombiner::new().fold(&"Gerhard").fold(&64).finalize();
/// let same = HashCombiner::new().fold(&"Gerhard").fold(&64).finalize();
/// assert_eq!(hash, same);
///
/// let swapped = HashCombiner::new().fold(&64).fold(&"Gerhard").finalize();
/// assert_ne!(hash, swapped);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCombiner {
    accumulator: i32,
}

impl HashCombiner {
    /// Creates a combiner seeded with [`HASH_SEED`].
    #[inline]
    pub const fn new() -> Self {
        Self::with_seed(HASH_SEED)
    }

    /// Creates a combiner with a custom seed.
    #[inline]
    pub const fn with_seed(seed: i32) -> Self {
        HashCombiner { accumulator: seed }
    }

    /// Folds one value into the accumulator.
    ///
    /// `Option::None` contributes [`NULL_HASH`](super::NULL_HASH).
    #[inline]
    #[must_use]
    pub fn fold<T: FieldHash + ?Sized>(self, value: &T) -> Self {
        self.fold_hash(value.field_hash())
    }

    /// Folds an already computed hash into the accumulator.
    #[inline]
    #[must_use]
    pub const fn fold_hash(self, hash: i32) -> Self {
        HashCombiner {
            accumulator: self
                .accumulator
                .wrapping_mul(HASH_MULTIPLIER)
                .wrapping_add(hash),
        }
    }

    /// Folds every entry in order.
    #[must_use]
    pub fn fold_entries<'a, I>(self, entries: I) -> Self
    where
        I: IntoIterator<Item = FieldEntry<'a>>,
    {
        entries
            .into_iter()
            .fold(self, |combiner, entry| combiner.fold(entry.value))
    }

    /// Returns the current accumulator without resetting it.
    #[inline]
    pub const fn finalize(&self) -> i32 {
        self.accumulator
    }
}

impl Default for HashCombiner {
    fn default() -> Self {
        Self::new()
    }
}
