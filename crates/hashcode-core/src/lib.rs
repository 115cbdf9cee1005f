//! hashcode core - deterministic hash combining
//!
//! This crate provides the building blocks for computing entity hash codes:
//! - [`FieldHash`] for stable per-value hashes
//! - [`HashCombiner`] for order-sensitive accumulation
//! - Field descriptors and [`FieldAccessor`] for descriptor-driven hashing

pub mod domain;
pub mod error;
pub mod hash;

#[cfg(test)]
mod test_utils;

pub use domain::{
    EntityDescriptor, FieldAccessor, FieldDescriptor, FieldEntry, FieldGetter, FieldSelection,
    HashCode, HashFields,
};
pub use error::FieldResolutionError;
pub use hash::{FieldHash, HashCombiner, HASH_MULTIPLIER, HASH_SEED, NULL_HASH};
