//! Hash primitives
//!
//! - [`FieldHash`]: deterministic per-value hash
//! - [`HashCombiner`]: order-sensitive accumulation of field hashes
//! - [`fnv1a_32`]: text hashing used by string fields

mod combiner;
mod field_hash;
mod fnv;


pub use combiner::{HashCombiner, HASH_MULTIPLIER, HASH_SEED};
pub use field_hash::{FieldHash, NULL_HASH};
pub use fnv::fnv1a_32;
