//! hashcode - deterministic hash codes in Rust
//!
//! Derive a field list, then hash through it.
//!
//! # Example
//!
//! ```rust
//! use hashcode::prelude::*;
//!
//! #[derive(HashFields)]
//! pub struct Contact {
//!     pub name: String,
//!     pub age: i32,
//! }
//!
//! let first = Contact { name: "Gerhard".into(), age: 64 };
//! let second = Contact { name: "Gerhard".into(), age: 64 };
//! assert_eq!(first.fields_hash_code(), second.fields_hash_code());
//!
//! let manual = HashCombiner::new().fold(&first.name).fold(&first.age).finalize();
//! assert_eq!(manual, first.fields_hash_code());
//! ```

// Derive macro and the trait it implements share a name
pub use hashcode_core::domain::HashFields;
pub use hashcode_macros::HashFields;

// Hash primitives
pub use hashcode_core::hash::{
    fnv1a_32, FieldHash, HashCombiner, HASH_MULTIPLIER, HASH_SEED, NULL_HASH,
};

// Descriptors and field access
pub use hashcode_core::domain::{
    EntityDescriptor, FieldAccessor, FieldDescriptor, FieldEntry, FieldSelection, HashCode,
};
pub use hashcode_core::field;
pub use hashcode_core::FieldResolutionError;

// Configuration
pub use hashcode_config as config;
pub use hashcode_config::{ConfigError, DemoConfig};

#[cfg(feature = "console")]
pub use hashcode_console as console;

/// Internal types for macro-generated code. Do not use directly.
#[doc(hidden)]
pub mod __internal {
    pub use hashcode_core::domain::{FieldDescriptor, HashFields};
    pub use hashcode_core::hash::FieldHash;
}

pub mod prelude {
    pub use super::{
        field, FieldAccessor, FieldHash, FieldSelection, HashCode, HashCombiner, HashFields,
    };
}
