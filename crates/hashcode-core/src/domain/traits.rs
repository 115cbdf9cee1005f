//! Core domain traits

use super::accessor::FieldAccessor;
use super::descriptor::{EntityDescriptor, FieldDescriptor};
use crate::hash::HashCombiner;

/// A type whose hashable fields are described at compile time.
///
/// `FIELDS` lists the fields in a stable order (declaration order when
/// derived), which is what makes descriptor-driven hashing deterministic.
///
/// # Example
///
/// ```
/// use hashcode_core::{field, FieldDescriptor, HashFields};
///
/// struct Contact {
///     name: String,
///     age: i32,
/// }
///
/// impl HashFields for Contact {
///     const TYPE_NAME: &'static str = "Contact";
///     const FIELDS: &'static [FieldDescriptor<Self>] =
///         &[field!(Contact, name), field!(Contact, age)];
/// }
///
/// let contact = Contact { name: "Gerhard".into(), age: 64 };
/// assert_eq!(Contact::entity_descriptor().field_count(), 2);
/// assert_eq!(contact.fields_hash_code(), Contact { name: "Gerhard".into(), age: 64 }.fields_hash_code());
/// ```
///
/// For structs with public named fields, use `#[derive(HashFields)]` from
/// `hashcode-macros` instead of writing the list by hand.
pub trait HashFields: Sized + 'static {
    /// Name of the entity type.
    const TYPE_NAME: &'static str;

    /// Hashable fields in a stable order.
    const FIELDS: &'static [FieldDescriptor<Self>];

    /// Returns the descriptor for this type.
    fn entity_descriptor() -> EntityDescriptor<Self> {
        EntityDescriptor::new(Self::TYPE_NAME, Self::FIELDS)
    }

    /// Folds every described field into a fresh combiner.
    fn fields_hash_code(&self) -> i32 {
        HashCombiner::new()
            .fold_entries(FieldAccessor::all(self))
            .finalize()
    }
}

/// An entity that computes its own hash code.
///
/// Entities with equal field values must return equal hash codes.
pub trait HashCode {
    /// Returns the hash code of this entity.
    fn hash_code(&self) -> i32;
}
