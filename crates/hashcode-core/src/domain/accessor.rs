//! Field access for descriptor-driven hashing.
//!
//! [`FieldAccessor`] turns an entity into an ordered list of
//! [`FieldEntry`] values, either for every described field or for an
//! explicit selection. [`FieldSelection`] keeps a resolved selection around
//! so name lookup happens once.

use std::fmt;

use super::descriptor::FieldDescriptor;
use super::traits::HashFields;
use crate::error::FieldResolutionError;
use crate::hash::{FieldHash, HashCombiner};

/// One field value read from an entity.
#[derive(Clone, Copy)]
pub struct FieldEntry<'a> {
    /// Field name, for diagnostics only.
    pub name: &'static str,
    /// The field value.
    pub value: &'a dyn FieldHash,
}

impl FieldEntry<'_> {
    /// Returns the hash of the field value.
    #[inline]
    pub fn hash(&self) -> i32 {
        self.value.field_hash()
    }
}

impl fmt::Debug for FieldEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldEntry")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish()
    }
}

/// Reads entity fields through their descriptors.
pub struct FieldAccessor;

impl FieldAccessor {
    /// Returns every described field of the entity, in declaration order.
    pub fn all<E: HashFields>(entity: &E) -> Vec<FieldEntry<'_>> {
        Self::project(entity, E::FIELDS)
    }

    /// Returns the named fields of the entity, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`FieldResolutionError`] for the first name that is not a
    /// described field of `E`. No partial list is returned.
    pub fn select<'a, E: HashFields>(
        entity: &'a E,
        names: &[&str],
    ) -> Result<Vec<FieldEntry<'a>>, FieldResolutionError> {
        Ok(FieldSelection::<E>::by_names(names)?.entries(entity))
    }

    /// Reads the given selectors from the entity, in the given order.
    pub fn project<'a, E>(entity: &'a E, selectors: &[FieldDescriptor<E>]) -> Vec<FieldEntry<'a>> {
        selectors
            .iter()
            .map(|selector| FieldEntry {
                name: selector.name,
                value: selector.read(entity),
            })
            .collect()
    }
}

/// An ordered list of field selectors for one entity type.
///
/// # Examples
///
/// ```
/// use hashcode_core::{field, FieldDescriptor, FieldSelection, HashFields};
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
/// let by_name = FieldSelection::<Contact>::by_names(&["age", "name"]).unwrap();
/// let typed = FieldSelection::new(vec![field!(Contact, age), field!(Contact, name)]);
///
/// let contact = Contact { name: "Gerda".into(), age: 64 };
/// assert_eq!(by_name.hash_code(&contact), typed.hash_code(&contact));
/// assert!(FieldSelection::<Contact>::by_names(&["email"]).is_err());
/// ```
pub struct FieldSelection<E> {
    selectors: Vec<FieldDescriptor<E>>,
}

impl<E> FieldSelection<E> {
    /// Creates a selection from typed selectors.
    pub fn new(selectors: Vec<FieldDescriptor<E>>) -> Self {
        FieldSelection { selectors }
    }

    /// Returns the selectors in order.
    pub fn selectors(&self) -> &[FieldDescriptor<E>] {
        &self.selectors
    }

    /// Returns the selected field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.selectors.iter().map(|s| s.name)
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    /// Reads the selected fields from an entity.
    pub fn entries<'a>(&self, entity: &'a E) -> Vec<FieldEntry<'a>> {
        FieldAccessor::project(entity, &self.selectors)
    }

    /// Folds the selected fields of an entity into a fresh combiner.
    pub fn hash_code(&self, entity: &E) -> i32 {
        HashCombiner::new()
            .fold_entries(self.entries(entity))
            .finalize()
    }
}

impl<E: HashFields> FieldSelection<E> {
    /// Resolves field names against the descriptors of `E`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldResolutionError`] for the first unknown name.
    pub fn by_names<S: AsRef<str>>(names: &[S]) -> Result<Self, FieldResolutionError> {
        let descriptor = E::entity_descriptor();
        let selectors = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                descriptor
                    .find_field(name)
                    .copied()
                    .ok_or_else(|| FieldResolutionError::new(E::TYPE_NAME, name))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(FieldSelection { selectors })
    }

    /// Selects every described field of `E`.
    pub fn all() -> Self {
        FieldSelection {
            selectors: E::FIELDS.to_vec(),
        }
    }
}

impl<E> Clone for FieldSelection<E> {
    fn clone(&self) -> Self {
        FieldSelection {
            selectors: self.selectors.clone(),
        }
    }
}

impl<E> fmt::Debug for FieldSelection<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.field_names()).finish()
    }
}
