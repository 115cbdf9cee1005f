//! Contact entities, one per hashing strategy.
//!
//! All three hold the same data (name, age) and differ only in how they
//! compute their hash code.

use std::hash::{Hash, Hasher};

use hashcode::prelude::*;
use hashcode::FieldDescriptor;

/// Feeds the entity's own hash code to a std hasher, so the contacts can be
/// used as `HashMap`/`HashSet` keys.
macro_rules! impl_std_hash {
    ($($t:ty),*) => {
        $(
            impl Hash for $t {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    state.write_i32(self.hash_code());
                }
            }
        )*
    };
}

/// Hashes its fields with explicit combiner calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualContact {
    pub name: String,
    pub age: i32,
}

impl ManualContact {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        ManualContact {
            name: name.into(),
            age,
        }
    }
}

impl HashCode for ManualContact {
    fn hash_code(&self) -> i32 {
        HashCombiner::new()
            .fold(&self.name)
            .fold(&self.age)
            .finalize()
    }
}

/// Hashes every public field through its derived descriptors.
#[derive(Debug, Clone, PartialEq, Eq, HashFields)]
pub struct ReflectiveContact {
    pub name: String,
    pub age: i32,
}

impl ReflectiveContact {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        ReflectiveContact {
            name: name.into(),
            age,
        }
    }
}

impl HashCode for ReflectiveContact {
    fn hash_code(&self) -> i32 {
        self.fields_hash_code()
    }
}

/// Hashes an explicit list of field selectors.
#[derive(Debug, Clone, PartialEq, Eq, HashFields)]
pub struct SelectorContact {
    pub name: String,
    pub age: i32,
}

impl SelectorContact {
    /// Fields that take part in equality, in hashing order.
    pub const SELECTORS: &'static [FieldDescriptor<SelectorContact>] =
        &[field!(SelectorContact, name), field!(SelectorContact, age)];

    pub fn new(name: impl Into<String>, age: i32) -> Self {
        SelectorContact {
            name: name.into(),
            age,
        }
    }

    /// Returns the default selection as an owned [`FieldSelection`].
    pub fn selection() -> FieldSelection<Self> {
        FieldSelection::new(Self::SELECTORS.to_vec())
    }
}

impl HashCode for SelectorContact {
    fn hash_code(&self) -> i32 {
        HashCombiner::new()
            .fold_entries(FieldAccessor::project(self, Self::SELECTORS))
            .finalize()
    }
}

impl_std_hash!(ManualContact, ReflectiveContact, SelectorContact);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_manual_equal_contacts() {
        let first = ManualContact::new("Gerhard", 64);
        let second = ManualContact::new("Gerhard", 64);
        assert_eq!(first.hash_code(), second.hash_code());
    }

    #[test]
    fn test_manual_formula() {
        let contact = ManualContact::new("Gerhard", 64);
        let expected = (17i32
            .wrapping_mul(23)
            .wrapping_add("Gerhard".field_hash()))
        .wrapping_mul(23)
        .wrapping_add(64);
        assert_eq!(contact.hash_code(), expected);
    }

    #[test]
    fn test_reflective_equal_contacts() {
        let first = ReflectiveContact::new("Gerhard", 64);
        let second = ReflectiveContact::new("Gerhard", 64);
        assert_eq!(first.hash_code(), second.hash_code());
    }

    #[test]
    fn test_selector_equal_contacts() {
        let first = SelectorContact::new("Gerhard", 64);
        let second = SelectorContact::new("Gerhard", 64);
        assert_eq!(first.hash_code(), second.hash_code());
    }

    #[test]
    fn test_different_names_differ_in_every_strategy() {
        assert_ne!(
            ManualContact::new("Gerhard", 64).hash_code(),
            ManualContact::new("Gerda", 64).hash_code()
        );
        assert_ne!(
            ReflectiveContact::new("Gerhard", 64).hash_code(),
            ReflectiveContact::new("Gerda", 64).hash_code()
        );
        assert_ne!(
            SelectorContact::new("Gerhard", 64).hash_code(),
            SelectorContact::new("Gerda", 64).hash_code()
        );
    }

    #[test]
    fn test_strategies_agree_for_same_field_order() {
        let manual = ManualContact::new("Gerhard", 64).hash_code();
        assert_eq!(ReflectiveContact::new("Gerhard", 64).hash_code(), manual);
        assert_eq!(SelectorContact::new("Gerhard", 64).hash_code(), manual);
    }

    #[test]
    fn test_selection_matches_const_selectors() {
        let contact = SelectorContact::new("Gerda", 61);
        assert_eq!(SelectorContact::selection().hash_code(&contact), contact.hash_code());

        let names: Vec<_> = SelectorContact::selection().field_names().collect();
        assert_eq!(names, vec!["name", "age"]);
    }

    #[test]
    fn test_std_hash_set_deduplicates() {
        let mut set = HashSet::new();
        set.insert(ManualContact::new("Gerhard", 64));
        set.insert(ManualContact::new("Gerhard", 64));
        set.insert(ManualContact::new("Gerda", 64));
        assert_eq!(set.len(), 2);
    }
}
