//! Test utilities for hashcode-core
//!
//! Provides common test fixtures used across the crate's test modules.

use crate::domain::{FieldDescriptor, HashFields};
use crate::field;

/// A contact with a hand-written field list.
#[derive(Clone, Debug, PartialEq)]
pub struct TestContact {
    pub name: String,
    pub age: i32,
    pub email: Option<String>,
}

impl TestContact {
    /// Creates a contact without an email address.
    pub fn new(name: &str, age: i32) -> Self {
        Self {
            name: name.to_string(),
            age,
            email: None,
        }
    }

    /// Creates a contact with an email address.
    pub fn with_email(name: &str, age: i32, email: &str) -> Self {
        Self {
            name: name.to_string(),
            age,
            email: Some(email.to_string()),
        }
    }
}

impl HashFields for TestContact {
    const TYPE_NAME: &'static str = "TestContact";
    const FIELDS: &'static [FieldDescriptor<Self>] = &[
        field!(TestContact, name),
        field!(TestContact, age),
        field!(TestContact, email),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_creation() {
        let c1 = TestContact::new("Gerhard", 64);
        assert_eq!(c1.name, "Gerhard");
        assert_eq!(c1.age, 64);
        assert_eq!(c1.email, None);

        let c2 = TestContact::with_email("Gerda", 61, "gerda@example.com");
        assert_eq!(c2.email.as_deref(), Some("gerda@example.com"));
    }

    #[test]
    fn test_field_list() {
        let names: Vec<_> = TestContact::entity_descriptor().field_names().collect();
        assert_eq!(names, vec!["name", "age", "email"]);
    }
}
