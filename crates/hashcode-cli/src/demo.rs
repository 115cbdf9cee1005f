//! Demonstration routines comparing two contacts under one strategy.

use std::fmt;

use hashcode::config::{ContactConfig, DemoConfig};
use hashcode::prelude::*;
use hashcode::FieldEntry;
use tracing::{info, trace};

use crate::contact::{ManualContact, ReflectiveContact, SelectorContact};
use crate::error::CliError;

/// The hashing strategy a demonstration uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Explicit combiner calls.
    Manual,
    /// Every derived field descriptor.
    Reflective,
    /// Field selectors resolved from configured names.
    Selector,
}

impl Strategy {
    /// All strategies in menu order.
    pub const ALL: [Strategy; 3] = [Strategy::Manual, Strategy::Reflective, Strategy::Selector];

    /// Label printed in the result line.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Manual => "ManualContact",
            Strategy::Reflective => "ReflectiveContact",
            Strategy::Selector => "SelectorContact",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hash codes of both contacts under one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DemoOutcome {
    pub strategy: Strategy,
    pub first_hash: i32,
    pub second_hash: i32,
}

impl DemoOutcome {
    /// Returns true if both hash codes match.
    pub fn is_equal(&self) -> bool {
        self.first_hash == self.second_hash
    }

    /// Returns the line to print, only when both hash codes match.
    pub fn result_line(&self) -> Option<String> {
        self.is_equal().then(|| {
            format!(
                "HashCode of {label} = {} and {label} = {} are equal.",
                self.first_hash,
                self.second_hash,
                label = self.strategy.label()
            )
        })
    }
}

/// Builds both configured contacts for `strategy` and hashes them.
///
/// # Errors
///
/// The selector strategy fails with [`CliError::FieldResolution`] when a
/// configured field name is not a field of [`SelectorContact`].
pub fn run_demo(strategy: Strategy, config: &DemoConfig) -> Result<DemoOutcome, CliError> {
    let first = &config.contacts.first;
    let second = &config.contacts.second;

    info!(
        event = "demo_start",
        strategy = strategy.label(),
        first = %describe(first),
        second = %describe(second),
    );

    let (first_hash, second_hash) = match strategy {
        Strategy::Manual => (
            ManualContact::new(&first.name, first.age).hash_code(),
            ManualContact::new(&second.name, second.age).hash_code(),
        ),
        Strategy::Reflective => {
            let first = ReflectiveContact::new(&first.name, first.age);
            let second = ReflectiveContact::new(&second.name, second.age);
            trace_fields(strategy, FieldAccessor::all(&first));
            trace_fields(strategy, FieldAccessor::all(&second));
            (first.hash_code(), second.hash_code())
        }
        Strategy::Selector => {
            let selection = FieldSelection::<SelectorContact>::by_names(&config.selector.fields)?;
            let first = SelectorContact::new(&first.name, first.age);
            let second = SelectorContact::new(&second.name, second.age);
            trace_fields(strategy, selection.entries(&first));
            trace_fields(strategy, selection.entries(&second));
            (selection.hash_code(&first), selection.hash_code(&second))
        }
    };

    let outcome = DemoOutcome {
        strategy,
        first_hash,
        second_hash,
    };

    info!(
        event = "demo_end",
        strategy = strategy.label(),
        first_hash,
        second_hash,
        equal = outcome.is_equal(),
    );

    Ok(outcome)
}

fn describe(contact: &ContactConfig) -> String {
    format!("{}/{}", contact.name, contact.age)
}

fn trace_fields(strategy: Strategy, entries: Vec<FieldEntry<'_>>) {
    for entry in entries {
        trace!(
            event = "field",
            strategy = strategy.label(),
            field = entry.name,
            hash = entry.hash(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(second: ContactConfig) -> DemoConfig {
        DemoConfig::new().with_contacts(ContactConfig::new("Gerhard", 64), second)
    }

    #[test]
    fn test_equal_contacts_every_strategy() {
        let config = DemoConfig::default();
        for strategy in Strategy::ALL {
            let outcome = run_demo(strategy, &config).unwrap();
            assert!(outcome.is_equal(), "{} should match", strategy);
        }
    }

    #[test]
    fn test_different_contacts_every_strategy() {
        let config = config_with(ContactConfig::new("Gerda", 64));
        for strategy in Strategy::ALL {
            let outcome = run_demo(strategy, &config).unwrap();
            assert!(!outcome.is_equal(), "{} should differ", strategy);
            assert_eq!(outcome.result_line(), None);
        }
    }

    #[test]
    fn test_result_line_format() {
        let outcome = DemoOutcome {
            strategy: Strategy::Manual,
            first_hash: 123,
            second_hash: 123,
        };
        assert_eq!(
            outcome.result_line().unwrap(),
            "HashCode of ManualContact = 123 and ManualContact = 123 are equal."
        );
    }

    #[test]
    fn test_selector_uses_configured_fields() {
        let config = config_with(ContactConfig::new("Gerda", 64)).with_selector_fields(["age"]);
        let outcome = run_demo(Strategy::Selector, &config).unwrap();
        assert!(outcome.is_equal());

        let expected = HashCombiner::new().fold(&64).finalize();
        assert_eq!(outcome.first_hash, expected);
    }

    #[test]
    fn test_selector_unknown_field_fails() {
        let config = DemoConfig::new().with_selector_fields(["name", "email"]);
        let err = run_demo(Strategy::Selector, &config).unwrap_err();
        match err {
            CliError::FieldResolution(e) => {
                assert_eq!(e.type_name, "SelectorContact");
                assert_eq!(e.field, "email");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_selector_field_does_not_affect_other_strategies() {
        let config = DemoConfig::new().with_selector_fields(["email"]);
        assert!(run_demo(Strategy::Manual, &config).is_ok());
        assert!(run_demo(Strategy::Reflective, &config).is_ok());
    }
}
