//! Error types for hash code computation

use thiserror::Error;

/// A named field selector does not resolve on the target type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field `{field}` is not a readable field of `{type_name}`")]
pub struct FieldResolutionError {
    /// Name of the entity type the lookup ran against.
    pub type_name: &'static str,
    /// The unresolved field name.
    pub field: String,
}

impl FieldResolutionError {
    /// Creates a new FieldResolutionError.
    pub fn new(type_name: &'static str, field: impl Into<String>) -> Self {
        FieldResolutionError {
            type_name,
            field: field.into(),
        }
    }
}

/// Result type alias for field resolution
pub type Result<T> = std::result::Result<T, FieldResolutionError>;
