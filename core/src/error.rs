//! Error types for the todo store.
//!
//! # Design
//! Requests fail in two ways: the referenced id does not exist, or a
//! caller-supplied field breaks its constraint. `ValidationError` collects
//! every offending field so a caller sees all problems in one response. The
//! remaining variants guard the id invariants of the collection itself.

use std::fmt;

use crate::types::TodoId;

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No todo with this id is in the collection.
    #[error("todo {0} not found")]
    NotFound(TodoId),

    /// One or more fields violate their declared constraint.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A starting collection holds the same id twice.
    #[error("duplicate todo id {0}")]
    DuplicateId(TodoId),

    /// A starting collection holds an id below 1.
    #[error("todo id {0} is not positive")]
    NonPositiveId(TodoId),

    /// Every id up to `TodoId::MAX` has been handed out.
    #[error("todo ids exhausted")]
    IdsExhausted,
}

/// A single field constraint violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// All field violations found while validating one payload. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Returns `None` when `errors` is empty.
    pub(crate) fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.errors.iter().map(|e| e.field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed")?;
        for (i, error) in self.errors.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            write!(f, "{sep}{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_field() {
        let err = ValidationError::from_errors(vec![
            FieldError {
                field: "todo_name",
                reason: "too short".to_string(),
            },
            FieldError {
                field: "todo_description",
                reason: "empty".to_string(),
            },
        ])
        .unwrap();
        assert_eq!(
            err.to_string(),
            "validation failed: todo_name: too short; todo_description: empty"
        );
        assert_eq!(err.fields().collect::<Vec<_>>(), ["todo_name", "todo_description"]);
    }

    #[test]
    fn empty_error_list_is_not_an_error() {
        assert!(ValidationError::from_errors(Vec::new()).is_none());
    }

    #[test]
    fn store_error_display() {
        assert_eq!(StoreError::NotFound(42).to_string(), "todo 42 not found");
        let err: StoreError = ValidationError::from_errors(vec![FieldError {
            field: "todo_name",
            reason: "too short".to_string(),
        }])
        .unwrap()
        .into();
        assert_eq!(err.to_string(), "validation failed: todo_name: too short");
        assert_eq!(StoreError::DuplicateId(3).to_string(), "duplicate todo id 3");
        assert_eq!(StoreError::IdsExhausted.to_string(), "todo ids exhausted");
    }
}
