//! Field constraints for todo payloads.
//!
//! Lengths count Unicode scalar values, not bytes. A creation description only
//! has to be non-empty; a replacement description on update must be at least
//! three characters long.

use std::ops::RangeInclusive;

use crate::error::{FieldError, ValidationError};
use crate::types::{CreateTodo, UpdateTodo};

pub const NAME_LEN: RangeInclusive<usize> = 3..=512;
pub const CREATE_DESCRIPTION_LEN: RangeInclusive<usize> = 1..=1024;
pub const UPDATE_DESCRIPTION_LEN: RangeInclusive<usize> = 3..=1024;

fn check_len(
    errors: &mut Vec<FieldError>,
    field: &'static str,
    value: &str,
    bounds: &RangeInclusive<usize>,
) {
    let len = value.chars().count();
    if !bounds.contains(&len) {
        errors.push(FieldError {
            field,
            reason: format!(
                "length must be between {} and {} characters, got {len}",
                bounds.start(),
                bounds.end()
            ),
        });
    }
}

pub fn validate_create(input: &CreateTodo) -> Result<(), ValidationError> {
    let mut errors = Vec::new();
    check_len(&mut errors, "todo_name", &input.todo_name, &NAME_LEN);
    check_len(
        &mut errors,
        "todo_description",
        &input.todo_description,
        &CREATE_DESCRIPTION_LEN,
    );
    ValidationError::from_errors(errors).map_or(Ok(()), Err)
}

pub fn validate_update(input: &UpdateTodo) -> Result<(), ValidationError> {
    let mut errors = Vec::new();
    if let Some(name) = &input.todo_name {
        check_len(&mut errors, "todo_name", name, &NAME_LEN);
    }
    if let Some(description) = &input.todo_description {
        check_len(
            &mut errors,
            "todo_description",
            description,
            &UPDATE_DESCRIPTION_LEN,
        );
    }
    ValidationError::from_errors(errors).map_or(Ok(()), Err)
}
