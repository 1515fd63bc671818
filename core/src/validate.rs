//! Input-layer checks for the todo form.
//!
//! Both fields are required and capped at `MAX_FIELD_LEN` characters, counted
//! as Unicode scalar values. Whitespace-only text passes.

use std::fmt;

use thiserror::Error;

use crate::types::TodoInput;

pub const MAX_FIELD_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Title => f.write_str("title"),
            Field::Description => f.write_str("description"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Empty(Field),

    #[error("{field} is {len} characters, at most {max} allowed", max = MAX_FIELD_LEN)]
    TooLong { field: Field, len: usize },
}

/// Reject text longer than the cap. Used while typing, where empty is fine.
pub fn check_length(field: Field, text: &str) -> Result<(), ValidationError> {
    let len = text.chars().count();
    if len > MAX_FIELD_LEN {
        return Err(ValidationError::TooLong { field, len });
    }
    Ok(())
}

/// Full check applied before a submission leaves the client.
pub fn check_field(field: Field, text: &str) -> Result<(), ValidationError> {
    if text.is_empty() {
        return Err(ValidationError::Empty(field));
    }
    check_length(field, text)
}

impl TodoInput {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_field(Field::Title, &self.title)?;
        check_field(Field::Description, &self.description)
    }
}
