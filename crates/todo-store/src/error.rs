//! Store Errors

use thiserror::Error;

/// Validation failures surfaced to the input box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Text was empty or whitespace only
    #[error("todo text must not be empty")]
    EmptyText,
}
