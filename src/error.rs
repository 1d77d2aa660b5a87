//! Field validation errors

use std::error::Error as StdError;
use std::fmt;

use crate::value::Key;

/// Why a field failed its expectation.
///
/// # Examples
///
/// ```
/// use plumbline::{FieldError, Key};
///
/// let err = FieldError::Missing(Key::from("email"));
/// assert_eq!(err.to_string(), "field 'email' is missing");
/// assert_eq!(err.key(), &Key::from("email"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The key is not present in the field set
    Missing(Key),
    /// The field holds an empty string and the check does not allow it
    EmptyString(Key),
    /// The field's value did not satisfy the check
    Failed {
        /// The field's key
        key: Key,
        /// The check, rendered as its predicate name
        check: String,
        /// Type of the offending value
        found: &'static str,
    },
}

impl FieldError {
    /// The key of the failing field.
    pub fn key(&self) -> &Key {
        match self {
            FieldError::Missing(key) | FieldError::EmptyString(key) => key,
            FieldError::Failed { key, .. } => key,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Missing(key) => write!(f, "field '{}' is missing", key),
            FieldError::EmptyString(key) => write!(f, "field '{}' is an empty string", key),
            FieldError::Failed { key, check, found } => {
                write!(f, "field '{}' ({}) does not satisfy '{}'", key, found, check)
            }
        }
    }
}

impl StdError for FieldError {}
