//! Validator configuration
//!
//! Configuration is pure data: build it once, hand it to
//! [`Validator::with_config`](crate::Validator::with_config), and clone or
//! inspect it freely. There is no global state.
//!
//! # Example
//!
//! ```rust
//! use plumbline::{EmptyStringPolicy, ValidatorConfig};
//!
//! let config = ValidatorConfig::default()
//!     .with_empty_strings(EmptyStringPolicy::Dispatch);
//!
//! assert_eq!(config.empty_strings(), EmptyStringPolicy::Dispatch);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How structural checks treat fields holding the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EmptyStringPolicy {
    /// An empty string fails every check except `empty` and `!empty`.
    #[default]
    Reject,
    /// An empty string is checked like any other value.
    Dispatch,
}

/// Settings for a [`Validator`](crate::Validator).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ValidatorConfig {
    empty_strings: EmptyStringPolicy,
}

impl ValidatorConfig {
    /// Set the empty string policy.
    pub fn with_empty_strings(mut self, policy: EmptyStringPolicy) -> Self {
        self.empty_strings = policy;
        self
    }

    /// The empty string policy.
    pub fn empty_strings(&self) -> EmptyStringPolicy {
        self.empty_strings
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let config: ValidatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ValidatorConfig::default());
    }

    #[test]
    fn test_deserialize_policy() {
        let config: ValidatorConfig =
            serde_json::from_str(r#"{"empty_strings":"dispatch"}"#).unwrap();
        assert_eq!(config.empty_strings(), EmptyStringPolicy::Dispatch);
    }

    #[test]
    fn test_unknown_policy_fails() {
        let result: Result<ValidatorConfig, _> =
            serde_json::from_str(r#"{"empty_strings":"ignore"}"#);
        assert!(result.is_err());
    }
}
