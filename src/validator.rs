//! Name resolution and record validation
//!
//! A [`Validator`] owns a [`Registry`] of named predicates and a
//! [`ValidatorConfig`]. It turns predicate names into [`Check`]s and holds
//! field sets to expectation sets, either stopping at the first failure
//! ([`are_mixed`](Validator::are_mixed)) or collecting every one
//! ([`validate_fields`](Validator::validate_fields)).
//!
//! # Example
//!
//! ```
//! use plumbline::{FieldError, FieldSet, Key, Validator};
//!
//! let validator = Validator::new();
//! let fields = FieldSet::new()
//!     .with("email", "ops@example.com")
//!     .with("iban", "NL19INGB0001234567");
//!
//! let expectations = validator.expectations([
//!     ("email", "validate_mail"),
//!     ("iban", "validate_iban"),
//!     ("card", "validate_creditcard_number"),
//! ]);
//!
//! assert!(!validator.are_mixed(&fields, &expectations));
//!
//! let errors = validator
//!     .validate_fields(&fields, &expectations)
//!     .into_result()
//!     .unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors[1], FieldError::Missing(Key::from("card")));
//! ```

use crate::config::ValidatorConfig;
use crate::error::FieldError;
use crate::fields::{Expectations, FieldSet};
use crate::predicate::{Check, Predicate, Registry};
use crate::structural::{check_field, mixed};
use crate::validation::Validation;
use crate::value::{Key, Value};

/// Resolves predicate names and validates field sets.
#[derive(Debug, Clone)]
pub struct Validator {
    config: ValidatorConfig,
    registry: Registry,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// A validator with the standard registry and default configuration.
    pub fn new() -> Self {
        Self {
            config: ValidatorConfig::default(),
            registry: Registry::standard(),
        }
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: ValidatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the registry.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Register an extra named predicate.
    ///
    /// ```
    /// use plumbline::{Validator, Value};
    ///
    /// let validator = Validator::new()
    ///     .with_predicate("is_even", |v: &Value| matches!(v, Value::Int(i) if i % 2 == 0));
    ///
    /// assert!(validator.is(&Value::Int(4), "is_even"));
    /// assert!(validator.is(&Value::Int(3), "!is_even"));
    /// ```
    pub fn with_predicate(
        mut self,
        name: impl Into<String>,
        predicate: impl Predicate<Value> + 'static,
    ) -> Self {
        self.registry.register(name, predicate);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The named predicates this validator resolves against.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Turn a predicate name into a check.
    ///
    /// Built-in tokens win, then registered names (a leading `!` negates a
    /// registered predicate). Any other name becomes a loose equality check
    /// against the name itself.
    ///
    /// ```
    /// use plumbline::{Check, Kind, Validator};
    ///
    /// let validator = Validator::new();
    /// assert!(matches!(validator.resolve("!number"), Check::IsNot(Kind::Numeric)));
    /// assert_eq!(validator.resolve("!ctype_digit").to_string(), "!ctype_digit");
    /// assert_eq!(validator.resolve("someTest").to_string(), "== \"someTest\"");
    /// ```
    pub fn resolve(&self, name: &str) -> Check {
        if let Some(check) = Check::builtin(name) {
            return check;
        }
        if let Some(named) = self.registry.lookup(name) {
            return Check::Named(named);
        }
        if let Some(named) = name
            .strip_prefix('!')
            .and_then(|rest| self.registry.lookup(rest))
        {
            return Check::Named(named.negate());
        }
        Check::Equals(Value::from(name))
    }

    /// Test one value against a predicate name.
    ///
    /// ```
    /// use plumbline::{Validator, Value};
    ///
    /// let validator = Validator::new();
    /// assert!(validator.is(&Value::from("x"), "string"));
    /// assert!(validator.is(&Value::from("10"), "number"));
    /// assert!(validator.is(&Value::Int(10), "10"));
    /// assert!(!validator.is(&Value::from("abc"), "ctype_digit"));
    /// ```
    pub fn is(&self, value: &Value, name: &str) -> bool {
        self.resolve(name).check(value)
    }

    /// Resolve `(key, name)` pairs into an expectation set.
    pub fn expectations<K, S, I>(&self, pairs: I) -> Expectations
    where
        K: Into<Key>,
        S: AsRef<str>,
        I: IntoIterator<Item = (K, S)>,
    {
        pairs
            .into_iter()
            .map(|(key, name)| (key, self.resolve(name.as_ref())))
            .collect()
    }

    /// Returns true if every expectation holds, stopping at the first failure.
    ///
    /// A missing key fails. Empty strings are treated according to
    /// [`ValidatorConfig::empty_strings`].
    pub fn are_mixed(&self, fields: &FieldSet, expectations: &Expectations) -> bool {
        mixed(fields, expectations, self.config.empty_strings())
    }

    /// Hold every field to its expectations and report each failure, in
    /// expectation order.
    ///
    /// Succeeds exactly when [`are_mixed`](Self::are_mixed) returns true.
    pub fn validate_fields(
        &self,
        fields: &FieldSet,
        expectations: &Expectations,
    ) -> Validation<(), Vec<FieldError>> {
        let policy = self.config.empty_strings();
        let results = expectations.iter().map(|(key, check)| {
            Validation::from_result(check_field(fields, key, check, policy).map_err(|err| vec![err]))
        });

        let validation = Validation::all_vec(results).map(|_| ());
        #[cfg(feature = "tracing")]
        if let Validation::Failure(errors) = &validation {
            tracing::debug!(failures = errors.len(), "field set failed validation");
        }
        validation
    }
}
