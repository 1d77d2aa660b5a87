//! Named predicates
//!
//! A [`Registry`] maps names to value predicates so that expectations written
//! as strings (`"is_numeric"`, `"!ctype_digit"`, `"validate_iban"`) resolve to
//! an explicit [`Check::Named`](super::Check::Named) instead of a reflective
//! lookup.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::check::NamedCheck;
use super::combinators::Predicate;
use crate::card::{validate_creditcard_number, validate_luhn_mod10};
use crate::iban::validate_iban;
use crate::mail::validate_mail;
use crate::value::Value;

/// A set of predicates addressable by name.
#[derive(Clone, Default)]
pub struct Registry {
    entries: HashMap<String, Arc<dyn Predicate<Value>>>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the standard type tests and the domain validators.
    ///
    /// ```rust
    /// use plumbline::predicate::{Predicate, Registry};
    /// use plumbline::Value;
    ///
    /// let registry = Registry::standard();
    /// let digits = registry.lookup("ctype_digit").unwrap();
    /// assert!(plumbline::Check::Named(digits).check(&Value::from("0123")));
    /// ```
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("is_numeric", |v: &Value| v.is_numeric());
        registry.register("is_string", |v: &Value| v.is_string());
        registry.register("is_null", |v: &Value| v.is_null());
        registry.register("is_bool", |v: &Value| v.is_bool());
        registry.register("is_array", |v: &Value| v.is_array());
        registry.register("is_int", |v: &Value| matches!(v, Value::Int(_)));
        registry.register("is_float", |v: &Value| matches!(v, Value::Float(_)));
        registry.register("is_scalar", |v: &Value| {
            matches!(v, Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Str(_))
        });
        registry.register("ctype_digit", |v: &Value| {
            str_all(v, |c| c.is_ascii_digit())
        });
        registry.register("ctype_alpha", |v: &Value| {
            str_all(v, |c| c.is_ascii_alphabetic())
        });
        registry.register("ctype_alnum", |v: &Value| {
            str_all(v, |c| c.is_ascii_alphanumeric())
        });
        registry.register("validate_mail", |v: &Value| {
            v.as_str().is_some_and(validate_mail)
        });
        registry.register("validate_iban", |v: &Value| {
            v.as_str().is_some_and(validate_iban)
        });
        registry.register("validate_luhn_mod10", |v: &Value| {
            v.as_str().is_some_and(validate_luhn_mod10)
        });
        registry.register("validate_creditcard_number", |v: &Value| {
            v.as_str().is_some_and(validate_creditcard_number)
        });
        registry
    }

    /// Register a predicate, replacing any previous one with the same name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        predicate: impl Predicate<Value> + 'static,
    ) -> &mut Self {
        self.entries.insert(name.into(), Arc::new(predicate));
        self
    }

    /// Look up a predicate by its exact name.
    pub fn lookup(&self, name: &str) -> Option<NamedCheck> {
        self.entries
            .get(name)
            .map(|predicate| NamedCheck::from_arc(name, Arc::clone(predicate)))
    }

    /// Returns true if a predicate is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn str_all(value: &Value, f: impl Fn(char) -> bool) -> bool {
    value
        .as_str()
        .is_some_and(|s| !s.is_empty() && s.chars().all(f))
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("names", &self.names())
            .finish()
    }
}
