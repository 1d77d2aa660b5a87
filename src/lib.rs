//! # Plumbline
//!
//! Validation for loosely typed records: request parameters, form posts and
//! decoded JSON, where every field is a [`Value`] of no fixed type.
//!
//! - **Structural checks** ask whether fields are present ([`are_set`],
//!   [`either_key`]), numeric ([`are_numeric`]), or satisfy a per-field
//!   [`Check`] ([`are_mixed`]).
//! - **Predicate dispatch** turns names such as `"number"`, `"!empty"` or
//!   `"validate_iban"` into checks through a [`Validator`] and its registry.
//! - **Domain validators** check email addresses ([`validate_mail`]), IBANs
//!   ([`validate_iban`]) and card numbers ([`validate_luhn_mod10`],
//!   [`validate_creditcard_number`]).
//!
//! ## Quick Example
//!
//! ```rust
//! use plumbline::{are_set, FieldSet, Validation, Validator};
//!
//! let fields = FieldSet::new()
//!     .with("email", "ops@example.com")
//!     .with("amount", "12.50")
//!     .with("iban", "NL20INGB0001234567");
//!
//! assert!(are_set(&fields, ["email", "amount", "iban"]));
//!
//! let validator = Validator::new();
//! let expectations = validator.expectations([
//!     ("email", "validate_mail"),
//!     ("amount", "number"),
//!     ("iban", "validate_iban"),
//! ]);
//!
//! assert!(validator.are_mixed(&fields, &expectations));
//! assert_eq!(validator.validate_fields(&fields, &expectations), Validation::Success(()));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod card;
pub mod config;
pub mod error;
pub mod fields;
pub mod iban;
pub mod mail;
pub mod predicate;
pub mod refined;
pub mod semigroup;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod structural;
pub mod validation;
pub mod validator;
pub mod value;

// Re-exports
pub use card::{validate_creditcard_number, validate_luhn_mod10};
pub use config::{EmptyStringPolicy, ValidatorConfig};
pub use error::FieldError;
pub use fields::{Expectations, FieldSet};
pub use iban::validate_iban;
pub use mail::validate_mail;
pub use predicate::{Check, Kind};
pub use semigroup::Semigroup;
pub use structural::{
    are_mixed, are_numeric, are_set, either, either_key, object_or_array, set_if_empty,
    set_if_empty_default,
};
pub use validation::Validation;
pub use validator::Validator;
pub use value::{Key, Value};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fields::{Expectations, FieldSet};
    pub use crate::predicate::{Check, Kind, Predicate, PredicateExt};
    pub use crate::semigroup::Semigroup;
    pub use crate::structural::*;
    pub use crate::validation::Validation;
    pub use crate::validator::Validator;
    pub use crate::value::{Key, Value};
}
