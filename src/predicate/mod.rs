//! Predicate dispatch for loosely typed values
//!
//! A [`Check`] is a closed set of tests over a [`Value`](crate::Value): built-in
//! type tests and their negations, strict `true`/`false`, emptiness, named
//! predicates from a [`Registry`], and explicit loose or strict equality.
//!
//! Every check is a [`Predicate`], so checks compose with `and`, `or` and
//! `not`, and the domain validators are available as `str` predicates
//! ([`Mail`], [`IbanChecksum`], [`Luhn`], [`CreditCard`]).
//!
//! # Example
//!
//! ```rust
//! use plumbline::predicate::*;
//! use plumbline::Value;
//!
//! let filled_number = Check::Is(Kind::Numeric).and(Check::IsNot(Kind::Empty));
//! assert!(filled_number.check(&Value::from("42")));
//! assert!(!filled_number.check(&Value::Int(0)));
//!
//! assert!(Mail.check("info@example.com"));
//! ```
//!
//! # Integration with Validation
//!
//! ```rust
//! use plumbline::{Validation, predicate::*};
//!
//! let result = validate(String::from("18"), Luhn, "checksum mismatch");
//! assert_eq!(result, Validation::success(String::from("18")));
//! ```

mod check;
mod combinators;
mod registry;
mod string;
mod validation;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{And, Not, Or};

pub use check::{Check, Kind, NamedCheck};
pub use registry::Registry;

// Re-export string predicates
pub use string::{CreditCard, IbanChecksum, Luhn, Mail};

// Re-export validation integration
pub use validation::{validate, validate_with};
