//! Refined values as [`Validation`]s

use super::{Predicate, Refined};
use crate::Validation;

impl<T, P: Predicate<T>> Refined<T, P> {
    /// Check a value, returning a [`Validation`].
    pub fn validate(value: T) -> Validation<Self, P::Error> {
        Validation::from_result(Self::new(value))
    }

    /// Check a value, wrapping a failure in a `Vec` so it accumulates with
    /// other failures.
    ///
    /// ```rust
    /// use plumbline::refined::{CardNumber, EmailAddress};
    ///
    /// let signup = EmailAddress::validate_vec("ops@example.com".to_string())
    ///     .and(CardNumber::validate_vec("4111111111111111".to_string()));
    /// assert!(signup.is_success());
    /// ```
    pub fn validate_vec(value: T) -> Validation<Self, Vec<P::Error>> {
        Self::validate(value).map_err(|e| vec![e])
    }
}
