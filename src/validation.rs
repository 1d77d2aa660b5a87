//! Error-accumulating validation results
//!
//! [`Validation`] is like `Result`, except that combining two failures keeps
//! both errors (through [`Semigroup`]) instead of stopping at the first one.
//! [`Validator::validate_fields`](crate::Validator::validate_fields) uses it to
//! report every field that does not meet its expectation.
//!
//! # Examples
//!
//! ```
//! use plumbline::{validate_iban, validate_mail, Validation};
//!
//! fn mail(address: &str) -> Validation<&str, Vec<String>> {
//!     if validate_mail(address) {
//!         Validation::success(address)
//!     } else {
//!         Validation::failure(vec![format!("'{}' is not an email address", address)])
//!     }
//! }
//!
//! fn iban(account: &str) -> Validation<&str, Vec<String>> {
//!     if validate_iban(account) {
//!         Validation::success(account)
//!     } else {
//!         Validation::failure(vec![format!("'{}' is not an IBAN", account)])
//!     }
//! }
//!
//! let ok = mail("ops@example.com").and(iban("NL20INGB0001234567"));
//! assert!(ok.is_success());
//!
//! let both_bad = mail("ops").and(iban("NL19INGB0001234567"));
//! assert_eq!(both_bad.into_result().unwrap_err().len(), 2);
//! ```

use crate::Semigroup;

/// Success with a value, or failure with accumulated errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation.
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation.
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a `Result`.
    ///
    /// ```
    /// use plumbline::Validation;
    ///
    /// let v = Validation::from_result("42".parse::<i64>());
    /// assert_eq!(v, Validation::Success(42));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert into a `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Returns true on success.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Returns true on failure.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error.
    ///
    /// ```
    /// use plumbline::Validation;
    ///
    /// let v = Validation::<(), _>::failure(vec!["a", "b"]);
    /// assert_eq!(v.map_err(|errors| errors.len()), Validation::Failure(2));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Pair two validations, accumulating errors if either fails.
    ///
    /// ```
    /// use plumbline::Validation;
    ///
    /// let v1 = Validation::<i32, _>::failure(vec!["name is missing"]);
    /// let v2 = Validation::<i32, _>::failure(vec!["age is not a number"]);
    /// assert_eq!(
    ///     v1.and(v2),
    ///     Validation::Failure(vec!["name is missing", "age is not a number"])
    /// );
    /// ```
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) | (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Chain a validation that depends on the success value. Short-circuits on
    /// failure.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Collect a sequence of validations, accumulating every error in order.
    ///
    /// ```
    /// use plumbline::Validation;
    ///
    /// let all = Validation::all_vec(vec![
    ///     Validation::<i32, Vec<&str>>::success(1),
    ///     Validation::success(2),
    /// ]);
    /// assert_eq!(all, Validation::Success(vec![1, 2]));
    ///
    /// let all = Validation::all_vec(vec![
    ///     Validation::<i32, _>::failure(vec!["first"]),
    ///     Validation::success(2),
    ///     Validation::failure(vec!["third"]),
    /// ]);
    /// assert_eq!(all, Validation::Failure(vec!["first", "third"]));
    /// ```
    pub fn all_vec<I>(validations: I) -> Validation<Vec<T>, E>
    where
        I: IntoIterator<Item = Validation<T, E>>,
    {
        let mut successes = Vec::new();
        let mut errors: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    errors = Some(match errors {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match errors {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success(successes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use crate::value::Key;
    use proptest::prelude::*;

    #[test]
    fn test_result_conversions() {
        let ok: Validation<i32, String> = Validation::from_result(Ok(1));
        assert_eq!(ok.clone().into_result(), Ok(1));
        assert!(ok.is_success());

        let err: Validation<i32, String> = Validation::from_result(Err("bad".into()));
        assert!(err.is_failure());
        assert_eq!(err.into_result(), Err("bad".to_string()));
    }

    #[test]
    fn test_and_keeps_single_failure() {
        let v = Validation::<i32, Vec<&str>>::success(1).and(Validation::<i32, _>::failure(vec!["x"]));
        assert_eq!(v, Validation::Failure(vec!["x"]));
    }

    #[test]
    fn test_and_then_short_circuits() {
        let v = Validation::<i32, Vec<&str>>::failure(vec!["first"])
            .and_then(|_| Validation::<i32, _>::failure(vec!["second"]));
        assert_eq!(v, Validation::Failure(vec!["first"]));
    }

    #[test]
    fn test_all_vec_of_field_errors() {
        let result = Validation::all_vec(vec![
            Validation::failure(vec![FieldError::Missing(Key::from("name"))]),
            Validation::success(()),
            Validation::failure(vec![FieldError::EmptyString(Key::from(2))]),
        ]);

        let errors = result.into_result().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1].key(), &Key::Index(2));
    }

    #[test]
    fn test_all_vec_empty_is_success() {
        let result = Validation::<i32, Vec<String>>::all_vec(Vec::new());
        assert_eq!(result, Validation::Success(vec![]));
    }

    proptest! {
        #[test]
        fn prop_all_vec_reports_every_failure(flags in prop::collection::vec(any::<bool>(), 0..20)) {
            let validations: Vec<Validation<usize, Vec<usize>>> = flags
                .iter()
                .enumerate()
                .map(|(i, ok)| if *ok { Validation::success(i) } else { Validation::failure(vec![i]) })
                .collect();

            let expected_failures: Vec<usize> = flags
                .iter()
                .enumerate()
                .filter(|(_, ok)| !**ok)
                .map(|(i, _)| i)
                .collect();

            match Validation::all_vec(validations) {
                Validation::Success(values) => {
                    prop_assert!(expected_failures.is_empty());
                    prop_assert_eq!(values.len(), flags.len());
                }
                Validation::Failure(errors) => prop_assert_eq!(errors, expected_failures),
            }
        }
    }
}
