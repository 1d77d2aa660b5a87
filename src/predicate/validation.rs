//! Validation integration for predicates
//!
//! This module provides integration between predicates and the `Validation` type.

use super::combinators::Predicate;
use crate::Validation;

/// Validate a value using a predicate.
///
/// Returns `Validation::success(value)` if the predicate is satisfied,
/// otherwise returns `Validation::failure(error)`.
///
/// # Example
///
/// ```rust
/// use plumbline::{Validation, predicate::*};
///
/// let result = validate(String::from("NL20INGB0001234567"), IbanChecksum, "bad iban");
/// assert_eq!(result, Validation::success(String::from("NL20INGB0001234567")));
///
/// let result = validate(String::from("NL19INGB0001234567"), IbanChecksum, "bad iban");
/// assert_eq!(result, Validation::failure("bad iban"));
/// ```
pub fn validate<T, E, P>(value: T, predicate: P, error: E) -> Validation<T, E>
where
    P: Predicate<T>,
{
    if predicate.check(&value) {
        Validation::success(value)
    } else {
        Validation::failure(error)
    }
}

/// Validate a value with an error factory.
///
/// Like `validate`, but takes a closure to generate the error,
/// allowing access to the value when constructing the error message.
///
/// # Example
///
/// ```rust
/// use plumbline::{Validation, predicate::*};
///
/// let result = validate_with(
///     String::from("11"),
///     Luhn,
///     |s| format!("'{}' fails the Luhn check", s)
/// );
/// assert_eq!(result, Validation::failure("'11' fails the Luhn check".to_string()));
/// ```
pub fn validate_with<T, E, P, F>(value: T, predicate: P, error_fn: F) -> Validation<T, E>
where
    P: Predicate<T>,
    F: FnOnce(&T) -> E,
{
    if predicate.check(&value) {
        Validation::success(value)
    } else {
        Validation::failure(error_fn(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{Check, CreditCard, Kind, Mail};
    use crate::Value;

    #[test]
    fn test_validate_success() {
        let result = validate(String::from("a@example.com"), Mail, "invalid mail");
        assert_eq!(result, Validation::success(String::from("a@example.com")));
    }

    #[test]
    fn test_validate_failure() {
        let result = validate(String::from("a@127.0.0.1"), Mail, "invalid mail");
        assert_eq!(result, Validation::failure("invalid mail"));
    }

    #[test]
    fn test_validate_with_failure() {
        let result = validate_with(String::from("1234"), CreditCard, |s| {
            format!("'{}' is not a card number", s)
        });
        assert_eq!(
            result,
            Validation::failure("'1234' is not a card number".to_string())
        );
    }

    #[test]
    fn test_validate_values_with_checks() {
        let result = validate(Value::from("12"), Check::Is(Kind::Numeric), "not numeric");
        assert_eq!(result, Validation::success(Value::from("12")));

        let result = validate(Value::from("x"), Check::Is(Kind::Numeric), "not numeric");
        assert_eq!(result, Validation::failure("not numeric"));
    }

    #[test]
    fn test_validate_accumulates_with_and() {
        let mail = validate(String::from("nope"), Mail, vec!["mail"]);
        let card = validate(String::from("11"), CreditCard, vec!["card"]);
        assert_eq!(mail.and(card), Validation::failure(vec!["mail", "card"]));
    }
}
