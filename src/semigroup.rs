//! Associative combination of errors and records
//!
//! [`Validation`](crate::Validation) uses [`Semigroup`] to merge the errors of
//! independent checks, so every failure is reported rather than the first.
//!
//! ```
//! use plumbline::{FieldSet, Semigroup, Value};
//!
//! let errors = vec!["name is missing"].combine(vec!["age is not a number"]);
//! assert_eq!(errors.len(), 2);
//!
//! // Field sets merge key by key; the right-hand value wins.
//! let merged = FieldSet::new()
//!     .with("page", 1)
//!     .with("sort", "name")
//!     .combine(FieldSet::new().with("page", 2));
//! assert_eq!(merged.get("page"), Some(&Value::Int(2)));
//! assert_eq!(merged.get("sort"), Some(&Value::from("name")));
//! ```

use crate::fields::{Expectations, FieldSet};

/// A type with an associative binary operation.
///
/// `a.combine(b).combine(c)` must equal `a.combine(b.combine(c))`.
pub trait Semigroup: Sized {
    /// Combine two values, consuming both.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

/// Keys keep their first position; values from `other` replace existing ones.
impl Semigroup for FieldSet {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

/// Concatenation, preserving order.
impl Semigroup for Expectations {
    fn combine(mut self, other: Self) -> Self {
        for (key, check) in other.iter() {
            self.push(key.clone(), check.clone());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{Check, Kind};
    use crate::value::{Key, Value};

    #[test]
    fn test_vec_and_string() {
        assert_eq!(vec![1, 2].combine(vec![3]), vec![1, 2, 3]);
        assert_eq!(Vec::<i32>::new().combine(vec![1]), vec![1]);
        assert_eq!("field ".to_string().combine("missing".to_string()), "field missing");
    }

    #[test]
    fn test_field_set_merge_keeps_first_position() {
        let left = FieldSet::new().with("a", 1).with("b", 2);
        let right = FieldSet::new().with("c", 3).with("a", 10);
        let merged = left.combine(right);

        let keys: Vec<_> = merged.keys().cloned().collect();
        assert_eq!(keys, vec![Key::from("a"), Key::from("b"), Key::from("c")]);
        assert_eq!(merged.get("a"), Some(&Value::Int(10)));
    }

    #[test]
    fn test_field_set_associativity() {
        let a = FieldSet::new().with(0, "x").with(1, "y");
        let b = FieldSet::new().with(1, "z").with(2, Value::Null);
        let c = FieldSet::new().with(0, 5).with(3, true);

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));
        assert_eq!(left, right);
    }

    #[test]
    fn test_expectations_concatenate() {
        let merged = Expectations::new()
            .expect("a", Kind::String)
            .combine(Expectations::new().expect("a", Check::IsNot(Kind::Empty)));

        let checks: Vec<_> = merged.iter().map(|(_, check)| check.to_string()).collect();
        assert_eq!(checks, vec!["string", "!empty"]);
    }
}
