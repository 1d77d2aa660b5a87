//! Structural validators
//!
//! Presence and type checks over a [`FieldSet`]. These functions only look at
//! the fields they are asked about; other fields are ignored.
//!
//! # Example
//!
//! ```
//! use plumbline::{are_numeric, are_set, either, FieldSet};
//!
//! let fields: FieldSet = [(0, "hello"), (3, "World"), (4, "test")].into_iter().collect();
//! assert!(are_set(&fields, [0, 3, 4]));
//! assert!(!are_set(&fields, [2]));
//!
//! assert!(are_numeric(&FieldSet::list([3, 5, 6, 7]), [0, 1, 2, 3]));
//! assert!(either("test", ["hello", "world", "test"]));
//! ```

use crate::config::EmptyStringPolicy;
use crate::error::FieldError;
use crate::fields::{Expectations, FieldSet};
use crate::predicate::{Check, Predicate};
use crate::value::{Key, Value};

/// Returns true if every key is present. A key mapped to `Null` counts as
/// present.
pub fn are_set<K, I>(fields: &FieldSet, keys: I) -> bool
where
    K: Into<Key>,
    I: IntoIterator<Item = K>,
{
    keys.into_iter().all(|key| fields.contains_key(key))
}

/// Returns true if every key is present and holds a numeric value.
pub fn are_numeric<K, I>(fields: &FieldSet, keys: I) -> bool
where
    K: Into<Key>,
    I: IntoIterator<Item = K>,
{
    keys.into_iter()
        .all(|key| fields.get(key).is_some_and(Value::is_numeric))
}

/// Returns true if at least one of the keys is present.
pub fn either_key<K, I>(fields: &FieldSet, keys: I) -> bool
where
    K: Into<Key>,
    I: IntoIterator<Item = K>,
{
    keys.into_iter().any(|key| fields.contains_key(key))
}

/// Returns true if `value` loosely equals at least one candidate.
///
/// See [`Value::loosely_equals`] for the comparison rules.
pub fn either<V, C, I>(value: V, candidates: I) -> bool
where
    V: Into<Value>,
    C: Into<Value>,
    I: IntoIterator<Item = C>,
{
    let value = value.into();
    candidates
        .into_iter()
        .any(|candidate| value.loosely_equals(&candidate.into()))
}

/// Returns true if every expectation holds, stopping at the first failure.
///
/// A missing key fails. A field holding `""` fails unless its check is `empty`
/// or `!empty`. Use [`Validator`](crate::Validator) to change the empty string
/// policy or to collect every failure.
///
/// ```
/// use plumbline::{are_mixed, Check, Expectations, FieldSet, Kind};
///
/// let fields = FieldSet::new().with(0, "hello").with(1, "");
///
/// let strings = Expectations::new().expect(0, Kind::String).expect(1, Kind::String);
/// assert!(!are_mixed(&fields, &strings));
///
/// let blank = Expectations::new().expect(0, Kind::String).expect(1, Kind::Empty);
/// assert!(are_mixed(&fields, &blank));
/// ```
pub fn are_mixed(fields: &FieldSet, expectations: &Expectations) -> bool {
    mixed(fields, expectations, EmptyStringPolicy::Reject)
}

pub(crate) fn mixed(
    fields: &FieldSet,
    expectations: &Expectations,
    policy: EmptyStringPolicy,
) -> bool {
    expectations.iter().all(|(key, check)| {
        let result = check_field(fields, key, check, policy);
        #[cfg(feature = "tracing")]
        if let Err(err) = &result {
            tracing::debug!(%key, %check, "{}", err);
        }
        result.is_ok()
    })
}

/// Hold one field to one check.
pub(crate) fn check_field(
    fields: &FieldSet,
    key: &Key,
    check: &Check,
    policy: EmptyStringPolicy,
) -> Result<(), FieldError> {
    let value = fields
        .get(key)
        .ok_or_else(|| FieldError::Missing(key.clone()))?;

    let empty_string = matches!(value, Value::Str(s) if s.is_empty());
    if empty_string && policy == EmptyStringPolicy::Reject && !check.is_emptiness_check() {
        return Err(FieldError::EmptyString(key.clone()));
    }

    if check.check(value) {
        Ok(())
    } else {
        Err(FieldError::Failed {
            key: key.clone(),
            check: check.to_string(),
            found: value.type_name(),
        })
    }
}

/// Insert `default` under `key` unless the key is already present.
///
/// A present key is left alone whatever it holds, `Null` and `""` included.
///
/// ```
/// use plumbline::{set_if_empty, FieldSet, Value};
///
/// let mut fields = FieldSet::new();
/// set_if_empty(&mut fields, "page", 1);
/// set_if_empty(&mut fields, "page", 2);
/// assert_eq!(fields.get("page"), Some(&Value::Int(1)));
/// ```
pub fn set_if_empty(fields: &mut FieldSet, key: impl Into<Key>, default: impl Into<Value>) {
    let key = key.into();
    if !fields.contains_key(&key) {
        fields.insert(key, default);
    }
}

/// [`set_if_empty`] with the empty string as the default.
pub fn set_if_empty_default(fields: &mut FieldSet, key: impl Into<Key>) {
    set_if_empty(fields, key, "");
}

/// Returns true for array values, whether list-like or keyed.
pub fn object_or_array(value: &Value) -> bool {
    value.is_array()
}
