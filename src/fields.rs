//! Field sets and expectation sets
//!
//! A [`FieldSet`] is one record under validation: an insertion-ordered map from
//! [`Key`] to [`Value`]. An [`Expectations`] set pairs keys with the [`Check`]
//! each field must satisfy.
//!
//! # Example
//!
//! ```
//! use plumbline::{Check, Expectations, FieldSet, Kind, Value};
//!
//! let fields = FieldSet::new()
//!     .with("name", "Alice")
//!     .with("age", 30);
//!
//! let expected = Expectations::new()
//!     .expect("name", Check::Is(Kind::String))
//!     .expect("age", Check::Is(Kind::Numeric));
//!
//! assert_eq!(fields.get("age"), Some(&Value::Int(30)));
//! assert_eq!(expected.len(), 2);
//! ```

use indexmap::IndexMap;

use crate::predicate::Check;
use crate::value::{Key, Value};

/// An insertion-ordered map from [`Key`] to [`Value`].
///
/// Inserting an existing key replaces its value without moving it. Lookups are
/// hashed. Two field sets are equal when they hold the same entries in the
/// same order.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    entries: IndexMap<Key, Value>,
}

impl FieldSet {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a field set keyed `0..n` from a sequence of values.
    ///
    /// ```
    /// use plumbline::{FieldSet, Value};
    ///
    /// let fields = FieldSet::list([3, 5, 6, 7]);
    /// assert_eq!(fields.get(3), Some(&Value::Int(7)));
    /// ```
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            entries: values
                .into_iter()
                .enumerate()
                .map(|(index, value)| (Key::from(index), value.into()))
                .collect(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<Key>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, returning the previous value stored under the key.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Look up the value stored under a key.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.entries.get(&key.into())
    }

    /// Returns true if the key is present, whatever its value (including `Null`).
    pub fn contains_key(&self, key: impl Into<Key>) -> bool {
        self.entries.contains_key(&key.into())
    }

    /// Remove a key, returning its value. Later entries keep their order.
    pub fn remove(&mut self, key: impl Into<Key>) -> Option<Value> {
        self.entries.shift_remove(&key.into())
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the set has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Value)> {
        self.entries.iter()
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.keys()
    }
}

impl PartialEq for FieldSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for FieldSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = FieldSet::new();
        fields.extend(iter);
        fields
    }
}

impl<K: Into<Key>, V: Into<Value>> Extend<(K, V)> for FieldSet {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries.extend(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
    }
}

impl IntoIterator for FieldSet {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// The checks a field set is expected to satisfy, keyed like the fields.
///
/// Order is preserved; validators report and short-circuit in this order.
#[derive(Debug, Clone, Default)]
pub struct Expectations {
    entries: Vec<(Key, Check)>,
}

impl Expectations {
    /// Create an empty expectation set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: expect `check` to hold for the field under `key`.
    pub fn expect(mut self, key: impl Into<Key>, check: impl Into<Check>) -> Self {
        self.push(key, check);
        self
    }

    /// Append an expectation.
    pub fn push(&mut self, key: impl Into<Key>, check: impl Into<Check>) {
        self.entries.push((key.into(), check.into()));
    }

    /// Number of expectations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no expectations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate expectations in order.
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &Check)> {
        self.entries.iter().map(|(k, c)| (k, c))
    }
}

impl<K: Into<Key>, C: Into<Check>> FromIterator<(K, C)> for Expectations {
    fn from_iter<I: IntoIterator<Item = (K, C)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, check)| (key.into(), check.into()))
                .collect(),
        }
    }
}
