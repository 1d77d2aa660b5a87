//! Loosely typed values and field keys
//!
//! Records arriving from request parameters, form posts or decoded JSON do not
//! carry a static type. [`Value`] models such a value with a small closed set of
//! variants, and [`Key`] models the index or name a value is stored under.
//!
//! # Examples
//!
//! ```
//! use plumbline::{Key, Value};
//!
//! // Numeric strings count as numbers
//! assert!(Value::from("42").is_numeric());
//! assert!(Value::from(" 1.5e3").is_numeric());
//! assert!(!Value::from("42abc").is_numeric());
//!
//! // Canonical integer strings become index keys
//! assert_eq!(Key::from("3"), Key::Index(3));
//! assert_eq!(Key::from("03"), Key::Name("03".to_string()));
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::fields::FieldSet;

/// Optional surrounding whitespace, sign, digits with an optional fraction or a
/// bare fraction, and an optional exponent.
static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$")
        .expect("valid regex")
});

/// Returns true if the string reads as a decimal or scientific number.
///
/// # Examples
///
/// ```
/// use plumbline::value::is_numeric_str;
///
/// assert!(is_numeric_str("98"));
/// assert!(is_numeric_str("-.5"));
/// assert!(is_numeric_str("1e10 "));
/// assert!(!is_numeric_str(""));
/// assert!(!is_numeric_str("0x1A"));
/// assert!(!is_numeric_str("abcd"));
/// ```
pub fn is_numeric_str(s: &str) -> bool {
    NUMERIC_RE.is_match(s)
}

/// The key a value is stored under in a [`FieldSet`].
///
/// Converting a string that is a canonical decimal integer (no leading zeros,
/// no plus sign) produces [`Key::Index`], so `"3"` and `3` address the same
/// field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer position or integer-like name
    Index(i64),
    /// Any other name
    Name(String),
}

impl Key {
    fn parse(name: &str) -> Self {
        let digits = name.strip_prefix('-').unwrap_or(name);
        let canonical = !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && (digits == "0" || !digits.starts_with('0'))
            && name != "-0";

        if canonical {
            if let Ok(index) = name.parse::<i64>() {
                return Key::Index(index);
            }
        }
        Key::Name(name.to_string())
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::parse(name)
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        match Key::parse(&name) {
            Key::Index(index) => Key::Index(index),
            Key::Name(_) => Key::Name(name),
        }
    }
}

impl From<&String> for Key {
    fn from(name: &String) -> Self {
        Key::parse(name)
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

macro_rules! impl_key_from_int {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Key {
                fn from(index: $t) -> Self {
                    Key::Index(i64::from(index))
                }
            }
        )+
    };
}

impl_key_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_key_from_wide_int {
    ($($t:ty),+) => {
        $(
            /// Values beyond `i64::MAX` become [`Key::Name`].
            impl From<$t> for Key {
                fn from(index: $t) -> Self {
                    i64::try_from(index)
                        .map(Key::Index)
                        .unwrap_or_else(|_| Key::Name(index.to_string()))
                }
            }
        )+
    };
}

impl_key_from_wide_int!(u64, usize);

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// A loosely typed value.
///
/// Arrays are ordered maps ([`FieldSet`]), so a list is simply an array whose
/// keys are `0..n`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value
    #[default]
    Null,
    /// Boolean
    Bool(bool),
    /// Integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// String
    Str(String),
    /// Ordered key/value array
    Array(FieldSet),
}

impl Value {
    /// Build a list-style array keyed `0..n`.
    ///
    /// ```
    /// use plumbline::Value;
    ///
    /// let list = Value::list([1, 2, 3]);
    /// assert_eq!(list.as_array().and_then(|a| a.get(2)), Some(&Value::Int(3)));
    /// ```
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Value::Array(FieldSet::list(values))
    }

    /// The value's type name, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
        }
    }

    /// Borrow the string contents of a `Str` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the contents of an `Array` value.
    pub fn as_array(&self) -> Option<&FieldSet> {
        match self {
            Value::Array(fields) => Some(fields),
            _ => None,
        }
    }

    /// Returns true for `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true for `Bool`.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true for `Str`, including the empty string.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Returns true for `Array`.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true for `Int`, `Float` and numeric strings.
    ///
    /// ```
    /// use plumbline::Value;
    ///
    /// assert!(Value::Int(3).is_numeric());
    /// assert!(Value::from("3.25").is_numeric());
    /// assert!(!Value::from("three").is_numeric());
    /// assert!(!Value::Bool(true).is_numeric());
    /// ```
    pub fn is_numeric(&self) -> bool {
        match self {
            Value::Int(_) | Value::Float(_) => true,
            Value::Str(s) => is_numeric_str(s),
            _ => false,
        }
    }

    /// Returns true for values that count as empty: `Null`, `false`, `0`,
    /// `0.0`, `""`, `"0"` and arrays without entries.
    ///
    /// ```
    /// use plumbline::Value;
    ///
    /// assert!(Value::from("").is_empty());
    /// assert!(Value::from("0").is_empty());
    /// assert!(Value::list(Vec::<i64>::new()).is_empty());
    /// assert!(!Value::from("hello").is_empty());
    /// assert!(!Value::from("0.0").is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int(i) => *i == 0,
            Value::Float(f) => *f == 0.0,
            Value::Str(s) => s.is_empty() || s == "0",
            Value::Array(fields) => fields.is_empty(),
        }
    }

    /// The boolean a value converts to: everything that is not empty.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !self.is_empty()
    }

    /// The numeric reading of `Int`, `Float` and numeric strings.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            Value::Str(s) if is_numeric_str(s) => s.trim_matches(is_blank).parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Compare two values with coercion.
    ///
    /// - `Null` equals only the empty string among strings, and any empty
    ///   non-string value
    /// - a `Bool` equals any value with the same truthiness
    /// - numbers and numeric strings compare by numeric value
    /// - a number compared to a non-numeric string compares its string form
    /// - arrays match when they hold the same keys with loosely equal values
    ///
    /// ```
    /// use plumbline::Value;
    ///
    /// assert!(Value::from("10").loosely_equals(&Value::Int(10)));
    /// assert!(Value::from("1e1").loosely_equals(&Value::from("10")));
    /// assert!(Value::Null.loosely_equals(&Value::from("")));
    /// assert!(Value::Bool(true).loosely_equals(&Value::from("yes")));
    /// assert!(!Value::Int(0).loosely_equals(&Value::from("a")));
    /// ```
    pub fn loosely_equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Null, Value::Str(s)) | (Value::Str(s), Value::Null) => s.is_empty(),
            (Value::Null, v) | (v, Value::Null) => v.is_empty(),
            (Value::Bool(b), v) | (v, Value::Bool(b)) => *b == v.is_truthy(),
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                self.as_number() == other.as_number()
            }
            (Value::Int(_) | Value::Float(_), Value::Str(s))
            | (Value::Str(s), Value::Int(_) | Value::Float(_)) => {
                let number = if self.is_string() { other } else { self };
                if is_numeric_str(s) {
                    self.as_number() == other.as_number()
                } else {
                    number_to_string(number).as_deref() == Some(s.as_str())
                }
            }
            (Value::Str(a), Value::Str(b)) => {
                if is_numeric_str(a) && is_numeric_str(b) {
                    self.as_number() == other.as_number()
                } else {
                    a == b
                }
            }
            (Value::Array(a), Value::Array(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, value)| b.get(key).is_some_and(|v| value.loosely_equals(v)))
            }
            (Value::Array(_), _) | (_, Value::Array(_)) => false,
        }
    }
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

fn number_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Int(i) => Some(i.to_string()),
        Value::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => {
            Some(format!("{}", *f as i64))
        }
        Value::Float(f) => Some(f.to_string()),
        _ => None,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(_) | Value::Float(_) => {
                f.write_str(&number_to_string(self).unwrap_or_default())
            }
            Value::Str(s) => write!(f, "{:?}", s),
            Value::Array(fields) => write!(f, "array({})", fields.len()),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_value_from_int {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Value {
                fn from(i: $t) -> Self {
                    Value::Int(i as i64)
                }
            }
        )+
    };
}

impl_value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(f: f32) -> Self {
        Value::Float(f as f64)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<FieldSet> for Value {
    fn from(fields: FieldSet) -> Self {
        Value::Array(fields)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_strings() {
        for s in ["0", "98", "-3", "+3", "1.5", "1.", ".5", "1e3", "1E-3", " 42", "42\n"] {
            assert!(is_numeric_str(s), "{:?} should be numeric", s);
        }
        for s in ["", " ", ".", "-", "e3", "1e", "0x1A", "1_000", "abcd", "1.2.3", "١٢"] {
            assert!(!is_numeric_str(s), "{:?} should not be numeric", s);
        }
    }

    #[test]
    fn test_key_from_string_normalizes_integers() {
        assert_eq!(Key::from("0"), Key::Index(0));
        assert_eq!(Key::from("-12"), Key::Index(-12));
        assert_eq!(Key::from("12".to_string()), Key::Index(12));
        assert_eq!(Key::from("012"), Key::Name("012".into()));
        assert_eq!(Key::from("+1"), Key::Name("+1".into()));
        assert_eq!(Key::from("-0"), Key::Name("-0".into()));
        assert_eq!(Key::from("name"), Key::Name("name".into()));
        assert_eq!(
            Key::from("99999999999999999999"),
            Key::Name("99999999999999999999".into())
        );
    }

    #[test]
    fn test_key_from_wide_unsigned_does_not_wrap() {
        assert_eq!(Key::from(7usize), Key::Index(7));
        assert_eq!(Key::from(i64::MAX as u64), Key::Index(i64::MAX));
        assert_eq!(Key::from(u64::MAX), Key::Name(u64::MAX.to_string()));
        assert_eq!(Key::from(usize::MAX), Key::from(usize::MAX.to_string()));
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::from(4).to_string(), "4");
        assert_eq!(Key::from("email").to_string(), "email");
    }

    #[test]
    fn test_is_empty() {
        assert!(Value::Null.is_empty());
        assert!(Value::Bool(false).is_empty());
        assert!(Value::Int(0).is_empty());
        assert!(Value::Float(0.0).is_empty());
        assert!(Value::from("").is_empty());
        assert!(Value::from("0").is_empty());
        assert!(Value::Array(FieldSet::new()).is_empty());

        assert!(!Value::Bool(true).is_empty());
        assert!(!Value::Int(-1).is_empty());
        assert!(!Value::from(" ").is_empty());
        assert!(!Value::from("00").is_empty());
        assert!(!Value::list([0]).is_empty());
    }

    #[test]
    fn test_is_numeric() {
        assert!(Value::Int(3).is_numeric());
        assert!(Value::Float(-0.5).is_numeric());
        assert!(Value::from("12").is_numeric());
        assert!(!Value::Null.is_numeric());
        assert!(!Value::Bool(true).is_numeric());
        assert!(!Value::from("a").is_numeric());
        assert!(!Value::list([1]).is_numeric());
    }

    #[test]
    fn test_as_number() {
        assert_eq!(Value::Int(7).as_number(), Some(7.0));
        assert_eq!(Value::from(" 2.5 ").as_number(), Some(2.5));
        assert_eq!(Value::from(".5").as_number(), Some(0.5));
        assert_eq!(Value::from("1.").as_number(), Some(1.0));
        assert_eq!(Value::from("x").as_number(), None);
    }

    #[test]
    fn test_loose_equality_numbers_and_strings() {
        assert!(Value::Int(10).loosely_equals(&Value::from("10")));
        assert!(Value::from("10").loosely_equals(&Value::from("10.0")));
        assert!(Value::Float(1.0).loosely_equals(&Value::Int(1)));
        assert!(Value::Int(1).loosely_equals(&Value::from("1")));
        assert!(!Value::Int(0).loosely_equals(&Value::from("")));
        assert!(!Value::Int(0).loosely_equals(&Value::from("abc")));
        assert!(Value::from("abc").loosely_equals(&Value::from("abc")));
        assert!(!Value::from("abc").loosely_equals(&Value::from("ABC")));
    }

    #[test]
    fn test_loose_equality_null_and_bool() {
        assert!(Value::Null.loosely_equals(&Value::Null));
        assert!(Value::Null.loosely_equals(&Value::Int(0)));
        assert!(Value::from("").loosely_equals(&Value::Null));
        assert!(!Value::Null.loosely_equals(&Value::from("a")));
        assert!(Value::Bool(false).loosely_equals(&Value::from("0")));
        assert!(Value::Bool(true).loosely_equals(&Value::Int(5)));
        assert!(!Value::Bool(true).loosely_equals(&Value::Null));
    }

    #[test]
    fn test_null_compares_to_strings_as_empty_string() {
        assert!(!Value::Null.loosely_equals(&Value::from("0")));
        assert!(!Value::from("0").loosely_equals(&Value::Null));
        assert!(!Value::Null.loosely_equals(&Value::from(" ")));
        assert!(Value::Null.loosely_equals(&Value::from("")));
        assert!(Value::Null.loosely_equals(&Value::Float(0.0)));
        assert!(Value::Null.loosely_equals(&Value::Bool(false)));
    }

    #[test]
    fn test_loose_equality_arrays() {
        let a = Value::list([1, 2]);
        let b = Value::list(["1", "2"]);
        let c = Value::list([1, 3]);
        assert!(a.loosely_equals(&b));
        assert!(!a.loosely_equals(&c));
        assert!(!a.loosely_equals(&Value::Int(1)));
        assert!(!Value::from("a").loosely_equals(&a));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::Float(2.0).to_string(), "2");
        assert_eq!(Value::Float(2.5).to_string(), "2.5");
        assert_eq!(Value::from("x").to_string(), "\"x\"");
        assert_eq!(Value::list([1, 2]).to_string(), "array(2)");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::from("a"));
    }
}
