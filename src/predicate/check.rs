//! The closed set of checks a field can be held to

use std::fmt;
use std::sync::Arc;

use super::combinators::Predicate;
use crate::value::Value;

/// A built-in type or emptiness test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `Int`, `Float` or a numeric string
    Numeric,
    /// Any string, including `""`
    String,
    /// `Null`
    Null,
    /// `Bool`
    Bool,
    /// `Array`
    Array,
    /// `Null`, `false`, `0`, `0.0`, `""`, `"0"` or an empty array
    Empty,
}

impl Kind {
    /// All kinds, in token order.
    pub const ALL: [Kind; 6] = [
        Kind::Numeric,
        Kind::String,
        Kind::Null,
        Kind::Bool,
        Kind::Array,
        Kind::Empty,
    ];

    /// The predicate name this kind is addressed by.
    pub fn token(self) -> &'static str {
        match self {
            Kind::Numeric => "number",
            Kind::String => "string",
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Array => "array",
            Kind::Empty => "empty",
        }
    }

    /// Look a kind up by its token.
    pub fn from_token(token: &str) -> Option<Kind> {
        Kind::ALL.into_iter().find(|kind| kind.token() == token)
    }

    /// Test a value against this kind.
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Kind::Numeric => value.is_numeric(),
            Kind::String => value.is_string(),
            Kind::Null => value.is_null(),
            Kind::Bool => value.is_bool(),
            Kind::Array => value.is_array(),
            Kind::Empty => value.is_empty(),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A caller-supplied predicate registered under a name.
#[derive(Clone)]
pub struct NamedCheck {
    name: String,
    negated: bool,
    predicate: Arc<dyn Predicate<Value>>,
}

impl NamedCheck {
    /// Wrap a predicate under a name.
    pub fn new(name: impl Into<String>, predicate: impl Predicate<Value> + 'static) -> Self {
        Self::from_arc(name, Arc::new(predicate))
    }

    pub(crate) fn from_arc(name: impl Into<String>, predicate: Arc<dyn Predicate<Value>>) -> Self {
        Self {
            name: name.into(),
            negated: false,
            predicate,
        }
    }

    /// The same predicate with its result inverted.
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// The registered name, without any `!`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the result is inverted.
    pub fn is_negated(&self) -> bool {
        self.negated
    }
}

impl fmt::Debug for NamedCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedCheck")
            .field("name", &self.name)
            .field("negated", &self.negated)
            .finish_non_exhaustive()
    }
}

/// A check performed on a single [`Value`].
///
/// Built directly, or resolved from a predicate name by
/// [`Validator::resolve`](crate::Validator::resolve).
///
/// # Example
///
/// ```rust
/// use plumbline::predicate::{Check, Kind, Predicate};
/// use plumbline::Value;
///
/// assert!(Check::Is(Kind::Empty).check(&Value::from("")));
/// assert!(!Check::Is(Kind::Empty).check(&Value::from("hello")));
/// assert!(Check::True.check(&Value::Bool(true)));
/// assert!(!Check::True.check(&Value::Int(1)));
/// assert!(Check::equals(10).check(&Value::from("10")));
/// assert!(!Check::identical(10).check(&Value::from("10")));
/// ```
#[derive(Debug, Clone)]
pub enum Check {
    /// The value is of the given kind
    Is(Kind),
    /// The value is not of the given kind
    IsNot(Kind),
    /// The value is exactly `Bool(true)`
    True,
    /// The value is exactly `Bool(false)`
    False,
    /// A registered or caller-supplied predicate
    Named(NamedCheck),
    /// Loose equality with coercion, see [`Value::loosely_equals`]
    Equals(Value),
    /// Strict equality: same variant, same contents
    Identical(Value),
}

impl Check {
    /// Parse a built-in token: `number`, `string`, `null`, `bool`, `array`,
    /// `empty` (each optionally prefixed with `!`), `true` or `false`.
    ///
    /// ```rust
    /// use plumbline::predicate::{Check, Kind};
    ///
    /// assert!(matches!(Check::builtin("!number"), Some(Check::IsNot(Kind::Numeric))));
    /// assert!(matches!(Check::builtin("true"), Some(Check::True)));
    /// assert!(Check::builtin("is_callable").is_none());
    /// ```
    pub fn builtin(token: &str) -> Option<Check> {
        match token {
            "true" => Some(Check::True),
            "false" => Some(Check::False),
            _ => match token.strip_prefix('!') {
                Some(rest) => Kind::from_token(rest).map(Check::IsNot),
                None => Kind::from_token(token).map(Check::Is),
            },
        }
    }

    /// Wrap a predicate under a name.
    pub fn named(name: impl Into<String>, predicate: impl Predicate<Value> + 'static) -> Self {
        Check::Named(NamedCheck::new(name, predicate))
    }

    /// Loose equality with `value`.
    pub fn equals(value: impl Into<Value>) -> Self {
        Check::Equals(value.into())
    }

    /// Strict equality with `value`.
    pub fn identical(value: impl Into<Value>) -> Self {
        Check::Identical(value.into())
    }

    /// Returns true for `Is(Empty)` and `IsNot(Empty)`, the checks that may
    /// look at empty strings.
    pub fn is_emptiness_check(&self) -> bool {
        matches!(self, Check::Is(Kind::Empty) | Check::IsNot(Kind::Empty))
    }
}

impl Predicate<Value> for Check {
    fn check(&self, value: &Value) -> bool {
        match self {
            Check::Is(kind) => kind.matches(value),
            Check::IsNot(kind) => !kind.matches(value),
            Check::True => matches!(value, Value::Bool(true)),
            Check::False => matches!(value, Value::Bool(false)),
            Check::Named(named) => named.predicate.check(value) != named.negated,
            Check::Equals(expected) => value.loosely_equals(expected),
            Check::Identical(expected) => value == expected,
        }
    }
}

impl From<Kind> for Check {
    fn from(kind: Kind) -> Self {
        Check::Is(kind)
    }
}

impl From<NamedCheck> for Check {
    fn from(named: NamedCheck) -> Self {
        Check::Named(named)
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::Is(kind) => write!(f, "{}", kind),
            Check::IsNot(kind) => write!(f, "!{}", kind),
            Check::True => f.write_str("true"),
            Check::False => f.write_str("false"),
            Check::Named(named) if named.negated => write!(f, "!{}", named.name),
            Check::Named(named) => f.write_str(&named.name),
            Check::Equals(value) => write!(f, "== {}", value),
            Check::Identical(value) => write!(f, "=== {}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldSet;

    #[test]
    fn test_builtin_tokens_round_trip_through_display() {
        for token in [
            "number", "!number", "string", "!string", "null", "!null", "bool", "!bool", "array",
            "!array", "empty", "!empty", "true", "false",
        ] {
            let check = Check::builtin(token).expect("built-in token");
            assert_eq!(check.to_string(), token);
        }
    }

    #[test]
    fn test_unknown_tokens_are_not_builtin() {
        assert!(Check::builtin("").is_none());
        assert!(Check::builtin("!").is_none());
        assert!(Check::builtin("!true").is_none());
        assert!(Check::builtin("NUMBER").is_none());
        assert!(Check::builtin("someTest").is_none());
    }

    #[test]
    fn test_kind_checks() {
        assert!(Check::Is(Kind::Numeric).check(&Value::from("1.5")));
        assert!(Check::IsNot(Kind::Numeric).check(&Value::from("test")));
        assert!(Check::Is(Kind::String).check(&Value::from("")));
        assert!(Check::Is(Kind::Null).check(&Value::Null));
        assert!(Check::IsNot(Kind::Null).check(&Value::Int(0)));
        assert!(Check::Is(Kind::Bool).check(&Value::Bool(false)));
        assert!(Check::Is(Kind::Array).check(&Value::Array(FieldSet::new())));
        assert!(Check::IsNot(Kind::Array).check(&Value::from("[]")));
    }

    #[test]
    fn test_true_and_false_are_strict() {
        assert!(Check::True.check(&Value::Bool(true)));
        assert!(!Check::True.check(&Value::from("true")));
        assert!(!Check::True.check(&Value::Int(1)));
        assert!(Check::False.check(&Value::Bool(false)));
        assert!(!Check::False.check(&Value::Null));
        assert!(!Check::False.check(&Value::Int(0)));
    }

    #[test]
    fn test_empty() {
        assert!(Check::Is(Kind::Empty).check(&Value::from("")));
        assert!(!Check::Is(Kind::Empty).check(&Value::from("hello")));
        assert!(Check::IsNot(Kind::Empty).check(&Value::from("hello")));
        assert!(Check::is_emptiness_check(&Check::IsNot(Kind::Empty)));
        assert!(!Check::is_emptiness_check(&Check::Is(Kind::String)));
    }

    #[test]
    fn test_named_and_negated() {
        let even = Check::named("is_even", |v: &Value| matches!(v, Value::Int(i) if i % 2 == 0));
        assert!(even.check(&Value::Int(4)));
        assert!(!even.check(&Value::Int(3)));
        assert_eq!(even.to_string(), "is_even");

        let odd = match even {
            Check::Named(named) => Check::Named(named.negate()),
            _ => unreachable!(),
        };
        assert!(odd.check(&Value::Int(3)));
        assert_eq!(odd.to_string(), "!is_even");
    }

    #[test]
    fn test_equals_and_identical() {
        assert!(Check::equals("someTest").check(&Value::from("someTest")));
        assert!(Check::equals("1").check(&Value::Int(1)));
        assert!(!Check::identical("1").check(&Value::Int(1)));
        assert!(Check::identical(1).check(&Value::Int(1)));
        assert_eq!(Check::equals("x").to_string(), "== \"x\"");
    }
}
