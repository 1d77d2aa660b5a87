//! Refined types: strings proven valid at the boundary
//!
//! A [`Refined<T, P>`] can only be built from a value that satisfies the
//! refinement `P`. Parse an email address, IBAN or card number once where it
//! enters the system, then pass the refined value around without checking it
//! again.
//!
//! # Quick Start
//!
//! ```rust
//! use plumbline::refined::{CardNumber, EmailAddress, Iban};
//!
//! let email = EmailAddress::new("ops@example.com".to_string()).unwrap();
//! let iban = Iban::new("NL20INGB0001234567".to_string()).unwrap();
//! assert!(CardNumber::new("1234".to_string()).is_err());
//!
//! println!("{} pays from {}", email, iban);
//! ```
//!
//! # Custom Refinements
//!
//! ```rust
//! use plumbline::refined::{Predicate, Refined};
//!
//! pub struct Digits;
//!
//! impl Predicate<String> for Digits {
//!     type Error = &'static str;
//!
//!     fn check(value: &String) -> Result<(), Self::Error> {
//!         if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
//!             Ok(())
//!         } else {
//!             Err("expected digits only")
//!         }
//!     }
//! }
//!
//! type PostalCode = Refined<String, Digits>;
//! assert!(PostalCode::new("1012".to_string()).is_ok());
//! ```
//!
//! # Accumulating errors
//!
//! ```rust
//! use plumbline::refined::{EmailAddress, Iban};
//!
//! let result = EmailAddress::validate_vec("not-an-address".to_string())
//!     .and(Iban::validate_vec("NL19INGB0001234567".to_string()));
//! assert_eq!(result.into_result().unwrap_err().len(), 2);
//! ```

mod aliases;
#[cfg(feature = "serde")]
mod serde_impl;
mod validation;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

pub use aliases::{CardNumber, EmailAddress, Iban, ValidCardNumber, ValidIban, ValidMail};

/// A refinement: a check that is part of a type.
///
/// Unlike [`crate::predicate::Predicate`], which tests values at run time,
/// a refinement is stateless and named by type, so [`Refined`] can carry the
/// guarantee.
pub trait Predicate<T>: Send + Sync + 'static {
    /// Error returned when the check fails
    type Error: Send + Sync;

    /// Check the value.
    fn check(value: &T) -> Result<(), Self::Error>;

    /// What the refinement requires, for messages.
    fn description() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A `T` known to satisfy `P`.
///
/// Same layout as `T`; the predicate is only a marker.
pub struct Refined<T, P: Predicate<T>> {
    value: T,
    _predicate: PhantomData<P>,
}

impl<T, P: Predicate<T>> Refined<T, P> {
    /// Check `value` and wrap it.
    ///
    /// ```rust
    /// use plumbline::refined::EmailAddress;
    ///
    /// assert!(EmailAddress::new("a@b.co".to_string()).is_ok());
    /// assert_eq!(
    ///     EmailAddress::new("a@@b".to_string()).unwrap_err(),
    ///     "invalid email address"
    /// );
    /// ```
    pub fn new(value: T) -> Result<Self, P::Error> {
        P::check(&value)?;
        Ok(Self {
            value,
            _predicate: PhantomData,
        })
    }

    /// The inner value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Unwrap into the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Wrap a value without checking it. The caller vouches that `P` holds.
    #[inline]
    pub fn new_unchecked(value: T) -> Self {
        Self {
            value,
            _predicate: PhantomData,
        }
    }

    /// Transform the inner value and check the result again.
    ///
    /// ```rust
    /// use plumbline::refined::Iban;
    ///
    /// let iban = Iban::new("nl20ingb0001234567".to_string()).unwrap();
    /// let upper = iban.try_map(|s| s.to_uppercase()).unwrap();
    /// assert_eq!(upper.get(), "NL20INGB0001234567");
    /// ```
    pub fn try_map<F>(self, f: F) -> Result<Self, P::Error>
    where
        F: FnOnce(T) -> T,
    {
        Self::new(f(self.value))
    }
}

impl<T: fmt::Debug, P: Predicate<T>> fmt::Debug for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refined")
            .field("value", &self.value)
            .field("predicate", &P::description())
            .finish()
    }
}

impl<T: Clone, P: Predicate<T>> Clone for Refined<T, P> {
    fn clone(&self) -> Self {
        Self::new_unchecked(self.value.clone())
    }
}

impl<T: PartialEq, P: Predicate<T>> PartialEq for Refined<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, P: Predicate<T>> Eq for Refined<T, P> {}

impl<T: PartialOrd, P: Predicate<T>> PartialOrd for Refined<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, P: Predicate<T>> Ord for Refined<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, P: Predicate<T>> Hash for Refined<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, P: Predicate<T>> AsRef<T> for Refined<T, P> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T, P: Predicate<T>> std::ops::Deref for Refined<T, P> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display, P: Predicate<T>> fmt::Display for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
