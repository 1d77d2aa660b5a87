//! Serde support for refined types
//!
//! Deserializing a [`Refined`] value runs its check, so invalid input is
//! rejected at the boundary:
//!
//! ```rust,ignore
//! #[derive(Deserialize)]
//! struct Payout {
//!     contact: EmailAddress,
//!     account: Iban,
//! }
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::{Predicate, Refined};

impl<T, P> Serialize for Refined<T, P>
where
    T: Serialize,
    P: Predicate<T>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de, T, P> Deserialize<'de> for Refined<T, P>
where
    T: Deserialize<'de>,
    P: Predicate<T>,
    P::Error: fmt::Display,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = T::deserialize(deserializer)?;
        Refined::new(value).map_err(serde::de::Error::custom)
    }
}
