//! String predicates
//!
//! The domain validators as unit predicates over `str` and `String`, so they
//! compose with the combinators and with [`validate`](super::validate).

use super::combinators::Predicate;
use crate::card::{validate_creditcard_number, validate_luhn_mod10};
use crate::iban::validate_iban;
use crate::mail::validate_mail;

macro_rules! str_predicate {
    ($(#[$meta:meta])* $name:ident => $f:path) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, Debug)]
        pub struct $name;

        impl Predicate<str> for $name {
            #[inline]
            fn check(&self, value: &str) -> bool {
                $f(value)
            }
        }

        impl Predicate<String> for $name {
            #[inline]
            fn check(&self, value: &String) -> bool {
                $f(value)
            }
        }
    };
}

str_predicate!(
    /// Predicate that checks an email address, see [`validate_mail`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use plumbline::predicate::*;
    ///
    /// assert!(Mail.check("\"much.more unusual\"@example.com"));
    /// assert!(!Mail.check("a@127.0.0.1"));
    /// ```
    Mail => validate_mail
);

str_predicate!(
    /// Predicate that checks an IBAN's mod-97 checksum, see [`validate_iban`].
    IbanChecksum => validate_iban
);

str_predicate!(
    /// Predicate that checks a Luhn mod-10 checksum, see [`validate_luhn_mod10`].
    Luhn => validate_luhn_mod10
);

str_predicate!(
    /// Predicate that checks a card number's length and checksum, see
    /// [`validate_creditcard_number`].
    CreditCard => validate_creditcard_number
);
