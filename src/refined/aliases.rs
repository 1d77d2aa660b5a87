//! Refined strings for the domain validators
//!
//! ```rust
//! use plumbline::refined::{CardNumber, EmailAddress, Iban};
//!
//! let email = EmailAddress::new("user@[IPv6:2001:db8::1]".to_string()).unwrap();
//! let iban = Iban::new("GB82WEST12345698765432".to_string()).unwrap();
//! let card = CardNumber::new("378282246310005".to_string()).unwrap();
//! # let _ = (email, iban, card);
//! ```

use super::{Predicate, Refined};
use crate::card::validate_creditcard_number;
use crate::iban::validate_iban;
use crate::mail::validate_mail;

/// The string is an email address accepted by [`validate_mail`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidMail;

impl Predicate<String> for ValidMail {
    type Error = &'static str;

    fn check(value: &String) -> Result<(), Self::Error> {
        if validate_mail(value) {
            Ok(())
        } else {
            Err("invalid email address")
        }
    }

    fn description() -> &'static str {
        "email address"
    }
}

/// The string is a compact IBAN with a valid checksum.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidIban;

impl Predicate<String> for ValidIban {
    type Error = &'static str;

    fn check(value: &String) -> Result<(), Self::Error> {
        if validate_iban(value) {
            Ok(())
        } else {
            Err("invalid IBAN checksum")
        }
    }

    fn description() -> &'static str {
        "IBAN"
    }
}

/// The string is 15 to 19 digits passing the Luhn check.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidCardNumber;

impl Predicate<String> for ValidCardNumber {
    type Error = &'static str;

    fn check(value: &String) -> Result<(), Self::Error> {
        if validate_creditcard_number(value) {
            Ok(())
        } else {
            Err("invalid card number")
        }
    }

    fn description() -> &'static str {
        "card number"
    }
}

/// A string that is a valid email address
pub type EmailAddress = Refined<String, ValidMail>;

/// A string that is a valid IBAN
pub type Iban = Refined<String, ValidIban>;

/// A string that is a valid card number
pub type CardNumber = Refined<String, ValidCardNumber>;
