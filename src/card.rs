//! Luhn mod-10 and card number validation

/// Shortest card number accepted, in digits.
pub const MIN_CARD_LEN: usize = 15;

/// Longest card number accepted, in digits.
pub const MAX_CARD_LEN: usize = 19;

/// Check a digit string against the Luhn mod-10 algorithm.
///
/// Counting from the left, the digits at positions with the same parity as
/// the length are doubled (doubled values above 9 have 9 subtracted). The
/// number is valid when the sum of all digits is a multiple of 10. Anything
/// other than one or more ASCII digits is rejected.
///
/// # Example
///
/// ```
/// use plumbline::validate_luhn_mod10;
///
/// assert!(validate_luhn_mod10("18"));
/// assert!(!validate_luhn_mod10("11"));
/// assert!(!validate_luhn_mod10("1a"));
/// ```
pub fn validate_luhn_mod10(digits: &str) -> bool {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let parity = digits.len() % 2;
    let total: u32 = digits
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == parity {
                let doubled = digit * 2;
                if doubled >= 10 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                digit
            }
        })
        .sum();

    total % 10 == 0
}

/// Check a card number: 15 to 19 digits passing the Luhn check.
///
/// # Example
///
/// ```
/// use plumbline::validate_creditcard_number;
///
/// assert!(validate_creditcard_number("5209530664489287"));
/// assert!(!validate_creditcard_number("5209530664489288"));
/// assert!(!validate_creditcard_number("1234"));
/// ```
pub fn validate_creditcard_number(number: &str) -> bool {
    if !(MIN_CARD_LEN..=MAX_CARD_LEN).contains(&number.len()) {
        #[cfg(feature = "tracing")]
        tracing::debug!(len = number.len(), "card number length out of range");
        return false;
    }

    let valid = validate_luhn_mod10(number);
    #[cfg(feature = "tracing")]
    if !valid {
        tracing::debug!("card number fails the Luhn check");
    }
    valid
}
