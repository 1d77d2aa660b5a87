//! IBAN checksum validation
//!
//! An IBAN is a two letter country code, two check digits and the basic bank
//! account number (BBAN). It is valid when the BBAN followed by the country
//! code and the check digits, with letters replaced by `10..=35`, leaves a
//! remainder of 1 when divided by 97.

/// Digits reduced per step.
const CHUNK: usize = 9;

/// Validate an IBAN's mod-97 checksum.
///
/// The input must be compact: no spaces or separators. Letters may be in
/// either case.
///
/// # Example
///
/// ```
/// use plumbline::validate_iban;
///
/// assert!(validate_iban("NL20INGB0001234567"));
/// assert!(!validate_iban("NL19INGB0001234567"));
/// ```
pub fn validate_iban(iban: &str) -> bool {
    if iban.len() < 5 || !iban.is_ascii() {
        return false;
    }

    let (country, rest) = iban.split_at(2);
    let (checksum, bban) = rest.split_at(2);
    if !checksum.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let digits = match (letters_to_digits(bban), letters_to_digits(country)) {
        (Some(bban), Some(country)) => format!("{}{}{}", bban, country, checksum),
        _ => return false,
    };

    let valid = validate_mod97(&digits);
    #[cfg(feature = "tracing")]
    if !valid {
        tracing::debug!(iban, "iban checksum mismatch");
    }
    valid
}

/// Returns true if the decimal number in `number` is congruent to 1 mod 97.
///
/// The number is reduced nine digits at a time, so it may be arbitrarily long.
/// Empty or non-digit input is rejected.
///
/// ```
/// use plumbline::iban::validate_mod97;
///
/// assert!(validate_mod97("98"));
/// assert!(validate_mod97("3214282912345698765432161182"));
/// assert!(!validate_mod97("97"));
/// assert!(!validate_mod97("9 8"));
/// ```
pub fn validate_mod97(number: &str) -> bool {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let mut remaining = number.to_string();
    while remaining.len() > CHUNK {
        let (head, tail) = remaining.split_at(CHUNK);
        let reduced = parse_digits(head) % 97;
        remaining = format!("{}{}", reduced, tail);
    }
    parse_digits(&remaining) % 97 == 1
}

fn parse_digits(digits: &str) -> u64 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u64::from(b - b'0'))
}

/// Replace each letter by its two digit value (`A`/`a` = 10 .. `Z`/`z` = 35).
fn letters_to_digits(part: &str) -> Option<String> {
    let mut digits = String::with_capacity(part.len() * 2);
    for c in part.chars() {
        match c {
            '0'..='9' => digits.push(c),
            'a'..='z' | 'A'..='Z' => {
                let value = c.to_ascii_lowercase() as u32 - 'a' as u32 + 10;
                digits.push_str(&value.to_string());
            }
            _ => return None,
        }
    }
    Some(digits)
}
