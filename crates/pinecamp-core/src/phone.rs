//! Phone number normalization and display formatting.

use crate::validate::is_valid_mobile_phone;

/// Maximum digits a mobile number can carry.
const MAX_DIGITS: usize = 11;

/// Keeps only ASCII digits.
#[must_use]
pub fn phone_digits(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Reformats a phone field while the visitor is typing.
///
/// Non-digits are dropped, a hyphen goes after the first three digits once a
/// fourth is typed, and a second hyphen after the seventh. Input beyond
/// eleven digits is cut off.
#[must_use]
pub fn format_phone_input(raw: &str) -> String {
    let digits = phone_digits(raw);
    match digits.len() {
        0..=3 => digits,
        4..=7 => format!("{}-{}", &digits[..3], &digits[3..]),
        len => format!(
            "{}-{}-{}",
            &digits[..3],
            &digits[3..7],
            &digits[7..len.min(MAX_DIGITS)]
        ),
    }
}

/// The form a phone number is stored in: `01X-XXXX-XXXX`, or
/// `01X-XXX-XXXX` for ten-digit numbers.
///
/// Values that are not valid mobile numbers come back unchanged.
#[must_use]
pub fn canonical_phone(raw: &str) -> String {
    if !is_valid_mobile_phone(raw) {
        return raw.to_string();
    }
    let digits = phone_digits(raw);
    let tail = digits.len() - 4;
    format!("{}-{}-{}", &digits[..3], &digits[3..tail], &digits[tail..])
}
