//! Brazilian phone number canonicalization.

use leadmap_core::NOT_AVAILABLE;

const COUNTRY_CODE: &str = "55";

/// Fewer digits than this cannot be a phone number; the input is kept as is.
const MIN_DIGITS: usize = 8;

/// Normalizes a raw phone cell into `+55 DD NNNNN-NNNN` (mobile, 11 digits)
/// or `+55 DD NNNN-NNNN` (landline, 10 digits).
///
/// Empty input, or input carrying an `N/A` marker in any case, becomes
/// [`NOT_AVAILABLE`]. A leading `55` country code is dropped when it leaves 10
/// or 11 digits behind. Anything that does not fit either layout is returned
/// unchanged.
#[must_use]
pub fn normalize_phone(raw: &str) -> String {
    if raw.is_empty() || raw.to_uppercase().contains(NOT_AVAILABLE) {
        return NOT_AVAILABLE.to_string();
    }

    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < MIN_DIGITS {
        return raw.to_string();
    }

    let national = match digits.len() {
        12 | 13 if digits.starts_with(COUNTRY_CODE) => &digits[COUNTRY_CODE.len()..],
        _ => digits.as_str(),
    };

    // All slicing below is on ASCII digits, so byte offsets are char offsets.
    match national.len() {
        11 => format!(
            "+55 {} {}-{}",
            &national[..2],
            &national[2..7],
            &national[7..]
        ),
        10 => format!(
            "+55 {} {}-{}",
            &national[..2],
            &national[2..6],
            &national[6..]
        ),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
#[path = "phone_test.rs"]
mod tests;
