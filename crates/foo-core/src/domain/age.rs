//! Age text parsing and limit checks.
//!
//! # Limits
//! - hard: `age <= 0 || age >= 127` is structurally invalid (`i8::MAX`)
//! - soft: `age > 120` is rejected separately as implausible
//!
//! The hard limit is checked first, so 121..=126 is the only range that
//! reaches the soft-limit error.

use crate::config::AgeParse;
use crate::error::FooError;

/// Smallest accepted age.
pub const AGE_MIN: i64 = 1;

/// Exclusive upper bound; anything at or above is `InvalidAge`.
pub const AGE_HARD_LIMIT: i64 = i8::MAX as i64;

/// Plausibility bound; 121..=126 is `AgeTooLarge`.
pub const AGE_SOFT_LIMIT: i64 = 120;

/// Parse age text the way C `atoi` does.
///
/// Leading whitespace is skipped, one optional sign is accepted, then the
/// longest run of ASCII digits is read. Text with no digits yields 0.
/// Out-of-range values saturate instead of wrapping, so they always land
/// outside the hard limit.
pub fn parse_permissive(text: &str) -> i64 {
    let rest = text.trim_start_matches(is_c_space);
    let (negative, digits) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| {
            acc.saturating_mul(10).saturating_add(i64::from(d - b'0'))
        });

    if negative { -magnitude } else { magnitude }
}

/// Parse age text, requiring the whole string to be an integer.
pub fn parse_strict(text: &str) -> Result<i64, FooError> {
    text.parse::<i64>().map_err(|source| FooError::ParseAge {
        input: text.to_string(),
        source,
    })
}

pub fn parse(text: &str, mode: AgeParse) -> Result<i64, FooError> {
    match mode {
        AgeParse::Permissive => Ok(parse_permissive(text)),
        AgeParse::Strict => parse_strict(text),
    }
}

/// Apply the hard limit, then the soft limit.
pub fn check_limits(age: i64) -> Result<u8, FooError> {
    if age < AGE_MIN || age >= AGE_HARD_LIMIT {
        return Err(FooError::InvalidAge(age));
    }

    if age > AGE_SOFT_LIMIT {
        return Err(FooError::AgeTooLarge(age));
    }

    // 1..=120 always fits
    u8::try_from(age).map_err(|_| FooError::InvalidAge(age))
}

// C isspace() in the "C" locale; note '\x0b' is not ASCII whitespace in Rust.
fn is_c_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}
