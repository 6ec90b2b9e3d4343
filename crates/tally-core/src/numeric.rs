//! Best-effort numeric extraction from string tokens.
//!
//! Each whitespace-delimited token is tried against an ordered chain of
//! parsers: the decimal floating grammar first, then the base-prefixed
//! integer grammar. A token neither accepts contributes nothing.

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Zero};

/// Sums every token in `text` that carries a numeric value.
///
/// Splitting is on runs of Unicode whitespace; unparsable tokens are
/// silently skipped.
pub fn sum_tokens(text: &str) -> BigInt {
    let mut sum = BigInt::zero();
    for token in text.split_whitespace() {
        if let Some(n) = token_value(token) {
            sum += n;
        }
    }
    sum
}

/// Numeric value of a single token, if it has one.
///
/// The floating grammar wins over the integer grammar, so `3.14` truncates
/// to 3 while `0x4` (not float syntax) falls through and parses as 4.
pub fn token_value(token: &str) -> Option<BigInt> {
    parse_float(token).or_else(|| parse_radix_int(token))
}

/// Decimal floating-point literal, truncated toward zero.
///
/// `from_f64` converts the parsed value exactly at any magnitude and rejects
/// non-finite input, so spellings like `inf` or `NaN` fall through to the
/// integer grammar (where they also fail) instead of contributing garbage.
fn parse_float(token: &str) -> Option<BigInt> {
    let f: f64 = token.parse().ok()?;
    BigInt::from_f64(f)
}

/// Integer literal with base auto-detection: an optional leading `-`, then
/// `0x`/`0X` selects base 16, `0o`/`0O` base 8, `0b`/`0B` base 2, and bare
/// digits base 10. Magnitude is unbounded.
fn parse_radix_int(token: &str) -> Option<BigInt> {
    let (negative, rest) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };

    let (radix, digits) = if let Some(d) = strip_prefix_ignore_case(rest, 'x') {
        (16, d)
    } else if let Some(d) = strip_prefix_ignore_case(rest, 'o') {
        (8, d)
    } else if let Some(d) = strip_prefix_ignore_case(rest, 'b') {
        (2, d)
    } else {
        (10, rest)
    };

    // `parse_bytes` would accept its own sign here; only digits may follow
    // the prefix, so `--5` or `0x+4` never parse.
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    let magnitude = BigInt::parse_bytes(digits.as_bytes(), radix)?;
    Some(if negative { -magnitude } else { magnitude })
}

fn strip_prefix_ignore_case(s: &str, marker: char) -> Option<&str> {
    let rest = s.strip_prefix('0')?;
    rest.strip_prefix(marker)
        .or_else(|| rest.strip_prefix(marker.to_ascii_uppercase()))
}
