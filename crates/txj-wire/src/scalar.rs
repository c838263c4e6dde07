use num_bigint::BigUint;

use crate::error::{WireError, preview};
use crate::locate::{Token, TokenKind, non_null};

fn number_format(token: Token<'_>) -> WireError {
    WireError::NumberFormat {
        token: preview(token.raw()),
    }
}

/// Pick the digit string and radix for a numeric token.
///
/// ```text
/// ┌────────────────────┬───────┬────────┐
/// │ Token              │ Radix │ Digits │
/// ├────────────────────┼───────┼────────┤
/// │ "0x5208"  (quoted) │ 16    │ 5208   │
/// │ "21000"   (quoted) │ 10    │ 21000  │
/// │ 21000     (bare)   │ 10    │ 21000  │
/// └────────────────────┴───────┴────────┘
/// ```
///
/// The digit string must be non-empty and every character a digit of the
/// chosen radix, so signs, separators, fractions, and exponents are all
/// rejected before any parsing happens.
fn number_digits(token: Token<'_>) -> Result<(&str, u32), WireError> {
    let (digits, radix) = match token.kind() {
        TokenKind::String => {
            let contents = token.string_contents().ok_or_else(|| number_format(token))?;
            match contents.strip_prefix("0x") {
                Some(hex) => (hex, 16),
                None => (contents, 10),
            }
        }
        TokenKind::Bare => (token.raw(), 10),
        TokenKind::Unterminated => return Err(number_format(token)),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(number_format(token));
    }
    Ok((digits, radix))
}

/// Decode an unsigned 64-bit integer in either base.
///
/// # Errors
///
/// [`WireError::NumberFormat`] for a bad digit, an empty digit string, or a
/// value that does not fit in `u64`.
pub fn decode_uint(token: Option<Token<'_>>) -> Result<Option<u64>, WireError> {
    let Some(token) = non_null(token) else {
        return Ok(None);
    };
    let (digits, radix) = number_digits(token)?;
    u64::from_str_radix(digits, radix)
        .map(Some)
        .map_err(|_| number_format(token))
}

/// Decode an arbitrary-precision unsigned integer in either base.
///
/// Same token shapes as [`decode_uint`], with no upper bound on the value.
/// Negative values are rejected.
///
/// # Errors
///
/// [`WireError::NumberFormat`] for a bad digit or an empty digit string.
pub fn decode_big_uint(token: Option<Token<'_>>) -> Result<Option<BigUint>, WireError> {
    let Some(token) = non_null(token) else {
        return Ok(None);
    };
    let (digits, radix) = number_digits(token)?;
    BigUint::parse_bytes(digits.as_bytes(), radix)
        .map(Some)
        .ok_or_else(|| number_format(token))
}

/// Decode the bare literals `true` and `false`.
///
/// # Errors
///
/// [`WireError::BoolFormat`] for anything else, including the quoted
/// strings `"true"` and `"false"`.
pub fn decode_bool(token: Option<Token<'_>>) -> Result<Option<bool>, WireError> {
    let Some(token) = non_null(token) else {
        return Ok(None);
    };
    match (token.kind(), token.raw()) {
        (TokenKind::Bare, "true") => Ok(Some(true)),
        (TokenKind::Bare, "false") => Ok(Some(false)),
        _ => Err(WireError::BoolFormat {
            token: preview(token.raw()),
        }),
    }
}
