use ::hex::FromHexError;

use crate::error::{WireError, preview};
use crate::locate::{Token, non_null};

/// Strip the quotes and optional `0x` prefix from a hex string token.
///
/// Only a lowercase `0x` prefix is recognised; anything else is left in
/// place and fails as a bad digit.
fn hex_digits(token: Token<'_>) -> Result<&str, WireError> {
    let contents = token
        .string_contents()
        .ok_or_else(|| WireError::HexFormat {
            reason: format!("expected a quoted hex string, found {}", preview(token.raw())),
        })?;
    Ok(contents.strip_prefix("0x").unwrap_or(contents))
}

/// Decode a quoted hex string of any length.
///
/// `"0x"` decodes to an empty, *present* value. `null` or a missing key
/// decode to `None`, never to an empty vector.
///
/// # Errors
///
/// [`WireError::HexFormat`] when the token is not a terminated string, has
/// an odd number of digits, or contains a non-hex character.
pub fn decode_var_hex(token: Option<Token<'_>>) -> Result<Option<Vec<u8>>, WireError> {
    let Some(token) = non_null(token) else {
        return Ok(None);
    };
    let digits = hex_digits(token)?;
    ::hex::decode(digits).map(Some).map_err(|e| WireError::HexFormat {
        reason: e.to_string(),
    })
}

/// Decode a quoted hex string into exactly `N` bytes.
///
/// Used for addresses (`N = 20`) and hashes (`N = 32`). Upper- and
/// lowercase digits are both accepted.
///
/// # Errors
///
/// - [`WireError::HexFormat`] for a non-string token, odd digit count, or a
///   non-hex character.
/// - [`WireError::LengthMismatch`] when an even number of digits describes
///   anything other than `N` bytes.
pub fn decode_fixed_hex<const N: usize>(
    token: Option<Token<'_>>,
) -> Result<Option<[u8; N]>, WireError> {
    let Some(token) = non_null(token) else {
        return Ok(None);
    };
    let digits = hex_digits(token)?;

    let mut out = [0u8; N];
    match ::hex::decode_to_slice(digits, &mut out) {
        Ok(()) => Ok(Some(out)),
        Err(FromHexError::InvalidStringLength) => Err(WireError::LengthMismatch {
            expected: N,
            actual: digits.len() / 2,
        }),
        Err(e) => Err(WireError::HexFormat {
            reason: e.to_string(),
        }),
    }
}
