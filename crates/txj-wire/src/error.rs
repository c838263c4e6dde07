/// Errors raised while decoding a single located token.
///
/// These are the lowest-level failures in the stack: a token was found for
/// a field, but its text does not have the shape the field's decoder
/// expects. A *missing* token is never an error at this layer, it decodes
/// to `Ok(None)`.
///
/// ```text
/// ┌────────────────┬──────────────────────────────────────────────┐
/// │ Variant        │ Raised by                                    │
/// ├────────────────┼──────────────────────────────────────────────┤
/// │ HexFormat      │ fixed/var hex: not a string, bad digit, odd  │
/// │ LengthMismatch │ fixed hex: decoded to the wrong byte count   │
/// │ NumberFormat   │ uint / big uint: bad digit, empty, overflow  │
/// │ BoolFormat     │ bool: anything but bare `true` / `false`     │
/// └────────────────┴──────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WireError {
    /// The token is not a well-formed quoted hex string.
    #[error("malformed hex: {reason}")]
    HexFormat { reason: String },

    /// The hex string decoded cleanly but to the wrong number of bytes.
    #[error("expected {expected} bytes, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The token is not a valid unsigned integer in the selected base.
    #[error("malformed number: {token}")]
    NumberFormat { token: String },

    /// The token is not the bare literal `true` or `false`.
    #[error("malformed boolean: {token}")]
    BoolFormat { token: String },
}

/// Longest token excerpt carried inside an error value.
const PREVIEW_CHARS: usize = 32;

/// Clip untrusted token text for inclusion in an error message.
///
/// Error values outlive the input they describe, so they only keep a short
/// prefix of the offending token.
pub(crate) fn preview(raw: &str) -> String {
    let mut chars = raw.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}…")
    } else {
        head
    }
}
