use txj_wire::WireError;

/// Errors raised while turning located tokens into a typed record.
///
/// These sit one level above [`WireError`]: a `WireError` says a token is
/// malformed, a `TypeError` says which field it belonged to, or that the
/// object as a whole does not satisfy its schema.
///
/// # Error hierarchy
///
/// ```text
/// ┌─────────────────────────────────────────────────────────┐
/// │ TypeError (this crate)                                  │
/// │   ├── MissingDiscriminant   no usable `type` field      │
/// │   ├── UnknownSchema         `type` names no schema      │
/// │   ├── MissingRequiredField  validation found a gap      │
/// │   └── InvalidField          wraps WireError + field key │
/// └─────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// The object has no `type` key, or its value is `null`.
    #[error("missing transaction type")]
    MissingDiscriminant,

    /// The `type` value decoded cleanly but no schema is registered for it.
    #[error("no schema registered for transaction type {tag:#x}")]
    UnknownSchema { tag: u64 },

    /// A field the schema requires was absent or `null`.
    ///
    /// `field` is the JSON key, so a missing payload reports `input`.
    #[error("missing required field: {field}")]
    MissingRequiredField { field: &'static str },

    /// A field was present but its token failed to decode.
    #[error("invalid field {field}: {source}")]
    InvalidField {
        field: &'static str,
        source: WireError,
    },
}
