use txj_types::TypeError;
use txj_wire::WireError;

/// Errors returned by [`TxDecoder::decode`](crate::TxDecoder::decode).
///
/// Every failure is a value: nothing in the decode path panics, and a
/// failed decode never yields a partial record.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── InputTooLarge            ← rejected before scanning
///   └── Type(TypeError)          ← from txj-types
///       ├── MissingDiscriminant
///       ├── UnknownSchema { tag }
///       ├── MissingRequiredField { field }
///       └── InvalidField { field, source: WireError }
///           ├── HexFormat
///           ├── LengthMismatch
///           ├── NumberFormat
///           └── BoolFormat
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// The input exceeds [`DecoderConfig::max_input_len`](crate::DecoderConfig).
    #[error("input is {size} bytes, limit is {limit}")]
    InputTooLarge { size: usize, limit: usize },

    /// Discriminant, schema, or field-level failure.
    #[error(transparent)]
    Type(#[from] TypeError),
}

impl DecodeError {
    /// The JSON key of the missing required field, if that is the failure.
    pub fn missing_field(&self) -> Option<&'static str> {
        match self {
            Self::Type(TypeError::MissingRequiredField { field }) => Some(*field),
            _ => None,
        }
    }

    /// The token-level error behind an invalid field, if that is the failure.
    pub fn wire_error(&self) -> Option<&WireError> {
        match self {
            Self::Type(TypeError::InvalidField { source, .. }) => Some(source),
            _ => None,
        }
    }
}
