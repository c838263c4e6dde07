use std::fmt;

/// Every field the decoder knows how to extract.
///
/// Each name fixes two things: the JSON key searched for, and the primitive
/// decoder its token is run through.
///
/// ```text
/// ┌────────────┬────────────┬──────────┬──────────────────────────┐
/// │ Variant    │ JSON key   │ Kind     │ Accepted token           │
/// ├────────────┼────────────┼──────────┼──────────────────────────┤
/// │ Type       │ type       │ Uint     │ 126, "126", "0x7e"       │
/// │ Gas        │ gas        │ Uint     │ "0x5208", 21000          │
/// │ Value      │ value      │ BigUint  │ 1, "0xde0b6b3a7640000"   │
/// │ Data       │ input      │ Bytes    │ "0x616263"               │
/// │ From       │ from       │ Address  │ 20-byte quoted hex       │
/// │ SourceHash │ sourceHash │ Hash     │ 32-byte quoted hex       │
/// │ Mint       │ mint       │ BigUint  │ "0x0", 1000              │
/// │ IsSystemTx │ isSystemTx │ Bool     │ true, false              │
/// │ To         │ to         │ Address  │ 20-byte quoted hex       │
/// └────────────┴────────────┴──────────┴──────────────────────────┘
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Type,
    Gas,
    Value,
    Data,
    From,
    SourceHash,
    Mint,
    IsSystemTx,
    To,
}

/// Decoder family selected by a [`FieldName`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Uint,
    BigUint,
    Bytes,
    Address,
    Hash,
    Bool,
}

impl FieldName {
    pub const ALL: [FieldName; 9] = [
        Self::Type,
        Self::Gas,
        Self::Value,
        Self::Data,
        Self::From,
        Self::SourceHash,
        Self::Mint,
        Self::IsSystemTx,
        Self::To,
    ];

    /// The key as it appears in the JSON object.
    pub fn key(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Gas => "gas",
            Self::Value => "value",
            Self::Data => "input",
            Self::From => "from",
            Self::SourceHash => "sourceHash",
            Self::Mint => "mint",
            Self::IsSystemTx => "isSystemTx",
            Self::To => "to",
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::Type | Self::Gas => FieldKind::Uint,
            Self::Value | Self::Mint => FieldKind::BigUint,
            Self::Data => FieldKind::Bytes,
            Self::From | Self::To => FieldKind::Address,
            Self::SourceHash => FieldKind::Hash,
            Self::IsSystemTx => FieldKind::Bool,
        }
    }

    /// Reverse of [`key`](Self::key).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl FieldKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Uint => "uint64",
            Self::BigUint => "uint256",
            Self::Bytes => "bytes",
            Self::Address => "address",
            Self::Hash => "hash32",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
