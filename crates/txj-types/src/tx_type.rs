/// Discriminant value of the deposit transaction schema (`0x7e`).
pub const DEPOSIT_TX_TYPE: u64 = 0x7e;

/// Known transaction type discriminants.
///
/// ```text
/// ┌──────┬─────────┬───────────────────────────────────┐
/// │ Tag  │ Variant │ Description                       │
/// ├──────┼─────────┼───────────────────────────────────┤
/// │ 0x7e │ Deposit │ L1→L2 deposit, no signature       │
/// │ any  │ Unknown │ preserved raw tag, no schema      │
/// └──────┴─────────┴───────────────────────────────────┘
/// ```
///
/// Whether a tag can be *decoded* is decided by the schema registry, not by
/// this enum; `Unknown` tags may still have a custom schema registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TxType {
    Deposit,
    Unknown(u64),
}

impl TxType {
    pub fn tag(self) -> u64 {
        match self {
            Self::Deposit => DEPOSIT_TX_TYPE,
            Self::Unknown(tag) => tag,
        }
    }

    pub fn from_tag(tag: u64) -> Self {
        match tag {
            DEPOSIT_TX_TYPE => Self::Deposit,
            other => Self::Unknown(other),
        }
    }

    /// Short lowercase label used in summaries.
    pub fn label(self) -> &'static str {
        match self {
            Self::Deposit => "deposit",
            Self::Unknown(_) => "unknown",
        }
    }
}
