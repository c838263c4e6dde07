/// Default cap on input size: 1 MiB.
pub const DEFAULT_MAX_INPUT_LEN: usize = 1024 * 1024;

/// Configuration for [`TxDecoder`](crate::TxDecoder).
///
/// ```text
/// ┌───────────────┬──────────────────────────────────────────────┐
/// │ Field         │ Purpose                                      │
/// ├───────────────┼──────────────────────────────────────────────┤
/// │ max_input_len │ inputs longer than this (bytes) are refused  │
/// │               │ before any field is located                  │
/// └───────────────┴──────────────────────────────────────────────┘
/// ```
///
/// The schema set is not part of the config; it is passed alongside it to
/// [`TxDecoder::with_registry`](crate::TxDecoder::with_registry).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecoderConfig {
    pub max_input_len: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
        }
    }
}
