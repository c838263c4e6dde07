use std::sync::LazyLock;

use txj_types::{Record, SchemaRegistry};

use crate::builder::RecordBuilder;
use crate::config::DecoderConfig;
use crate::error::DecodeError;

/// Shared decoder behind [`decode_transaction`].
static DEFAULT_DECODER: LazyLock<TxDecoder> = LazyLock::new(TxDecoder::default);

/// Turns an untrusted JSON object into a [`Record`].
///
/// Holds a read-only schema registry and config, so one instance can be
/// shared across threads and reused for any number of inputs. Each call
/// works on its own intermediate state.
///
/// # Example
///
/// ```rust
/// use txj_decoder::{DecoderConfig, TxDecoder};
///
/// let json = concat!(
///     r#"{"type":126,"gas":"0x5208","value":1,"input":"0x616263","#,
///     r#""from":"0x0000000000000000000000000000000000000001","#,
///     r#""sourceHash":"0x0000000000000000000000000000000000000000000000000000000000000000"}"#,
/// );
///
/// let decoder = TxDecoder::new(DecoderConfig::default());
/// let record = decoder.decode(json).unwrap();
/// assert_eq!(record.as_deposit().unwrap().gas, 21000);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TxDecoder {
    config: DecoderConfig,
    registry: SchemaRegistry,
}

impl TxDecoder {
    /// A decoder over the default registry (deposit schema only).
    pub fn new(config: DecoderConfig) -> Self {
        Self::with_registry(config, SchemaRegistry::default())
    }

    pub fn with_registry(config: DecoderConfig, registry: SchemaRegistry) -> Self {
        Self { config, registry }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Decode one JSON object.
    ///
    /// # Errors
    ///
    /// - [`DecodeError::InputTooLarge`] if `json` is longer than
    ///   `max_input_len` bytes.
    /// - [`DecodeError::Type`] for a missing or unknown `type`, a malformed
    ///   field value, or a missing required field.
    pub fn decode(&self, json: &str) -> Result<Record, DecodeError> {
        if json.len() > self.config.max_input_len {
            return Err(DecodeError::InputTooLarge {
                size: json.len(),
                limit: self.config.max_input_len,
            });
        }

        RecordBuilder::new(&self.registry)
            .build(json)
            .map_err(|e| {
                tracing::debug!(error = %e, "decode failed");
                DecodeError::from(e)
            })
    }
}

/// Decode `json` with the default registry and config.
///
/// # Errors
///
/// See [`TxDecoder::decode`].
pub fn decode_transaction(json: &str) -> Result<Record, DecodeError> {
    DEFAULT_DECODER.decode(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples::{MISSING_GAS, WITH_GAS};
    use txj_types::TypeError;

    #[test]
    fn oversized_input_rejected_before_scanning() {
        let decoder = TxDecoder::new(DecoderConfig { max_input_len: 8 });
        let result = decoder.decode(r#"{"type":126}"#);
        assert!(matches!(
            result,
            Err(DecodeError::InputTooLarge { size: 12, limit: 8 })
        ));
    }

    #[test]
    fn input_at_limit_is_scanned() {
        let json = r#"{"type":2}"#;
        let decoder = TxDecoder::new(DecoderConfig {
            max_input_len: json.len(),
        });
        assert!(matches!(
            decoder.decode(json),
            Err(DecodeError::Type(TypeError::UnknownSchema { tag: 2 }))
        ));
    }

    #[test]
    fn empty_registry_knows_no_types() {
        let decoder = TxDecoder::with_registry(DecoderConfig::default(), SchemaRegistry::empty());
        assert!(matches!(
            decoder.decode(r#"{"type":126}"#),
            Err(DecodeError::Type(TypeError::UnknownSchema { tag: 126 }))
        ));
    }

    #[test]
    fn default_entry_point_reports_missing_type() {
        assert!(matches!(
            decode_transaction("{}"),
            Err(DecodeError::Type(TypeError::MissingDiscriminant))
        ));
    }

    #[test]
    fn decoder_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TxDecoder>();
    }

    fn check(i: usize, result: Result<Record, DecodeError>) {
        if i % 2 == 0 {
            let record = result.unwrap_or_else(|e| panic!("worker {i}: {e}"));
            assert_eq!(record.as_deposit().unwrap().gas, 21000, "worker {i}");
        } else {
            assert_eq!(result.unwrap_err().missing_field(), Some("gas"), "worker {i}");
        }
    }

    #[test]
    fn one_decoder_serves_many_threads() {
        let decoder = TxDecoder::default();
        std::thread::scope(|s| {
            let workers: Vec<_> = (0..8)
                .map(|i| {
                    let decoder = &decoder;
                    s.spawn(move || {
                        let json = if i % 2 == 0 { WITH_GAS } else { MISSING_GAS };
                        for _ in 0..50 {
                            check(i, decoder.decode(json));
                        }
                    })
                })
                .collect();
            for worker in workers {
                worker.join().unwrap();
            }
        });
    }

    #[test]
    fn default_entry_point_serves_many_threads() {
        std::thread::scope(|s| {
            let workers: Vec<_> = (0..8)
                .map(|i| {
                    s.spawn(move || {
                        let json = if i % 2 == 0 { WITH_GAS } else { MISSING_GAS };
                        (i, decode_transaction(json))
                    })
                })
                .collect();
            for worker in workers {
                let (i, result) = worker.join().unwrap();
                check(i, result);
            }
        });
    }
}
