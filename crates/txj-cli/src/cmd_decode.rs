/// Implementation of `txj decode`.
///
/// Decodes one JSON object and prints either the aligned text summary or,
/// with `--json`, a JSON object with hex-encoded quantities.
///
/// # Output format (default)
///
/// ```text
/// deposit transaction (type 0x7e)
///   sourceHash: 0x0000000000000000000000000000000000000000000000000000000000000000
///   from:       0x0000000000000000000000000000000000000001
///   to:         (contract creation)
///   mint:       (none)
///   value:      1
///   gas:        21000
///   isSystemTx: false
///   input:      6 bytes 0x616263646566
/// ```
///
/// # Output format (`--json`)
///
/// ```json
/// {
///   "type": "0x7e",
///   "sourceHash": "0x00…00",
///   "from": "0x00…01",
///   "to": null,
///   "mint": null,
///   "value": "0x1",
///   "gas": "0x5208",
///   "isSystemTx": false,
///   "input": "0x616263646566"
/// }
/// ```
use anyhow::{Context, Result};
use txj_decoder::{DecoderConfig, TxDecoder, render_summary};
use txj_types::{DepositTx, Record};

use crate::DecodeArgs;
use crate::input::read_input;

// ── JSON view ─────────────────────────────────────────────────────────────────

/// JSON view of a decoded deposit.
#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct DepositView {
    #[serde(rename = "type")]
    tx_type: String,
    source_hash: String,
    from: String,
    to: Option<String>,
    mint: Option<String>,
    value: String,
    gas: String,
    is_system_tx: bool,
    input: String,
}

impl DepositView {
    fn new(tag: u64, tx: &DepositTx) -> Self {
        Self {
            tx_type: format!("{tag:#x}"),
            source_hash: tx.source_hash.to_string(),
            from: tx.from.to_string(),
            to: tx.to.map(|a| a.to_string()),
            mint: tx.mint.as_ref().map(|m| format!("{m:#x}")),
            value: format!("{:#x}", tx.value),
            gas: format!("{:#x}", tx.gas),
            is_system_tx: tx.is_system_tx,
            input: format!("0x{}", hex::encode(&tx.data)),
        }
    }
}

/// Run the `txj decode` command.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or the transaction fails to
/// decode; the main dispatcher turns it into exit code 1.
pub fn run(args: &DecodeArgs) -> Result<()> {
    let json = read_input(&args.input)?;
    tracing::debug!(bytes = json.len(), "read input");
    let decoder = TxDecoder::new(DecoderConfig {
        max_input_len: args.max_input_len,
    });

    let record = decoder
        .decode(&json)
        .context("failed to decode transaction")?;

    if args.json {
        let view = match &record {
            Record::Deposit(tx) => DepositView::new(record.tx_type().tag(), tx),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render_summary(&record));
    }
    Ok(())
}
