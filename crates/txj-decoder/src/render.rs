use txj_types::{DepositTx, Record};

/// Payload bytes shown before the hex is elided.
const MAX_DATA_PREVIEW: usize = 32;

/// Render a record as an aligned, human-readable summary.
///
/// # Output format
///
/// ```text
/// deposit transaction (type 0x7e)
///   sourceHash: 0x0000…0000
///   from:       0x0000000000000000000000000000000000000001
///   to:         (contract creation)
///   mint:       (none)
///   value:      1
///   gas:        21000
///   isSystemTx: false
///   input:      6 bytes 0x616263646566
/// ```
///
/// Numbers are decimal. Payloads longer than 32 bytes show the first 32
/// followed by `…`.
pub fn render_summary(record: &Record) -> String {
    let mut out = String::new();
    let tx_type = record.tx_type();
    out.push_str(&format!(
        "{} transaction (type {:#x})\n",
        tx_type.label(),
        tx_type.tag()
    ));
    match record {
        Record::Deposit(tx) => render_deposit(&mut out, tx),
    }
    out
}

fn render_deposit(out: &mut String, tx: &DepositTx) {
    let to = tx
        .to
        .map_or_else(|| "(contract creation)".to_string(), |a| a.to_string());
    let mint = tx
        .mint
        .as_ref()
        .map_or_else(|| "(none)".to_string(), ToString::to_string);

    line(out, "sourceHash", &tx.source_hash.to_string());
    line(out, "from", &tx.from.to_string());
    line(out, "to", &to);
    line(out, "mint", &mint);
    line(out, "value", &tx.value.to_string());
    line(out, "gas", &tx.gas.to_string());
    line(out, "isSystemTx", &tx.is_system_tx.to_string());
    line(out, "input", &data_preview(&tx.data));
}

fn line(out: &mut String, key: &str, value: &str) {
    let label = format!("{key}:");
    out.push_str(&format!("  {label:<12}{value}\n"));
}

fn data_preview(data: &[u8]) -> String {
    let noun = if data.len() == 1 { "byte" } else { "bytes" };
    if data.is_empty() {
        return format!("0 {noun}");
    }
    let shown = &data[..data.len().min(MAX_DATA_PREVIEW)];
    let ellipsis = if data.len() > MAX_DATA_PREVIEW { "…" } else { "" };
    format!("{} {noun} 0x{}{ellipsis}", data.len(), hex::encode(shown))
}
