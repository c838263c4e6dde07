/// Implementation of `txj check`.
///
/// Runs a full decode and reports the outcome as checkmarks, without the
/// record summary. Exits 0 when the transaction decodes and 1 otherwise.
///
/// # Success output
///
/// ```text
/// ✓ Schema: deposit (type 0x7e)
/// ✓ Required: gas, value, input, from, sourceHash
/// ✓ Record: built
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: required field `gas` is absent or null
/// ```
use anyhow::{Result, anyhow};
use txj_decoder::{DecodeError, DecoderConfig, TxDecoder};
use txj_types::{FieldName, TypeError};

use crate::CheckArgs;
use crate::input::read_input;

/// Run the `txj check` command.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or the transaction does not
/// decode.
pub fn run(args: &CheckArgs) -> Result<()> {
    let json = read_input(&args.input)?;
    let decoder = TxDecoder::new(DecoderConfig {
        max_input_len: args.max_input_len,
    });

    match decoder.decode(&json) {
        Ok(record) => {
            let tag = record.tx_type().tag();
            // A built record implies its schema is registered.
            if let Some(schema) = decoder.registry().get(tag) {
                println!("✓ Schema: {} (type {tag:#x})", schema.name());
                let required: Vec<_> = schema.required().iter().map(|f| f.key()).collect();
                println!("✓ Required: {}", required.join(", "));
            }
            println!("✓ Record: built");
            Ok(())
        }
        Err(e) => {
            println!("✗ Error: {}", diagnostic(&e));
            Err(anyhow!("check failed"))
        }
    }
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// Converts a `DecodeError` into a one-line diagnostic.
///
/// ```text
/// ┌──────────────────────┬────────────────────────────────────────────┐
/// │ Variant              │ Diagnostic                                 │
/// ├──────────────────────┼────────────────────────────────────────────┤
/// │ MissingDiscriminant  │ "no `type` field …"                        │
/// │ UnknownSchema        │ "type 0x.. has no registered schema"       │
/// │ MissingRequiredField │ "required field `gas` is absent or null"   │
/// │ InvalidField         │ "field `sourceHash` is malformed: <cause>" │
/// │ InputTooLarge        │ "<error Display>"                          │
/// └──────────────────────┴────────────────────────────────────────────┘
/// ```
fn diagnostic(e: &DecodeError) -> String {
    match e {
        DecodeError::Type(TypeError::MissingDiscriminant) => format!(
            "no `{}` field; cannot choose a schema",
            FieldName::Type.key()
        ),
        DecodeError::Type(TypeError::UnknownSchema { tag }) => {
            format!("type {tag:#x} has no registered schema")
        }
        DecodeError::Type(TypeError::MissingRequiredField { field }) => {
            format!("required field `{field}` is absent or null")
        }
        DecodeError::Type(TypeError::InvalidField { field, source }) => {
            format!("field `{field}` is malformed: {source}")
        }
        other => other.to_string(),
    }
}
