/// Implementation of `txj schemas`.
///
/// Lists every schema in the default registry.
///
/// ```text
/// 0x7e deposit
///   required: gas (uint64), value (uint256), input (bytes), from (address), sourceHash (hash32)
///   optional: mint (uint256), isSystemTx (bool), to (address)
/// ```
use anyhow::Result;
use txj_types::{FieldName, SchemaRegistry};

pub fn run() -> Result<()> {
    let registry = SchemaRegistry::default();
    for schema in registry.iter() {
        println!("{:#x} {}", schema.tag(), schema.name());
        println!("  required: {}", keys(schema.required()));
        println!("  optional: {}", keys(schema.optional()));
    }
    Ok(())
}

fn keys(fields: &[FieldName]) -> String {
    if fields.is_empty() {
        return "(none)".to_string();
    }
    fields
        .iter()
        .map(|f| format!("{} ({})", f.key(), f.kind().label()))
        .collect::<Vec<_>>()
        .join(", ")
}
