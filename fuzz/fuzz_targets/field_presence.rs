#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use txj_decoder::{decode_transaction, DecodeError};
use txj_types::TypeError;

const ZERO_HASH: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";
const ONE_ADDR: &str = "0x0000000000000000000000000000000000000001";

#[derive(Debug, Arbitrary)]
enum Slot {
    Absent,
    Null,
    Present,
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    gas: Slot,
    value: Slot,
    input: Slot,
    from: Slot,
    source_hash: Slot,
    mint: Slot,
    is_system_tx: Slot,
    to: Slot,
}

fn push(out: &mut Vec<String>, key: &str, slot: &Slot, value: &str) {
    match slot {
        Slot::Absent => {}
        Slot::Null => out.push(format!("\"{key}\":null")),
        Slot::Present => out.push(format!("\"{key}\":{value}")),
    }
}

// Fuzz target: deposits built from well-formed values with each field
// independently absent, null, or present.
//
// A decode succeeds exactly when every required field is present, and
// otherwise names the first required field that is not.
fuzz_target!(|input: FuzzInput| {
    let required = [
        ("gas", &input.gas, "\"0x5208\"".to_string()),
        ("value", &input.value, "1".to_string()),
        ("input", &input.input, "\"0x6162\"".to_string()),
        ("from", &input.from, format!("\"{ONE_ADDR}\"")),
        ("sourceHash", &input.source_hash, format!("\"{ZERO_HASH}\"")),
    ];
    let optional = [
        ("mint", &input.mint, "\"0x0\"".to_string()),
        ("isSystemTx", &input.is_system_tx, "true".to_string()),
        ("to", &input.to, format!("\"{ONE_ADDR}\"")),
    ];

    let mut entries = vec!["\"type\":126".to_string()];
    for (key, slot, value) in required.iter().chain(optional.iter()) {
        push(&mut entries, key, slot, value);
    }
    let json = format!("{{{}}}", entries.join(","));

    let first_missing = required
        .iter()
        .find(|(_, slot, _)| !matches!(slot, Slot::Present))
        .map(|(key, _, _)| *key);

    match (decode_transaction(&json), first_missing) {
        (Ok(record), None) => {
            let tx = record.as_deposit().expect("deposit schema");
            assert_eq!(tx.mint.is_some(), matches!(input.mint, Slot::Present));
            assert_eq!(tx.to.is_some(), matches!(input.to, Slot::Present));
            assert_eq!(tx.is_system_tx, matches!(input.is_system_tx, Slot::Present));
        }
        (Err(DecodeError::Type(TypeError::MissingRequiredField { field })), Some(key)) => {
            assert_eq!(field, key);
        }
        (result, expected) => panic!("json {json}: got {result:?}, expected missing {expected:?}"),
    }
});
