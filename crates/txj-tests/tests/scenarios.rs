//! End-to-end scenarios through `decode_transaction`.
//!
//! The first two tests are the reference pair: the same deposit with and
//! without `gas`. The remaining tests check that every field of a
//! well-formed input survives into the record unchanged, whatever the case
//! of its hex digits.

use num_bigint::BigUint;
use txj_decoder::samples::{MISSING_GAS, WITH_GAS};
use txj_decoder::{DecodeError, decode_transaction};
use txj_tests::{ABCDEF_INPUT, ONE_ADDR, TxJson, ZERO_HASH};
use txj_types::{Address, Hash, Record, TxType, TypeError};

fn reference_without_gas() -> String {
    format!(
        r#"{{"type":126,"value":1,"input":"{ABCDEF_INPUT}","sourceHash":"{ZERO_HASH}","from":"{ONE_ADDR}"}}"#
    )
}

fn one_addr() -> Address {
    let mut bytes = [0u8; 20];
    bytes[19] = 1;
    Address(bytes)
}

// ── Reference pair ────────────────────────────────────────────────────────────

#[test]
fn missing_gas_is_a_missing_field_error() {
    let err = decode_transaction(&reference_without_gas()).unwrap_err();
    assert_eq!(
        err,
        DecodeError::Type(TypeError::MissingRequiredField { field: "gas" })
    );
}

#[test]
fn adding_gas_builds_the_record() {
    let json = reference_without_gas().replacen('{', r#"{"gas":"0x5208","#, 1);
    let record = decode_transaction(&json).expect("reference input with gas must decode");

    assert_eq!(record.tx_type(), TxType::Deposit);
    let tx = record.as_deposit().expect("deposit record");
    assert_eq!(tx.gas, 21000);
    assert_eq!(tx.value, BigUint::from(1u32));
    assert_eq!(tx.data, b"abcdef".to_vec());
    assert_eq!(tx.data, vec![0x61, 0x62, 0x63, 0x64, 0x65, 0x66]);
    assert_eq!(tx.from, one_addr());
    assert_eq!(tx.source_hash, Hash([0; 32]));
}

#[test]
fn rpc_shaped_samples_behave_like_the_reference_pair() {
    let err = decode_transaction(MISSING_GAS).unwrap_err();
    assert_eq!(err.missing_field(), Some("gas"));

    let Record::Deposit(tx) = decode_transaction(WITH_GAS).unwrap();
    assert_eq!(tx.gas, 21000);
    assert_eq!(tx.value, BigUint::from(1u32));
    assert_eq!(tx.data, b"abcdef");
    assert_eq!(tx.mint, None);
    assert_eq!(tx.to, None);
}

// ── Field fidelity ────────────────────────────────────────────────────────────

#[test]
fn every_field_round_trips_into_the_record() {
    let source_hash = "0x".to_string() + &"ab".repeat(32);
    let from = "0x".to_string() + &"cd".repeat(20);
    let to = "0x".to_string() + &"ef".repeat(20);
    let json = TxJson::deposit()
        .set_str("sourceHash", &source_hash)
        .set_str("from", &from)
        .set_str("to", &to)
        .set_str("gas", "0xf4240")
        .set_str("value", "0xde0b6b3a7640000")
        .set_str("mint", "0x56bc75e2d63100000")
        .set("isSystemTx", "true")
        .set_str("input", "0xdeadbeef");

    let Record::Deposit(tx) = decode_transaction(&json.to_string()).unwrap();

    assert_eq!(tx.source_hash, Hash([0xab; 32]));
    assert_eq!(tx.from, Address([0xcd; 20]));
    assert_eq!(tx.to, Some(Address([0xef; 20])));
    assert_eq!(tx.gas, 1_000_000);
    assert_eq!(tx.value, BigUint::from(1_000_000_000_000_000_000u64));
    assert_eq!(tx.mint, Some(BigUint::from(100_000_000_000_000_000_000u128)));
    assert!(tx.is_system_tx);
    assert_eq!(tx.data, hex::decode("deadbeef").unwrap());
}

#[test]
fn hex_digits_are_case_insensitive() {
    let lower = TxJson::deposit()
        .set_str("sourceHash", &("0x".to_string() + &"ab".repeat(32)))
        .set_str("from", &("0x".to_string() + &"cd".repeat(20)))
        .set_str("input", "0xdeadbeef")
        .set_str("gas", "0xabc");
    let upper = TxJson::deposit()
        .set_str("sourceHash", &("0x".to_string() + &"AB".repeat(32)))
        .set_str("from", &("0x".to_string() + &"Cd".repeat(20)))
        .set_str("input", "0xDEADBEEF")
        .set_str("gas", "0xABC");

    let a = decode_transaction(&lower.to_string()).unwrap();
    let b = decode_transaction(&upper.to_string()).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.as_deposit().unwrap().gas, 0xabc);
}

#[test]
fn quantities_accept_every_number_shape() {
    for raw in ["21000", r#""21000""#, r#""0x5208""#] {
        let json = TxJson::deposit().set("gas", raw).to_string();
        let Record::Deposit(tx) = decode_transaction(&json).unwrap();
        assert_eq!(tx.gas, 21000, "gas written as {raw}");
    }
}

#[test]
fn value_wider_than_u64_is_preserved() {
    let json = TxJson::deposit()
        .set_str("value", "0x1000000000000000000000000")
        .to_string();
    let Record::Deposit(tx) = decode_transaction(&json).unwrap();
    assert_eq!(tx.value, BigUint::from(1u8) << 96u32);
}

#[test]
fn unrelated_keys_are_ignored() {
    let json = TxJson::deposit()
        .set("nonce", "null")
        .set_str("hash", ZERO_HASH)
        .set("extra", r#"{"nested":[1,2,3]}"#)
        .to_string();
    assert!(decode_transaction(&json).is_ok());
}

#[test]
fn whitespace_after_colon_is_skipped() {
    let json = format!(
        r#"{{"type": 126, "gas":	"0x5208", "value": 1, "input": "0x", "from": "{ONE_ADDR}", "sourceHash": "{ZERO_HASH}"}}"#
    );
    let Record::Deposit(tx) = decode_transaction(&json).unwrap();
    assert_eq!(tx.gas, 21000);
    assert!(tx.data.is_empty());
}

#[test]
fn first_duplicate_key_wins() {
    let json = format!(
        r#"{{"type":126,"gas":1,"gas":2,"value":1,"input":"0x","from":"{ONE_ADDR}","sourceHash":"{ZERO_HASH}"}}"#
    );
    let Record::Deposit(tx) = decode_transaction(&json).unwrap();
    assert_eq!(tx.gas, 1);
}
