#![no_main]

use libfuzzer_sys::fuzz_target;

// Fuzz target: full decode of arbitrary text.
//
// Every input must come back as a record or an error value.
fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = txj_decoder::decode_transaction(text);
    }
});
