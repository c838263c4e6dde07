#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use txj_wire::{locate, TokenKind};

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    text: String,
    key: String,
}

// Fuzz target: field locator over arbitrary text and keys.
//
// Catches bugs in:
// - Slicing at non-char boundaries (multi-byte UTF-8 around quotes)
// - Trailing backslash escapes at end of input
// - Keys at the very end of the text
fuzz_target!(|input: FuzzInput| {
    let Some(token) = locate(&input.text, &input.key) else {
        return;
    };
    assert!(input.text.contains(token.raw()));
    if token.kind() == TokenKind::String {
        assert!(token.raw().len() >= 2);
        assert!(token.string_contents().is_some());
    }
});
