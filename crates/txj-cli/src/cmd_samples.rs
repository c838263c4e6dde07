/// Implementation of `txj samples`.
///
/// Prints two ready-to-paste inputs: one without `gas`, which is rejected
/// with a missing-field error, and the same object with `gas` added, which
/// decodes.
use anyhow::Result;
use txj_decoder::samples::{MISSING_GAS, WITH_GAS};

pub fn run() -> Result<()> {
    println!("Missing gas (rejected with `missing required field: gas`):");
    println!("  txj decode '{MISSING_GAS}'");
    println!();
    println!("With gas (decodes, gas = 21000):");
    println!("  txj decode '{WITH_GAS}'");
    Ok(())
}
