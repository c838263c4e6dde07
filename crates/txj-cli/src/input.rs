use std::io::{self, Read};

use anyhow::{Context, Result};

/// Resolve a positional input argument to JSON text.
///
/// `-` reads all of stdin; anything else is the JSON text itself.
pub fn read_input(arg: &str) -> Result<String> {
    if arg != "-" {
        return Ok(arg.to_string());
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("cannot read JSON from stdin")?;
    Ok(text)
}
