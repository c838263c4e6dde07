//! Shared fixtures for the txj integration tests and benches.
//!
//! [`TxJson`] builds a deposit object key by key so a test can drop, null
//! out, or corrupt exactly one field and leave the rest well-formed.
//!
//! ```text
//! TxJson::deposit()                    {"type":126,"gas":"0x5208",...}
//!     .remove("gas")                   {"type":126,"value":"0x1",...}
//!     .set("mint", "null")             {...,"mint":null}
//!     .set_str("sourceHash", "0x12")   {...,"sourceHash":"0x12"}
//! ```

use std::fmt;

/// 32 zero bytes as a quoted-ready hex string.
pub const ZERO_HASH: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

/// The address `0x…01`.
pub const ONE_ADDR: &str = "0x0000000000000000000000000000000000000001";

/// `abcdef` as hex.
pub const ABCDEF_INPUT: &str = "0x616263646566";

/// An ordered set of raw `key: value` pairs rendered as one JSON object.
///
/// Values are raw JSON text: use [`TxJson::set_str`] for quoted strings
/// and [`TxJson::set`] for numbers, literals, or deliberately broken text.
#[derive(Clone, Debug, Default)]
pub struct TxJson {
    entries: Vec<(String, String)>,
}

impl TxJson {
    /// An object with no keys.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A deposit with `type` and every required field, no optional ones.
    pub fn deposit() -> Self {
        Self::empty()
            .set("type", "126")
            .set_str("gas", "0x5208")
            .set_str("value", "0x1")
            .set_str("input", ABCDEF_INPUT)
            .set_str("from", ONE_ADDR)
            .set_str("sourceHash", ZERO_HASH)
    }

    /// Set `key` to raw JSON text, replacing an earlier value in place.
    #[must_use]
    pub fn set(mut self, key: &str, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = raw,
            None => self.entries.push((key.to_string(), raw)),
        }
        self
    }

    /// Set `key` to a quoted string.
    #[must_use]
    pub fn set_str(self, key: &str, value: &str) -> Self {
        self.set(key, format!("\"{value}\""))
    }

    /// Drop `key` entirely.
    #[must_use]
    pub fn remove(mut self, key: &str) -> Self {
        self.entries.retain(|(k, _)| k != key);
        self
    }
}

impl fmt::Display for TxJson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, raw)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "\"{key}\":{raw}")?;
        }
        f.write_str("}")
    }
}

/// Every subset of `keys`, as a list of chosen keys per subset.
///
/// Used to sweep present/absent combinations of optional fields.
pub fn subsets<'a>(keys: &[&'a str]) -> Vec<Vec<&'a str>> {
    (0u32..1 << keys.len())
        .map(|mask| {
            keys.iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, k)| *k)
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place() {
        let json = TxJson::empty().set("a", "1").set("b", "2").set("a", "3");
        assert_eq!(json.to_string(), r#"{"a":3,"b":2}"#);
    }

    #[test]
    fn remove_and_quote() {
        let json = TxJson::empty().set("a", "1").set_str("b", "x").remove("a");
        assert_eq!(json.to_string(), r#"{"b":"x"}"#);
    }

    #[test]
    fn subsets_cover_power_set() {
        let all = subsets(&["a", "b", "c"]);
        assert_eq!(all.len(), 8);
        assert!(all.contains(&vec![]));
        assert!(all.contains(&vec!["a", "c"]));
        assert!(all.contains(&vec!["a", "b", "c"]));
    }
}
