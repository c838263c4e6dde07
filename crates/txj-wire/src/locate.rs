/// How a located value was delimited in the source text.
///
/// ```text
/// ┌──────────────┬──────────────────────────┬─────────────────────────┐
/// │ Kind         │ Example source           │ Token::raw()            │
/// ├──────────────┼──────────────────────────┼─────────────────────────┤
/// │ String       │ "gas": "0x5208",         │ "0x5208" (with quotes)  │
/// │ Bare         │ "value":1}               │ 1                       │
/// │ Unterminated │ "from":"0xabc            │ "0xabc                  │
/// └──────────────┴──────────────────────────┴─────────────────────────┘
/// ```
///
/// `Unterminated` marks a string that ran off the end of the input. It is
/// still a *present* value, so downstream decoders reject it as malformed
/// rather than treating the field as missing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    String,
    Bare,
    Unterminated,
}

/// The raw, undecoded text found for one field.
///
/// Borrowed from the input; locating never allocates per value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    raw: &'a str,
    kind: TokenKind,
}

impl<'a> Token<'a> {
    /// The exact source span, including quotes for string values.
    pub fn raw(&self) -> &'a str {
        self.raw
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// True for the bare JSON literal `null`.
    ///
    /// A quoted `"null"` is a string and does not count.
    pub fn is_null(&self) -> bool {
        self.kind == TokenKind::Bare && self.raw == "null"
    }

    /// The text between the quotes of a terminated string value.
    ///
    /// Escape sequences are returned untouched. Returns `None` for bare and
    /// unterminated tokens.
    pub fn string_contents(&self) -> Option<&'a str> {
        match self.kind {
            TokenKind::String => Some(&self.raw[1..self.raw.len() - 1]),
            TokenKind::Bare | TokenKind::Unterminated => None,
        }
    }
}

/// Collapse the JSON literal `null` into absence.
///
/// Every primitive decoder routes its input through here first, so a field
/// written as `null` and a field that was never written are
/// indistinguishable downstream.
pub fn non_null(token: Option<Token<'_>>) -> Option<Token<'_>> {
    token.filter(|t| !t.is_null())
}

/// Find the value token for `field` inside a flat JSON object.
///
/// The scan looks for the literal `"field":` and takes the first match, so
/// a key repeated later in the object is ignored. Spaces and tabs between
/// the colon and the value are skipped; a space before the colon means the
/// key is not found.
///
/// String values run to the first unescaped `"`, where a backslash escapes
/// exactly the next byte. Everything else runs until `,`, `}`, or
/// whitespace, which covers numbers and the `true`/`false`/`null` literals.
/// Arrays and nested objects are not extractable: they come back as a
/// truncated bare token that no decoder accepts.
///
/// Returns `None` only when the key does not occur. A key with nothing
/// after it yields an empty bare token.
pub fn locate<'a>(text: &'a str, field: &str) -> Option<Token<'a>> {
    let pattern = format!("\"{field}\":");
    let key_at = text.find(&pattern)?;
    let bytes = text.as_bytes();

    let mut start = key_at + pattern.len();
    while start < bytes.len() && matches!(bytes[start], b' ' | b'\t') {
        start += 1;
    }

    if bytes.get(start) == Some(&b'"') {
        let mut end = start + 1;
        while end < bytes.len() {
            match bytes[end] {
                b'"' => {
                    return Some(Token {
                        raw: &text[start..=end],
                        kind: TokenKind::String,
                    });
                }
                b'\\' => end += 2,
                _ => end += 1,
            }
        }
        return Some(Token {
            raw: &text[start..],
            kind: TokenKind::Unterminated,
        });
    }

    let len = bytes[start..]
        .iter()
        .position(|b| matches!(b, b',' | b'}' | b' ' | b'\t' | b'\r' | b'\n'))
        .unwrap_or(bytes.len() - start);

    Some(Token {
        raw: &text[start..start + len],
        kind: TokenKind::Bare,
    })
}
