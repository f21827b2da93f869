//! Selective percent-decoding of diff text.
//!
//! Only the escapes listed in [`ESCAPES`] are decoded, which restores the
//! characters JavaScript's `encodeURI` leaves alone. Matching is case-sensitive:
//! `%3F` is decoded, `%3f` is kept as is.

use std::borrow::Cow;

use memchr::memchr_iter;

/// Percent escapes decoded by [`unescape`], with their replacements.
pub const ESCAPES: [(&str, char); 17] = [
    ("%21", '!'),
    ("%7E", '~'),
    ("%27", '\''),
    ("%28", '('),
    ("%29", ')'),
    ("%3B", ';'),
    ("%2F", '/'),
    ("%3F", '?'),
    ("%3A", ':'),
    ("%40", '@'),
    ("%26", '&'),
    ("%3D", '='),
    ("%2B", '+'),
    ("%24", '$'),
    ("%2C", ','),
    ("%23", '#'),
    ("%2A", '*'),
];

const ESCAPE_LEN: usize = 3;

/// Replaces every escape of [`ESCAPES`] found in `text` with its character.
///
/// The text is scanned once, left to right, and an escape is never overlapped
/// by another one: `%%24` becomes `%$` and `%2%24` becomes `%2$`. The input is
/// returned borrowed when it holds no escape from the table.
///
/// ```rust
/// use diff_primitives::unescape::unescape;
///
/// assert_eq!(unescape("%2B%24"), "+$");
/// assert_eq!(unescape("%3f"), "%3f");
/// ```
pub fn unescape(text: &str) -> Cow<'_, str> {
    let mut decoded: Option<String> = None;
    // Start of the not yet copied tail of `text`.
    let mut copied = 0;

    for i in memchr_iter(b'%', text.as_bytes()) {
        if i < copied {
            continue;
        }
        let Some(c) = text.get(i..i + ESCAPE_LEN).and_then(lookup) else {
            continue;
        };
        let out = decoded.get_or_insert_with(|| String::with_capacity(text.len()));
        out.push_str(&text[copied..i]);
        out.push(c);
        copied = i + ESCAPE_LEN;
    }

    match decoded {
        None => Cow::Borrowed(text),
        Some(mut out) => {
            out.push_str(&text[copied..]);
            Cow::Owned(out)
        }
    }
}

fn lookup(escape: &str) -> Option<char> {
    ESCAPES
        .iter()
        .find(|(key, _)| *key == escape)
        .map(|&(_, c)| c)
}
