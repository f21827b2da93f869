//! Forward and backward substring search over raw text.
//!
//! Offsets are byte offsets. They are signed so that callers doing offset
//! arithmetic may pass a negative start, which is treated according to the
//! direction of the search. `None` means either "not found" or "start out of range".

/// Returns the byte offset of the first occurrence of `needle` in `haystack`
/// at or after `from`.
///
/// A `from` of zero or less searches the whole string, a `from` past the last
/// byte of `haystack` finds nothing. `from` is not re-aligned to a codepoint
/// boundary, but a non-empty match of a valid UTF-8 needle always starts on one.
///
/// ```rust
/// use diff_primitives::search::forward_index;
///
/// assert_eq!(forward_index("hello world", "world", 0), Some(6));
/// assert_eq!(forward_index("hello world", "o", 5), Some(7));
/// assert_eq!(forward_index("hello world", "hello", 1), None);
/// ```
pub fn forward_index(haystack: &str, needle: &str, from: isize) -> Option<usize> {
    let start = from.max(0) as usize;
    if start >= haystack.len() {
        return None;
    }
    find_bytes(&haystack.as_bytes()[start..], needle.as_bytes()).map(|i| i + start)
}

/// Returns the byte offset of the last occurrence of `needle` in `haystack`
/// ending at or before `before`.
///
/// A negative `before` finds nothing and a `before` at or past the end searches
/// the whole string. Otherwise `before` is moved forward to the end of the
/// codepoint it falls in, so the searched window never holds a partial codepoint.
///
/// ```rust
/// use diff_primitives::search::backward_index;
///
/// assert_eq!(backward_index("hello world", "hello", 11), Some(0));
/// assert_eq!(backward_index("hello hello", "hello", 5), Some(0));
/// assert_eq!(backward_index("hello", "hello", -1), None);
/// ```
pub fn backward_index(haystack: &str, needle: &str, before: isize) -> Option<usize> {
    if before < 0 {
        return None;
    }
    let before = before as usize;
    if before >= haystack.len() {
        return haystack.rfind(needle);
    }
    haystack[..codepoint_end(haystack, before)].rfind(needle)
}

/// End offset of the codepoint starting at or containing byte `offset`.
fn codepoint_end(text: &str, offset: usize) -> usize {
    let mut start = offset;
    while !text.is_char_boundary(start) {
        start -= 1;
    }
    text[start..]
        .chars()
        .next()
        .map_or(text.len(), |c| start + c.len_utf8())
}

/// Linear scan for `needle` in `haystack`.
fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
