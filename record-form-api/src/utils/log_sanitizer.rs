//! Log sanitization utilities
//!
//! Response bodies from the record endpoint hold people's names and ages and
//! a list call can return the whole collection, so bodies are clipped before
//! they reach debug/error logs.

/// Maximum number of bytes of a body to include in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Largest char boundary of `s` that is `<= limit`.
fn clip_index(s: &str, limit: usize) -> usize {
    s.char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= limit)
        .last()
        .unwrap_or(0)
}

/// Truncate a string for safe logging.
///
/// Strings within the limit are returned unchanged; longer strings keep their
/// first `TRUNCATE_LIMIT` bytes (rounded down to a char boundary) followed by
/// a marker with the full length.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let end = clip_index(s, TRUNCATE_LIMIT);
    format!("{}... [truncated, total {} bytes]", &s[..end], s.len())
}
