pub const ALPHABET: &[u8] = "abcdefghijklmnopqrstuvwxyz".as_bytes();

/// Sentinel letter carried by the root node. Never compared against.
pub const ROOT_LETTER: char = ' ';

/// Characters a pattern may name literally: `a` to `z` only.
///
/// `insert` stores whatever characters it is given, so a word holding
/// anything else (`don't`) can only be reached through wildcards.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_lowercase()
}

/// Trim surrounding whitespace and lowercase, the form every word is stored in.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
