//! This module contains reusable components for decoding text in DICOM
//! data structures.
//!
//! Text is decoded as UTF-8 first. Buffers which are not valid UTF-8
//! fall back to ISO-8859-1, the most common single-byte repertoire in
//! legacy exports, so that text decoding never fails outright.

use encoding::all::{ISO_8859_1, UTF_8};
use encoding::{DecoderTrap, Encoding};

/// Decode the given byte buffer as a single string.
///
/// The resulting string may contain backslash characters (`'\'`) to
/// delimit individual values; see [`split_values`] for that step.
/// This function does not fail: undecodable input degrades to a
/// lossy reading rather than an error.
pub fn decode_text(text: &[u8]) -> String {
    match UTF_8.decode(text, DecoderTrap::Strict) {
        Ok(s) => s,
        Err(_) => ISO_8859_1
            .decode(text, DecoderTrap::Replace)
            .unwrap_or_else(|_| String::from_utf8_lossy(text).into_owned()),
    }
}

/// Strip the trailing padding (space or NUL) admitted by the encoding
/// rules, plus any surrounding whitespace.
pub fn trim_text(text: &str) -> &str {
    text.trim_matches(|c: char| c == '\0' || c.is_whitespace())
}

/// Split a multi-valued textual value on the `'\'` delimiter,
/// trimming each component. Empty components are kept so that value
/// positions remain meaningful.
pub fn split_values(text: &str) -> impl Iterator<Item = &str> {
    text.split('\\').map(trim_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_passes_through() {
        assert_eq!(decode_text(b"CHEST PA"), "CHEST PA");
    }

    #[test]
    fn latin1_fallback() {
        // "Müller" in ISO-8859-1; 0xFC is not valid UTF-8 here
        let bytes = [b'M', 0xFC, b'l', b'l', b'e', b'r'];
        assert_eq!(decode_text(&bytes), "M\u{fc}ller");
    }

    #[test]
    fn padding_is_trimmed() {
        assert_eq!(trim_text("TITLE "), "TITLE");
        assert_eq!(trim_text("1.2.840.10008.1.2.1\0"), "1.2.840.10008.1.2.1");
        assert_eq!(trim_text("  \0"), "");
    }

    #[test]
    fn multi_values_split_and_trim() {
        let parts: Vec<_> = split_values("DERIVED\\PRIMARY ").collect();
        assert_eq!(parts, vec!["DERIVED", "PRIMARY"]);
    }
}
