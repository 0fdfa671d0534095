//! Charset detection for fetched and cached pages.
//!
//! Wiki pages are almost always UTF-8, but cached copies of older mirrors are
//! not. The charset is taken from, in order: a byte-order mark, the HTTP
//! `Content-Type` header (when known), a `<meta>` declaration in the first
//! kilobyte, and finally UTF-8.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// How many leading bytes are searched for a `<meta>` declaration.
const SNIFF_LEN: usize = 1024;

/// `<meta charset=...>` and the `http-equiv` form share the `charset=` tail.
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>/]+)"#).expect("META_CHARSET_RE regex")
});

/// `charset=` parameter of a `Content-Type` header value.
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).expect("HEADER_CHARSET_RE regex")
});

/// Detect the encoding of a page from its bytes alone.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    detect_with_header(html, None)
}

/// Detect the encoding, letting a `Content-Type` header override `<meta>`.
#[must_use]
pub fn detect_with_header(html: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let from_header = content_type
        .and_then(|value| capture(&HEADER_CHARSET_RE, value))
        .and_then(|label| Encoding::for_label(label.as_bytes()));
    if let Some(encoding) = from_header {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    capture(&META_CHARSET_RE, &head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode page bytes to UTF-8, replacing invalid sequences with U+FFFD.
///
/// ```
/// use nes_catalog::encoding::transcode_to_utf8;
///
/// let page = b"<meta charset=\"windows-1252\"><td>Caf\xE9</td>";
/// assert!(transcode_to_utf8(page).contains("Café"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    decode(html, None)
}

/// Decode page bytes using the HTTP `Content-Type` header as a hint.
#[must_use]
pub fn decode(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_with_header(html, content_type);
    // `decode` strips a BOM and falls back to lossy replacement.
    let (text, _, _) = encoding.decode(html);
    text.into_owned()
}

fn capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_utf8() {
        assert_eq!(detect_encoding(b"<table><tr><td>x</td></tr></table>"), UTF_8);
    }

    #[test]
    fn meta_charset_is_honoured() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head></html>"#;
        // WHATWG maps latin1 labels to windows-1252.
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn http_equiv_form_is_honoured() {
        let html = br#"<META HTTP-EQUIV="Content-Type" CONTENT="text/html; charset=windows-1252">"#;
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn header_overrides_meta() {
        let html = br#"<meta charset="windows-1252">"#;
        let encoding = detect_with_header(html, Some("text/html; charset=UTF-8"));
        assert_eq!(encoding, UTF_8);
    }

    #[test]
    fn unknown_header_label_falls_back_to_meta() {
        let html = br#"<meta charset="windows-1252">"#;
        let encoding = detect_with_header(html, Some("text/html; charset=bogus"));
        assert_eq!(encoding.name(), "windows-1252");
    }

    #[test]
    fn bom_wins_over_everything() {
        let mut html = vec![0xEF, 0xBB, 0xBF];
        html.extend_from_slice(br#"<meta charset="windows-1252">"#);
        assert_eq!(detect_with_header(&html, Some("charset=windows-1252")), UTF_8);
    }

    #[test]
    fn latin1_bytes_are_transcoded() {
        let html = b"<meta charset=\"ISO-8859-1\"><td>Pok\xE9mon</td>";
        assert!(transcode_to_utf8(html).contains("Pokémon"));
    }

    #[test]
    fn invalid_utf8_does_not_panic() {
        let text = transcode_to_utf8(b"<td>Zelda \xFF\xFE II</td>");
        assert!(text.contains("Zelda"));
        assert!(text.contains("II"));
    }
}
