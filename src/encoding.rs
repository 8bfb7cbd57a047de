//! Character encoding detection and lossy decoding.
//!
//! Input arrives as bytes from files and HTTP responses. The charset is taken
//! from an explicit label (e.g. a `Content-Type` header) or from the
//! document's own `<meta>` declaration, defaulting to UTF-8. Bytes that do
//! not decode are replaced with U+FFFD; decoding never fails.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Number of leading bytes searched for a `<meta>` charset declaration.
const SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Match the charset parameter of a `Content-Type` value
#[allow(clippy::expect_used)]
static CONTENT_TYPE_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([^"'\s;]+)"#).expect("valid regex")
});

/// Detect character encoding from HTML bytes.
///
/// Looks at the first 1024 bytes for `<meta charset="...">` or the
/// `charset=` parameter of a `<meta http-equiv="Content-Type">` tag.
/// Unknown or missing labels fall back to UTF-8. A document that could
/// declare itself in ASCII cannot be UTF-16, so UTF-16 and the
/// `replacement` encoding map to UTF-8 here.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(SNIFF_LEN)];
    let head_str = String::from_utf8_lossy(head);

    extract_meta_charset(&head_str)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .map(Encoding::output_encoding)
        .unwrap_or(UTF_8)
}

/// Extract the charset named by a `<meta>` tag.
fn extract_meta_charset(html: &str) -> Option<&str> {
    CHARSET_META_RE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Extract the charset parameter from a `Content-Type` header value.
///
/// # Examples
///
/// ```
/// use extractcontent::encoding::charset_from_content_type;
///
/// assert_eq!(charset_from_content_type("text/html; charset=Shift_JIS"), Some("Shift_JIS"));
/// assert_eq!(charset_from_content_type("text/html"), None);
/// ```
#[must_use]
pub fn charset_from_content_type(content_type: &str) -> Option<&str> {
    CONTENT_TYPE_CHARSET_RE
        .captures(content_type)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Transcode HTML bytes to a UTF-8 string using the document's own declaration.
///
/// # Examples
///
/// ```
/// use extractcontent::encoding::transcode_to_utf8;
///
/// let html = b"<html><body>Hello, World!</body></html>";
/// let utf8_str = transcode_to_utf8(html);
/// assert!(utf8_str.contains("Hello, World!"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    decode(html, detect_encoding(html)).into_owned()
}

/// Decode bytes with an explicit charset label, falling back to the document's
/// declaration and then to UTF-8 when the label is missing or unknown.
#[must_use]
pub fn decode_with_label(html: &[u8], label: Option<&str>) -> String {
    let encoding = label
        .and_then(|label| Encoding::for_label(label.trim().as_bytes()))
        .unwrap_or_else(|| detect_encoding(html));
    decode(html, encoding).into_owned()
}

fn decode<'a>(html: &'a [u8], encoding: &'static Encoding) -> Cow<'a, str> {
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html);
    }

    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        log::debug!("replaced undecodable bytes while decoding as {}", used.name());
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_utf8_from_meta_charset() {
        let html = br#"<html><head><meta charset="utf-8"></head><body>Test</body></html>"#;
        assert_eq!(detect_encoding(html), UTF_8);
    }

    #[test]
    fn detect_shift_jis_from_meta_charset() {
        let html = br#"<html><head><meta charset="Shift_JIS"></head><body>Test</body></html>"#;
        assert_eq!(detect_encoding(html).name(), "Shift_JIS");
    }

    #[test]
    fn detect_charset_from_http_equiv() {
        let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=EUC-JP">"#;
        assert_eq!(detect_encoding(html).name(), "EUC-JP");
    }

    #[test]
    fn default_to_utf8_when_no_charset() {
        assert_eq!(detect_encoding(b"<html><body>Test</body></html>"), UTF_8);
    }

    #[test]
    fn unknown_label_defaults_to_utf8() {
        assert_eq!(detect_encoding(br#"<meta charset="no-such-charset">"#), UTF_8);
    }

    #[test]
    fn meta_declared_utf16_is_read_as_utf8() {
        assert_eq!(detect_encoding(br#"<meta charset="utf-16">"#), UTF_8);
        assert_eq!(detect_encoding(br#"<meta charset="UTF-16BE">"#), UTF_8);

        let html = "<meta charset=\"utf-16le\"><title>Caf\u{e9}</title>";
        assert_eq!(transcode_to_utf8(html.as_bytes()), html);
    }

    #[test]
    fn meta_declared_replacement_label_is_read_as_utf8() {
        let html = br#"<meta charset="iso-2022-kr"><p>Plain text</p>"#;
        assert_eq!(detect_encoding(html), UTF_8);
        assert!(transcode_to_utf8(html).contains("Plain text"));
    }

    #[test]
    fn explicit_utf16_label_is_honoured() {
        let html = [0x68, 0x00, 0x69, 0x00];
        assert_eq!(decode_with_label(&html, Some("utf-16le")), "hi");
    }

    #[test]
    fn transcode_shift_jis_to_utf8() {
        // "日本" in Shift_JIS
        let mut html = br#"<meta charset="Shift_JIS"><p>"#.to_vec();
        html.extend_from_slice(&[0x93, 0xFA, 0x96, 0x7B]);
        let result = transcode_to_utf8(&html);
        assert!(result.contains("日本"));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let result = transcode_to_utf8(b"Test \xFF\xFE Invalid");
        assert!(result.contains("Test"));
        assert!(result.contains('\u{FFFD}'));
        assert!(result.contains("Invalid"));
    }

    #[test]
    fn explicit_label_wins_over_meta() {
        let html = b"<meta charset=\"utf-8\">Caf\xE9";
        assert!(decode_with_label(html, Some("iso-8859-1")).contains("Café"));
    }

    #[test]
    fn unknown_explicit_label_falls_back() {
        let html = b"<p>plain</p>";
        assert_eq!(decode_with_label(html, Some("bogus")), "<p>plain</p>");
        assert_eq!(decode_with_label(html, None), "<p>plain</p>");
    }

    #[test]
    fn content_type_charset_parsing() {
        assert_eq!(charset_from_content_type("text/html; charset=\"UTF-8\""), Some("UTF-8"));
        assert_eq!(charset_from_content_type("text/html;charset=euc-jp"), Some("euc-jp"));
        assert_eq!(charset_from_content_type("application/xhtml+xml"), None);
    }
}
