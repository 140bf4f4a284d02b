//! Character encoding detection and transcoding.
//!
//! Title pages are served in whatever charset the upstream site picked
//! (older layouts declare ISO-8859-1). Fetched bytes are decoded here before
//! parsing so node text always reaches the shaper as UTF-8.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// How many leading bytes are scanned for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#)
        .expect("valid regex")
});

/// Detect the character encoding of a fetched page.
///
/// Order of precedence:
/// 1. Byte order mark
/// 2. `<meta http-equiv="Content-Type" ...; charset=...>`
/// 3. `<meta charset=...>`
/// 4. UTF-8
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Charset label declared in the document head, if any.
fn declared_charset(head: &str) -> Option<String> {
    [&*HTTP_EQUIV_CHARSET_RE, &*META_CHARSET_RE]
        .into_iter()
        .find_map(|re| re.captures(head))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Transcode page bytes to a UTF-8 string.
///
/// Malformed sequences become U+FFFD rather than failing the fetch.
///
/// ```
/// use movie_grabber::encoding::transcode_to_utf8;
///
/// let page = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Am\xE9lie</body></html>";
/// assert!(transcode_to_utf8(page).contains("Amélie"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    // decode() strips a matching BOM itself
    let (decoded, _used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}
