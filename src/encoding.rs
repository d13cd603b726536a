//! Character encoding detection and transcoding.
//!
//! Profile pages saved from the browser are not always UTF-8. This module
//! detects the charset from HTML meta tags, converts to UTF-8, and rejects
//! input that is not text at all.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Error, Result};

/// Only the head of the document is sniffed for a charset or binary data.
const SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">` or
/// `<meta http-equiv="Content-Type" content="...; charset=...">`
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("valid regex")
});

/// Detect character encoding from HTML bytes.
///
/// Falls back to UTF-8 when no (known) charset is declared.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

fn declared_charset(head: &str) -> Option<String> {
    META_CHARSET_RE
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Whether the input looks like binary data rather than markup text.
///
/// Only the first `SNIFF_LEN` bytes are inspected; a stray NUL further in is
/// left to the parser. NUL bytes never occur in HTML text in any of the encodings we decode.
#[must_use]
pub fn looks_binary(data: &[u8]) -> bool {
    data[..data.len().min(SNIFF_LEN)].contains(&0)
}

/// Decode HTML bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD rather than errors. Binary input is
/// rejected with [`Error::InvalidInput`].
///
/// # Examples
///
/// ```
/// use rs_profile_extract::encoding::decode_html;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(decode_html(html)?.contains("Café"));
/// # Ok::<(), rs_profile_extract::Error>(())
/// ```
pub fn decode_html(html: &[u8]) -> Result<String> {
    if looks_binary(html) {
        return Err(Error::InvalidInput("binary data (NUL bytes)".to_string()));
    }

    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return Ok(String::from_utf8_lossy(html).into_owned());
    }

    let (decoded, _encoding_used, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "replaced malformed byte sequences");
    }
    Ok(decoded.into_owned())
}
