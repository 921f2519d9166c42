//! Content-type sniffing for receipt downloads.
//!
//! Detection works from the first 512 bytes of the file against a table of
//! well-known magic-byte signatures, with a UTF-8 text heuristic as the
//! penultimate fallback. Unknown binary content is served as
//! `application/octet-stream`.

/// Bytes considered when sniffing. Callers should hand over at most this
/// much of the file head; anything past it is ignored.
pub const SNIFF_LEN: usize = 512;

/// Signature table, checked in order. First match wins.
const SIGNATURES: &[(&[u8], &str)] = &[
    (b"%PDF-", "application/pdf"),
    (b"\x89PNG\r\n\x1a\n", "image/png"),
    (b"\xFF\xD8\xFF", "image/jpeg"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"PK\x03\x04", "application/zip"),
    (b"\x1F\x8B", "application/gzip"),
];

/// Detects the content type of a file from its leading bytes.
///
/// ## Example
/// ```rust,ignore
/// assert_eq!(detect_content_type(b"%PDF-1.7 ..."), "application/pdf");
/// ```
pub fn detect_content_type(head: &[u8]) -> &'static str {
    let head = &head[..head.len().min(SNIFF_LEN)];

    for (signature, content_type) in SIGNATURES {
        if head.starts_with(signature) {
            return content_type;
        }
    }

    if looks_like_text(head) {
        "text/plain; charset=utf-8"
    } else {
        "application/octet-stream"
    }
}

/// Valid UTF-8 with no control characters other than whitespace.
/// An empty head counts as text, matching the behavior of serving a
/// zero-length file as plain text.
fn looks_like_text(head: &[u8]) -> bool {
    match std::str::from_utf8(head) {
        Ok(text) => text
            .chars()
            .all(|c| !c.is_control() || matches!(c, '\n' | '\r' | '\t')),
        Err(_) => false,
    }
}
