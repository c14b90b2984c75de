//! HTML extraction from EML (MIME) files.
//!
//! EML input is decoded before analysis ever sees it: the analyzer pipeline
//! only works on an HTML string. Extraction walks the MIME parts for a
//! `text/html` part, honoring base64 and quoted-printable transfer
//! encodings, and falls back to scanning for an embedded HTML block when the
//! message is not multipart.

use base64::Engine;
use regex::Regex;
use std::sync::LazyLock;

static BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)boundary="?([^"\s;]+)"?"#).expect("valid boundary regex"));

static HEADER_BODY_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n\r?\n").expect("valid split regex"));

static DOCTYPE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<!DOCTYPE html.*?</html>").expect("valid doctype regex"));

static HTML_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<html.*?</html>").expect("valid html regex"));

/// Extract the HTML body from raw EML content.
///
/// Returns `None` when no `text/html` part or embedded HTML block is found.
pub fn extract_html_from_eml(eml: &str) -> Option<String> {
    if let Some(caps) = BOUNDARY.captures(eml) {
        let boundary = caps.get(1).map_or("", |m| m.as_str());
        let marker = format!("--{boundary}");

        for part in eml.split(marker.as_str()) {
            let lowered = part.to_lowercase();
            if !lowered.contains("content-type: text/html")
                && !lowered.contains("content-type:text/html")
            {
                continue;
            }

            // Body starts after the first blank line following the part headers
            let mut sections = HEADER_BODY_SPLIT.split(part);
            let _headers = sections.next();
            let body = sections.collect::<Vec<_>>().join("\n");

            if lowered.contains("content-transfer-encoding: base64") {
                let compact: String = body.chars().filter(|c| !c.is_whitespace()).collect();
                if let Ok(bytes) = base64::engine::general_purpose::STANDARD.decode(compact) {
                    return Some(String::from_utf8_lossy(&bytes).into_owned());
                }
                // Decoding failed: fall through and return the body as-is
            }

            if lowered.contains("content-transfer-encoding: quoted-printable") {
                return Some(decode_quoted_printable(&body));
            }

            return Some(body.trim().to_string());
        }
    }

    // Not multipart (or no html part found between boundaries): look for an
    // HTML block directly in the content.
    if let Some(m) = DOCTYPE_BLOCK.find(eml) {
        return Some(m.as_str().to_string());
    }
    HTML_BLOCK.find(eml).map(|m| m.as_str().to_string())
}

/// Decode a quoted-printable encoded string.
///
/// Soft line breaks (`=` at end of line) are removed; `=XX` hex escapes are
/// decoded at the byte level so multi-byte UTF-8 sequences survive. An `=`
/// not followed by two hex digits passes through unchanged.
pub fn decode_quoted_printable(input: &str) -> String {
    let mut out: Vec<u8> = Vec::with_capacity(input.len());
    let bytes = input.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'=' {
            // Soft line break: =\r\n or =\n
            if bytes.get(i + 1) == Some(&b'\r') && bytes.get(i + 2) == Some(&b'\n') {
                i += 3;
                continue;
            }
            if bytes.get(i + 1) == Some(&b'\n') {
                i += 2;
                continue;
            }
            // Hex escape: =XX
            if let (Some(hi), Some(lo)) = (
                bytes.get(i + 1).copied().and_then(hex_digit),
                bytes.get(i + 2).copied().and_then(hex_digit),
            ) {
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
