//! RFC 5322 message synthesis.
//!
//! The spam-check service scores complete messages, not bare HTML bodies, so
//! a minimal header block is prepended before the call.

use chrono::Utc;

/// Service-side size limit on the submitted message.
pub const MAX_MESSAGE_CHARS: usize = 1_000_000;

pub const DEFAULT_FROM: &str = "newsletter@example.com";
pub const DEFAULT_TO: &str = "recipient@example.com";
pub const DEFAULT_SUBJECT: &str = "Email analysis";

/// Build a minimal RFC 5322 message around an HTML body.
///
/// Six headers joined by CRLF, a blank line, then the body verbatim.
pub fn synthesize_message(html: &str, from: &str, to: &str, subject: &str) -> String {
    let headers = [
        format!("From: {from}"),
        format!("To: {to}"),
        format!("Subject: {subject}"),
        "MIME-Version: 1.0".to_string(),
        "Content-Type: text/html; charset=UTF-8".to_string(),
        format!("Date: {}", Utc::now().to_rfc2822()),
    ]
    .join("\r\n");

    format!("{headers}\r\n\r\n{html}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_block_layout() {
        let message = synthesize_message(
            "<html><body>Bonjour</body></html>",
            DEFAULT_FROM,
            DEFAULT_TO,
            "Offre du mois",
        );
        let (headers, body) = message.split_once("\r\n\r\n").expect("blank line separator");
        let lines: Vec<&str> = headers.split("\r\n").collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "From: newsletter@example.com");
        assert_eq!(lines[2], "Subject: Offre du mois");
        assert_eq!(lines[3], "MIME-Version: 1.0");
        assert_eq!(lines[4], "Content-Type: text/html; charset=UTF-8");
        assert!(lines[5].starts_with("Date: "));
        assert_eq!(body, "<html><body>Bonjour</body></html>");
    }

    #[test]
    fn test_body_is_verbatim() {
        let html = "<html>\n<body>\nmixed line endings\r\n</body>\n</html>";
        let message = synthesize_message(html, DEFAULT_FROM, DEFAULT_TO, DEFAULT_SUBJECT);
        assert!(message.ends_with(html));
    }
}
