//! Gmail `raw` envelope encoding.
//!
//! Gmail's `users.messages.send` takes the full RFC 2822 message as
//! base64url without padding. [`encode_raw`] builds that envelope from a
//! [`MailMessage`]; [`decode_raw`] is its inverse.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONTENT_TYPE: &str = "text/html; charset=utf-8";
const CRLF: &str = "\r\n";
const ENCODED_WORD_PREFIX: &str = "=?UTF-8?B?";
const ENCODED_WORD_SUFFIX: &str = "?=";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MailError {
    #[error("'{0}' must not be empty")]
    MissingField(&'static str),

    #[error("header '{header}' must not contain line breaks")]
    HeaderInjection { header: &'static str },

    #[error("base64 decode failed: {0}")]
    Base64(String),

    #[error("message is not valid UTF-8")]
    Utf8,

    #[error("malformed message: {0}")]
    Malformed(String),
}

/// A composed message ready for encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
    pub to: String,
    pub subject: String,
    /// HTML body, sent as-is.
    pub body: String,
}

impl MailMessage {
    #[must_use]
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Require every field to be non-empty and refuse header values that
    /// would smuggle in extra headers. Whitespace counts as content.
    ///
    /// # Errors
    ///
    /// Returns [`MailError::MissingField`] or [`MailError::HeaderInjection`].
    pub fn validate(&self) -> Result<(), MailError> {
        for (name, value) in [("to", &self.to), ("subject", &self.subject), ("body", &self.body)] {
            if value.is_empty() {
                return Err(MailError::MissingField(name));
            }
        }
        if has_line_break(&self.to) {
            return Err(MailError::HeaderInjection { header: "To" });
        }
        if has_line_break(&self.subject) {
            return Err(MailError::HeaderInjection { header: "Subject" });
        }
        Ok(())
    }
}

/// Encode a message into Gmail's `raw` field.
///
/// # Errors
///
/// Returns the [`MailMessage::validate`] error if the message is incomplete or
/// unsafe to put in headers.
pub fn encode_raw(message: &MailMessage) -> Result<String, MailError> {
    message.validate()?;

    let envelope = [
        format!("Content-Type: {CONTENT_TYPE}"),
        "MIME-Version: 1.0".to_string(),
        format!("To: {}", message.to),
        format!("Subject: {}", encode_subject(&message.subject)),
        String::new(),
        message.body.clone(),
    ]
    .join(CRLF);

    Ok(URL_SAFE_NO_PAD.encode(envelope))
}

/// Decode a `raw` envelope back into its message.
///
/// # Errors
///
/// Returns [`MailError::Base64`], [`MailError::Utf8`], or
/// [`MailError::Malformed`] when the input is not an envelope produced by
/// [`encode_raw`] (or an equivalent one).
pub fn decode_raw(raw: &str) -> Result<MailMessage, MailError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(raw.trim_end_matches('='))
        .map_err(|e| MailError::Base64(e.to_string()))?;
    let envelope = String::from_utf8(bytes).map_err(|_| MailError::Utf8)?;

    let (head, body) = envelope
        .split_once("\r\n\r\n")
        .ok_or_else(|| MailError::Malformed("no blank line after headers".into()))?;

    let mut to = None;
    let mut subject = None;
    for line in head.split(CRLF) {
        let (name, value) = line
            .split_once(": ")
            .ok_or_else(|| MailError::Malformed(format!("bad header line '{line}'")))?;
        if name.eq_ignore_ascii_case("to") {
            to = Some(value.to_string());
        } else if name.eq_ignore_ascii_case("subject") {
            subject = Some(decode_subject(value)?);
        }
    }

    Ok(MailMessage {
        to: to.ok_or_else(|| MailError::Malformed("missing To header".into()))?,
        subject: subject.ok_or_else(|| MailError::Malformed("missing Subject header".into()))?,
        body: body.to_string(),
    })
}

fn has_line_break(value: &str) -> bool {
    value.contains(['\r', '\n'])
}

/// RFC 2047 `B` encoding for subjects that are not plain ASCII, or that
/// would otherwise be mistaken for an encoded word on the way back.
fn encode_subject(subject: &str) -> String {
    if subject.is_ascii() && !subject.starts_with("=?") {
        subject.to_string()
    } else {
        format!(
            "{ENCODED_WORD_PREFIX}{}{ENCODED_WORD_SUFFIX}",
            STANDARD.encode(subject)
        )
    }
}

fn decode_subject(value: &str) -> Result<String, MailError> {
    let Some(encoded) = value
        .strip_prefix(ENCODED_WORD_PREFIX)
        .and_then(|rest| rest.strip_suffix(ENCODED_WORD_SUFFIX))
    else {
        return Ok(value.to_string());
    };
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| MailError::Base64(e.to_string()))?;
    String::from_utf8(bytes).map_err(|_| MailError::Utf8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn message(subject: &str, body: &str) -> MailMessage {
        MailMessage::new("parent@example.com", subject, body)
    }

    #[test]
    fn round_trip_plain_message() {
        let original = message("Field trip Friday", "<p>Bring a water bottle.</p>");
        let decoded = decode_raw(&encode_raw(&original).unwrap()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn round_trip_keeps_unicode_and_whitespace() {
        let original = message(
            "  Ciência da Terra 🌋 — quiz  ",
            "Line one\r\n\r\nLine three after a blank line\nand a bare LF 🌱",
        );
        let decoded = decode_raw(&encode_raw(&original).unwrap()).unwrap();
        assert_eq!(decoded.subject, original.subject);
        assert_eq!(decoded.body, original.body);
    }

    #[test]
    fn round_trip_whitespace_only_fields() {
        let original = message("   ", " ");
        let decoded = decode_raw(&encode_raw(&original).unwrap()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn round_trip_subject_that_looks_encoded() {
        let original = message("=?UTF-8?B?not really?=", "body");
        let decoded = decode_raw(&encode_raw(&original).unwrap()).unwrap();
        assert_eq!(decoded.subject, original.subject);
    }

    #[test]
    fn envelope_is_url_safe_without_padding() {
        let raw = encode_raw(&message("???>>>", "??>>??>>")).unwrap();
        assert!(!raw.contains('+'));
        assert!(!raw.contains('/'));
        assert!(!raw.ends_with('='));
    }

    #[test]
    fn envelope_headers_match_gmail_layout() {
        let raw = encode_raw(&message("Hello", "World")).unwrap();
        let text = String::from_utf8(URL_SAFE_NO_PAD.decode(raw).unwrap()).unwrap();
        assert_eq!(
            text,
            "Content-Type: text/html; charset=utf-8\r\n\
             MIME-Version: 1.0\r\n\
             To: parent@example.com\r\n\
             Subject: Hello\r\n\
             \r\n\
             World"
        );
    }

    #[test]
    fn empty_fields_are_rejected() {
        assert_eq!(
            encode_raw(&MailMessage::new("", "s", "b")),
            Err(MailError::MissingField("to"))
        );
        assert_eq!(
            encode_raw(&MailMessage::new("a@b.c", "", "b")),
            Err(MailError::MissingField("subject"))
        );
        assert_eq!(
            encode_raw(&MailMessage::new("a@b.c", "s", "")),
            Err(MailError::MissingField("body"))
        );
    }

    #[test]
    fn header_injection_is_rejected() {
        assert_eq!(
            encode_raw(&message("hi\r\nBcc: everyone@example.com", "b")),
            Err(MailError::HeaderInjection { header: "Subject" })
        );
        assert_eq!(
            encode_raw(&MailMessage::new("a@b.c\nCc: x@y.z", "s", "b")),
            Err(MailError::HeaderInjection { header: "To" })
        );
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(decode_raw("***"), Err(MailError::Base64(_))));
        let no_blank_line = URL_SAFE_NO_PAD.encode("To: a@b.c\r\nSubject: s");
        assert!(matches!(decode_raw(&no_blank_line), Err(MailError::Malformed(_))));
        let no_subject = URL_SAFE_NO_PAD.encode("To: a@b.c\r\n\r\nbody");
        assert!(matches!(decode_raw(&no_subject), Err(MailError::Malformed(_))));
    }
}
