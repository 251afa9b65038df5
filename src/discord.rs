use serde_json::Value;
use tracing::{error, info};

use crate::error::NotifyError;

/// Discord's cap on a message's `content`, in characters.
pub const CONTENT_LIMIT: usize = 2000;
pub const DIGEST_FILENAME: &str = "digest.txt";
const BOUNDARY: &str = "nba-game-digest-boundary";

/// Broadcast channel for the daily digest.
pub trait Notifier {
    fn publish(&self, subject: &str, message: &str) -> Result<(), NotifyError>;
}

/// What a publish sends: inline content when it fits, otherwise a short note with the
/// digest as a text file.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookMessage {
    Inline(Value),
    Attachment { payload: Value, filename: String, body: String },
}

/// Discord-compatible webhook client encapsulating the hook URL.
#[derive(Debug, Clone)]
pub struct Discord {
    hook_url: String,
}

impl Discord {
    pub fn new(hook_url: String) -> Self {
        Self { hook_url }
    }

    /// Subject in bold on the first line, then the body.
    pub fn message(subject: &str, message: &str) -> WebhookMessage {
        let content = format!("**{}**\n{}", subject, message);
        if content.chars().count() <= CONTENT_LIMIT {
            return WebhookMessage::Inline(serde_json::json!({ "content": content }));
        }
        let note = format!(
            "**{}**\nDigest is {} characters, see attached {}.",
            subject,
            message.chars().count(),
            DIGEST_FILENAME
        );
        WebhookMessage::Attachment {
            payload: serde_json::json!({ "content": note }),
            filename: DIGEST_FILENAME.to_string(),
            body: message.to_string(),
        }
    }

    /// Encode a `multipart/form-data` body with `payload_json` and one file part.
    /// Returns the boundary used and the bytes.
    pub fn multipart(payload: &Value, filename: &str, body: &str) -> (String, Vec<u8>) {
        let payload = payload.to_string();
        let mut boundary = BOUNDARY.to_string();
        while body.contains(&boundary) || payload.contains(&boundary) {
            boundary.push('x');
        }

        let mut out = String::with_capacity(body.len() + payload.len() + 256);
        out.push_str(&format!("--{}\r\n", boundary));
        out.push_str("Content-Disposition: form-data; name=\"payload_json\"\r\n");
        out.push_str("Content-Type: application/json\r\n\r\n");
        out.push_str(&payload);
        out.push_str(&format!("\r\n--{}\r\n", boundary));
        out.push_str(&format!(
            "Content-Disposition: form-data; name=\"files[0]\"; filename=\"{}\"\r\n",
            filename
        ));
        out.push_str("Content-Type: text/plain; charset=utf-8\r\n\r\n");
        out.push_str(body);
        out.push_str(&format!("\r\n--{}--\r\n", boundary));
        (boundary, out.into_bytes())
    }

    /// Post a simple JSON payload.
    pub fn post(&self, payload: Value) -> Result<(), NotifyError> {
        Self::report(ureq::post(&self.hook_url).send_json(payload))
    }

    /// Post a payload with one text file attached.
    pub fn post_with_attachment(&self, payload: &Value, filename: &str, body: &str) -> Result<(), NotifyError> {
        let (boundary, bytes) = Self::multipart(payload, filename, body);
        let result = ureq::post(&self.hook_url)
            .header("Content-Type", format!("multipart/form-data; boundary={}", boundary))
            .send(&bytes[..]);
        Self::report(result)
    }

    fn report(result: Result<ureq::http::Response<ureq::Body>, ureq::Error>) -> Result<(), NotifyError> {
        match result {
            Ok(resp) => {
                info!(status = resp.status().as_u16(), "Posted digest to webhook");
                Ok(())
            }
            Err(ureq::Error::StatusCode(code)) => {
                error!(status = code, "Webhook rejected digest");
                Err(NotifyError::Rejected { message: format!("webhook returned HTTP {}", code) })
            }
            Err(e) => {
                error!(error = %e, "Failed to post to webhook");
                Err(e.into())
            }
        }
    }
}

impl Notifier for Discord {
    fn publish(&self, subject: &str, message: &str) -> Result<(), NotifyError> {
        match Self::message(subject, message) {
            WebhookMessage::Inline(payload) => self.post(payload),
            WebhookMessage::Attachment { payload, filename, body } => {
                info!(chars = body.chars().count(), "Digest exceeds content limit, attaching");
                self.post_with_attachment(&payload, &filename, &body)
            }
        }
    }
}
