//! Transcript entries and session status.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::attachment::Attachment;

/// Fixed identity of the synthetic greeting message.
pub const GREETING_ID: &str = "welcome";

/// Who produced a transcript entry.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The end user.
    User,

    /// The assistant.
    Bot,

    /// Synthetic notices that are neither user input nor model output.
    System,
}

/// Process-wide conversation status. Exactly one holds at a time.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatStatus {
    /// No request outstanding.
    Idle,

    /// One request in flight; new submissions are disabled.
    Thinking,

    /// Reserved for incremental rendering; not reached by the current
    /// turn protocol.
    Streaming,

    /// The last turn failed. Not sticky; the next send proceeds normally.
    Error,
}

/// One transcript entry. Immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    /// Unique id, monotonic within the transcript.
    pub id: String,

    /// UTF-8 content; Markdown source for bot messages.
    pub text: String,

    /// Who produced the message.
    pub sender: Sender,

    /// Creation instant, for display only.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,

    /// Marks a synthesized failure notice rather than model output.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,

    /// Files submitted with the message; only User messages carry any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl Message {
    /// Create a user message with the given attachments.
    pub fn user(id: impl Into<String>, text: impl Into<String>, attachments: Vec<Attachment>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            sender: Sender::User,
            timestamp: OffsetDateTime::now_utc(),
            is_error: false,
            attachments,
        }
    }

    /// Create a bot message carrying a model reply.
    pub fn bot(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            sender: Sender::Bot,
            timestamp: OffsetDateTime::now_utc(),
            is_error: false,
            attachments: Vec::new(),
        }
    }

    /// Create a bot message flagged as a failure notice.
    pub fn error_notice(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::bot(id, text)
        }
    }

    /// Create the synthetic greeting shown before any user interaction.
    pub fn greeting(text: impl Into<String>) -> Self {
        Self::bot(GREETING_ID, text)
    }

    /// Returns true if this is the greeting message.
    pub fn is_greeting(&self) -> bool {
        self.id == GREETING_ID
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_identity() {
        let msg = Message::greeting("hello");
        assert!(msg.is_greeting());
        assert_eq!(msg.sender, Sender::Bot);
        assert!(!msg.is_error);
    }

    #[test]
    fn error_notice_flagged() {
        let msg = Message::error_notice("42", "something went wrong");
        assert!(msg.is_error);
        assert_eq!(msg.sender, Sender::Bot);
    }

    #[test]
    fn user_message_keeps_attachment_order() {
        let attachments = vec![
            Attachment::new("a.csv", "text/csv", "YQ=="),
            Attachment::new("b.pdf", "application/pdf", "Yg=="),
        ];
        let msg = Message::user("1", "see files", attachments);
        assert_eq!(msg.attachments[0].name, "a.csv");
        assert_eq!(msg.attachments[1].name, "b.pdf");
    }

    #[test]
    fn serde_skips_empty_fields() {
        let msg = Message::bot("7", "hi");
        let json = serde_json::to_value(&msg).unwrap();
        assert!(json.get("is_error").is_none());
        assert!(json.get("attachments").is_none());
    }
}
