use serde::{Deserialize, Serialize};

use crate::types::Part;

/// Role attached to a content turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentRole {
    /// The end user.
    User,

    /// The model.
    Model,
}

/// One turn of a conversation: a role plus an ordered sequence of parts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Content {
    /// The role that produced this turn.
    pub role: ContentRole,

    /// Ordered parts making up the turn.
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a new content turn.
    pub fn new(role: ContentRole, parts: Vec<Part>) -> Self {
        Self { role, parts }
    }

    /// Create a user turn from plain text.
    pub fn user_text(text: impl Into<String>) -> Self {
        Self::new(ContentRole::User, vec![Part::text(text)])
    }

    /// Create a user turn from an ordered sequence of parts.
    pub fn user_parts(parts: Vec<Part>) -> Self {
        Self::new(ContentRole::User, parts)
    }

    /// Create a model turn from plain text.
    pub fn model_text(text: impl Into<String>) -> Self {
        Self::new(ContentRole::Model, vec![Part::text(text)])
    }

    /// Concatenates the text of all text parts, or `None` if there are none.
    pub fn text(&self) -> Option<String> {
        let pieces: Vec<&str> = self.parts.iter().filter_map(Part::as_text).collect();
        if pieces.is_empty() {
            None
        } else {
            Some(pieces.concat())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Blob;
    use serde_json::{json, to_value};

    #[test]
    fn user_text_serialization() {
        let content = Content::user_text("Hello");
        assert_eq!(
            to_value(&content).unwrap(),
            json!({"role": "user", "parts": [{"text": "Hello"}]})
        );
    }

    #[test]
    fn text_extraction_skips_inline_data() {
        let content = Content::user_parts(vec![
            Part::inline_data(Blob::new("image/png", "aGk=")),
            Part::text("describe this"),
        ]);
        assert_eq!(content.text(), Some("describe this".to_string()));
    }

    #[test]
    fn text_extraction_empty() {
        let content = Content::user_parts(vec![Part::inline_data(Blob::new("image/png", "aGk="))]);
        assert_eq!(content.text(), None);
    }
}
