use serde::{Deserialize, Serialize};

use crate::types::Blob;

/// One fragment of a content turn: either plain text or inline binary data.
///
/// On the wire a part is an object with exactly one of the `text` or
/// `inlineData` keys, so the enum serializes untagged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Part {
    /// A text fragment.
    Text {
        /// The text content.
        text: String,
    },

    /// An inline-data fragment carrying encoded file content.
    InlineData {
        /// MIME type and base64 payload.
        #[serde(rename = "inlineData")]
        inline_data: Blob,
    },
}

impl Part {
    /// Create a text part.
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    /// Create an inline-data part.
    pub fn inline_data(blob: Blob) -> Self {
        Part::InlineData { inline_data: blob }
    }

    /// Returns the text content if this is a text part.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text),
            Part::InlineData { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn text_part_serialization() {
        let part = Part::text("Cite a book");
        assert_eq!(to_value(&part).unwrap(), json!({"text": "Cite a book"}));
    }

    #[test]
    fn inline_data_part_serialization() {
        let part = Part::inline_data(Blob::new("application/pdf", "JVBERg=="));
        assert_eq!(
            to_value(&part).unwrap(),
            json!({"inlineData": {"mimeType": "application/pdf", "data": "JVBERg=="}})
        );
    }

    #[test]
    fn deserialization_picks_variant() {
        let part: Part = serde_json::from_str(r#"{"text":"hello"}"#).unwrap();
        assert_eq!(part.as_text(), Some("hello"));

        let part: Part =
            serde_json::from_str(r#"{"inlineData":{"mimeType":"text/csv","data":"YQ=="}}"#)
                .unwrap();
        assert!(part.as_text().is_none());
    }
}
