use serde::{Deserialize, Serialize};

use crate::types::{Content, GenerationConfig};

/// Request body for a `generateContent` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// The conversation so far, oldest turn first.
    pub contents: Vec<Content>,

    /// System instructions applied to the whole conversation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,

    /// Generation parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Create a request from the accumulated conversation.
    pub fn new(contents: Vec<Content>) -> Self {
        Self {
            contents,
            system_instruction: None,
            generation_config: None,
        }
    }

    /// Sets the system instruction.
    pub fn with_system_instruction(mut self, instruction: SystemInstruction) -> Self {
        self.system_instruction = Some(instruction);
        self
    }

    /// Sets the generation config.
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}

/// System instruction payload: parts without a role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemInstruction {
    /// The instruction text, as parts.
    pub parts: Vec<crate::types::Part>,
}

impl SystemInstruction {
    /// Create a system instruction from plain text.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            parts: vec![crate::types::Part::text(text)],
        }
    }
}

/// Response body of a `generateContent` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidate completions; the first is the reply.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// The text of the first candidate, if it carries any.
    pub fn text(&self) -> Option<String> {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(Content::text)
    }
}

/// One candidate completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The generated turn.
    #[serde(default)]
    pub content: Option<Content>,

    /// Why generation stopped, e.g. "STOP" or "MAX_TOKENS".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Blob, Part};
    use serde_json::{json, to_value};

    #[test]
    fn request_serialization() {
        let request = GenerateContentRequest::new(vec![Content::user_text("Cite a book")])
            .with_system_instruction(SystemInstruction::from_text("You are an expert."))
            .with_generation_config(GenerationConfig::new().with_top_k(64));
        assert_eq!(
            to_value(&request).unwrap(),
            json!({
                "contents": [{"role": "user", "parts": [{"text": "Cite a book"}]}],
                "systemInstruction": {"parts": [{"text": "You are an expert."}]},
                "generationConfig": {"topK": 64}
            })
        );
    }

    #[test]
    fn request_omits_unset_sections() {
        let request = GenerateContentRequest::new(vec![]);
        assert_eq!(to_value(&request).unwrap(), json!({"contents": []}));
    }

    #[test]
    fn response_first_candidate_text() {
        let json = json!({
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "Author, A."}]}},
                {"content": {"role": "model", "parts": [{"text": "ignored"}]}}
            ]
        });
        let response: GenerateContentResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.text(), Some("Author, A.".to_string()));
    }

    #[test]
    fn response_without_text() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(response.text(), None);

        let json = json!({
            "candidates": [{"content": {"role": "model", "parts": []}}]
        });
        let response: GenerateContentResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn multimodal_request_part_order() {
        let parts = vec![
            Part::inline_data(Blob::new("text/csv", "YSxiLGM=")),
            Part::text("summarize"),
        ];
        let request = GenerateContentRequest::new(vec![Content::user_parts(parts)]);
        let value = to_value(&request).unwrap();
        let parts = &value["contents"][0]["parts"];
        assert!(parts[0].get("inlineData").is_some());
        assert_eq!(parts[1]["text"], "summarize");
    }
}
