//! The remote-completion seam between the session controller and the API.
//!
//! [`CompletionBackend`] is the "send one turn, get one reply" contract the
//! session controller depends on; [`GeminiBackend`] implements it over the
//! [`Gemini`] client, owning the opaque conversation handle that accumulates
//! context across turns.

use crate::attachment::Attachment;
use crate::chat::config::ChatConfig;
use crate::client::Gemini;
use crate::error::Result;
use crate::types::{
    Blob, Content, ContentRole, GenerateContentRequest, Model, Part, SystemInstruction,
};

/// Reply substituted when the service returns a response with no usable text,
/// so the caller always has renderable content on success.
pub const FALLBACK_REPLY: &str = "I'm sorry, I couldn't generate a response.";

/// One-turn completion contract consumed by the session controller.
#[async_trait::async_trait]
pub trait CompletionBackend {
    /// Sends one user turn and returns the reply text.
    ///
    /// When attachments are present the outbound turn is one inline-data
    /// part per attachment, in order, followed by a text part only if the
    /// text is non-empty. Transport and service errors propagate unchanged.
    async fn send_turn(&mut self, text: &str, attachments: &[Attachment]) -> Result<String>;
}

/// Conversation context reused across turns.
///
/// Created lazily on the first send; replaced when the credential changes.
#[derive(Debug, Default)]
struct ChatHandle {
    contents: Vec<Content>,
}

/// [`CompletionBackend`] implementation over the Gemini API.
pub struct GeminiBackend {
    client: Gemini,
    config: ChatConfig,
    handle: Option<ChatHandle>,
}

impl GeminiBackend {
    /// Creates a backend; the conversation handle is not created until the
    /// first send.
    pub fn new(client: Gemini, config: ChatConfig) -> Self {
        Self {
            client,
            config,
            handle: None,
        }
    }

    /// Swaps the client (e.g. after a credential change) and drops the
    /// conversation handle so the next send starts a fresh context.
    pub fn reconfigure(&mut self, client: Gemini) {
        self.client = client;
        self.handle = None;
    }

    /// The model used for subsequent turns.
    pub fn model(&self) -> &Model {
        &self.config.model
    }

    /// Changes the model; existing context carries over.
    pub fn set_model(&mut self, model: Model) {
        self.config.model = model;
    }

    /// Builds the ordered parts of one outbound turn: attachments first,
    /// then the text, and no empty trailing text part.
    fn build_parts(text: &str, attachments: &[Attachment]) -> Vec<Part> {
        let mut parts = Vec::with_capacity(attachments.len() + 1);
        for attachment in attachments {
            parts.push(Part::inline_data(Blob::new(
                attachment.mime_type.clone(),
                attachment.data.clone(),
            )));
        }
        if !text.is_empty() {
            parts.push(Part::text(text));
        }
        parts
    }
}

#[async_trait::async_trait]
impl CompletionBackend for GeminiBackend {
    async fn send_turn(&mut self, text: &str, attachments: &[Attachment]) -> Result<String> {
        let handle = self.handle.get_or_insert_with(ChatHandle::default);
        let previous_len = handle.contents.len();

        let turn = if attachments.is_empty() {
            Content::user_text(text)
        } else {
            Content::user_parts(Self::build_parts(text, attachments))
        };
        handle.contents.push(turn);

        let request = GenerateContentRequest::new(handle.contents.clone())
            .with_system_instruction(SystemInstruction::from_text(
                self.config.system_instruction.clone(),
            ))
            .with_generation_config(self.config.generation_config());

        match self
            .client
            .generate_content(&self.config.model, &request)
            .await
        {
            Ok(response) => {
                let reply = response
                    .text()
                    .filter(|text| !text.is_empty())
                    .unwrap_or_else(|| FALLBACK_REPLY.to_string());
                handle
                    .contents
                    .push(Content::new(ContentRole::Model, vec![Part::text(&reply)]));
                Ok(reply)
            }
            Err(err) => {
                // The failed turn must not poison the context for the retry.
                handle.contents.truncate(previous_len);
                Err(err)
            }
        }
    }
}
