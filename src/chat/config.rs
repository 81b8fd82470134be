//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling chat behavior.

use arrrg_derive::CommandLine;

use crate::chat::locale::Language;
use crate::chat::prompts::SYSTEM_INSTRUCTION;
use crate::types::{GenerationConfig, KnownModel, Model};

/// Default sampling temperature; kept low for citation accuracy.
const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Default top-p nucleus sampling value.
const DEFAULT_TOP_P: f32 = 0.95;

/// Default top-k sampling limit.
const DEFAULT_TOP_K: u32 = 64;

/// Default maximum tokens per response.
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 8192;

/// Command-line arguments for the citebot-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Model to use for chat.
    #[arrrg(optional, "Model to use (default: gemini-2.5-flash)", "MODEL")]
    pub model: Option<String>,

    /// Display language at startup.
    #[arrrg(optional, "Display language: th or en (default: th)", "LANG")]
    pub lang: Option<String>,

    /// API key override; takes precedence over the environment and the key file.
    #[arrrg(optional, "Google AI Studio API key", "KEY")]
    pub api_key: Option<String>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Configuration for a chat session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// The model to use for generating responses.
    pub model: Model,

    /// Display language at startup.
    pub language: Language,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,

    /// Sampling temperature.
    pub temperature: f32,

    /// Top-p nucleus sampling value.
    pub top_p: f32,

    /// Top-k sampling limit.
    pub top_k: u32,

    /// Maximum tokens per response.
    pub max_output_tokens: u32,

    /// Persona instruction sent with every request.
    pub system_instruction: String,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Model: gemini-2.5-flash
    /// - Language: Thai
    /// - Color: enabled
    /// - Sampling: temperature 0.3, top-p 0.95, top-k 64
    /// - Max output tokens: 8192
    pub fn new() -> Self {
        Self {
            model: Model::Known(KnownModel::Gemini25Flash),
            language: Language::Th,
            use_color: true,
            temperature: DEFAULT_TEMPERATURE,
            top_p: DEFAULT_TOP_P,
            top_k: DEFAULT_TOP_K,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            system_instruction: SYSTEM_INSTRUCTION.to_string(),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Sets the startup display language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the top-p value.
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    /// Sets the top-k value.
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    /// Sets the maximum tokens per response.
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Sets the persona instruction.
    pub fn with_system_instruction(mut self, instruction: String) -> Self {
        self.system_instruction = instruction;
        self
    }

    /// The per-request generation parameters derived from this config.
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig::new()
            .with_temperature(self.temperature)
            .with_top_p(self.top_p)
            .with_top_k(self.top_k)
            .with_max_output_tokens(self.max_output_tokens)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        let model = args
            .model
            .map(|s| s.parse::<Model>().unwrap_or(Model::Custom(s)))
            .unwrap_or(Model::Known(KnownModel::Gemini25Flash));
        let language = args
            .lang
            .and_then(|s| s.parse::<Language>().ok())
            .unwrap_or(Language::Th);

        ChatConfig {
            model,
            language,
            use_color: !args.no_color,
            ..ChatConfig::new()
        }
    }
}
