//! Chat application module for interactive consultations with Dr. Nana.
//!
//! This module provides a REPL chat interface built on top of the citebot
//! client library. It supports:
//!
//! - A persona-driven APA 7 citation assistant
//! - Thai/English display language switching
//! - File attachments (PDF, image, CSV) sent inline with a message
//! - Slash commands for session control
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: Core chat session management and turn lifecycle
//! - [`backend`]: The remote-completion seam and its Gemini implementation
//! - [`commands`]: Slash command parsing and handling
//! - [`locale`] and [`prompts`]: Localized UI text and the persona knowledge base

mod backend;
mod commands;
mod config;
mod locale;
mod message;
mod prompts;
mod render;
mod session;

pub use backend::{CompletionBackend, FALLBACK_REPLY, GeminiBackend};
pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig};
pub use locale::{Language, UiText, suggestion_questions, ui_text, welcome_message};
pub use message::{ChatStatus, GREETING_ID, Message, Sender};
pub use prompts::{Localized, MENU, MenuEntry, MenuSection, SYSTEM_INSTRUCTION, menu_entry};
pub use render::{PlainTextRenderer, Renderer};
pub use session::{ChatSession, SendOutcome};
