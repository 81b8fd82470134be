// Public modules
pub mod attachment;
pub mod chat;
pub mod client;
pub mod credentials;
pub mod error;
pub mod observability;
pub mod types;

// Re-exports
pub use attachment::Attachment;
pub use client::Gemini;
pub use error::{Error, Result};
pub use types::*;
