// Public modules
pub mod blob;
pub mod content;
pub mod generate_content;
pub mod generation_config;
pub mod model;
pub mod part;

// Re-exports
pub use blob::Blob;
pub use content::{Content, ContentRole};
pub use generate_content::{
    Candidate, GenerateContentRequest, GenerateContentResponse, SystemInstruction,
};
pub use generation_config::GenerationConfig;
pub use model::{KnownModel, Model};
pub use part::Part;
