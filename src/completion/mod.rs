mod client;
mod error;
mod types;

pub use client::{ChatTransport, ClientConfig, OpenAiClient};
pub use error::CompletionError;
pub use types::{ChatMessage, ChatRequest, ChatResponse, Choice, Role, Usage};
