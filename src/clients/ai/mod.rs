pub mod openai;
pub mod prompts;

pub use openai::OpenAiClient;

use crate::Result;
use async_trait::async_trait;

/// A hosted chat-completion backend.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends one system and one user message; returns the raw reply text.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
    fn provider_name(&self) -> &'static str;
}
