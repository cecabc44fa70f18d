use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

use super::openai_compatible_llm::OpenAICompatibleLLM;
use super::stateless_llm_interface::{ChatMessage, LLMError, StatelessLLMInterface};

pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434/v1";

/// Ollama LLM implementation
/// Wraps OpenAICompatibleLLM since Ollama serves the OpenAI chat API
pub struct OllamaLLM {
    inner: OpenAICompatibleLLM,
}

impl OllamaLLM {
    pub fn new(
        client: Client,
        model: String,
        base_url: Option<String>,
        temperature: Option<f32>,
    ) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_OLLAMA_BASE_URL.to_string());
        info!("Initialized OllamaLLM: model={}, base_url={}", model, base_url);

        // Ollama ignores the key but the OpenAI surface still expects a bearer header
        let inner = OpenAICompatibleLLM::new(
            client,
            model,
            base_url,
            "ollama".to_string(),
            None,
            None,
            temperature,
        );

        Self { inner }
    }
}

#[async_trait]
impl StatelessLLMInterface for OllamaLLM {
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        system: Option<&str>,
    ) -> Result<String, LLMError> {
        self.inner.chat_completion(messages, system).await
    }
}
