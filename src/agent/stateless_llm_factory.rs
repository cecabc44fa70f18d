use std::sync::Arc;
use std::time::Duration;
use anyhow::{Context, Result};
use reqwest::Client;
use tracing::{info, warn};

use crate::agent::stateless_llm::{EchoLLM, OllamaLLM, OpenAICompatibleLLM, StatelessLLMInterface};
use crate::config_manager::stateless_llm::{StatelessLLMConfig, DEFAULT_OPENAI_BASE_URL};
use crate::config_manager::translation::TranslationConfig;

/// Factory for creating stateless LLM instances
pub struct StatelessLLMFactory;

impl StatelessLLMFactory {
    /// Create an LLM based on the configuration.
    ///
    /// One `reqwest::Client` is built here and owned by the provider, so
    /// connections are pooled across requests. The translation config is only
    /// read by the echo provider.
    pub fn create_llm(
        config: &StatelessLLMConfig,
        translation: &TranslationConfig,
    ) -> Result<Arc<dyn StatelessLLMInterface>> {
        info!("Initializing LLM: {}", config.provider);

        match config.provider.as_str() {
            "openai_llm" | "openai_compatible_llm" => {
                let api_key = match &config.llm_api_key {
                    Some(key) => key.clone(),
                    None => {
                        warn!("No API key configured; requests to {} will be rejected upstream", config.provider);
                        String::new()
                    }
                };
                Ok(Arc::new(OpenAICompatibleLLM::new(
                    Self::http_client(config)?,
                    config.model.clone(),
                    config
                        .base_url
                        .clone()
                        .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
                    api_key,
                    config.organization_id.clone(),
                    config.project_id.clone(),
                    config.temperature,
                )))
            }
            "ollama_llm" => Ok(Arc::new(OllamaLLM::new(
                Self::http_client(config)?,
                config.model.clone(),
                config.base_url.clone(),
                config.temperature,
            ))),
            "echo_llm" => Ok(Arc::new(EchoLLM::new(
                translation.user_prompt_template.clone(),
            ))),
            _ => Err(anyhow::anyhow!("Unsupported LLM provider: {}", config.provider)),
        }
    }

    fn http_client(config: &StatelessLLMConfig) -> Result<Client> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build().context("Failed to create HTTP client")
    }
}
