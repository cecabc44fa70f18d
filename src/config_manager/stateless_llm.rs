use serde::{Deserialize, Serialize};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Configuration for the completion provider used by `/translate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatelessLLMConfig {
    /// One of `openai_llm`, `openai_compatible_llm`, `ollama_llm`, `echo_llm`
    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(rename = "base_url")]
    pub base_url: Option<String>,

    #[serde(rename = "llm_api_key")]
    #[serde(skip_serializing)]
    pub llm_api_key: Option<String>,

    #[serde(rename = "organization_id")]
    pub organization_id: Option<String>,

    #[serde(rename = "project_id")]
    pub project_id: Option<String>,

    /// Left unset so the provider default applies
    pub temperature: Option<f32>,

    #[serde(rename = "request_timeout_secs")]
    pub request_timeout_secs: Option<u64>,
}

fn default_provider() -> String {
    "openai_llm".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

impl Default for StatelessLLMConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            base_url: None,
            llm_api_key: None,
            organization_id: None,
            project_id: None,
            temperature: None,
            request_timeout_secs: None,
        }
    }
}
