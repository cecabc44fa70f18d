use serde::{Deserialize, Serialize};
use anyhow::{Context, Result};
use tracing::debug;

use crate::config_manager::stateless_llm::StatelessLLMConfig;
use crate::config_manager::system::SystemConfig;
use crate::config_manager::translation::TranslationConfig;
use crate::config_manager::utils::{parse_config, read_config_file};

/// Paths tried, in order, when `CONFIG_PATH` is not set
const DEFAULT_CONFIG_PATHS: &[&str] = &["conf.yaml", "conf.yml", "conf.json"];

/// Main configuration for the application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "system_config")]
    #[serde(default)]
    pub system_config: SystemConfig,

    #[serde(rename = "llm_config")]
    #[serde(default)]
    pub llm_config: StatelessLLMConfig,

    #[serde(rename = "translation_config")]
    #[serde(default)]
    pub translation_config: TranslationConfig,
}

impl Config {
    /// Load configuration from a YAML or JSON file
    pub fn load(path: &str) -> Result<Self> {
        let content = read_config_file(path)?;
        parse_config(&content, path)
    }

    /// Find and load a config file. An explicit `CONFIG_PATH` must load;
    /// otherwise the defaults are used when no file is present.
    /// Returns the path that was loaded, if any.
    pub fn discover() -> Result<(Self, Option<String>)> {
        if let Ok(path) = std::env::var("CONFIG_PATH") {
            let config = Self::load(&path)
                .with_context(|| format!("CONFIG_PATH points at an unusable file: {}", path))?;
            return Ok((config, Some(path)));
        }

        for path in DEFAULT_CONFIG_PATHS {
            if !std::path::Path::new(path).exists() {
                debug!("No config at {}", path);
                continue;
            }
            let config = Self::load(path)?;
            return Ok((config, Some(path.to_string())));
        }

        Ok((Self::default(), None))
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|name| std::env::var(name).ok())
    }

    /// Apply `HOST`, `PORT`, `OPENAI_API_KEY`, `LLM_PROVIDER`, `LLM_MODEL`
    /// and `LLM_BASE_URL` from `lookup`. Empty values are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        if let Some(host) = get("HOST") {
            self.system_config.host = host;
        }
        if let Some(port) = get("PORT") {
            self.system_config.port = port
                .parse()
                .with_context(|| format!("PORT must be a valid number, got {:?}", port))?;
        }
        if let Some(key) = get("OPENAI_API_KEY") {
            self.llm_config.llm_api_key = Some(key);
        }
        if let Some(provider) = get("LLM_PROVIDER") {
            self.llm_config.provider = provider;
        }
        if let Some(model) = get("LLM_MODEL") {
            self.llm_config.model = model;
        }
        if let Some(base_url) = get("LLM_BASE_URL") {
            self.llm_config.base_url = Some(base_url);
        }
        Ok(())
    }
}
