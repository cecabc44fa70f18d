use std::sync::Arc;

use crate::agent::stateless_llm::StatelessLLMInterface;
use crate::agent::StatelessLLMFactory;
use crate::config_manager::Config;
use crate::translate::Translator;

/// Shared, read-only request state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub translator: Arc<Translator>,
}

impl AppState {
    /// Build state with the provider named in the config
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let llm = StatelessLLMFactory::create_llm(&config.llm_config, &config.translation_config)?;
        Ok(Self::with_llm(config, llm))
    }

    /// Build state around an existing provider
    pub fn with_llm(config: Config, llm: Arc<dyn StatelessLLMInterface>) -> Self {
        let translator = Arc::new(Translator::new(llm, config.translation_config.clone()));
        Self {
            config: Arc::new(config),
            translator,
        }
    }
}
