use std::sync::Arc;
use tracing::{debug, error, info};

use crate::agent::stateless_llm::{LLMError, StatelessLLMInterface};
use crate::config_manager::translation::TranslationConfig;
use crate::translate::interface::ValidatedRequest;
use crate::translate::prompt::build_prompt;

/// Turns a validated request into one completion call
pub struct Translator {
    llm: Arc<dyn StatelessLLMInterface>,
    config: TranslationConfig,
}

impl Translator {
    pub fn new(llm: Arc<dyn StatelessLLMInterface>, config: TranslationConfig) -> Self {
        Self { llm, config }
    }

    pub async fn translate(&self, request: &ValidatedRequest) -> Result<String, LLMError> {
        let (system, messages) = build_prompt(&self.config, &request.target_lang, &request.text);
        debug!(
            "Translating {} chars to {}",
            request.text.chars().count(),
            request.target_lang
        );

        match self.llm.chat_completion(messages, Some(&system)).await {
            Ok(translation) => {
                info!("Translation ({}): {}", request.target_lang, translation);
                Ok(translation)
            }
            Err(e) => {
                error!("Completion API error: {:?}", e);
                Err(e)
            }
        }
    }
}
