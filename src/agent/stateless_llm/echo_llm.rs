use async_trait::async_trait;
use tracing::{debug, info};

use super::stateless_llm_interface::{ChatMessage, LLMError, StatelessLLMInterface};
use crate::translate::prompt::parse_user_prompt;

/// Offline provider that answers `Echo: {text} -> {target_lang}`.
/// Useful for working on the web UI without an API key.
pub struct EchoLLM {
    user_prompt_template: String,
}

impl EchoLLM {
    /// `user_prompt_template` is used to pull the original fields back out of the prompt
    pub fn new(user_prompt_template: String) -> Self {
        info!("Initialized EchoLLM (no upstream calls will be made)");
        Self {
            user_prompt_template,
        }
    }
}

#[async_trait]
impl StatelessLLMInterface for EchoLLM {
    async fn chat_completion(
        &self,
        messages: Vec<ChatMessage>,
        _system: Option<&str>,
    ) -> Result<String, LLMError> {
        let last_user = messages
            .into_iter()
            .rev()
            .find(|m| m.role == "user")
            .ok_or(LLMError::EmptyCompletion)?;
        debug!("Echoing {} chars", last_user.content.len());

        // Prompts that don't follow the template are echoed whole
        Ok(match parse_user_prompt(&self.user_prompt_template, &last_user.content) {
            Some((target_lang, text)) => format!("Echo: {} -> {}", text, target_lang),
            None => format!("Echo: {}", last_user.content),
        })
    }
}
