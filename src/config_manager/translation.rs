use serde::{Deserialize, Serialize};

/// A target language offered by the client, with the locale its
/// speech synthesis voice should use
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    #[serde(rename = "speechLocale", alias = "speech_locale")]
    pub speech_locale: String,
}

impl Language {
    fn new(name: &str, speech_locale: &str) -> Self {
        Self {
            name: name.to_string(),
            speech_locale: speech_locale.to_string(),
        }
    }
}

/// Prompt template and language catalogue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    #[serde(rename = "system_prompt")]
    #[serde(default = "default_system_prompt")]
    pub system_prompt: String,

    /// Supports `{target_lang}` and `{text}` placeholders
    #[serde(rename = "user_prompt_template")]
    #[serde(default = "default_user_prompt_template")]
    pub user_prompt_template: String,

    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,
}

fn default_system_prompt() -> String {
    "You are a professional medical translator.".to_string()
}

fn default_user_prompt_template() -> String {
    "Translate this to {target_lang}, preserving medical terminology: {text}".to_string()
}

fn default_languages() -> Vec<Language> {
    vec![
        Language::new("French", "fr-FR"),
        Language::new("Arabic", "ar-SA"),
        Language::new("Spanish", "es-ES"),
        Language::new("German", "de-DE"),
        Language::new("Hindi", "hi-IN"),
    ]
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            system_prompt: default_system_prompt(),
            user_prompt_template: default_user_prompt_template(),
            languages: default_languages(),
        }
    }
}
