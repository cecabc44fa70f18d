use serde::{Deserialize, Serialize};

/// Body of `POST /translate`. Both fields are optional at the serde level so
/// a missing field can be reported with the same message as an empty one.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(rename = "targetLang")]
    #[serde(default)]
    pub target_lang: Option<String>,
}

/// A request that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub text: String,
    pub target_lang: String,
}

impl TranslateRequest {
    /// `None` when either field is missing or empty
    pub fn validate(self) -> Option<ValidatedRequest> {
        let text = self.text.filter(|t| !t.is_empty())?;
        let target_lang = self.target_lang.filter(|l| !l.is_empty())?;
        Some(ValidatedRequest { text, target_lang })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
}
