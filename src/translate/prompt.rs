use regex::{Captures, Regex};

use crate::agent::stateless_llm::ChatMessage;
use crate::config_manager::translation::TranslationConfig;

const PLACEHOLDER_PATTERN: &str = r"\{(target_lang|text)\}";

fn placeholder_regex() -> Regex {
    Regex::new(PLACEHOLDER_PATTERN).expect("static regex")
}

/// Fills the user template in one left-to-right pass, so placeholder-like
/// sequences inside either substituted value are never expanded again.
pub fn render_user_prompt(template: &str, target_lang: &str, text: &str) -> String {
    placeholder_regex()
        .replace_all(template, |caps: &Captures| match &caps[1] {
            "target_lang" => target_lang.to_string(),
            _ => text.to_string(),
        })
        .into_owned()
}

/// Inverse of `render_user_prompt`: recovers `(target_lang, text)` from a
/// rendered prompt, or `None` when `rendered` does not follow `template`.
pub fn parse_user_prompt(template: &str, rendered: &str) -> Option<(String, String)> {
    let mut pattern = String::from("(?s)^");
    let mut names = Vec::new();
    let mut last = 0;
    for caps in placeholder_regex().captures_iter(template) {
        let whole = caps.get(0)?;
        pattern.push_str(&regex::escape(&template[last..whole.start()]));
        pattern.push_str("(.*?)");
        names.push(caps[1].to_string());
        last = whole.end();
    }
    pattern.push_str(&regex::escape(&template[last..]));
    pattern.push('$');

    let caps = Regex::new(&pattern).ok()?.captures(rendered)?;
    let mut target_lang = None;
    let mut text = None;
    for (i, name) in names.iter().enumerate() {
        let value = caps.get(i + 1)?.as_str().to_string();
        match name.as_str() {
            "target_lang" => target_lang = Some(value),
            _ => text = Some(value),
        }
    }
    Some((target_lang?, text?))
}

/// System prompt plus the single user message sent for one translation
pub fn build_prompt(
    config: &TranslationConfig,
    target_lang: &str,
    text: &str,
) -> (String, Vec<ChatMessage>) {
    let user = render_user_prompt(&config.user_prompt_template, target_lang, text);
    (config.system_prompt.clone(), vec![ChatMessage::user(user)])
}
