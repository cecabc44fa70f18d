use std::fs;
use std::path::Path;
use anyhow::{Context, Result};
use regex::{Captures, Regex};
use tracing::debug;

use crate::config_manager::main::Config;

/// Replace `${VAR_NAME}` with values from `lookup`; unknown variables are left as-is
pub fn substitute_env_vars<F>(content: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let pattern = Regex::new(r"\$\{(\w+)\}").expect("static regex");
    pattern
        .replace_all(content, |caps: &Captures| {
            lookup(&caps[1]).unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Read a config file, dropping a UTF-8 BOM and expanding environment variables
pub fn read_config_file(config_path: &str) -> Result<String> {
    if !Path::new(config_path).exists() {
        anyhow::bail!("Configuration file not found: {}", config_path);
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read configuration file: {}", config_path))?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);

    Ok(substitute_env_vars(content, |name| std::env::var(name).ok()))
}

/// Parse config text, picking JSON or YAML by file extension
pub fn parse_config(content: &str, config_path: &str) -> Result<Config> {
    let path_lower = config_path.to_lowercase();
    if path_lower.ends_with(".json") {
        debug!("Parsing {} as JSON", config_path);
        serde_json::from_str(content)
            .with_context(|| format!("Invalid JSON configuration in {}", config_path))
    } else {
        debug!("Parsing {} as YAML", config_path);
        serde_yaml::from_str(content)
            .with_context(|| format!("Invalid YAML configuration in {}", config_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn substitutes_known_and_keeps_unknown() {
        let vars: HashMap<&str, &str> = [("OPENAI_API_KEY", "sk-123")].into_iter().collect();
        let out = substitute_env_vars(
            "key: ${OPENAI_API_KEY}\nother: ${NOT_SET_ANYWHERE}",
            |name| vars.get(name).map(|v| v.to_string()),
        );
        assert_eq!(out, "key: sk-123\nother: ${NOT_SET_ANYWHERE}");
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("missing_{}.yaml", uuid::Uuid::new_v4()));
        assert!(read_config_file(path.to_str().unwrap()).is_err());
    }

    #[test]
    fn reads_yaml_file_with_bom() {
        let path = std::env::temp_dir().join(format!("conf_{}.yaml", uuid::Uuid::new_v4()));
        fs::write(
            &path,
            "\u{feff}system_config:\n  port: 6000\nllm_config:\n  model: gpt-4o\n",
        )
        .unwrap();

        let path_str = path.to_str().unwrap();
        let content = read_config_file(path_str).unwrap();
        let config = parse_config(&content, path_str).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.system_config.port, 6000);
        assert_eq!(config.llm_config.model, "gpt-4o");
        assert_eq!(config.llm_config.provider, "openai_llm");
    }

    #[test]
    fn parses_json_by_extension() {
        let config = parse_config(
            r#"{"llm_config": {"provider": "echo_llm"}}"#,
            "conf.JSON",
        )
        .unwrap();
        assert_eq!(config.llm_config.provider, "echo_llm");
        assert_eq!(config.system_config.port, 5001);
    }
}
