//! Application configuration domain models.

use serde::Deserialize;

use crate::domain::session::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use crate::domain::AppError;

/// Configuration loaded from `quickcrh.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Completion endpoint settings.
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Default sampling parameters (overridable per invocation).
    #[serde(default)]
    pub defaults: GenerationDefaults,
    /// Export settings.
    #[serde(default)]
    pub export: ExportConfig,
}

/// Completion endpoint configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionConfig {
    /// Model identifier sent with every request.
    #[serde(default = "default_model")]
    pub model: String,
    /// Chat-completions endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_url: default_api_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_api_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_timeout() -> u64 {
    60
}

/// Default sampling parameters applied when the CLI flags are absent.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationDefaults {
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self { temperature: default_temperature(), max_tokens: default_max_tokens() }
    }
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

/// Export settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Directory receiving exported documents.
    #[serde(default = "default_export_dir")]
    pub dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { dir: default_export_dir() }
    }
}

fn default_export_dir() -> String {
    ".".to_string()
}

/// Parse configuration file content.
pub fn parse_config_content(content: &str, path: &str) -> Result<AppConfig, AppError> {
    toml::from_str(content)
        .map_err(|err| AppError::ConfigParse { path: path.to_string(), details: err.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.completion.model, "gpt-4o");
        assert!(config.completion.api_url.starts_with("https://api.openai.com/"));
        assert_eq!(config.completion.timeout_secs, 60);
        assert_eq!(config.defaults.temperature, 0.3);
        assert_eq!(config.defaults.max_tokens, 1800);
        assert_eq!(config.export.dir, ".");
    }

    #[test]
    fn parse_partial_config_fills_defaults() {
        let config = parse_config_content(
            r#"
[completion]
model = "gpt-4o-mini"

[defaults]
max_tokens = 2400
"#,
            "quickcrh.toml",
        )
        .unwrap();

        assert_eq!(config.completion.model, "gpt-4o-mini");
        assert_eq!(config.completion.timeout_secs, 60);
        assert_eq!(config.defaults.temperature, 0.3);
        assert_eq!(config.defaults.max_tokens, 2400);
    }

    #[test]
    fn parse_malformed_config_reports_path() {
        let err = parse_config_content("completion = [", "conf/quickcrh.toml").unwrap_err();
        match err {
            AppError::ConfigParse { path, .. } => assert_eq!(path, "conf/quickcrh.toml"),
            other => panic!("unexpected error variant: {}", other),
        }
    }
}
