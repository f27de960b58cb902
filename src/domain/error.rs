use std::io;

use thiserror::Error;

/// Library-wide error type for quickcrh operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No API key could be resolved from the secret store or the environment.
    #[error(
        "No API key found. Put OPENAI_API_KEY in secrets.toml or export the environment variable."
    )]
    MissingApiKey,

    /// The completion endpoint rejected or failed the request.
    #[error("Completion request failed: {message}")]
    Completion { message: String, status: Option<u16> },

    /// A prompt body template could not be rendered.
    #[error("Failed to render template {template}: {reason}")]
    TemplateRender { template: String, reason: String },

    /// Sampling temperature outside the accepted range.
    #[error("Temperature {0} is outside [0.0, 1.0]")]
    TemperatureOutOfRange(f32),

    /// Maximum output length outside the accepted range.
    #[error("Max output tokens {0} is outside [500, 4000]")]
    MaxTokensOutOfRange(u32),

    /// Free-form and didactic modes need a non-empty source text.
    #[error("Source text is empty. Pass a file or pipe the draft on stdin.")]
    SourceTextMissing,

    /// Config file parsing failed.
    #[error("Failed to parse {path}: {details}")]
    ConfigParse { path: String, details: String },

    /// Interactive input could not be read.
    #[error("Failed to read input: {0}")]
    Interaction(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
