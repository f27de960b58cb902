//! Per-invocation session configuration: reference-block toggles and
//! sampling parameters. Nothing here is persisted across invocations.

use crate::domain::AppError;

pub const DEFAULT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_MAX_TOKENS: u32 = 1800;

pub const MIN_TEMPERATURE: f32 = 0.0;
pub const MAX_TEMPERATURE: f32 = 1.0;
pub const MIN_MAX_TOKENS: u32 = 500;
pub const MAX_MAX_TOKENS: u32 = 4000;

/// Tunable parameters forwarded to the completion endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl SamplingParams {
    /// Validate and build sampling parameters.
    pub fn new(temperature: f32, max_tokens: u32) -> Result<Self, AppError> {
        // NaN fails the range check as well.
        if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature) {
            return Err(AppError::TemperatureOutOfRange(temperature));
        }
        if !(MIN_MAX_TOKENS..=MAX_MAX_TOKENS).contains(&max_tokens) {
            return Err(AppError::MaxTokensOutOfRange(max_tokens));
        }
        Ok(Self { temperature, max_tokens })
    }
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self { temperature: DEFAULT_TEMPERATURE, max_tokens: DEFAULT_MAX_TOKENS }
    }
}

/// Toggles controlling prompt membership of the reference blocks, plus the
/// guided-mode output constraints.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Include the CRH style guide block.
    pub style_guide: bool,
    /// Include the worked reference example block.
    pub example: bool,
    /// Include the HAS quality-criteria block.
    pub quality_checklist: bool,
    /// Override for the editable worked example. `None` keeps the embedded one.
    pub example_override: Option<String>,
    /// Ask for a one-page summary (guided mode only).
    pub brief: bool,
    /// Ask for anonymization of names/identifiers (guided mode only).
    pub anonymize: bool,
    pub sampling: SamplingParams,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            style_guide: true,
            example: true,
            quality_checklist: true,
            example_override: None,
            brief: false,
            anonymize: false,
            sampling: SamplingParams::default(),
        }
    }
}
