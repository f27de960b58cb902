//! Completion endpoint port definition.

use crate::domain::AppError;
use crate::domain::session::SamplingParams;

/// One completion exchange: a composed prompt plus its sampling parameters.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// The composed prompt, sent as a single user-role message.
    pub prompt: String,
    pub sampling: SamplingParams,
}

/// Port for the hosted completion endpoint. One request per call, no retry.
pub trait CompletionClient {
    /// Send one prompt and return the first candidate's text.
    fn complete(&self, request: CompletionRequest) -> Result<String, AppError>;
}

/// Canned client for tests: returns a fixed document without any network.
#[derive(Debug, Clone)]
pub struct CannedCompletionClient {
    response: String,
}

impl CannedCompletionClient {
    pub fn new(response: impl Into<String>) -> Self {
        Self { response: response.into() }
    }
}

impl CompletionClient for CannedCompletionClient {
    fn complete(&self, _request: CompletionRequest) -> Result<String, AppError> {
        Ok(self.response.clone())
    }
}

/// Client that always fails, for exercising the abort path.
#[derive(Debug, Clone, Default)]
pub struct FailingCompletionClient;

impl CompletionClient for FailingCompletionClient {
    fn complete(&self, _request: CompletionRequest) -> Result<String, AppError> {
        Err(AppError::Completion { message: "simulated failure".to_string(), status: Some(500) })
    }
}
