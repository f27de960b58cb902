//! Adapters binding the ports to reqwest, the filesystem, and the
//! environment.

mod openai_client_http;
mod secret_store;
mod transcript;

pub use openai_client_http::HttpCompletionClient;
pub use secret_store::{API_KEY_VAR, SECRETS_FILE, resolve_api_key, resolve_api_key_with};
pub use transcript::export_document;
