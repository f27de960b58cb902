//! API key resolution: deployment secrets file first, environment fallback.

use std::fs;
use std::path::Path;

use crate::domain::AppError;

/// Name of the key looked up in both the secrets file and the environment.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Name of the secrets file, looked up next to the configuration file.
pub const SECRETS_FILE: &str = "secrets.toml";

/// Resolve the API key for the completion endpoint.
///
/// Order: `OPENAI_API_KEY` entry in `secrets.toml` under `dir`, then the
/// process environment. A missing key is a terminal error for the action,
/// never a panic.
pub fn resolve_api_key(dir: &Path) -> Result<String, AppError> {
    resolve_api_key_with(dir, |name| std::env::var(name).ok())
}

/// Resolution seam with an injectable environment lookup.
pub fn resolve_api_key_with(
    dir: &Path,
    env_lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, AppError> {
    if let Some(key) = read_secrets_file(&dir.join(SECRETS_FILE))? {
        return Ok(key);
    }

    match env_lookup(API_KEY_VAR) {
        Some(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(AppError::MissingApiKey),
    }
}

/// Read the key from a secrets file. A missing file is not an error; a
/// present but unparsable file is.
fn read_secrets_file(path: &Path) -> Result<Option<String>, AppError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content).map_err(|err| AppError::ConfigParse {
        path: path.display().to_string(),
        details: err.to_string(),
    })?;

    Ok(value
        .get(API_KEY_VAR)
        .and_then(|key| key.as_str())
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(ToOwned::to_owned))
}
