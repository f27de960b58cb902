//! Configuration file loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::config::{AppConfig, parse_config_content};

/// Default config filename, looked up in the working directory.
pub const CONFIG_FILE: &str = "quickcrh.toml";

/// Configuration plus the directory it was loaded from. The secrets file is
/// looked up in the same directory.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub dir: PathBuf,
}

/// Load configuration.
///
/// An explicitly given path must exist. The default `quickcrh.toml` may be
/// absent, in which case built-in defaults apply and the secrets directory is
/// the working directory.
pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(AppError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => {
            let default = PathBuf::from(CONFIG_FILE);
            if !default.exists() {
                return Ok(LoadedConfig {
                    config: AppConfig::default(),
                    dir: PathBuf::from("."),
                });
            }
            default
        }
    };

    let content = fs::read_to_string(&path)?;
    let config = parse_config_content(&content, &path.display().to_string())?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok(LoadedConfig { config, dir })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_must_exist() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        let err = load_config(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }

    #[test]
    fn explicit_path_is_loaded_and_sets_secrets_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quickcrh.toml");
        fs::write(&path, "[completion]\nmodel = \"gpt-4o-mini\"\n").unwrap();

        let loaded = load_config(Some(path.as_path())).unwrap();
        assert_eq!(loaded.config.completion.model, "gpt-4o-mini");
        assert_eq!(loaded.dir, dir.path());
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("quickcrh.toml");
        fs::write(&path, "[completion\n").unwrap();

        let err = load_config(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, AppError::ConfigParse { .. }));
    }
}
