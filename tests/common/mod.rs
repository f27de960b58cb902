//! Shared testing utilities for quickcrh CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated working directory plus a binary runner with no ambient API key.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `quickcrh` binary inside the
    /// isolated working directory. The ambient API key is always stripped so
    /// credential resolution is fully controlled by each test.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("quickcrh").expect("Failed to locate quickcrh binary");
        cmd.current_dir(&self.work_dir).env_remove("OPENAI_API_KEY");
        cmd
    }

    /// Write a `quickcrh.toml` pointing the completion endpoint at `api_url`.
    pub fn write_config(&self, api_url: &str) {
        let content = format!(
            r#"[completion]
model = "gpt-4o"
api_url = "{}"
timeout_secs = 5
"#,
            api_url
        );
        fs::write(self.work_dir.join("quickcrh.toml"), content)
            .expect("Failed to write test config");
    }

    /// Write a `secrets.toml` carrying the API key.
    pub fn write_secrets(&self, key: &str) {
        fs::write(self.work_dir.join("secrets.toml"), format!("OPENAI_API_KEY = \"{}\"\n", key))
            .expect("Failed to write test secrets");
    }

    /// Exported `.txt` documents in the working directory.
    pub fn exported_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = fs::read_dir(&self.work_dir)
            .expect("Failed to read test work directory")
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
            .collect();
        files.sort();
        files
    }
}
