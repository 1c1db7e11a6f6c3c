//! TestWorld pattern for declarative integration test setup.
//!
//! Each world owns a temp directory with a `content/` directory the CLI
//! reads documents from and a `config.toml` it is pointed at, so tests never
//! see the user's real config or `FOLIO_*` variables.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use folio_testing::TestWorld;
///
/// let world = TestWorld::new().with_sample_content();
///
/// let result = world.run(&["projects", "--category", "web"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    content_dir: PathBuf,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment with an empty content directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let content_dir = temp_dir.path().join("content");
        let config_path = temp_dir.path().join("config.toml");

        std::fs::create_dir_all(&content_dir).expect("Failed to create content dir");

        Self {
            temp_dir,
            content_dir,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write one content document.
    pub fn with_document(self, name: &str, body: &str) -> Self {
        std::fs::write(self.content_dir.join(name), body).expect("Failed to write document");
        self
    }

    /// Write every sample document from [`fixtures`].
    pub fn with_sample_content(self) -> Self {
        fixtures::sample_documents()
            .into_iter()
            .fold(self, |world, (name, body)| world.with_document(name, body))
    }

    /// Write the config file.
    pub fn with_config(self, toml: &str) -> Self {
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Configure a CLI command with this test environment's settings.
    ///
    /// The caller must provide the base command (e.g., from `cargo_bin_cmd!("folio")`).
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--content")
            .arg(&self.content_dir)
            .arg("--config")
            .arg(&self.config_path)
            .arg("--format")
            .arg("plain");

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("FOLIO_CONTENT")
            .env_remove("FOLIO_CONFIG")
            .env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute a command using the project's binary and return the result.
    ///
    /// A `--format` in `args` overrides the default `plain`.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("folio")
            .map_err(|e| anyhow::anyhow!("Failed to find folio binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
