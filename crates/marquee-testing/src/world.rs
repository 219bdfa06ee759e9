//! TestWorld pattern for declarative integration test setup.
//!
//! Provides an isolated data directory and a sample programme file, plus a
//! runner that invokes the real `marquee` binary against them.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

use crate::fixtures;

/// Isolated test environment: temp data dir + sample catalog on disk.
///
/// # Example
/// ```no_run
/// use marquee_testing::TestWorld;
///
/// let world = TestWorld::new();
/// world.init().unwrap();
/// let result = world.run(&["favorite", "list"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    data_dir: PathBuf,
    catalog_path: PathBuf,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let base_path = temp_dir.path().to_path_buf();
        let data_dir = base_path.join(".marquee");
        let catalog_path = base_path.join("programme.json");

        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");
        std::fs::write(&catalog_path, fixtures::sample_catalog_json())
            .expect("Failed to write sample catalog");

        Self {
            temp_dir,
            data_dir,
            catalog_path,
        }
    }

    /// Get the data directory path (.marquee).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Get the sample programme path.
    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    /// Get the temp directory root.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Replace the programme file with custom catalog JSON.
    pub fn write_catalog(&self, json: &str) -> Result<()> {
        std::fs::write(&self.catalog_path, json)?;
        Ok(())
    }

    /// Initialize the workspace against the sample catalog.
    pub fn init(&self) -> Result<RunResult> {
        let catalog = self.catalog_path.to_string_lossy().to_string();
        self.run(&["init", "--catalog", &catalog])
    }

    /// Run the marquee binary with this world's data dir.
    pub fn run(&self, args: &[&str]) -> Result<RunResult> {
        let mut cmd = Command::cargo_bin("marquee")?;
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd.args(args);

        let output = cmd.output()?;
        Ok(RunResult { output })
    }
}

/// Captured result of one CLI invocation.
pub struct RunResult {
    output: Output,
}

impl RunResult {
    pub fn success(&self) -> bool {
        self.output.status.success()
    }

    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }

    /// Parse stdout as JSON (for `--format json` invocations).
    pub fn json(&self) -> Result<serde_json::Value> {
        let value = serde_json::from_str(&self.stdout())?;
        Ok(value)
    }
}
