//! Test environment for running the `dettect-editor` binary in isolation.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running a CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim())
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

/// Working directory and config directory that belong to one test
pub struct TestEnv {
    pub root: TempDir,
    config_home: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: TempDir::new().unwrap(),
            config_home: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).unwrap()
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path(relative).exists()
    }

    /// Run the binary inside the test directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_dettect-editor"));
        cmd.current_dir(self.root.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env("HOME", self.config_home.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("DETTECT_EDITOR_DOMAIN")
            .env_remove("DETTECT_EDITOR_CONFIRM_DISCARD");
        for (key, value) in vars {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
