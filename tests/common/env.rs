//! Test environment builder for isolated deployinfo testing.
//!
//! Provides `TestEnv` - a temp execution root with a `bazel-bin` output tree
//! and an isolated config home, plus helpers to run the CLI.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use deployinfo::DeployDescriptor;
use prost::Message;
use tempfile::TempDir;

/// Result of running a deployinfo CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated test environment with temp directories.
pub struct TestEnv {
    /// Execution root; outputs live under `bazel-bin/`
    pub exec_root: TempDir,
    /// Directory used as HOME / XDG_CONFIG_HOME
    pub config_home: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            exec_root: TempDir::new().expect("Failed to create exec root"),
            config_home: TempDir::new().expect("Failed to create config home"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_deployinfo")),
        }
    }

    /// Path relative to the execution root
    pub fn exec_path(&self, relative: &str) -> PathBuf {
        self.exec_root.path().join(relative)
    }

    /// Write a file relative to the execution root
    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let full_path = self.exec_path(relative);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Encode and write a descriptor relative to the execution root
    pub fn write_descriptor(&self, relative: &str, descriptor: &DeployDescriptor) -> PathBuf {
        self.write(relative, descriptor.encode_to_vec())
    }

    /// Run the CLI from the execution root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_from(self.exec_root.path(), args, &[])
    }

    /// Run the CLI with extra env vars
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from(self.exec_root.path(), args, env_vars)
    }

    pub fn run_from(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.config_home.path())
            .env("XDG_CONFIG_HOME", self.config_home.path())
            .env_remove("RUST_LOG")
            .env_remove("DEPLOYINFO_EXECUTION_ROOT")
            .env_remove("DEPLOYINFO_OUTPUT_ROOT")
            .env_remove("DEPLOYINFO_DESCRIPTOR_SUFFIX")
            .env_remove("DEPLOYINFO_FORMAT");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute deployinfo");
        Self::output_to_result(output)
    }

    fn output_to_result(output: Output) -> TestResult {
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
