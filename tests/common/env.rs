//! Isolated environment for running the farmbook binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Day every test runs on unless it says otherwise.
pub const TODAY: &str = "2024-03-10";

/// Result of running a farmbook command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

#[allow(dead_code)]
impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Parse stdout as NDJSON, one value per line.
    pub fn json_lines(&self) -> Vec<Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not JSON ({}): {}", e, line))
            })
            .collect()
    }

    /// The single JSON event printed by a `--json` command.
    pub fn json(&self) -> Value {
        let mut lines = self.json_lines();
        assert_eq!(lines.len(), 1, "expected one JSON line, got:\n{}", self.stdout);
        lines.remove(0)
    }
}

/// Temp data directory, a pinned date and no service latency.
pub struct FarmEnv {
    pub root: TempDir,
    today: String,
    bin: PathBuf,
}

#[allow(dead_code)]
impl FarmEnv {
    pub fn new() -> Self {
        Self::on(TODAY)
    }

    pub fn on(today: &str) -> Self {
        Self {
            root: tempfile::tempdir().expect("Failed to create temp dir"),
            today: today.to_string(),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_farmbook")),
        }
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root.path().join("data")
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir().join("farmbook.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.path().join("config.toml")
    }

    pub fn write_config(&self, toml: &str) {
        std::fs::write(self.config_path(), toml).expect("Failed to write config");
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let data_dir = self.data_dir();
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.root.path())
            .arg("--data-dir")
            .arg(&data_dir)
            .arg("--no-latency")
            .args(args)
            .env("FARMBOOK_TODAY", &self.today)
            .env("FARMBOOK_CONFIG", self.config_path())
            .env("HOME", self.root.path())
            .env("NO_COLOR", "1")
            .env("TERM", "dumb")
            .env_remove("RUST_LOG")
            .env_remove("FARMBOOK_DATA_DIR")
            .env_remove("FARMBOOK_WEEK_START")
            .env_remove("FARMBOOK_LATENCY_MS");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute farmbook");
        output_to_result(output)
    }

    /// Run with `--json` and return the id of the created record.
    pub fn create(&self, args: &[&str]) -> String {
        let mut with_json = args.to_vec();
        with_json.push("--json");
        let result = self.run(&with_json);
        assert!(result.success, "create failed: {}", result.stderr);
        let event = result.json();
        event["data"]["id"]
            .as_str()
            .unwrap_or_else(|| panic!("no id in {}", event))
            .to_string()
    }

    /// Raw store document.
    pub fn read_store(&self) -> Value {
        let content = std::fs::read_to_string(self.store_path()).expect("store file missing");
        serde_json::from_str(&content).expect("store file is not JSON")
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn root_path(&self) -> &Path {
        self.root.path()
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
