//! Test environment builder for isolated vanillafy runs.
//!
//! Each `TestEnv` owns a temp root holding the game directory, a fake home
//! and the config file, so runs never see the developer's machine.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

use super::fixtures::{SENTINEL, SMALL_GAME_CONFIG};

/// Result of running the vanillafy binary
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

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l).unwrap_or_else(|e| panic!("bad JSON {l}: {e}"))
            })
            .collect()
    }

    /// Names of the NDJSON events, in order
    pub fn event_names(&self) -> Vec<String> {
        self.events()
            .iter()
            .map(|e| e["event"].as_str().unwrap_or_default().to_string())
            .collect()
    }
}

/// Isolated environment: `<root>/library/TestGame` holds the game,
/// `<root>/home` stands in for the user's home.
pub struct TestEnv {
    root: TempDir,
    config: PathBuf,
}

impl TestEnv {
    /// Game directory holding just the sentinel, small-game config.
    pub fn new() -> Self {
        Self::with_config(SMALL_GAME_CONFIG)
    }

    pub fn with_config(config: &str) -> Self {
        let root = tempfile::tempdir().expect("create temp root");
        fs::create_dir_all(root.path().join("home/.config")).expect("create home");
        fs::create_dir_all(root.path().join("library/TestGame")).expect("create game dir");

        let config_path = root.path().join("vanillafy.toml");
        fs::write(&config_path, config).expect("write config");

        let env = Self {
            root,
            config: config_path,
        };
        env.write_game_file(SENTINEL);
        env
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config
    }

    /// Parent folder of the game, usable as a scan volume.
    pub fn library(&self) -> PathBuf {
        self.root.path().join("library")
    }

    pub fn game_dir(&self) -> PathBuf {
        self.library().join("TestGame")
    }

    pub fn game_path(&self, relative: &str) -> PathBuf {
        self.game_dir().join(relative)
    }

    pub fn write_game_file(&self, relative: &str) {
        let path = self.game_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent");
        }
        fs::write(path, "x").expect("write game file");
    }

    pub fn create_game_dir(&self, relative: &str) {
        fs::create_dir_all(self.game_path(relative)).expect("create game subdirectory");
    }

    /// Rewrite the config file in place.
    pub fn write_config(&self, config: &str) {
        fs::write(&self.config, config).expect("write config");
    }

    /// Run with `--config` pointing at the env's file.
    pub fn run(&self, args: &[&str], stdin: &str) -> TestResult {
        let config = self.config.display().to_string();
        let mut full = vec!["--config", config.as_str()];
        full.extend_from_slice(args);
        self.run_raw(&full, stdin, &[])
    }

    /// Run exactly `args`, adding only the isolation variables and `env`.
    pub fn run_raw(&self, args: &[&str], stdin: &str, env: &[(&str, &str)]) -> TestResult {
        let home = self.root.path().join("home");
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_vanillafy"));
        cmd.current_dir(self.root.path())
            .args(args)
            .env("HOME", &home)
            .env("USERPROFILE", &home)
            .env("XDG_CONFIG_HOME", home.join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("VANILLAFY_CONFIG")
            .env_remove("VANILLAFY_SENTINEL")
            .env_remove("VANILLAFY_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for (key, value) in env {
            cmd.env(key, value);
        }

        let mut child = cmd.spawn().expect("failed to execute vanillafy");
        if let Some(mut input) = child.stdin.take() {
            // The binary may exit before reading everything.
            let _ = input.write_all(stdin.as_bytes());
        }
        let output = child.wait_with_output().expect("wait for vanillafy");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
