//! Isolated environment for driving the `sso-verify` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::{Mutex, MutexGuard};

use tempfile::TempDir;

use super::fixtures::{AWS_CLI_SCRIPT, AWS_CONFIG, DISTINCT_IDENTITIES, SSO_UTIL_SCRIPT};

/// Writing a script while another test forks can leave the script busy
/// (ETXTBSY) when it is executed. Tests using `TestEnv` run one at a time.
static SERIAL: Mutex<()> = Mutex::new(());

/// Result of running the binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Parse stdout as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .map(|line| {
                serde_json::from_str(line)
                    .unwrap_or_else(|e| panic!("not JSON ({}): {}", e, line))
            })
            .collect()
    }
}

/// Temp directory laid out like a verified machine:
///
/// ```text
/// <root>/home/.aws/...        SSO_VERIFY_HOME
/// <root>/output/profiles_identity.json
/// <root>/hello world, <root>/hello.txt
/// <root>/bin/aws, <root>/bin/aws-sso-util
/// ```
pub struct TestEnv {
    pub root: TempDir,
    _serial: MutexGuard<'static, ()>,
}

impl TestEnv {
    /// Empty machine: nothing installed, nothing produced
    pub fn new() -> Self {
        let serial = SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(root.path().join("home")).unwrap();
        Self {
            root,
            _serial: serial,
        }
    }

    /// Machine where every check passes without warnings
    pub fn passing() -> Self {
        let env = Self::new();
        env.install_sso_util(SSO_UTIL_SCRIPT);
        env.install_aws_cli(AWS_CLI_SCRIPT);
        env.write_home_file(".aws/config", AWS_CONFIG);
        env.write_home_file(".aws/sso/cache/0123abcd.json", "{\"accessToken\": \"x\"}");
        env.write_file("hello.txt", "Hello, world!\n");
        env.write_file("output/profiles_identity.json", DISTINCT_IDENTITIES);
        env
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn home(&self) -> PathBuf {
        self.path("home")
    }

    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        write(&self.path(relative), content)
    }

    pub fn write_home_file(&self, relative: &str, content: &str) -> PathBuf {
        write(&self.home().join(relative), content)
    }

    pub fn remove_file(&self, relative: &str) {
        std::fs::remove_file(self.path(relative)).unwrap();
    }

    pub fn install_sso_util(&self, body: &str) -> PathBuf {
        script(&self.path("bin/aws-sso-util"), body)
    }

    pub fn install_aws_cli(&self, body: &str) -> PathBuf {
        script(&self.path("bin/aws"), body)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let candidates = std::env::join_paths([self.path("hello world"), self.path("hello.txt")])
            .unwrap();

        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sso-verify"));
        cmd.current_dir(self.root.path())
            .args(args)
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.path("xdg"))
            .env("SSO_VERIFY_HOME", self.home())
            .env(
                "SSO_VERIFY_IDENTITY_ARTIFACT",
                self.path("output/profiles_identity.json"),
            )
            .env("SSO_VERIFY_OUTPUT_CANDIDATES", candidates)
            .env("SSO_VERIFY_SSO_UTIL", self.path("bin/aws-sso-util"))
            .env("SSO_VERIFY_AWS_CLI", self.path("bin/aws"))
            .env("SSO_VERIFY_IDENTITY_TIMEOUT", "5")
            .env("SSO_VERIFY_COLOR", "never")
            .env_remove("RUST_LOG");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        TestResult::from_output(cmd.output().expect("failed to execute sso-verify"))
    }
}

fn write(path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
    path.to_path_buf()
}

#[cfg(unix)]
fn script(path: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    write(path, &format!("#!/bin/sh\n{}\n", body));
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path.to_path_buf()
}

#[cfg(not(unix))]
fn script(path: &Path, _body: &str) -> PathBuf {
    path.to_path_buf()
}
