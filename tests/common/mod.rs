use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().join("out");
        fs::create_dir_all(&dir).expect("create isolated working dir");

        Self { _tmp: tmp, dir }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("fixgen").expect("binary under test");
        cmd.current_dir(&self.dir);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
