#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tempfile::TempDir;

pub const TEMPLATE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/client-analysis-dashboard-template.html"
));

static TEMPLATE_INSTALLED: OnceLock<PathBuf> = OnceLock::new();

/// Puts the shipped template next to the built binary, where it is looked up.
pub fn install_template() -> &'static Path {
    TEMPLATE_INSTALLED.get_or_init(|| {
        let bin = PathBuf::from(env!("CARGO_BIN_EXE_dashgen"));
        let dir = bin.parent().expect("binary has a parent dir");
        let target = dir.join("client-analysis-dashboard-template.html");
        let staging = dir.join(format!(
            ".client-analysis-dashboard-template.{}.tmp",
            std::process::id()
        ));
        fs::write(&staging, TEMPLATE).expect("stage template");
        fs::rename(&staging, &target).expect("install template");
        target
    })
}

pub struct TestEnv {
    _tmp: TempDir,
    pub dir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        install_template();
        let tmp = TempDir::new().expect("create temp dir");
        let dir = tmp.path().to_path_buf();
        Self { _tmp: tmp, dir }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("dashgen");
        cmd.current_dir(&self.dir);
        cmd
    }

    pub fn write_data(&self, name: &str, data: &Value) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, serde_json::to_string_pretty(data).expect("serialize data"))
            .expect("write data file");
        path
    }

    pub fn output(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
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

pub fn today() -> String {
    chrono::Local::now()
        .date_naive()
        .format("%B %-d, %Y")
        .to_string()
}

pub fn render(pairs: &[(&str, &str)]) -> String {
    let mut text = TEMPLATE.to_string();
    for (search, value) in pairs {
        text = text.replace(search, value);
    }
    text
}
