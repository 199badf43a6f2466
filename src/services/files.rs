use crate::domain::constants::TEMPLATE_FILE_NAME;
use crate::error::DashboardError;
use anyhow::Context;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Template lives next to the running executable.
pub fn template_path() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("cannot locate current executable")?;
    Ok(template_path_beside(&exe))
}

pub fn template_path_beside(exe: &Path) -> PathBuf {
    exe.parent()
        .unwrap_or_else(|| Path::new("."))
        .join(TEMPLATE_FILE_NAME)
}

pub fn ensure_template(path: &Path) -> Result<(), DashboardError> {
    if !path.exists() {
        return Err(DashboardError::MissingTemplate(path.to_path_buf()));
    }
    Ok(())
}

pub fn ensure_data_file(path: &Path) -> Result<(), DashboardError> {
    if !path.exists() {
        return Err(DashboardError::MissingDataFile(path.to_path_buf()));
    }
    Ok(())
}

pub fn load_template(path: &Path) -> Result<String, DashboardError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DashboardError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(template = %path.display(), bytes = raw.len(), "template loaded");
    Ok(raw)
}

pub fn load_data(path: &Path) -> Result<Value, DashboardError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DashboardError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let data: Value = serde_json::from_str(&raw).map_err(|source| DashboardError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(data = %path.display(), "data file parsed");
    Ok(data)
}

/// Creates or truncates `path`; the parent directory must already exist.
pub fn write_output(path: &Path, content: &str) -> Result<(), DashboardError> {
    std::fs::write(path, content).map_err(|source| DashboardError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(output = %path.display(), bytes = content.len(), "output written");
    Ok(())
}

pub fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
