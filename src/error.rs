use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum DashboardError {
    #[error("Template file not found: {}", .0.display())]
    MissingTemplate(PathBuf),
    #[error("Data file not found: {}", .0.display())]
    MissingDataFile(PathBuf),
    #[error("failed to parse data file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DashboardError {
    /// Stable code reported in the `--json` error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            DashboardError::MissingTemplate(_) => "MISSING_TEMPLATE",
            DashboardError::MissingDataFile(_) => "MISSING_DATA_FILE",
            DashboardError::Parse { .. } => "PARSE_ERROR",
            DashboardError::Read { .. } => "READ_ERROR",
            DashboardError::Write { .. } => "WRITE_ERROR",
        }
    }
}

pub fn error_code(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<DashboardError>()
        .map(DashboardError::code)
        .unwrap_or("INTERNAL")
}
