use serde::Serialize;
use std::path::PathBuf;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Data,
    Default,
}

/// A search literal paired with its fully resolved replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementEntry {
    pub search: &'static str,
    pub value: String,
    pub source: ValueSource,
}

/// Ordered list of resolved replacements. Built once, before any substitution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementTable {
    pub entries: Vec<ReplacementEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplacementReport {
    pub search: String,
    pub value: String,
    pub source: ValueSource,
    pub occurrences: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    pub template: PathBuf,
    pub data: PathBuf,
    pub output: PathBuf,
    pub replacements: Vec<ReplacementReport>,
}
