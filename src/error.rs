use std::path::PathBuf;

use crate::dimension::Dimension;

/// Errors raised while loading or validating a questionnaire definition.
///
/// Scoring itself never fails; these only surface when a definition is
/// read from disk or checked before use.
#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireError {
    #[error("duplicate question id `{0}`")]
    DuplicateId(String),

    #[error("question id `{0}` must start with a letter and contain only letters, digits, `_` or `-`")]
    InvalidId(String),

    #[error("question `{id}` has invalid weight {weight}")]
    InvalidWeight { id: String, weight: f64 },

    #[error("scored question `{0}` has no options")]
    MissingOptions(String),

    #[error("option `{label}` of question `{id}` has value {value} outside [0, 1]")]
    OptionOutOfRange { id: String, label: String, value: f64 },

    #[error("no metadata declared for dimension `{0}`")]
    MissingDimensionMeta(Dimension),

    #[error("invalid definition version `{version}`: {source}")]
    InvalidVersion {
        version: String,
        source: semver::Error,
    },

    #[error("unsupported definition version `{0}` (expected 1.x)")]
    UnsupportedVersion(String),

    #[error("failed to read definition {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse definition: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("benchmark must be between 0 and 100, got {0}")]
    InvalidBenchmark(u32),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access store {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("store {} is not valid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("csv buffer error: {0}")]
    CsvBuffer(String),

    #[error("failed to write report {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': {source}")]
    EnvFilter {
        value: String,
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Top-level error for the binary and the wiring in [`crate::engine`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("questionnaire error: {0}")]
    Questionnaire(#[from] QuestionnaireError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("report error: {0}")]
    Report(#[from] ReportError),

    #[error("{0}")]
    Telemetry(#[from] TelemetryError),

    #[error("unknown question id `{0}`")]
    UnknownQuestion(String),

    #[error("invalid answer for question `{id}`: {reason}")]
    InvalidAnswer { id: String, reason: String },
}
