use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::report::DEFAULT_BENCHMARK;
use crate::reporter::OutputFormat;
use crate::store::AssessmentStore;

pub const CONFIG_FILE: &str = "healer-assessment.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportConfig,
    pub store: StoreConfig,
    pub questionnaire: QuestionnaireConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub benchmark: u32,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Answer file; defaults to `healer-assessment.json` next to the config.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QuestionnaireConfig {
    /// Custom definition file. The built-in questionnaire is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            benchmark: DEFAULT_BENCHMARK,
            format: OutputFormat::Cli,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        LogConfig {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config_path = root.join(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let contents =
            std::fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
                path: config_path.clone(),
                source,
            })?;
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: config_path.clone(),
            source,
        })?;
        if config.report.benchmark > 100 {
            return Err(ConfigError::InvalidBenchmark(config.report.benchmark));
        }
        Ok(config)
    }

    /// Store location, relative paths resolved against `root`.
    pub fn store_path(&self, root: &Path) -> PathBuf {
        match &self.store.path {
            Some(path) => root.join(path),
            None => AssessmentStore::default_path(root),
        }
    }

    pub fn questionnaire_path(&self, root: &Path) -> Option<PathBuf> {
        self.questionnaire.path.as_ref().map(|p| root.join(p))
    }
}
