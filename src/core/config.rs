/*!
 * Simulation Configuration
 *
 * Defaults, optional JSON config file and environment overrides
 *
 * Environment variables:
 * - MLQ_CONFIG: path to a JSON config file
 * - MLQ_PROGRAMS_DIR: directory holding the program files
 * - MLQ_RESULTS_PATH: results file, truncated at the start of a batch
 * - MLQ_REPORT_FORMAT: `text` or `json`
 * - MLQ_QUEUES: comma separated policies for queues 1..n, e.g. `rr:3,rr:5,fcfs`
 */

use super::errors::ConfigError;
use crate::scheduler::QueueTable;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

pub const ENV_CONFIG: &str = "MLQ_CONFIG";
pub const ENV_PROGRAMS_DIR: &str = "MLQ_PROGRAMS_DIR";
pub const ENV_RESULTS_PATH: &str = "MLQ_RESULTS_PATH";
pub const ENV_REPORT_FORMAT: &str = "MLQ_REPORT_FORMAT";
pub const ENV_QUEUES: &str = "MLQ_QUEUES";

/// Results file layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// Human-readable blocks separated by a rule
    #[default]
    Text,
    /// One JSON object per program per line
    Json,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "json" | "jsonl" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

/// Batch simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SimulationConfig {
    pub programs_dir: PathBuf,
    pub results_path: PathBuf,
    pub report_format: ReportFormat,
    pub queues: QueueTable,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            programs_dir: PathBuf::from("programs"),
            results_path: PathBuf::from("results.txt"),
            report_format: ReportFormat::Text,
            queues: QueueTable::default(),
        }
    }
}

impl SimulationConfig {
    /// Load a JSON config file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults (or `MLQ_CONFIG`) with environment overrides applied
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(ENV_CONFIG) {
            Some(path) => {
                debug!(path = ?path, "loading config file");
                Self::from_file(Path::new(&path))?
            }
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(dir) = std::env::var_os(ENV_PROGRAMS_DIR) {
            self.programs_dir = PathBuf::from(dir);
        }
        if let Some(path) = std::env::var_os(ENV_RESULTS_PATH) {
            self.results_path = PathBuf::from(path);
        }
        if let Ok(format) = std::env::var(ENV_REPORT_FORMAT) {
            self.report_format = format.parse()?;
        }
        if let Ok(queues) = std::env::var(ENV_QUEUES) {
            self.queues = QueueTable::parse_list(&queues)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queues.is_empty() {
            return Err(ConfigError::EmptyTable);
        }
        Ok(())
    }
}
