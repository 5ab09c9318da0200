//! Configuration types for poly-agent

use crate::market::{GammaConfig, Paging, GAMMA_API_URL};
use crate::research::ActionPolicy;
use crate::telemetry::LogFormat;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Root configuration structure
///
/// Every section is optional; missing sections take their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub gamma: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub research: ResearchConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Gamma API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Events per page when fetching everything
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Ceiling on pages per full fetch
    #[serde(default = "default_max_pages")]
    pub max_pages: u32,
}

fn default_base_url() -> String {
    GAMMA_API_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_page_size() -> u32 {
    100
}
fn default_max_pages() -> u32 {
    200
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
            max_pages: default_max_pages(),
        }
    }
}

impl ApiConfig {
    /// HTTP client settings
    pub fn client_config(&self) -> GammaConfig {
        GammaConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }

    /// Pagination settings for full fetches
    pub fn paging(&self) -> Paging {
        Paging {
            page_size: self.page_size,
            max_pages: self.max_pages,
        }
    }
}

/// Data directory configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root of the JSON store, relative paths resolve against the working
    /// directory
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Research run configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ResearchConfig {
    /// Events fetched before filters and the limit are applied
    #[serde(default = "default_candidate_pool")]
    pub candidate_pool: u32,
    /// Absolute edge needed to act
    #[serde(default = "default_significance")]
    pub significance_threshold: Decimal,
    /// Absolute edge above which risk is high
    #[serde(default = "default_high_risk")]
    pub high_risk_threshold: Decimal,
}

fn default_candidate_pool() -> u32 {
    100
}
fn default_significance() -> Decimal {
    dec!(0.05)
}
fn default_high_risk() -> Decimal {
    dec!(0.15)
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            candidate_pool: default_candidate_pool(),
            significance_threshold: default_significance(),
            high_risk_threshold: default_high_risk(),
        }
    }
}

impl ResearchConfig {
    /// Thresholds as an action policy
    pub fn policy(&self) -> ActionPolicy {
        ActionPolicy {
            significance: self.significance_threshold,
            high_risk: self.high_risk_threshold,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `path` if it exists, otherwise use defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
