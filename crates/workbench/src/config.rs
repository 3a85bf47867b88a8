//! Workbench configuration

use serde::Deserialize;

use risk_client::RiskServiceConfig;

/// Workbench configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WorkbenchConfig {
    /// Directory holding the snapshot files
    pub data_dir: String,
    /// Base URL of the risk-scoring service
    pub risk_service_url: String,
    /// Risk service request timeout in seconds
    pub risk_timeout_secs: u64,
    /// Optional API key for the risk service
    pub risk_api_key: Option<String>,
    /// Log level
    pub log_level: String,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            data_dir: "./data".to_string(),
            risk_service_url: "http://localhost:8000".to_string(),
            risk_timeout_secs: 30,
            risk_api_key: None,
            log_level: "info".to_string(),
        }
    }
}

impl WorkbenchConfig {
    /// Loads configuration from environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("WORKBENCH"))
            .build()?
            .try_deserialize()
    }

    /// Returns the risk-service adapter configuration
    pub fn risk_service(&self) -> RiskServiceConfig {
        RiskServiceConfig {
            base_url: self.risk_service_url.clone(),
            timeout_secs: self.risk_timeout_secs,
            api_key: self.risk_api_key.clone(),
        }
    }
}
