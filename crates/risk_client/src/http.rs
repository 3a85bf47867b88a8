//! HTTP adapter for the risk-scoring service
//!
//! Sends `POST {base_url}/risk` with a JSON body of the form
//! `{ "polygon": <GeoJSON Feature>, "coverage": <float> }` and decodes the
//! response into a `RiskResult`.
//!
//! # Error Handling
//!
//! Service responses are mapped to `AssessmentError` variants:
//! - transport failures and timeouts -> `Transport`
//! - any non-2xx status -> `Status`
//! - undecodable bodies or payloads violating the `RiskResult` shape
//!   invariants -> `MalformedPayload`

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use core_kernel::{FieldPolygon, RiskResult};

use crate::assessor::RiskAssessor;
use crate::error::AssessmentError;

/// Configuration for the HTTP risk-service adapter
#[derive(Debug, Clone)]
pub struct RiskServiceConfig {
    /// Base URL of the scoring service (e.g., "http://localhost:8000")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Optional API key sent as `X-Api-Key`
    pub api_key: Option<String>,
}

impl Default for RiskServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 30,
            api_key: None,
        }
    }
}

#[derive(Serialize)]
struct AssessmentRequest<'a> {
    polygon: &'a serde_json::Value,
    coverage: f64,
}

/// HTTP implementation of the `RiskAssessor` port
#[derive(Debug, Clone)]
pub struct HttpRiskAssessor {
    config: RiskServiceConfig,
    client: reqwest::Client,
}

impl HttpRiskAssessor {
    /// Creates an adapter with a pooled client honoring the config timeout
    pub fn new(config: RiskServiceConfig) -> Result<Self, AssessmentError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AssessmentError::transport(e.to_string()))?;
        Ok(Self { config, client })
    }

    /// Returns the configured base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn risk_url(&self) -> String {
        format!("{}/risk", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl RiskAssessor for HttpRiskAssessor {
    async fn assess(
        &self,
        polygon: &FieldPolygon,
        coverage: f64,
    ) -> Result<RiskResult, AssessmentError> {
        let body = AssessmentRequest {
            polygon: polygon.as_value(),
            coverage,
        };

        let mut request = self.client.post(self.risk_url()).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.header("X-Api-Key", key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AssessmentError::status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let result = decode_payload(&bytes)?;
        debug!(
            score = result.risk_score,
            premium = %result.premium,
            "assessment received"
        );
        Ok(result)
    }
}

/// Decodes and shape-checks a response body
fn decode_payload(body: &[u8]) -> Result<RiskResult, AssessmentError> {
    let result: RiskResult =
        serde_json::from_slice(body).map_err(|e| AssessmentError::malformed(e.to_string()))?;
    result
        .validate()
        .map_err(|e| AssessmentError::malformed(e.to_string()))?;
    Ok(result)
}
