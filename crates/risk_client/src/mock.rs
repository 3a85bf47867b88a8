//! Scripted assessor for testing
//!
//! Returns pre-loaded outcomes in FIFO order and records every request it
//! receives, so tests can assert on what was sent without a live service.

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use core_kernel::{FieldPolygon, RiskResult};

use crate::assessor::RiskAssessor;
use crate::error::AssessmentError;

/// A recorded assessment request
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub polygon: serde_json::Value,
    pub coverage: f64,
}

/// Mock implementation of `RiskAssessor` backed by a response script
#[derive(Debug, Default)]
pub struct ScriptedAssessor {
    script: Mutex<VecDeque<Result<RiskResult, AssessmentError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl ScriptedAssessor {
    /// Creates a mock with an empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful assessment
    pub async fn push_ok(&self, result: RiskResult) {
        self.script.lock().await.push_back(Ok(result));
    }

    /// Queues a failed assessment
    pub async fn push_err(&self, error: AssessmentError) {
        self.script.lock().await.push_back(Err(error));
    }

    /// Returns the requests received so far
    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl RiskAssessor for ScriptedAssessor {
    async fn assess(
        &self,
        polygon: &FieldPolygon,
        coverage: f64,
    ) -> Result<RiskResult, AssessmentError> {
        self.requests.lock().await.push(RecordedRequest {
            polygon: polygon.as_value().clone(),
            coverage,
        });

        self.script
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Err(AssessmentError::transport("script exhausted")))
    }
}
