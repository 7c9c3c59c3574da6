//! Analysis service trait

use async_trait::async_trait;

use crate::{AnalysisRequest, AnalysisResult, Result, ServiceStatus};

/// Trait for the remote review analysis endpoint
///
/// Implementations translate transport problems into `Error::Network`, non-success
/// statuses into `Error::Request` and unexpected success bodies into
/// `Error::MalformedResponse`.
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Submit a product URL for analysis (`POST /analyze`)
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult>;

    /// Probe the service health endpoint (`GET /status`)
    async fn status(&self) -> Result<ServiceStatus>;
}
