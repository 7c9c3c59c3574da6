//! Review analysis service client implementation

use async_trait::async_trait;
use reqwest::{Client, Request, StatusCode};
use tracing::debug;

use revsent_core::{
    AnalysisRequest, AnalysisResult, AnalysisService, Error, ErrorBody, Result, ServiceStatus,
};

use crate::config::ServerConfig;

/// HTTP client for the analysis server
pub struct HttpAnalysisClient {
    config: ServerConfig,
    client: Client,
}

impl HttpAnalysisClient {
    pub const ANALYZE_PATH: &'static str = "analyze";
    pub const STATUS_PATH: &'static str = "status";

    /// Create a new client from configuration
    pub fn new(config: ServerConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| Error::Network(e.to_string()))?;

        Ok(Self { config, client })
    }

    /// Create a new client from environment variables
    pub fn from_env() -> Result<Self> {
        let config = ServerConfig::from_env()?;
        Self::new(config)
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the form-encoded `POST /analyze` request without sending it
    pub fn build_analyze_request(&self, request: &AnalysisRequest) -> Result<Request> {
        let url = self.config.endpoint(Self::ANALYZE_PATH)?;

        self.client
            .post(url)
            .header("Accept", "application/json")
            .form(request)
            .build()
            .map_err(|e| Error::Network(e.to_string()))
    }
}

/// Turn a status code and raw body into an analysis result or the matching error
pub fn interpret_analysis_response(status: StatusCode, body: &str) -> Result<AnalysisResult> {
    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error);
        return Err(Error::request(status.as_u16(), message));
    }

    Ok(serde_json::from_str(body)?)
}

#[async_trait]
impl AnalysisService for HttpAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult> {
        let http_request = self.build_analyze_request(request)?;
        debug!(url = %http_request.url(), "posting analysis request");

        let response = self
            .client
            .execute(http_request)
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;
        debug!(%status, bytes = body.len(), "analysis response received");

        interpret_analysis_response(status, &body)
    }

    async fn status(&self) -> Result<ServiceStatus> {
        let url = self.config.endpoint(Self::STATUS_PATH)?;

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| Error::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Request {
                status: response.status().as_u16(),
                message: format!("Status check failed: {}", response.status()),
            });
        }

        response
            .json()
            .await
            .map_err(|e| Error::MalformedResponse(e.to_string()))
    }
}
