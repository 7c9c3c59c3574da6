//! HTTP integration for revsent
//!
//! This crate provides the reqwest implementation of the AnalysisService trait.

mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::{interpret_analysis_response, HttpAnalysisClient};
pub use config::{parse_base_url, parse_timeout, ServerConfig, DEFAULT_SERVER_URL};

// Re-export core types for convenience
pub use revsent_core::{AnalysisRequest, AnalysisResult, AnalysisService, Error, Result};
