//! HTTP Client Module
//!
//! The request-executor layer. It knows how to talk to the three remote
//! endpoints (search, classify, model-info) and how to decode their payloads,
//! and nothing else: no retries, no cancellation, no state. Supersession of
//! in-flight requests is the session controller's job.
//!
//! ## Submodules
//! - **`http`**: The `reqwest`-backed [`ApiClient`].
//! - **`types`**: Wire DTOs for the endpoint contracts.
//!
//! The [`SearchBackend`] and [`ClassifyBackend`] traits are the seam between
//! the controllers and the network; tests substitute scripted implementations.

pub mod http;
pub mod types;


use async_trait::async_trait;

use crate::error::ClientError;
use types::{ClassificationResult, ModelChoice, ModelInfo, SearchResponse};

/// Executes search requests against the publication service.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Fetches one page of ranked results for `query`.
    ///
    /// May fail with a transport error, a non-success status, or a decode
    /// failure. Latency is measured by the caller, not here.
    async fn search(
        &self,
        query: &str,
        page: usize,
        size: usize,
    ) -> Result<SearchResponse, ClientError>;
}

/// Executes classification and model-info requests.
#[async_trait]
pub trait ClassifyBackend: Send + Sync {
    /// Submits `text` for classification under the chosen model.
    async fn classify(
        &self,
        text: &str,
        model: ModelChoice,
    ) -> Result<ClassificationResult, ClientError>;

    /// Read-only query describing the chosen model's training state.
    async fn model_info(&self, model: ModelChoice) -> Result<ModelInfo, ClientError>;
}
