//! Reqwest-backed request executor.
//!
//! One [`ApiClient`] per configured endpoint. Every request carries the
//! configured timeout; a non-2xx status or an undecodable body is an error.
//! There is deliberately no retry loop here: recovery is the user's action
//! (re-type, resubmit, change page), never the transport's.

use async_trait::async_trait;
use std::time::Duration;

use super::types::{
    ClassificationResult, ClassifyRequest, ModelChoice, ModelInfo, SearchResponse,
};
use super::{ClassifyBackend, SearchBackend};
use crate::config::ClientConfig;
use crate::error::ClientError;

/// HTTP client for the publication service.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timeout: config.request_timeout,
        }
    }

    /// URL for a search request. Query text is percent-encoded.
    pub(crate) fn search_url(&self, query: &str, page: usize, size: usize) -> String {
        format!(
            "{}/search?query={}&page={}&size={}",
            self.base_url,
            urlencoding::encode(query),
            page,
            size
        )
    }

    pub(crate) fn classify_url(&self) -> String {
        format!("{}/classify", self.base_url)
    }

    pub(crate) fn model_info_url(&self, model: ModelChoice) -> String {
        format!("{}/model-info?model={}", self.base_url, model.as_str())
    }

    /// Issues a GET and decodes the JSON body.
    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: String) -> Result<T, ClientError> {
        let response = self.http.get(url).timeout(self.timeout).send().await?;
        Self::decode(response).await
    }

    /// Checks the status, then decodes the body in a separate step so that a
    /// malformed payload is distinguishable from a transport failure.
    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl SearchBackend for ApiClient {
    async fn search(
        &self,
        query: &str,
        page: usize,
        size: usize,
    ) -> Result<SearchResponse, ClientError> {
        let url = self.search_url(query, page, size);
        tracing::debug!("GET {}", url);
        self.get_json(url).await
    }
}

#[async_trait]
impl ClassifyBackend for ApiClient {
    async fn classify(
        &self,
        text: &str,
        model: ModelChoice,
    ) -> Result<ClassificationResult, ClientError> {
        let url = self.classify_url();
        tracing::debug!("POST {} (model={})", url, model.as_str());
        let payload = ClassifyRequest {
            text: text.to_string(),
            model,
        };
        let response = self
            .http
            .post(url)
            .json(&payload)
            .timeout(self.timeout)
            .send()
            .await?;
        Self::decode(response).await
    }

    async fn model_info(&self, model: ModelChoice) -> Result<ModelInfo, ClientError> {
        let url = self.model_info_url(model);
        tracing::debug!("GET {}", url);
        self.get_json(url).await
    }
}
