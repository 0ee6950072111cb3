//! DM Generation API
//!
//! HTTP client for the generation backend, organized by concern.

mod error;
mod stream;

use futures::TryStreamExt;

use crate::config::ApiConfig;
use crate::models::{GenerateDmRequest, GenerateDmResponse, ProgressUpdate};

pub use error::*;
pub use stream::*;

const GENERATE_PATH: &str = "/api/dm/generate";
const GENERATE_STREAM_PATH: &str = "/api/dm/generate/stream";

#[derive(Clone)]
pub struct DmApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl DmApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Generate in one round trip
    pub async fn generate(&self, request: &GenerateDmRequest) -> Result<GenerateDmResponse, ApiError> {
        let response = self.post(GENERATE_PATH, request).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Interrupted(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Generate while reporting progress events to `on_progress`
    pub async fn generate_stream<F>(
        &self,
        request: &GenerateDmRequest,
        on_progress: F,
    ) -> Result<GenerateDmResponse, ApiError>
    where
        F: FnMut(ProgressUpdate),
    {
        let response = self.post(GENERATE_STREAM_PATH, request).await?;
        let body = Box::pin(
            response
                .bytes_stream()
                .map_err(|e| ApiError::Interrupted(e.to_string())),
        );
        read_event_stream(body, on_progress).await
    }

    async fn post(&self, path: &str, request: &GenerateDmRequest) -> Result<reqwest::Response, ApiError> {
        let url = self.config.endpoint(path);
        log::info!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::error!("no response from {}: {}", url, e);
                ApiError::Unreachable {
                    base_url: self.config.base_url.clone(),
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let error = ApiError::from_response(status.as_u16(), &body);
            log::error!("{} returned {}: {:?}", url, status, error);
            return Err(error);
        }
        Ok(response)
    }
}

impl Default for DmApiClient {
    fn default() -> Self {
        Self::new(ApiConfig::from_env())
    }
}
