use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::model::{Feature, FeatureCreate};

use super::error::ApiError;

const USER_AGENT_VALUE: &str = concat!("feature-vote/", env!("CARGO_PKG_VERSION"));

/// The three server operations the UI depends on.
///
/// The worker only sees this trait, so tests can drive it with any
/// implementation.
#[async_trait]
pub trait FeatureApi: Send + Sync {
    /// `GET /features`: every feature, in server order.
    async fn fetch_features(&self) -> Result<Vec<Feature>, ApiError>;

    /// `POST /features`: create a feature and return it with its server-assigned id.
    async fn create_feature(&self, input: &FeatureCreate) -> Result<Feature, ApiError>;

    /// `POST /features/{id}/vote`: add one vote and return the updated feature.
    async fn vote_for_feature(&self, id: i64) -> Result<Feature, ApiError>;
}

/// reqwest-backed [`FeatureApi`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the server at `base_url` (e.g. `http://localhost:8000`).
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to create HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            // An unreadable error body is treated like an unparsable one.
            let body = response.bytes().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl FeatureApi for ApiClient {
    async fn fetch_features(&self) -> Result<Vec<Feature>, ApiError> {
        let url = self.url("/features");
        tracing::debug!("Fetching features from {}", url);

        let result = match self.client.get(&url).send().await {
            Ok(response) => Self::handle_response(response).await,
            Err(e) => Err(ApiError::Transport(e.to_string())),
        };
        if let Err(err) = &result {
            tracing::warn!(error = %err, "Failed to fetch features");
        }
        result
    }

    async fn create_feature(&self, input: &FeatureCreate) -> Result<Feature, ApiError> {
        let url = self.url("/features");
        tracing::debug!("Creating feature '{}'", input.title);

        let result: Result<Feature, ApiError> = match self.client.post(&url).json(input).send().await {
            Ok(response) => Self::handle_response(response).await,
            Err(e) => Err(ApiError::Transport(e.to_string())),
        };
        match &result {
            Ok(feature) => tracing::info!(id = feature.id, "Feature created"),
            Err(err) => tracing::warn!(error = %err, "Failed to create feature"),
        }
        result
    }

    async fn vote_for_feature(&self, id: i64) -> Result<Feature, ApiError> {
        let url = self.url(&format!("/features/{id}/vote"));
        tracing::debug!("Voting for feature {}", id);

        let result: Result<Feature, ApiError> = match self.client.post(&url).send().await {
            Ok(response) => Self::handle_response(response).await,
            Err(e) => Err(ApiError::Transport(e.to_string())),
        };
        match &result {
            Ok(feature) => tracing::debug!(id, votes = feature.vote_count, "Vote recorded"),
            Err(err) => tracing::warn!(id, error = %err, "Failed to vote"),
        }
        result
    }
}
