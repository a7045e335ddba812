//! HTTP client for the external recommendation/advisory service
//!
//! The service owns all scoring and text generation; this crate only holds
//! the typed call plumbing. Every method is a single request-response
//! round trip with no retries, mirroring how the web client consumed the
//! same endpoints.

pub mod models;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    AdvisoryRequest, AdvisoryResponse, RecommendationRequest, RecommendationResponse,
};
use thiserror::Error;

pub use models::CityDescription;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("service returned {status} for {url}")]
    Status { url: String, status: StatusCode },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Typed client over the advisory service's REST endpoints
#[derive(Debug, Clone)]
pub struct AdvisoryClient {
    http: reqwest::Client,
    base_url: String,
}

impl AdvisoryClient {
    /// Create a client for a service rooted at `base_url`
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { url, status });
        }

        response
            .json()
            .await
            .map_err(|source| ClientError::Decode { url, source })
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { url, status });
        }

        response
            .json()
            .await
            .map_err(|source| ClientError::Decode { url, source })
    }

    /// Cities the service can advise on
    pub async fn city_names(&self) -> Result<Vec<String>, ClientError> {
        self.get_json("/api/cities/names").await
    }

    /// Professions recognized by the job-match model
    pub async fn professions(&self) -> Result<Vec<String>, ClientError> {
        self.get_json("/api/cities/professions").await
    }

    /// Narrative profile of one city, personalized for household makeup
    pub async fn city_description(
        &self,
        city: &str,
        has_children: bool,
        has_elderly: bool,
    ) -> Result<CityDescription, ClientError> {
        let path = format!(
            "/api/cities/{}/description?has_children={}&has_elderly={}",
            city, has_children, has_elderly
        );
        self.get_json(&path).await
    }

    /// Ranked destination cities for the submitted intake
    pub async fn recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, ClientError> {
        self.post_json("/api/recommendations", request).await
    }

    /// Generated advisory text for the submitted intake and rankings
    pub async fn advisory(
        &self,
        request: &AdvisoryRequest,
    ) -> Result<AdvisoryResponse, ClientError> {
        self.post_json("/api/advisory", request).await
    }
}
