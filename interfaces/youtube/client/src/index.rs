use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";

/// Largest `maxResults` the Data API accepts on list calls.
pub const MAX_RESULTS: u32 = 50;

pub struct YouTubeApiResult {
    pub body: String,
    pub status: StatusCode,
}

impl YouTubeApiResult {
    /// Hands back the body of a 2xx response, or the status and body otherwise.
    pub fn into_success_body(self) -> Result<String, UnexpectedStatusError> {
        if self.status.is_success() {
            Ok(self.body)
        } else {
            Err(UnexpectedStatusError {
                status: self.status,
                body: self.body,
            })
        }
    }
}

#[derive(Debug, Error)]
#[error("UnexpectedStatus: {status}: {body}")]
pub struct UnexpectedStatusError {
    pub status: StatusCode,
    pub body: String,
}

/// Authorized handle on the YouTube Data API v3.
///
/// Cheap to clone, the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    http: Client,
    base_url: String,
    access_token: String,
}

impl YouTubeClient {
    pub fn new(
        base_url: &str,
        access_token: &str,
        timeout: Duration,
    ) -> Result<Self, BuildClientError> {
        let http = Client::builder()
            .user_agent("mytube-client")
            .timeout(timeout)
            .build()
            .map_err(|source| BuildClientError::ClientBuild { source })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            access_token: access_token.to_string(),
        })
    }

    /// Same connection pool and base URL, authorized with `access_token`.
    pub fn with_access_token(&self, access_token: &str) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            access_token: access_token.to_string(),
        }
    }

    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}/youtube/v3/{resource}", self.base_url)
    }

    pub async fn get(
        &self,
        resource: &str,
        params: &[(&str, String)],
    ) -> Result<YouTubeApiResult, SendRequestError> {
        let url = self.resource_url(resource);
        debug!(%url, ?params, "youtube GET");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .header("Accept", "application/json")
            .query(params)
            .send()
            .await
            .map_err(|source| SendRequestError::RequestSend { source })?;

        read_result(response).await
    }

    pub async fn post(
        &self,
        resource: &str,
        params: &[(&str, String)],
        body: &serde_json::Value,
    ) -> Result<YouTubeApiResult, SendRequestError> {
        let url = self.resource_url(resource);
        debug!(%url, ?params, "youtube POST");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .query(params)
            .json(body)
            .send()
            .await
            .map_err(|source| SendRequestError::RequestSend { source })?;

        read_result(response).await
    }
}

async fn read_result(response: reqwest::Response) -> Result<YouTubeApiResult, SendRequestError> {
    let status = response.status();

    let body = response
        .text()
        .await
        .map_err(|source| SendRequestError::ResponseRead { source })?;

    Ok(YouTubeApiResult { body, status })
}

#[derive(Debug, Error)]
pub enum BuildClientError {
    #[error("ClientBuild: {source}")]
    ClientBuild {
        source: reqwest::Error,
    },
}

#[derive(Debug, Error)]
pub enum SendRequestError {
    #[error("RequestSend: {source}")]
    RequestSend {
        source: reqwest::Error,
    },

    #[error("ResponseRead: {source}")]
    ResponseRead {
        source: reqwest::Error,
    },
}
