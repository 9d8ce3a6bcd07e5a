// staff-client/src/client/http.rs
// HTTP client - network transport

use crate::{ClientError, ClientResult, ConsoleConfig};
use async_trait::async_trait;
use http::StatusCode;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use shared::Reply;
use tracing::debug;

/// Status and body text of a completed exchange
///
/// Transports never classify responses; a non-2xx status is still `Ok` here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Body text of a 2xx response; any other status becomes [`ClientError::Backend`]
    pub fn text(self) -> ClientResult<String> {
        if !self.is_success() {
            return Err(ClientError::Backend {
                status: self.status.as_u16(),
                message: self.body,
            });
        }
        Ok(self.body)
    }

    /// Decode a 2xx JSON body
    pub fn json<T: DeserializeOwned>(self) -> ClientResult<T> {
        let body = self.text()?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Decode a 2xx body that may be a notice instead of the record
    ///
    /// A body that is not JSON at all is taken as an unquoted notice.
    pub fn reply<T: DeserializeOwned>(self) -> ClientResult<Reply<T>> {
        let body = self.text()?;
        match serde_json::from_str(&body) {
            Ok(reply) => Ok(reply),
            Err(e) if e.is_syntax() && !looks_like_json(&body) => {
                Ok(Reply::Notice(body.trim().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn looks_like_json(body: &str) -> bool {
    matches!(body.trim_start().chars().next(), Some('{' | '[' | '"'))
}

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> ClientResult<RawResponse>;
    async fn post<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<RawResponse>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
}

impl NetworkHttpClient {
    pub fn new(config: &ConsoleConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> ClientResult<Url> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        Url::parse(&raw).map_err(|e| ClientError::Internal(format!("Invalid URL {}: {}", raw, e)))
    }

    async fn read(response: reqwest::Response) -> ClientResult<RawResponse> {
        let status = response.status();
        let body = response.text().await?;
        debug!(status = status.as_u16(), bytes = body.len(), "response received");
        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> ClientResult<RawResponse> {
        let url = self.url(path)?;
        debug!(%url, "GET");
        let response = self.client.get(url).query(query).send().await?;
        Self::read(response).await
    }

    async fn post<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<RawResponse> {
        let url = self.url(path)?;
        debug!(%url, "POST");
        let response = self.client.post(url).json(body).send().await?;
        Self::read(response).await
    }
}
