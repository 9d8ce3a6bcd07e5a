// staff-client/src/client/http_oneshot.rs
// Oneshot HTTP client - in-process calls into an axum Router

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request};
use reqwest::Url;
use tower::ServiceExt;
use tracing::debug;

use crate::{ClientError, ClientResult};

use super::http::{HttpClient, RawResponse};

/// Oneshot HTTP client (in-memory calls)
///
/// Drives the Router through Tower's `oneshot`, so a service implementation
/// living in the same process can be exercised without a socket.
///
/// # Example
///
/// ```ignore
/// use staff_client::OneshotHttpClient;
///
/// let client = OneshotHttpClient::new(staff_mock::router(state));
/// let response = client.get("/getAllDepartments", &[]).await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
}

impl OneshotHttpClient {
    /// `router` must already have its state attached (`with_state` called)
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Path plus percent-encoded query
    fn uri(path: &str, query: &[(&str, String)]) -> ClientResult<String> {
        let mut url = Url::parse("http://in-process/")
            .map_err(|e| ClientError::Internal(format!("Invalid URL: {}", e)))?;
        url.set_path(path);
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(key, value)| (*key, value.as_str())));
        }
        Ok(match url.query() {
            Some(q) => format!("{}?{}", url.path(), q),
            None => url.path().to_string(),
        })
    }

    fn build_request(method: Method, uri: String, body: Body) -> ClientResult<Request<Body>> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    async fn execute(&self, request: Request<Body>) -> ClientResult<RawResponse> {
        debug!(method = %request.method(), uri = %request.uri(), "oneshot");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::InvalidResponse(format!("Failed to read body: {}", e)))?;

        Ok(RawResponse {
            status,
            body: String::from_utf8_lossy(&body_bytes).into_owned(),
        })
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> ClientResult<RawResponse> {
        let request = Self::build_request(Method::GET, Self::uri(path, query)?, Body::empty())?;
        self.execute(request).await
    }

    async fn post<B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<RawResponse> {
        let body_bytes = serde_json::to_vec(body)?;
        let request = Self::build_request(
            Method::POST,
            Self::uri(path, &[])?,
            Body::from(body_bytes),
        )?;
        self.execute(request).await
    }
}
