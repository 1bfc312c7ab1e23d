//! HTTP client for the Shopwire storefront backend.
//!
//! Every outgoing call funnels through [`ApiClient::request`], which resolves
//! the stored credential, attaches it as a bearer header when it is still
//! valid, and maps failures into [`ApiError`]. Endpoint wrappers live in the
//! sibling modules and stay thin.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::auth::Session;
use crate::config::Config;

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// 30s allows for slow backend responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the Shopwire storefront backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling,
/// and Session shares its credential store the same way.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Create a client bound to the configured backend.
    ///
    /// The underlying HTTP client sends `Content-Type: application/json` on
    /// every request and keeps a cookie jar so backend session cookies are
    /// replayed on later calls.
    pub fn new(config: &Config, session: Session) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url(),
            session,
        })
    }

    /// The session this client authenticates with.
    /// Callers establish or clear credentials through the same store the
    /// client reads from.
    pub fn session(&self) -> &Session {
        &self.session
    }

    // ===== Request Core =====

    /// Build and dispatch a single request.
    ///
    /// The credential check happens here and nowhere else: a valid stored
    /// credential becomes an `Authorization: Bearer` header, an expired or
    /// unreadable one is evicted by the session and the call proceeds
    /// unauthenticated. Failed calls are never retried.
    async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(method = %method, path, "dispatching storefront request");

        let mut request = self.http.request(method, &url);
        if let Some(token) = self.session.bearer_token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(ApiError::Network)?;
        let response = Self::check_response(response).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// Check if a response is successful, mapping non-2xx to an error built
    /// from the body.
    async fn check_response(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_response(status, &body))
        }
    }

    // ===== Verb Helpers =====

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<T, ()>(Method::DELETE, path, None).await
    }
}
