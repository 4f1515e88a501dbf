//! API client.
//!
//! One method per backend capability. Each call is a pure translation:
//! build the request from typed arguments, decode the response body, and
//! classify failures into [`ApiError`]. No retries, no caching.
//!
//! A 401 is reported as [`ApiError::AuthExpired`] instead of being acted
//! on here; the auth layer owns the forced logout so this module stays
//! free of navigation side effects. The login call is the one exception:
//! its 401 means wrong credentials and surfaces the backend detail.

use crate::web::{HttpClient, HttpError, HttpRequestBuilder, HttpResponse};
use cancerguard_shared::protocol::{ApiRequest, HttpMethod, form_urlencode};
use cancerguard_shared::{HEADER_AUTHORIZATION, Prediction, TokenResponse};
use serde::de::DeserializeOwned;

/// Discriminated request outcome, as seen by the views.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The bearer credential was rejected (HTTP 401).
    AuthExpired,
    /// Transport failure; the backend was never reached.
    Network(String),
    /// The backend answered with a non-2xx status.
    Api { status: u16, detail: String },
    /// The response body did not match the expected shape.
    Decode(String),
}

impl ApiError {
    /// Message surfaced in a notification. 4xx detail text passes through
    /// verbatim; everything else collapses to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::AuthExpired => "Session expired. Please sign in again.".to_string(),
            ApiError::Network(_) => "Network error. Check your connection and retry.".to_string(),
            ApiError::Api { status, detail } if *status < 500 => detail.clone(),
            ApiError::Api { .. } => "The server hit an unexpected error. Try again.".to_string(),
            ApiError::Decode(_) => "Received an unexpected response from the server.".to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::AuthExpired => write!(f, "authentication expired"),
            ApiError::Network(msg) => write!(f, "network failure: {}", msg),
            ApiError::Api { status, detail } => write!(f, "api error {}: {}", status, detail),
            ApiError::Decode(msg) => write!(f, "decode failure: {}", msg),
        }
    }
}

impl From<HttpError> for ApiError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::NetworkError(msg) => ApiError::Network(msg),
            HttpError::RequestBuildFailed(msg) => ApiError::Network(msg),
            HttpError::ResponseParseFailed(msg) => ApiError::Decode(msg),
        }
    }
}

/// Pull the backend's `{"detail": ...}` message out of an error body.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(str::to_string)
}

/// Map a non-2xx status and body to the error taxonomy.
///
/// 401 classifies as [`ApiError::AuthExpired`] regardless of which
/// endpoint produced it.
fn classify_failure(status: u16, body: &str) -> ApiError {
    if status == 401 {
        return ApiError::AuthExpired;
    }
    let detail = extract_detail(body)
        .unwrap_or_else(|| format!("Request failed with status {}", status));
    ApiError::Api { status, detail }
}

/// Classification for the login call only. A 401 here means wrong
/// credentials, not an expired session, so the backend's detail message
/// surfaces verbatim like any other 4xx.
fn classify_login_failure(status: u16, body: &str) -> ApiError {
    let detail = extract_detail(body)
        .unwrap_or_else(|| format!("Request failed with status {}", status));
    ApiError::Api { status, detail }
}

/// Configured client: versioned base URL plus the current bearer token.
///
/// Cheap to construct; views build one per call batch from the auth store
/// so the token snapshot is always current.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: String, token: Option<String>) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self { base_url, token }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Start a request builder with the bearer header attached when a
    /// token is present.
    fn builder(&self, method: HttpMethod, path: &str) -> HttpRequestBuilder {
        let url = self.url(path);
        let builder = match method {
            HttpMethod::Get => HttpClient::get(&url),
            HttpMethod::Post => HttpClient::post(&url),
            HttpMethod::Put => HttpClient::put(&url),
        };
        match &self.token {
            Some(token) => builder.header(HEADER_AUTHORIZATION, &format!("Bearer {}", token)),
            None => builder,
        }
    }

    async fn dispatch_with<T: DeserializeOwned>(
        builder: HttpRequestBuilder,
        classify: fn(u16, &str) -> ApiError,
    ) -> Result<T, ApiError> {
        let response: HttpResponse = builder.send().await?;
        let status = response.status();
        let ok = response.ok();
        let body = response.text().await?;

        if !ok {
            return Err(classify(status, &body));
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn dispatch<T: DeserializeOwned>(builder: HttpRequestBuilder) -> Result<T, ApiError> {
        Self::dispatch_with(builder, classify_failure).await
    }

    /// Execute any JSON endpoint defined in the shared protocol.
    pub async fn execute<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        let mut builder = self.builder(R::METHOD, &request.path());
        if R::METHOD.has_body() {
            let body =
                serde_json::to_string(request).map_err(|e| ApiError::Decode(e.to_string()))?;
            builder = builder
                .header("Content-Type", "application/json")
                .body(body);
        }
        Self::dispatch(builder).await
    }

    /// Exchange credentials for a bearer token. The auth endpoint takes a
    /// form-encoded body whose `username` field carries the email.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let body = form_urlencode(&[("username", email), ("password", password)]);
        let builder = self
            .builder(HttpMethod::Post, "/auth/login")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body);
        Self::dispatch_with(builder, classify_login_failure).await
    }

    /// Submit one staged image for analysis. Multipart with a single
    /// `file` part; the browser supplies the boundary.
    pub async fn upload_and_predict(&self, file: &web_sys::File) -> Result<Prediction, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|e| ApiError::Network(format!("form init: {:?}", e)))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|e| ApiError::Network(format!("form append: {:?}", e)))?;

        let builder = self
            .builder(HttpMethod::Post, "/predictions/upload")
            .form(form);
        Self::dispatch(builder).await
    }
}

// =========================================================
// Unit Tests
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cancerguard_shared::protocol::{DashboardRequest, HistoryQuery};

    fn client_with_token() -> ApiClient {
        ApiClient::new(
            "http://localhost:8000/api/v1".to_string(),
            Some("tok-123".to_string()),
        )
    }

    #[test]
    fn test_builder_attaches_exact_bearer_token() {
        let client = client_with_token();
        let builder = client.builder(HttpMethod::Get, &DashboardRequest.path());
        assert_eq!(
            builder.header_value("Authorization"),
            Some("Bearer tok-123")
        );
    }

    #[test]
    fn test_builder_omits_header_without_token() {
        let client = ApiClient::new("http://localhost:8000/api/v1".to_string(), None);
        let builder = client.builder(HttpMethod::Post, "/auth/login");
        assert_eq!(builder.header_value("Authorization"), None);
    }

    #[test]
    fn test_builder_targets_versioned_url() {
        let client = client_with_token();
        let builder = client.builder(HttpMethod::Get, &HistoryQuery::default().path());
        assert_eq!(
            builder.url(),
            "http://localhost:8000/api/v1/predictions/history?skip=0&limit=100"
        );
        assert_eq!(builder.method(), HttpMethod::Get);
    }

    #[test]
    fn test_trailing_slash_in_base_is_trimmed() {
        let client = ApiClient::new("http://host/api/v1/".to_string(), None);
        let builder = client.builder(HttpMethod::Get, "/users/me");
        assert_eq!(builder.url(), "http://host/api/v1/users/me");
    }

    #[test]
    fn test_401_classifies_as_auth_expired_for_any_endpoint() {
        assert_eq!(classify_failure(401, ""), ApiError::AuthExpired);
        assert_eq!(
            classify_failure(401, r#"{"detail":"Could not validate credentials"}"#),
            ApiError::AuthExpired
        );
    }

    #[test]
    fn test_login_401_surfaces_backend_detail() {
        let err = classify_login_failure(401, r#"{"detail":"Incorrect email or password"}"#);
        assert_eq!(
            err,
            ApiError::Api {
                status: 401,
                detail: "Incorrect email or password".to_string()
            }
        );
        assert_eq!(err.user_message(), "Incorrect email or password");
    }

    #[test]
    fn test_4xx_detail_passes_through_verbatim() {
        let err = classify_failure(422, r#"{"detail":"Email already registered"}"#);
        assert_eq!(
            err,
            ApiError::Api {
                status: 422,
                detail: "Email already registered".to_string()
            }
        );
        assert_eq!(err.user_message(), "Email already registered");
    }

    #[test]
    fn test_5xx_collapses_to_generic_message() {
        let err = classify_failure(500, "internal stack trace");
        assert!(err.user_message().contains("Try again"));
    }

    #[test]
    fn test_malformed_error_body_falls_back_to_status() {
        let err = classify_failure(404, "not json");
        assert_eq!(
            err,
            ApiError::Api {
                status: 404,
                detail: "Request failed with status 404".to_string()
            }
        );
    }
}
