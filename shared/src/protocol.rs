//! Endpoint protocol.
//!
//! One request type per backend capability, tied to its response type,
//! method and path through the [`ApiRequest`] trait. The API client is a
//! pure translation of these definitions into HTTP calls.
//!
//! Two endpoints do not speak JSON and are therefore not modelled here:
//! login (`application/x-www-form-urlencoded`) and upload
//! (`multipart/form-data`). The client carries dedicated methods for them.

use crate::{
    AnalyticsData, Prediction, RegisterRequest, UpdateProfileRequest, User, UserStats,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP methods used by the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }

    /// GET requests never carry a body.
    pub fn has_body(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

/// A request type that maps to exactly one backend endpoint.
pub trait ApiRequest: Serialize {
    /// The decoded response body.
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Path relative to the versioned API base, including any query string.
    fn path(&self) -> String;
}

// =========================================================
// Endpoint Definitions
// =========================================================

impl ApiRequest for RegisterRequest {
    type Response = User;
    const METHOD: HttpMethod = HttpMethod::Post;
    fn path(&self) -> String {
        "/auth/register".to_string()
    }
}

/// Fetch the authenticated user's profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GetProfileRequest;

impl ApiRequest for GetProfileRequest {
    type Response = User;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/users/me".to_string()
    }
}

impl ApiRequest for UpdateProfileRequest {
    type Response = User;
    const METHOD: HttpMethod = HttpMethod::Put;
    fn path(&self) -> String {
        "/users/me".to_string()
    }
}

/// Page of the caller's prediction history, newest first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HistoryQuery {
    pub skip: u32,
    pub limit: u32,
}

impl Default for HistoryQuery {
    fn default() -> Self {
        Self { skip: 0, limit: 100 }
    }
}

impl ApiRequest for HistoryQuery {
    type Response = Vec<Prediction>;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/predictions/history?skip={}&limit={}", self.skip, self.limit)
    }
}

/// Fetch a single prediction by id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GetPredictionRequest {
    pub id: i64,
}

impl ApiRequest for GetPredictionRequest {
    type Response = Prediction;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        format!("/predictions/{}", self.id)
    }
}

/// Site-wide aggregate statistics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DashboardRequest;

impl ApiRequest for DashboardRequest {
    type Response = AnalyticsData;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/analytics/dashboard".to_string()
    }
}

/// Aggregate statistics scoped to the authenticated user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UserStatsRequest;

impl ApiRequest for UserStatsRequest {
    type Response = UserStats;
    const METHOD: HttpMethod = HttpMethod::Get;
    fn path(&self) -> String {
        "/analytics/user-stats".to_string()
    }
}

// =========================================================
// Form Encoding
// =========================================================

/// Percent-encode one form value per the `application/x-www-form-urlencoded`
/// rules: alphanumerics and `-._*` pass through, space becomes `+`.
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'*' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Encode key/value pairs as a form-urlencoded body.
pub fn form_urlencode(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencode(k), urlencode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

// =========================================================
// Unit Tests
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_query_path() {
        let q = HistoryQuery { skip: 20, limit: 10 };
        assert_eq!(q.path(), "/predictions/history?skip=20&limit=10");
        assert_eq!(HistoryQuery::METHOD, HttpMethod::Get);
    }

    #[test]
    fn test_default_history_query_fetches_first_page() {
        let q = HistoryQuery::default();
        assert_eq!(q.path(), "/predictions/history?skip=0&limit=100");
    }

    #[test]
    fn test_prediction_path_embeds_id() {
        assert_eq!(GetPredictionRequest { id: 42 }.path(), "/predictions/42");
    }

    #[test]
    fn test_profile_endpoints_share_path() {
        assert_eq!(GetProfileRequest.path(), "/users/me");
        assert_eq!(
            UpdateProfileRequest { full_name: None }.path(),
            "/users/me"
        );
        assert_eq!(UpdateProfileRequest::METHOD, HttpMethod::Put);
    }

    #[test]
    fn test_get_requests_carry_no_body() {
        assert!(!HttpMethod::Get.has_body());
        assert!(HttpMethod::Post.has_body());
        assert!(HttpMethod::Put.has_body());
    }

    #[test]
    fn test_form_urlencode_escapes_reserved_characters() {
        let body = form_urlencode(&[
            ("username", "ada@example.org"),
            ("password", "p&ss wörd+"),
        ]);
        assert_eq!(
            body,
            "username=ada%40example.org&password=p%26ss+w%C3%B6rd%2B"
        );
    }

    #[test]
    fn test_form_urlencode_plain_values_pass_through() {
        assert_eq!(form_urlencode(&[("a", "b"), ("c", "d")]), "a=b&c=d");
    }
}
