use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod filter;
pub mod format;
pub mod protocol;
pub mod validate;

// =========================================================
// Constants
// =========================================================

/// All backend routes are versioned under this prefix.
pub const API_PREFIX: &str = "/api/v1";
pub const HEADER_AUTHORIZATION: &str = "Authorization";

// =========================================================
// Domain Models
// =========================================================

/// Identity record, owned by the backend. The client only holds a
/// cached copy inside the auth store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Name shown in headers and greetings: full name when set,
    /// otherwise the username.
    pub fn display_name(&self) -> &str {
        match self.full_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.username,
        }
    }
}

/// Classification outcome. The backend serializes labels capitalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictionLabel {
    Benign,
    Malignant,
}

impl PredictionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionLabel::Benign => "Benign",
            PredictionLabel::Malignant => "Malignant",
        }
    }
}

/// Two-way probability distribution over the labels.
///
/// The wire shape is a map keyed by label name, `{"Benign": .., "Malignant": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Probabilities {
    #[serde(rename = "Benign")]
    pub benign: f64,
    #[serde(rename = "Malignant")]
    pub malignant: f64,
}

/// One analysis result. Created server-side on upload; the client never
/// mutates a prediction, only lists and filters it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub id: i64,
    pub prediction: PredictionLabel,
    /// Model confidence in `[0, 1]`.
    pub confidence: f64,
    /// Inference duration in seconds.
    #[serde(default)]
    pub processing_time: f64,
    pub probabilities: Probabilities,
    #[serde(default)]
    pub image_filename: String,
    pub created_at: DateTime<Utc>,
}

/// Site-wide aggregate snapshot. Re-fetched wholesale, never patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalyticsData {
    pub total_predictions: u64,
    pub total_users: u64,
    pub benign_predictions: u64,
    pub malignant_predictions: u64,
    pub average_processing_time: f64,
    pub recent_predictions: u64,
}

/// Per-user aggregate snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UserStats {
    pub total_predictions: u64,
    pub benign_predictions: u64,
    pub malignant_predictions: u64,
    pub average_confidence: f64,
}

// =========================================================
// Request / Response Bodies
// =========================================================

/// Login form fields. The auth endpoint takes `username`/`password`
/// form-encoded; the "username" field carries the email address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login payload: the bearer credential plus the freshly
/// loaded user record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub username: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
}

// =========================================================
// Unit Tests
// =========================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn backend_prediction_json() -> &'static str {
        r#"{
            "id": 7,
            "prediction": "Malignant",
            "confidence": 0.957,
            "processing_time": 1.23,
            "probabilities": {"Benign": 0.043, "Malignant": 0.957},
            "image_filename": "scan_102.png",
            "created_at": "2024-11-02T09:30:00Z"
        }"#
    }

    #[test]
    fn test_prediction_decodes_backend_shape() {
        let p: Prediction = serde_json::from_str(backend_prediction_json()).unwrap();
        assert_eq!(p.id, 7);
        assert_eq!(p.prediction, PredictionLabel::Malignant);
        assert_eq!(p.probabilities.malignant, 0.957);
        assert_eq!(p.image_filename, "scan_102.png");
    }

    #[test]
    fn test_prediction_tolerates_missing_optionals() {
        // The backend marks processing_time and image_filename optional.
        let json = r#"{
            "id": 1,
            "prediction": "Benign",
            "confidence": 0.8,
            "probabilities": {"Benign": 0.8, "Malignant": 0.2},
            "created_at": "2024-11-02T09:30:00Z"
        }"#;
        let p: Prediction = serde_json::from_str(json).unwrap();
        assert_eq!(p.processing_time, 0.0);
        assert!(p.image_filename.is_empty());
    }

    #[test]
    fn test_token_response_decodes() {
        let json = r#"{
            "access_token": "abc.def.ghi",
            "token_type": "bearer",
            "user": {
                "id": 3,
                "email": "a@b.org",
                "username": "ada",
                "full_name": null,
                "is_active": true,
                "created_at": "2024-01-01T00:00:00Z"
            }
        }"#;
        let t: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(t.access_token, "abc.def.ghi");
        assert_eq!(t.user.display_name(), "ada");
    }

    #[test]
    fn test_register_request_omits_absent_full_name() {
        let req = RegisterRequest {
            email: "a@b.org".into(),
            username: "ada".into(),
            password: "pw".into(),
            full_name: None,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(!json.contains("full_name"));
    }

    #[test]
    fn test_display_name_prefers_full_name() {
        let mut user: User = serde_json::from_str(
            r#"{"id":1,"email":"a@b.org","username":"ada","full_name":"Ada Lovelace",
                "is_active":true,"created_at":"2024-01-01T00:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(user.display_name(), "Ada Lovelace");
        user.full_name = Some("  ".into());
        assert_eq!(user.display_name(), "ada");
    }
}
