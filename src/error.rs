//! Application error type and its HTTP mapping.
//!
//! Every failure a request can hit is a variant of [`AppError`]. All of them
//! are recoverable at the request level: the request is rejected with a JSON
//! error body and the process keeps serving. The two code-space/randomness
//! failures ([`AppError::GenerationExhausted`] and [`AppError::Entropy`]) are
//! logged at `error` level so they stand out from ordinary input errors.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error descriptor embedded in the JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted URL is empty or not an absolute http(s) URL.
    #[error("Invalid URL: {reason}")]
    InvalidUrl { reason: String },

    /// A custom short code failed charset/length validation.
    #[error("Invalid custom code: {reason}")]
    InvalidCode { reason: String },

    /// The content policy flagged the URL or the custom code.
    #[error("Content policy rejected the {field}")]
    PolicyRejected { field: &'static str },

    /// The expiry string did not match the accepted `YYYY-MM-DDTHH:MM` format.
    #[error("Invalid expiry date format: {input:?}")]
    InvalidExpiry { input: String },

    #[error("Expiry date must be in the future")]
    ExpiryInPast,

    /// The short code is already registered. Custom and generated codes share
    /// one namespace, so both creation paths can surface this.
    #[error("Short code {code:?} is already taken")]
    CodeTaken { code: String },

    /// Every generated candidate collided within the retry budget.
    #[error("Could not find a free short code after {attempts} attempts")]
    GenerationExhausted { attempts: usize },

    /// The system random source failed while generating a code.
    #[error("Random source failure: {message}")]
    Entropy { message: String },

    #[error("Short link {code:?} not found")]
    NotFound { code: String },

    /// The link exists but its expiry has passed. Distinct from
    /// [`AppError::NotFound`]: callers render 410 Gone, not 404.
    #[error("Short link {code:?} has expired")]
    Expired { code: String },
}

impl AppError {
    /// True for conditions signalling systemic trouble (random source or code
    /// space exhaustion) rather than a bad request.
    pub fn is_systemic(&self) -> bool {
        matches!(
            self,
            Self::GenerationExhausted { .. } | Self::Entropy { .. }
        )
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidUrl { .. } => (StatusCode::BAD_REQUEST, "invalid_url"),
            Self::InvalidCode { .. } => (StatusCode::BAD_REQUEST, "invalid_code"),
            Self::PolicyRejected { .. } => (StatusCode::BAD_REQUEST, "policy_rejected"),
            Self::InvalidExpiry { .. } => (StatusCode::BAD_REQUEST, "invalid_expiry"),
            Self::ExpiryInPast => (StatusCode::BAD_REQUEST, "expiry_in_past"),
            Self::CodeTaken { .. } => (StatusCode::CONFLICT, "code_taken"),
            Self::GenerationExhausted { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "generation_exhausted")
            }
            Self::Entropy { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "entropy_failure"),
            Self::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            Self::Expired { .. } => (StatusCode::GONE, "expired"),
        }
    }

    fn details(&self) -> Value {
        match self {
            Self::InvalidUrl { reason } | Self::InvalidCode { reason } => {
                json!({ "reason": reason })
            }
            Self::PolicyRejected { field } => json!({ "field": field }),
            Self::InvalidExpiry { input } => json!({ "input": input }),
            Self::CodeTaken { code } | Self::NotFound { code } | Self::Expired { code } => {
                json!({ "code": code })
            }
            Self::GenerationExhausted { attempts } => json!({ "attempts": attempts }),
            _ => json!({}),
        }
    }

    /// Converts the error into the descriptor embedded in the JSON body.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (_, code) = self.status_and_code();
        ErrorInfo {
            code,
            message: self.to_string(),
            details: self.details(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // DTO-level validation only covers the URL and the custom code.
        if errors.field_errors().contains_key("url") {
            AppError::InvalidUrl {
                reason: errors.to_string(),
            }
        } else {
            AppError::InvalidCode {
                reason: errors.to_string(),
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_systemic() {
            tracing::error!(error = %self, "systemic failure while handling request");
        }

        let (status, _) = self.status_and_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}
