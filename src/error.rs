//! Application error type and its HTTP translation.
//!
//! Every handler returns [`AppError`] on failure. The [`IntoResponse`] impl maps
//! each variant to a status code and serializes a uniform body:
//!
//! ```json
//! { "error": "<message>" }
//! ```

use axum::{
    Json,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

use crate::utils::db_error::is_unique_violation;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or missing input fields.
    #[error("{message}")]
    Validation { message: String },

    /// Malformed path parameter.
    #[error("{message}")]
    BadRequest { message: String },

    #[error("method not allowed {method}")]
    MethodNotAllowed { method: Method },

    /// Missing, malformed, mis-signed, wrong-algorithm or expired token.
    ///
    /// `reason` is logged but never sent to the client.
    #[error("invalid token")]
    InvalidToken { reason: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Conflict { message: String },

    /// Storage engine failure. The client only sees `message`.
    #[error("{message}")]
    Persistence { message: String },

    /// Token issuance failure.
    #[error("{message}")]
    Signing { message: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
    pub fn method_not_allowed(method: Method) -> Self {
        Self::MethodNotAllowed { method }
    }
    pub fn invalid_token(reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            reason: reason.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }
    pub fn signing(message: impl Into<String>) -> Self {
        Self::Signing {
            message: message.into(),
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InvalidToken { .. } => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Persistence { .. } | AppError::Signing { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Converts the error into its serializable body.
    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let AppError::InvalidToken { reason } = &self {
            tracing::debug!(reason = %reason, "Rejected request token");
        }

        (status, Json(self.to_error_body())).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::validation(errors.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        map_sqlx_error(e)
    }
}

/// Maps a sqlx error onto the application taxonomy.
///
/// Unique violations become [`AppError::Conflict`]; everything else is a
/// [`AppError::Persistence`] whose details are logged, not returned.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    if is_unique_violation(&e) {
        let constraint = e
            .as_database_error()
            .and_then(|db| db.constraint())
            .unwrap_or("unknown")
            .to_string();
        return AppError::conflict(format!("unique constraint violation: {constraint}"));
    }

    tracing::error!(error = %e, "Database error");
    AppError::persistence("database error")
}
