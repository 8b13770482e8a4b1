use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use sitediary_core::error::CoreError;
use sitediary_core::validation::ValidationError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `sitediary_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Transport-neutral description of a domain error.
///
/// Both the REST error body and GraphQL error extensions are built from
/// this, so the two entry points report the same code for the same failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorParts {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    /// Offending field names, for missing required fields.
    pub fields: Option<Vec<&'static str>>,
}

/// Classify a [`CoreError`] into status, code, message and fields.
///
/// Internal and unavailable messages are sanitized. The service has already
/// logged the underlying store failure.
pub fn classify_core_error(err: &CoreError) -> ErrorParts {
    let (status, code, message, fields) = match err {
        CoreError::Validation(validation) => {
            let fields = match validation {
                ValidationError::MissingField { fields } => Some(fields.clone()),
                ValidationError::InvalidWeather(_) => None,
            };
            (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                validation.to_string(),
                fields,
            )
        }
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
            None,
        ),
        CoreError::DuplicateId { entity, id } => (
            StatusCode::CONFLICT,
            "DUPLICATE_ID",
            format!("{entity} with id {id} already exists"),
            None,
        ),
        CoreError::Unavailable(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "STORE_UNAVAILABLE",
            "The record store is temporarily unavailable".to_string(),
            None,
        ),
        CoreError::Internal(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An internal error occurred".to_string(),
            None,
        ),
    };

    ErrorParts {
        status,
        code,
        message,
        fields,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let parts = match &self {
            AppError::Core(core) => classify_core_error(core),
            AppError::BadRequest(msg) => ErrorParts {
                status: StatusCode::BAD_REQUEST,
                code: "BAD_REQUEST",
                message: msg.clone(),
                fields: None,
            },
        };

        let mut body = json!({
            "error": parts.message,
            "code": parts.code,
        });
        if let Some(fields) = parts.fields {
            body["fields"] = json!(fields);
        }

        (parts.status, axum::Json(body)).into_response()
    }
}
