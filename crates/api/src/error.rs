use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::{
    FormRejection, JsonRejection, PathRejection, QueryRejection,
};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use estate_core::apartment::{
    FIELD_AREA, FIELD_PRICE, FIELD_PROJECT, FIELD_ROOMS, FIELD_UNIT_NAME, FIELD_UNIT_NUMBER,
};
use estate_core::error::CoreError;
use estate_media::UploadError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses
/// of the form `{ "message", "code", "errors"? }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `estate_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An image could not be pushed to the media host.
    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    /// The request body could not be read or decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request body exceeded the configured size limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Extractor failures keep their status class (413 vs 400) but are reported
/// with the API's JSON body instead of axum's plain text.
fn extractor_rejection(status: StatusCode, text: String) -> AppError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(text)
    } else {
        AppError::BadRequest(text)
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        extractor_rejection(err.status(), err.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        extractor_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        extractor_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        extractor_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        extractor_rejection(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        extractor_rejection(rejection.status(), rejection.body_text())
    }
}

const INTERNAL_MESSAGE: &str = "An internal error occurred.";
const VALIDATION_MESSAGE: &str = "Validation failed.";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut errors: Option<Vec<String>> = None;

        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::InvalidIdentifier { entity, id } => {
                    tracing::debug!(entity = *entity, id = %id, "Rejected malformed identifier");
                    (
                        StatusCode::BAD_REQUEST,
                        "INVALID_IDENTIFIER",
                        format!("Invalid {} ID format.", entity.to_lowercase()),
                    )
                }
                CoreError::NotFound { entity, .. } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} not found."),
                ),
                CoreError::Validation(messages) => {
                    errors = Some(messages.clone());
                    (
                        StatusCode::BAD_REQUEST,
                        "VALIDATION_FAILED",
                        VALIDATION_MESSAGE.to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some(CHECK_VIOLATION) =>
            {
                let constraint = db_err.constraint().unwrap_or("unknown");
                tracing::warn!(constraint, "Check constraint rejected a write");
                errors = Some(vec![check_violation_message(constraint)]);
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_FAILED",
                    VALIDATION_MESSAGE.to_string(),
                )
            }
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Media host errors ---
            AppError::Upload(err) => classify_upload_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                msg.clone(),
            ),
        };

        let mut body = json!({
            "message": message,
            "code": code,
        });
        if let Some(errors) = errors {
            body["errors"] = json!(errors);
        }

        (status, axum::Json(body)).into_response()
    }
}

/// PostgreSQL `check_violation`.
const CHECK_VIOLATION: &str = "23514";

/// Column CHECKs of the `apartments` table, keyed by the default constraint
/// name PostgreSQL assigns (`apartments_<column>_check`).
const COLUMN_CHECKS: [(&str, &str, &str); 6] = [
    ("apartments_unit_name_check", FIELD_UNIT_NAME, "is required."),
    ("apartments_unit_number_check", FIELD_UNIT_NUMBER, "is required."),
    ("apartments_project_check", FIELD_PROJECT, "is required."),
    ("apartments_price_check", FIELD_PRICE, "must be greater than 0."),
    ("apartments_area_check", FIELD_AREA, "must be greater than 0."),
    ("apartments_rooms_check", FIELD_ROOMS, "must be greater than 0."),
];

/// Field message for a violated CHECK constraint, phrased like the field
/// validation it backs up.
fn check_violation_message(constraint: &str) -> String {
    COLUMN_CHECKS
        .iter()
        .find(|(name, _, _)| *name == constraint)
        .map(|(_, field, rule)| format!("{field} {rule}"))
        .unwrap_or_else(|| format!("A submitted value violates {constraint}."))
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found.".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                INTERNAL_MESSAGE.to_string(),
            )
        }
    }
}

/// Classify a media host failure.
///
/// An empty file is the client's fault (400); anything else is reported as
/// a bad gateway without echoing the host's response.
fn classify_upload_error(err: &UploadError) -> (StatusCode, &'static str, String) {
    match err {
        UploadError::EmptyFile(name) => (
            StatusCode::BAD_REQUEST,
            "UPLOAD_FAILED",
            format!("Image {name:?} is empty."),
        ),
        other => {
            tracing::error!(error = %other, "Image upload failed");
            (
                StatusCode::BAD_GATEWAY,
                "UPLOAD_FAILED",
                "Image upload failed.".to_string(),
            )
        }
    }
}
