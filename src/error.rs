use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Failures of the key-value slot backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage quota exceeded writing {key}: {needed} bytes needed, quota is {quota}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },

    #[error("Could not encode value: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Errors surfaced by the journal core.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("Unknown mood kind: {0}")]
    UnknownMoodKind(String),

    #[error("Invalid mood kind in entry: {0}")]
    InvalidMoodKind(String),

    #[error("Please select a mood first!")]
    NothingSelected,

    #[error("Could not save mood history: {0}")]
    Persistence(#[from] StorageError),
}

pub type JournalResult<T> = Result<T, JournalError>;

/// HTTP-facing error for the presentation shell.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid request body: {}", .0.body_text())]
    Body(#[from] JsonRejection),

    #[error(transparent)]
    Journal(#[from] JournalError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::Body(rejection) => (rejection.status(), self.to_string()),
            AppError::Journal(
                JournalError::UnknownMoodKind(_)
                | JournalError::InvalidMoodKind(_)
                | JournalError::NothingSelected,
            ) => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            AppError::Journal(JournalError::Persistence(e)) => {
                tracing::error!(error = %e, "Persistence error");
                (StatusCode::INSUFFICIENT_STORAGE, self.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!(error = %e, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        let body = json!({
            "error": {
                "message": message,
                "code": status.as_u16(),
            }
        });

        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
