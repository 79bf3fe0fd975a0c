//! Handler error type and its JSON rendering.
//!
//! Every failure leaves the server as `{ "error": <message>, "code": <CODE> }`.
//! Internal details are logged, never returned.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use sqlx::error::ErrorKind;

use feed_core::error::CoreError;
use feed_db::repositories::AwardError;

/// Foreign key tying a reply's parent to the reply's own post.
const SAME_POST_PARENT_FK: &str = "fk_comments_parent_same_post";

/// Error returned by every handler.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request body, path or query string could not be decoded.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// A handler panicked; see [`panic_response`].
    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<AwardError> for AppError {
    fn from(err: AwardError) -> Self {
        match err {
            AwardError::TargetNotFound(target) => AppError::Core(target.not_found()),
            AwardError::AlreadyLiked => AppError::Core(CoreError::AlreadyLiked),
            AwardError::Database(db) => AppError::Database(db),
        }
    }
}

/// Wire shape of an error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl ErrorBody {
    fn new(code: &'static str, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }

    /// Generic 500 body; the cause goes to the log only.
    fn internal(cause: &dyn std::fmt::Display) -> (StatusCode, Self) {
        tracing::error!(error = %cause, "Request failed with an internal error");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Self::new("INTERNAL_ERROR", "An internal error occurred"),
        )
    }
}

impl AppError {
    fn status_and_body(&self) -> (StatusCode, ErrorBody) {
        match self {
            AppError::Core(core) => core_status_and_body(core),
            AppError::Database(err) => database_status_and_body(err),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorBody::new("BAD_REQUEST", msg))
            }
            AppError::InternalError(msg) => ErrorBody::internal(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

/// Response for `CatchPanicLayer`: the panic message is logged and the client
/// gets the usual sanitized 500 envelope.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    };

    AppError::InternalError(format!("handler panicked: {detail}")).into_response()
}

fn core_status_and_body(err: &CoreError) -> (StatusCode, ErrorBody) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            ErrorBody::new("NOT_FOUND", format!("{entity} with id {id} not found")),
        ),
        CoreError::Validation(msg) => (
            StatusCode::BAD_REQUEST,
            ErrorBody::new("VALIDATION_ERROR", msg),
        ),
        CoreError::AlreadyLiked => (
            StatusCode::BAD_REQUEST,
            ErrorBody::new("ALREADY_LIKED", "Already liked"),
        ),
        CoreError::Unauthorized(msg) => (
            StatusCode::UNAUTHORIZED,
            ErrorBody::new("UNAUTHORIZED", msg),
        ),
    }
}

/// Map errors that escaped the repositories unclassified.
///
/// - `RowNotFound` is a 404.
/// - A unique violation on a `uq_` constraint is a 409.
/// - A reply whose parent lives on another post (lost race with the handler's
///   check) is a 400.
/// - Anything else is a 500.
fn database_status_and_body(err: &sqlx::Error) -> (StatusCode, ErrorBody) {
    let db_err = match err {
        sqlx::Error::RowNotFound => {
            return (
                StatusCode::NOT_FOUND,
                ErrorBody::new("NOT_FOUND", "Resource not found"),
            )
        }
        sqlx::Error::Database(db_err) => db_err,
        other => return ErrorBody::internal(other),
    };

    let constraint = db_err.constraint().unwrap_or_default();
    match db_err.kind() {
        ErrorKind::UniqueViolation if constraint.starts_with("uq_") => (
            StatusCode::CONFLICT,
            ErrorBody::new(
                "CONFLICT",
                format!("Duplicate value violates unique constraint: {constraint}"),
            ),
        ),
        ErrorKind::ForeignKeyViolation if constraint == SAME_POST_PARENT_FK => (
            StatusCode::BAD_REQUEST,
            ErrorBody::new(
                "VALIDATION_ERROR",
                "Parent comment belongs to a different post",
            ),
        ),
        _ => ErrorBody::internal(db_err),
    }
}
