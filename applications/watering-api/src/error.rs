use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Plant {0} already exists")]
    DuplicateKey(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Pot {0} is not active")]
    PotInactive(i64),

    #[error("Expected two pots, found {0}")]
    PotLayout(usize),
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Client-facing failure of a single endpoint.
///
/// Every endpoint answers failures with `406 Not Acceptable` and its own fixed
/// message string; the cause is only logged. The mobile app and the device
/// firmware match on the status code alone.
#[derive(Debug)]
pub struct Rejection {
    message: &'static str,
    source: AppError,
}

impl Rejection {
    pub fn new(message: &'static str, source: AppError) -> Self {
        Self { message, source }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn source(&self) -> &AppError {
        &self.source
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        match self.source {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
            }
            ref other => {
                tracing::warn!(error = %other, "Request rejected: {}", self.message);
            }
        }

        (StatusCode::NOT_ACCEPTABLE, Json(self.message)).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, Rejection>;

/// Attaches an endpoint's failure message to any error convertible into [`AppError`].
pub trait RejectWith<T> {
    fn reject_with(self, message: &'static str) -> ApiResult<T>;
}

impl<T, E> RejectWith<T> for std::result::Result<T, E>
where
    E: Into<AppError>,
{
    fn reject_with(self, message: &'static str) -> ApiResult<T> {
        self.map_err(|e| Rejection::new(message, e.into()))
    }
}
