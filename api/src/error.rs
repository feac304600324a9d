//! Error taxonomy shared by every route handler.
//!
//! Handlers return `Result<_, ApiError>` and use `?` on store calls, identifier
//! parsing and presence checks. JSON routes render `{"message": "..."}`; the
//! plain-text routes wrap the same error in [`TextError`].

use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::InvalidDocumentId;
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

use crate::response::MessageResponse;
use util::validation::format_validation_errors;

const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    /// Duplicate business key. Rendered as 400, not 409.
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Conflict(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        tracing::error!(target: "api", error = %err, "document store operation failed");
        ApiError::Internal(INTERNAL_MESSAGE.into())
    }
}

impl From<InvalidDocumentId> for ApiError {
    fn from(err: InvalidDocumentId) -> Self {
        ApiError::BadRequest(format!("Invalid id: {}", err.0))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::BadRequest(format_validation_errors(&errors))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(MessageResponse::new(self.message()))).into_response()
    }
}

/// Same taxonomy as [`ApiError`], rendered as a plain-text body.
#[derive(Debug)]
pub struct TextError(pub ApiError);

impl IntoResponse for TextError {
    fn into_response(self) -> Response {
        (self.0.status(), self.0.message()).into_response()
    }
}

impl From<ApiError> for TextError {
    fn from(err: ApiError) -> Self {
        TextError(err)
    }
}

impl From<DbErr> for TextError {
    fn from(err: DbErr) -> Self {
        TextError(err.into())
    }
}

impl From<InvalidDocumentId> for TextError {
    fn from(err: InvalidDocumentId) -> Self {
        TextError(err.into())
    }
}

impl From<JsonRejection> for TextError {
    fn from(rejection: JsonRejection) -> Self {
        TextError(rejection.into())
    }
}

impl From<ValidationErrors> for TextError {
    fn from(errors: ValidationErrors) -> Self {
        TextError(errors.into())
    }
}

/// `Json` extractor whose rejection is a JSON [`ApiError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// `Json` extractor whose rejection is a plain-text [`TextError`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(TextError))]
pub struct TextJson<T>(pub T);
