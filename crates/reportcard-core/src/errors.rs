//! Application error type and its HTTP mapping.
//!
//! Every failure a caller can correct falls into one of four kinds, each with
//! its own status code:
//!
//! | Kind | Status | Meaning |
//! |------|--------|---------|
//! | [`ErrorKind::NotFound`] | 404 | The id in the path does not resolve to an active record |
//! | [`ErrorKind::DuplicateKey`] | 409 | A unique field collides with another active record |
//! | [`ErrorKind::ReferenceInvalid`] | 400 | A foreign key in the body does not resolve to an active record |
//! | [`ErrorKind::Validation`] | 400 | Malformed input shape or out-of-range value |
//!
//! Anything else (store failures, hashing failures) is [`ErrorKind::Internal`].

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    DuplicateKey,
    ReferenceInvalid,
    Validation,
    Internal,
}

impl ErrorKind {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::DuplicateKey => StatusCode::CONFLICT,
            ErrorKind::ReferenceInvalid | ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::NotFound, err)
    }

    pub fn conflict<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::DuplicateKey, err)
    }

    /// A foreign key in the request body points at nothing active.
    ///
    /// Kept apart from [`AppError::not_found`]: this one blames the body, the
    /// other blames the path.
    pub fn invalid_reference<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::ReferenceInvalid, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Validation, err)
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Internal, err)
    }

    pub fn status(&self) -> StatusCode {
        self.kind.status()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.kind == ErrorKind::Internal {
            tracing::error!(error = %self.error, "Internal error");
        }

        let body = Json(json!({
            "error": self.error.to_string()
        }));

        (self.status(), body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
