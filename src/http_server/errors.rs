//! # Request Errors
//!
//! Every request failure becomes a rendered page: 404 for an id that does
//! not resolve, 405 for a method a path does not serve, the rejection's own
//! 4xx for a form that cannot be read, 500 for a store failure. Nothing is
//! retried, and rejection details only reach the log.

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::observability::Logger;
use crate::store::StoreError;
use crate::views::{self, Page};

/// Result type for request handlers
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Unknown route, or an id that is malformed or not in the store
    #[error("Fruit not found")]
    NotFound,

    /// Path exists but does not serve this method
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Request body could not be extracted
    #[error("Request rejected: {reason}")]
    Rejected { status: StatusCode, reason: String },

    /// Store operation failed
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl AppError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Rejected { status, .. } => *status,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn page(&self) -> Page<'static> {
        match self {
            AppError::NotFound => Page::NotFound,
            AppError::MethodNotAllowed | AppError::Rejected { .. } | AppError::Store(_) => {
                Page::Error
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidId(_) => AppError::NotFound,
            other => AppError::Store(other),
        }
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            reason: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let page = self.page();
        let fields = [
            ("error", self.to_string()),
            ("page", page.template().to_string()),
            ("status", status.as_str().to_string()),
        ];
        let fields: Vec<(&str, &str)> = fields.iter().map(|(k, v)| (*k, v.as_str())).collect();

        if status.is_server_error() {
            Logger::error("REQUEST_FAILED", &fields);
        } else if matches!(self, AppError::Rejected { .. }) {
            Logger::warn("REQUEST_REJECTED", &fields);
        }
        (status, views::render(&page)).into_response()
    }
}
