//! Contact Error Types
//!
//! This module provides contact-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Contact-specific result type alias
pub type ContactResult<T> = Result<T, ContactError>;

/// Contact-specific error variants
///
/// The `Display` text of every variant that can reach a client is the static
/// message sent in the `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum ContactError {
    /// `name` or `email` absent or empty on create
    #[error("Name and email are required")]
    MissingFields,

    /// Delete addressed an id with no matching row
    #[error("Contact not found")]
    NotFound,

    /// Store failure while listing
    #[error("Failed to fetch contacts")]
    ListFailed(#[source] sqlx::Error),

    /// Store failure while inserting
    #[error("Failed to create contact")]
    CreateFailed(#[source] sqlx::Error),

    /// Store failure while deleting, including an id the store cannot cast
    #[error("Failed to delete contact")]
    DeleteFailed(#[source] sqlx::Error),

    /// Startup table creation failed (never returned over HTTP)
    #[error("Failed to initialize contacts table")]
    SchemaInit(#[source] sqlx::Error),
}

impl ContactError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ContactError::MissingFields => StatusCode::BAD_REQUEST,
            ContactError::NotFound => StatusCode::NOT_FOUND,
            ContactError::ListFailed(_)
            | ContactError::CreateFailed(_)
            | ContactError::DeleteFailed(_)
            | ContactError::SchemaInit(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ContactError::MissingFields => ErrorKind::BadRequest,
            ContactError::NotFound => ErrorKind::NotFound,
            ContactError::ListFailed(_)
            | ContactError::CreateFailed(_)
            | ContactError::DeleteFailed(_)
            | ContactError::SchemaInit(_) => ErrorKind::InternalServerError,
        }
    }

    /// Log the error with appropriate level
    ///
    /// Store causes are logged here and never reach the response body.
    pub fn log(&self) {
        match self {
            ContactError::ListFailed(e) => {
                tracing::error!(error = %e, "Error fetching contacts");
            }
            ContactError::CreateFailed(e) => {
                tracing::error!(error = %e, "Error creating contact");
            }
            ContactError::DeleteFailed(e) => {
                tracing::error!(error = %e, "Error deleting contact");
            }
            ContactError::SchemaInit(e) => {
                tracing::error!(error = %e, "Error initializing database");
            }
            _ => {
                tracing::debug!(error = %self, "Contact request rejected");
            }
        }
    }
}

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        let app_err = AppError::new(err.kind(), err.to_string());
        match err {
            ContactError::ListFailed(source)
            | ContactError::CreateFailed(source)
            | ContactError::DeleteFailed(source)
            | ContactError::SchemaInit(source) => app_err.with_source(source),
            ContactError::MissingFields | ContactError::NotFound => app_err,
        }
    }
}

impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
