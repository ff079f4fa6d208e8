//! Typed errors and HTTP mapping.

use crate::store::{StoreError, Violation};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}' ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
    /// A caller-supplied value (body field, path segment, JSON document) is unusable.
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Validation(String),
    /// A uniqueness constraint rejected the write.
    #[error("{0}")]
    Conflict(String),
    /// A restrict foreign key blocked a delete.
    #[error("{0}")]
    Referenced(String),
    /// The body outgrew the configured limit while it was being read.
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Validation(_) | AppError::Conflict(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Referenced(_) => StatusCode::CONFLICT,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "not_found",
            AppError::BadRequest(_) => "bad_request",
            AppError::Validation(_) => "validation_error",
            AppError::Conflict(_) => "conflict",
            AppError::Referenced(_) => "referenced",
            AppError::PayloadTooLarge(_) => "payload_too_large",
            AppError::Db(_) => "internal_error",
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Fatal(e) => AppError::Db(e),
            StoreError::Conflict(violation) => match violation {
                Violation::DuplicateEmail => {
                    AppError::Conflict("A customer with this email already exists.".into())
                }
                Violation::DuplicateOrderNumber => {
                    AppError::Conflict("An order with this order number already exists.".into())
                }
                Violation::MissingCustomer => AppError::BadRequest("Customer not found".into()),
                Violation::CustomerHasOrders => AppError::Referenced(
                    "Customer has existing orders and cannot be deleted.".into(),
                ),
                Violation::Other(constraint) => {
                    AppError::Conflict(format!("constraint {} rejected the write", constraint))
                }
            },
        }
    }
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::Db(e) => {
                tracing::error!(error = %e, "unexpected database failure");
                "an unexpected error occurred".to_string()
            }
            other => other.to_string(),
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code().to_string(),
                message,
            },
        };
        (self.status(), Json(body)).into_response()
    }
}
