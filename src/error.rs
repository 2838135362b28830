//!
//! # Custom Error Handling
//!
//! This module defines the `AppError` type shared by every handler and by the
//! authentication middleware. Each variant maps to one HTTP status code and a
//! human readable message; clients always receive a JSON body of the shape
//! `{"message": "..."}` and never a structured error code.
//!
//! `AppError` implements `actix_web::error::ResponseError`, so handlers can
//! return `Result<_, AppError>` and rely on the `?` operator.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use std::fmt;

/// Represents all possible errors that can occur within the application.
#[derive(Debug)]
pub enum AppError {
    /// The request carried no `Authorization` header (HTTP 401).
    MissingToken,
    /// The bearer token failed signature, decoding or expiry checks (HTTP 400).
    InvalidToken,
    /// Submitted login credentials did not match the account (HTTP 401).
    /// Deliberately carries no detail about which field was wrong.
    InvalidCredentials,
    /// A requested resource does not exist (HTTP 404).
    NotFound(String),
    /// The request body could not be parsed (HTTP 400).
    BadRequest(String),
    /// Startup configuration is missing or inconsistent.
    Configuration(String),
    /// An unexpected server-side fault (HTTP 500). The detail is logged,
    /// the client only sees a generic message.
    InternalServerError(String),
}

impl AppError {
    /// The text placed in the `message` field of the response body.
    pub fn message(&self) -> &str {
        match self {
            AppError::MissingToken => "Access denied. No token.",
            AppError::InvalidToken => "Invalid token",
            AppError::InvalidCredentials => "Invalid credentials",
            AppError::NotFound(msg) | AppError::BadRequest(msg) => msg.as_str(),
            AppError::Configuration(_) | AppError::InternalServerError(_) => {
                "Internal server error"
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::MissingToken => write!(f, "Unauthorized: no token supplied"),
            AppError::InvalidToken => write!(f, "Bad Request: invalid token"),
            AppError::InvalidCredentials => write!(f, "Unauthorized: invalid credentials"),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            AppError::Configuration(msg) => write!(f, "Configuration Error: {}", msg),
            AppError::InternalServerError(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Converts `AppError` variants into `HttpResponse` objects with a JSON
/// `message` body.
impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingToken | AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::InvalidToken | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Configuration(_) | AppError::InternalServerError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Configuration(detail) | AppError::InternalServerError(detail) = self {
            log::error!("{}", detail);
        }
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.message()
        }))
    }
}

/// Every JWT failure (bad signature, malformed payload, expiry) is reported
/// to the caller the same way.
impl From<jsonwebtoken::errors::Error> for AppError {
    fn from(_: jsonwebtoken::errors::Error) -> AppError {
        AppError::InvalidToken
    }
}
