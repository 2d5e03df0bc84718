use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// The blob or metadata store could not be reached or rejected the call.
    StoreUnavailable(String),
    /// The requested storage key does not exist in the blob store.
    NotFound(String),
    /// The request was structurally invalid (bad storage key, missing
    /// multipart field).
    MalformedInput(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::StoreUnavailable(msg) => write!(f, "Store Unavailable: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            AppError::MalformedInput(msg) => write!(f, "Malformed Input: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::StoreUnavailable(msg) => {
                HttpResponse::InternalServerError().json(ErrorResponse { error: msg.clone() })
            }
            AppError::NotFound(msg) => {
                HttpResponse::NotFound().json(ErrorResponse { error: msg.clone() })
            }
            AppError::MalformedInput(msg) => {
                HttpResponse::BadRequest().json(ErrorResponse { error: msg.clone() })
            }
        }
    }
}

impl From<actix_multipart::MultipartError> for AppError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        AppError::MalformedInput(err.to_string())
    }
}
