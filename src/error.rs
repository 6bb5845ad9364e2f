//! Error types returned by the store and the auth layer.
//!
//! Each variant carries the message shown to the dashboard user; the HTTP
//! status is derived from the variant when the error crosses a handler.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("You must add at least 2 stops to create a route (got {found})")]
    TooFewStops { found: usize },

    #[error("Route {0} not found")]
    RouteNotFound(String),

    #[error("Student {0} not found")]
    StudentNotFound(u32),

    #[error("Bus number {0} is already used by another route")]
    DuplicateBusNumber(String),

    #[error("Route {bus_number} still has {students} students assigned")]
    RouteInUse { bus_number: String, students: usize },

    #[error("Year must be between 1 and 4 (got {0})")]
    InvalidYear(u8),

    #[error("Pickup point {stop} is not a stop on {bus_number}")]
    UnknownPickupPoint { stop: String, bus_number: String },

    #[error("Amount must be a positive number")]
    InvalidAmount,
}

impl ResponseError for StoreError {
    fn status_code(&self) -> StatusCode {
        match self {
            StoreError::RouteNotFound(_) | StoreError::StudentNotFound(_) => StatusCode::NOT_FOUND,
            StoreError::DuplicateBusNumber(_) | StoreError::RouteInUse { .. } => {
                StatusCode::CONFLICT
            }
            _ => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Unauthorized")]
    MissingToken,

    #[error("Invalid or expired token")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("Failed to issue token")]
    Encode(#[source] jsonwebtoken::errors::Error),

    #[error("Token lifetime is out of range")]
    TokenLifetime,

    #[error("Password hashing failed")]
    Hash(#[from] bcrypt::BcryptError),
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials | AuthError::MissingToken | AuthError::InvalidToken(_) => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::TokenLifetime | AuthError::Encode(_) | AuthError::Hash(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
