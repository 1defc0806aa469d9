//! HTTP handlers: decode the request, call the service, encode the response.

pub mod board;
pub mod room;
pub mod todo;

use crate::error::AppError;

/// Fallback for paths that exist but not for the request's method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Fallback for paths no route matches.
pub async fn not_found() -> AppError {
    AppError::RouteNotFound
}
