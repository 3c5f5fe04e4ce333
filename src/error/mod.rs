//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic
//! for transforming errors into appropriate HTTP responses. The `AppError`
//! enum is the top-level error type that wraps domain error kinds and
//! implements `IntoResponse` for automatic error handling in API endpoints.
//!
//! Propagation policy: validation errors are detected and returned before any
//! mutation occurs; multi-step writes run in transactions so a surfaced
//! `DbErr` always means a full rollback and may be retried by the caller.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{error::config::ConfigError, model::api::ErrorDto};

/// Top-level application error type.
///
/// Domain error kinds carry a human-readable message and map onto distinct
/// HTTP statuses so callers can react programmatically, not just log text.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Triggers full rollback of the enclosing transaction and is surfaced
    /// to the caller as retryable. Details are logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Malformed or missing input: non-positive stay length, guest count over
    /// capacity, empty cancellation reason. Detected before any mutation.
    ///
    /// Results in 400 Bad Request.
    #[error("{0}")]
    Validation(String),

    /// The actor lacks the required role for the attempted action.
    ///
    /// Results in 403 Forbidden.
    #[error("{0}")]
    Authorization(String),

    /// Unknown reservation, room, amenity, payment, or user.
    ///
    /// Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// The operation conflicts with current state: room unavailable, booking
    /// limit reached, invalid lifecycle transition, already cancelled.
    ///
    /// Results in 409 Conflict; state is left unchanged.
    #[error("{0}")]
    Conflict(String),

    /// Internal invariant violation with custom message.
    ///
    /// Results in 500 Internal Server Error; the message is logged but a
    /// generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// Internal and persistence errors are logged with full details but return
/// generic messages to avoid information leakage; domain errors return their
/// message verbatim.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Authorization(msg) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: msg })).into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::DbErr(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Storage error, please retry".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error message and returns a generic body to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
