//! Error types for the todo search core.
//!
//! # Design
//! `NotFound` gets a dedicated variant because a missing collection endpoint
//! is a configuration mistake worth telling apart in logs. All other non-2xx
//! responses land in `HttpError` with the raw status code and body. None of
//! this detail reaches the rendered view: every fetch failure is shown as
//! [`FETCH_FAILED_MESSAGE`].

use thiserror::Error;

/// The only fetch-failure text the widget ever renders.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data";

/// Errors returned by `TodoClient` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-success status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),
}

/// The host could not complete the HTTP round-trip at all.
#[derive(Debug, Error)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

/// Why a fetch did not produce a todo collection.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Form validation failures, rendered inline next to the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Search query is required")]
    Required,
}
