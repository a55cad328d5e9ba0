//! Transparent redirect error types.
//!
//! A callback without a `hash` parameter is a structural error. A callback
//! whose hash does not match is not an error at all on the validation path:
//! it is reported as `Ok(false)`. Only the parse helper turns a mismatch into
//! `InvalidSignature`.

use http::StatusCode;
use thiserror::Error;

/// Errors that occur while encoding descriptors or decoding callbacks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedirectError {
    /// Callback query carries no `hash` parameter.
    #[error("query is incorrect and has no hash parameter")]
    MissingHash,

    /// Callback hash is well-formed but does not match its content.
    #[error("Invalid signature")]
    InvalidSignature,

    /// Descriptor was requested without a redirect URL.
    #[error("Redirect URL must not be empty")]
    InvalidRedirectUrl,

    /// Payload contains a key that cannot be expressed in bracket notation.
    #[error("Invalid form key: {0:?}")]
    InvalidFormKey(String),

    /// Callback parameter is not valid percent-encoded UTF-8.
    #[error("Invalid query encoding: {0}")]
    InvalidQueryEncoding(String),

    /// String does not name a known redirect kind.
    #[error("Unknown redirect kind: {0}")]
    UnknownKind(String),
}

impl RedirectError {
    /// Returns true if the operation could succeed on a later attempt.
    ///
    /// Encoding and validation are pure computations, so nothing here is
    /// ever transient.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Maps the error to an HTTP status code for a callback endpoint.
    pub fn status_code(&self) -> StatusCode {
        match self {
            RedirectError::InvalidSignature => StatusCode::UNAUTHORIZED,

            RedirectError::MissingHash
            | RedirectError::InvalidQueryEncoding(_)
            | RedirectError::UnknownKind(_) => StatusCode::BAD_REQUEST,

            // Merchant-side integration bugs
            RedirectError::InvalidRedirectUrl | RedirectError::InvalidFormKey(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
