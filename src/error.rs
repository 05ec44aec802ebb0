//! Error types for remote DID resolution.
//!
//! This module provides the error taxonomy for the resolution pipeline. It
//! uses the `thiserror` crate for error handling. Errors never cross the
//! public resolver boundary as `Err` values: the entry points fold every
//! failure into the `resolutionMetadata` of the returned envelope, using
//! the registered error token reported by [`ResolutionError::kind`].

use std::fmt;

use thiserror::Error;
use url::ParseError;

/// Errors that can occur while resolving a DID through a remote endpoint
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// The input string is not a valid DID URL
    #[error("Invalid DID URL: {0}")]
    InvalidDid(String),

    /// A DID URL query parameter outside the allowed set was supplied
    #[error("Invalid DID URL query parameter: {0}")]
    InvalidQueryParameter(String),

    /// The configured resolution endpoint is not a valid URL
    #[error("Invalid resolution endpoint URL: {0}")]
    InvalidEndpoint(#[from] ParseError),

    /// The request to the resolution endpoint failed
    #[error("DID must resolve to a valid https URL containing a JSON document: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint responded with a body that is not a JSON resolution result
    #[error("DID must resolve to a valid https URL containing a JSON document: {0}")]
    Json(#[from] serde_json::Error),

    /// The endpoint response carried no DID document
    #[error("No matching DID document found for requested DID.")]
    DocumentNotFound,

    /// The resolved document identifies a different DID than the one requested
    #[error("DID document id does not match requested DID.")]
    DocumentMismatch,

    /// No driver is registered for the DID method
    #[error("Unsupported DID method: {0}")]
    UnsupportedMethod(String),
}

impl ResolutionError {
    /// The error token carried in `resolutionMetadata.error` for this failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDid(_) | Self::InvalidQueryParameter(_) => ErrorKind::InvalidDidUrl,
            Self::UnsupportedMethod(_) => ErrorKind::MethodNotSupported,
            _ => ErrorKind::NotFound,
        }
    }
}

/// Error tokens from the DID specification registries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// `invalidDidUrl`: the DID URL or one of its query parameters is invalid
    InvalidDidUrl,

    /// `notFound`: transport failure, malformed body, missing document, or a
    /// document that does not belong to the requested DID
    NotFound,

    /// `methodNotSupported`: no driver registered for the DID method,
    /// reported by registry dispatch only
    MethodNotSupported,
}

impl ErrorKind {
    /// String form used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidDidUrl => "invalidDidUrl",
            ErrorKind::NotFound => "notFound",
            ErrorKind::MethodNotSupported => "methodNotSupported",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
