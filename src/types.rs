//! Core types for remote DID resolution.
//!
//! This module provides the data structures exchanged with a remote
//! resolution endpoint and returned to callers: the DID document, the
//! metadata maps that travel alongside it, and the resolution result
//! envelope that carries all three. The types stay close to the JSON
//! they represent; apart from the document `id`, which resolution
//! validates, everything else is passed through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ErrorKind, ResolutionError};

/// Content type for plain JSON DID documents.
pub const TYPE_DID_JSON: &str = "application/did+json";

/// Content type for JSON-LD DID documents, used when the document
/// carries an `@context` property.
pub const TYPE_DID_LD_JSON: &str = "application/did+ld+json";

/// A DID document as returned by the remote endpoint.
///
/// Only the `id` property is lifted out, because resolution checks it
/// against the requested DID. Every other property, including
/// `@context`, `verificationMethod` and `service`, is kept verbatim in
/// [`properties`](DidDocument::properties) so documents round-trip
/// without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DidDocument {
    /// The DID this document describes. Defaults to an empty string
    /// when the endpoint omits it, which resolution then reports as a
    /// mismatch.
    #[serde(default)]
    pub id: String,

    /// All remaining document properties, untouched.
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

impl DidDocument {
    /// Returns the media type describing this document.
    ///
    /// Documents that define `@context`, even with a `null` value, are
    /// JSON-LD; all others are plain JSON.
    pub fn content_type(&self) -> &'static str {
        if self.properties.contains_key("@context") {
            TYPE_DID_LD_JSON
        } else {
            TYPE_DID_JSON
        }
    }
}

/// Metadata about the DID document itself, such as `created`,
/// `updated` or `deactivated`. The remote endpoint owns its shape, so
/// it is carried as an open map.
pub type DocumentMetadata = Map<String, Value>;

/// Metadata about the resolution process.
///
/// On failure, `error` holds one of the registered error codes and
/// `message` a human-readable explanation. On success, `content_type`
/// holds the media type of the resolved document. The two sets never
/// overlap in a result produced by this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionMetadata {
    /// Error code, e.g. `notFound` or `invalidDidUrl`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Human-readable description of the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Media type of the resolved document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Any further metadata reported by the remote endpoint.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResolutionMetadata {
    /// Builds failure metadata from an error code and message.
    pub fn from_error(kind: ErrorKind, message: impl Into<String>) -> Self {
        ResolutionMetadata {
            error: Some(kind.as_str().to_owned()),
            message: Some(message.into()),
            ..Default::default()
        }
    }
}

/// The envelope returned by every resolution, successful or not.
///
/// `did_document` is `None` exactly when resolution failed, in which
/// case [`ResolutionMetadata::error`] names the failure. The field is
/// always serialized, as `null` on failure, so consumers can rely on
/// the key being present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionResult {
    /// The resolved DID document, or `None` when resolution failed.
    #[serde(default)]
    pub did_document: Option<DidDocument>,

    /// Metadata about the document, passed through from the endpoint.
    #[serde(default)]
    pub did_document_metadata: DocumentMetadata,

    /// Metadata about the resolution process.
    #[serde(default)]
    pub did_resolution_metadata: ResolutionMetadata,
}

impl ResolutionResult {
    /// Builds the failure envelope for an error: no document, empty
    /// document metadata, and resolution metadata naming the error.
    pub fn from_error(error: &ResolutionError) -> Self {
        ResolutionResult {
            did_document: None,
            did_document_metadata: DocumentMetadata::new(),
            did_resolution_metadata: ResolutionMetadata::from_error(
                error.kind(),
                error.to_string(),
            ),
        }
    }

    /// Returns the error code of a failed resolution, if any.
    pub fn error(&self) -> Option<&str> {
        self.did_resolution_metadata.error.as_deref()
    }

    /// Returns the content type of a successful resolution, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.did_resolution_metadata.content_type.as_deref()
    }
}

/// The compact response shape some endpoints return instead of a full
/// resolution result: the document under `didDoc` with its metadata
/// beside it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CompactResponse {
    #[serde(default)]
    pub did_doc: Option<DidDocument>,

    #[serde(default)]
    pub metadata: DocumentMetadata,
}
