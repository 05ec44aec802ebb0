//! Resolver configuration.
//!
//! This module configures how the adapter talks to its remote
//! resolution endpoint: the base URL, the path segment between the
//! base URL and the DID, the query parameters callers may pass
//! through, and the shape of the response body the endpoint returns.

use url::Url;

use crate::error::ResolutionError;

/// Path segment between the endpoint base URL and the DID, as used by
/// most resolver deployments.
pub const DEFAULT_RESOLUTION_PATH: &str = "1.0/identifiers";

/// The DID-URL query parameters registered by DID Core.
///
/// See <https://www.w3.org/TR/did-core/#did-parameters>.
pub const DID_CORE_PARAMETERS: &[&str] =
    &["service", "relativeRef", "versionId", "versionTime", "hl"];

/// The shape of the response body the remote endpoint returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseShape {
    /// A full resolution result: `didDocument`, `didDocumentMetadata`
    /// and `didResolutionMetadata`.
    #[default]
    Envelope,
    /// A compact body carrying the document under `didDoc` with its
    /// metadata beside it under `metadata`.
    Compact,
}

/// Configuration for a remote resolution driver.
///
/// # Example
///
/// ```
/// use remote_did_resolver::{ResolverConfig, ResponseShape};
///
/// let config = ResolverConfig::new("https://resolver.example.com")
///     .unwrap()
///     .with_resolution_path("did")
///     .with_response_shape(ResponseShape::Compact);
/// ```
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Base URL of the remote resolution endpoint.
    pub endpoint: Url,

    /// Path segment inserted between the base URL and the DID.
    pub resolution_path: String,

    /// Query parameter names allowed in resolved DID URLs.
    pub allowed_parameters: Vec<String>,

    /// Shape of the endpoint's response body.
    pub response_shape: ResponseShape,
}

impl ResolverConfig {
    /// Creates a configuration for the given endpoint with the default
    /// resolution path, the DID Core parameter allowlist and the full
    /// envelope response shape.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Base URL of the remote resolution endpoint
    pub fn new(endpoint: &str) -> Result<Self, ResolutionError> {
        Ok(ResolverConfig {
            endpoint: Url::parse(endpoint)?,
            resolution_path: DEFAULT_RESOLUTION_PATH.to_string(),
            allowed_parameters: DID_CORE_PARAMETERS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            response_shape: ResponseShape::default(),
        })
    }

    /// Replaces the resolution path segment. An empty path places the
    /// DID directly under the endpoint base URL.
    pub fn with_resolution_path(mut self, path: impl Into<String>) -> Self {
        self.resolution_path = path.into();
        self
    }

    /// Replaces the allowed query parameter names.
    pub fn with_allowed_parameters(
        mut self,
        parameters: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.allowed_parameters = parameters.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the response body shape the endpoint returns.
    pub fn with_response_shape(mut self, shape: ResponseShape) -> Self {
        self.response_shape = shape;
        self
    }

    /// Checks every parameter name in a DID-URL query string against
    /// the allowlist. Duplicate names are checked independently.
    pub fn validate_query(&self, query: &str) -> Result<(), ResolutionError> {
        for (name, _) in url::form_urlencoded::parse(query.as_bytes()) {
            if !self
                .allowed_parameters
                .iter()
                .any(|allowed| allowed == name.as_ref())
            {
                return Err(ResolutionError::InvalidQueryParameter(name.into_owned()));
            }
        }
        Ok(())
    }

    /// Builds the URL the DID URI is fetched from: the endpoint base,
    /// the resolution path and the DID URI, joined by single slashes.
    /// The DID URI is inserted as-is; percent-encoding is the caller's
    /// responsibility.
    pub fn resolution_url(&self, did_uri: &str) -> String {
        let base = self.endpoint.as_str().trim_end_matches('/');
        let path = self.resolution_path.trim_matches('/');
        if path.is_empty() {
            format!("{}/{}", base, did_uri)
        } else {
            format!("{}/{}/{}", base, path, did_uri)
        }
    }
}
