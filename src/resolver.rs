//! Core remote DID resolution.
//!
//! This module implements the resolution pipeline: validate the DID-URL
//! query string against the configured allowlist, build the endpoint
//! URL, fetch and parse the response body, check document presence and
//! identifier equivalence, classify the content type, and assemble the
//! result envelope. Failures never surface as `Err` from the public
//! entry points; they are folded into the envelope's resolution
//! metadata so callers always receive a uniform result.

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::{ResolverConfig, ResponseShape};
use crate::did::DidUrl;
use crate::error::ResolutionError;
use crate::types::{CompactResponse, ResolutionMetadata, ResolutionResult};

/// A driver that resolves DIDs against one remote resolution endpoint.
pub struct RemoteResolver {
    /// HTTP client used for resolution requests.
    client: Client,
    /// Endpoint configuration.
    config: ResolverConfig,
}

impl RemoteResolver {
    /// Creates a resolver with its own HTTP client.
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Creates a resolver that issues requests through the given
    /// client, so callers can share a connection pool or set timeouts
    /// and proxies on the transport.
    pub fn with_client(config: ResolverConfig, client: Client) -> Self {
        Self { client, config }
    }

    /// Returns the resolver's configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolves a DID URL.
    ///
    /// Always returns a result envelope. On failure the envelope's
    /// document is `None` and its resolution metadata carries the
    /// error code and message; an unparseable input is reported as
    /// `invalidDidUrl`.
    ///
    /// # Arguments
    ///
    /// * `did` - The DID URL to resolve
    ///
    /// # Example
    /// ```no_run
    /// use remote_did_resolver::{RemoteResolver, ResolverConfig};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let config = ResolverConfig::new("https://resolver.example.com")?;
    ///     let resolver = RemoteResolver::new(config);
    ///     let result = resolver.resolve("did:example:123").await;
    ///     println!("Resolved DID Document: {:?}", result.did_document);
    ///     Ok(())
    /// }
    /// ```
    pub async fn resolve(&self, did: &str) -> ResolutionResult {
        match DidUrl::parse(did) {
            Ok(parsed) => self.resolve_parsed(&parsed).await,
            Err(error) => ResolutionResult::from_error(&error),
        }
    }

    /// Resolves an already parsed DID URL.
    ///
    /// Like [`resolve`](RemoteResolver::resolve), this always returns
    /// a result envelope.
    pub async fn resolve_parsed(&self, parsed: &DidUrl) -> ResolutionResult {
        match self.try_resolve(parsed).await {
            Ok(result) => result,
            Err(error) => {
                debug!("resolution of {} failed: {}", parsed.did, error);
                ResolutionResult::from_error(&error)
            }
        }
    }

    async fn try_resolve(
        &self,
        parsed: &DidUrl,
    ) -> Result<ResolutionResult, ResolutionError> {
        // The DID URI sent upstream is the bare DID plus the validated
        // query string. The path and fragment are never transmitted.
        let mut did_uri = parsed.did.clone();
        if let Some(query) = &parsed.query {
            self.config.validate_query(query)?;
            did_uri = format!("{}?{}", did_uri, query);
        }

        let url = self.config.resolution_url(&did_uri);
        debug!("fetching DID document from {}", url);

        let mut result = self.fetch(&url).await?;

        let document = result
            .did_document
            .as_ref()
            .ok_or(ResolutionError::DocumentNotFound)?;
        if document.id != parsed.did {
            warn!(
                "endpoint returned document for {} when {} was requested",
                document.id, parsed.did
            );
            return Err(ResolutionError::DocumentMismatch);
        }
        let content_type = document.content_type();

        // Upstream resolution metadata is kept, but a successful
        // result never carries error fields.
        let metadata = &mut result.did_resolution_metadata;
        metadata.error = None;
        metadata.message = None;
        metadata.content_type = Some(content_type.to_string());

        Ok(result)
    }

    async fn fetch(&self, url: &str) -> Result<ResolutionResult, ResolutionError> {
        let response = self.client.get(url).send().await?;
        let body = response.text().await?;

        match self.config.response_shape {
            ResponseShape::Envelope => Ok(serde_json::from_str(&body)?),
            ResponseShape::Compact => {
                let compact: CompactResponse = serde_json::from_str(&body)?;
                Ok(ResolutionResult {
                    did_document: compact.did_doc,
                    did_document_metadata: compact.metadata,
                    did_resolution_metadata: ResolutionMetadata::default(),
                })
            }
        }
    }
}

/// Convenience function for resolving a DID against an endpoint with
/// the default configuration, without keeping a resolver around.
///
/// # Arguments
///
/// * `endpoint` - Base URL of the remote resolution endpoint
/// * `did` - The DID URL to resolve
pub async fn resolve_did(
    endpoint: &str,
    did: &str,
) -> Result<ResolutionResult, ResolutionError> {
    let resolver = RemoteResolver::new(ResolverConfig::new(endpoint)?);
    Ok(resolver.resolve(did).await)
}
