//! A driver-style DID resolver that delegates resolution to a remote
//! HTTP endpoint.
//!
//! This library validates a DID URL, forwards it to a configured
//! resolution endpoint, validates the returned document and wraps
//! everything in the standard resolution result envelope. It is
//! designed to be registered as one driver among many in a
//! multi-method [`MethodRegistry`].

mod error;
mod types;
mod did;
mod config;
mod resolver;
mod registry;

pub use error::{ErrorKind, ResolutionError};
pub use types::{
    DidDocument,
    DocumentMetadata,
    ResolutionMetadata,
    ResolutionResult,
    TYPE_DID_JSON,
    TYPE_DID_LD_JSON,
};
pub use did::DidUrl;
pub use config::{ResolverConfig, ResponseShape, DEFAULT_RESOLUTION_PATH, DID_CORE_PARAMETERS};
pub use resolver::{RemoteResolver, resolve_did};
pub use registry::MethodRegistry;

/// Resolves a DID against a remote resolution endpoint with the
/// default configuration.
///
/// # Arguments
/// * `endpoint` - Base URL of the remote resolution endpoint
/// * `did` - The DID URL to resolve
///
/// # Example
/// ```no_run
/// use remote_did_resolver::resolve;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let result = resolve(
///         "https://resolver.example.com",
///         "did:example:123"
///     ).await?;
///
///     println!("Resolved DID Document: {:?}", result.did_document);
///     Ok(())
/// }
/// ```
pub async fn resolve(
    endpoint: &str,
    did: &str,
) -> Result<ResolutionResult, ResolutionError> {
    resolve_did(endpoint, did).await
}
