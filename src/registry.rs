//! Multi-method resolver registry.
//!
//! A driver only answers for one DID method, and the method name it is
//! registered under differs between deployments. The registry maps
//! caller-supplied method names to drivers and dispatches each DID URL
//! to the matching one.

use std::collections::HashMap;

use tracing::debug;

use crate::did::DidUrl;
use crate::error::ResolutionError;
use crate::resolver::RemoteResolver;
use crate::types::ResolutionResult;

/// A registry mapping DID method names to resolution drivers.
///
/// Like the drivers themselves, [`resolve`](MethodRegistry::resolve)
/// always returns a result envelope; a DID whose method has no
/// registered driver is reported as `methodNotSupported`.
///
/// # Example
/// ```no_run
/// use remote_did_resolver::{MethodRegistry, RemoteResolver, ResolverConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ResolverConfig::new("https://resolver.example.com")?;
///     let registry = MethodRegistry::new()
///         .with_method("example", RemoteResolver::new(config));
///     let result = registry.resolve("did:example:123").await;
///     println!("Resolved DID Document: {:?}", result.did_document);
///     Ok(())
/// }
/// ```
#[derive(Default)]
pub struct MethodRegistry {
    /// Registered drivers, keyed by method name.
    drivers: HashMap<String, RemoteResolver>,
}

impl MethodRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            drivers: HashMap::new(),
        }
    }

    /// Registers a driver for a method name, replacing any driver
    /// previously registered under that name.
    pub fn register(&mut self, method: impl Into<String>, resolver: RemoteResolver) {
        self.drivers.insert(method.into(), resolver);
    }

    /// Builder-style counterpart of
    /// [`register`](MethodRegistry::register).
    pub fn with_method(
        mut self,
        method: impl Into<String>,
        resolver: RemoteResolver,
    ) -> Self {
        self.register(method, resolver);
        self
    }

    /// Returns the driver registered for a method name, if any.
    pub fn get(&self, method: &str) -> Option<&RemoteResolver> {
        self.drivers.get(method)
    }

    /// Returns the registered method names, in no particular order.
    pub fn methods(&self) -> Vec<&str> {
        self.drivers.keys().map(String::as_str).collect()
    }

    /// Returns `true` if no driver is registered.
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Returns the number of registered drivers.
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    /// Resolves a DID URL by dispatching on its method name.
    ///
    /// # Arguments
    ///
    /// * `did` - The DID URL to resolve
    pub async fn resolve(&self, did: &str) -> ResolutionResult {
        let parsed = match DidUrl::parse(did) {
            Ok(parsed) => parsed,
            Err(error) => return ResolutionResult::from_error(&error),
        };

        match self.get(&parsed.method) {
            Some(resolver) => resolver.resolve_parsed(&parsed).await,
            None => {
                debug!("no driver registered for method {}", parsed.method);
                ResolutionResult::from_error(&ResolutionError::UnsupportedMethod(
                    parsed.method,
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::ResolverConfig;

    #[tokio::test]
    async fn test_dispatches_to_registered_method() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/1.0/identifiers/did:example:123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "didDocument": { "id": "did:example:123" },
                "didDocumentMetadata": {},
                "didResolutionMetadata": {}
            })))
            .mount(&server)
            .await;

        let driver = RemoteResolver::new(ResolverConfig::new(&server.uri()).unwrap());
        let registry = MethodRegistry::new().with_method("example", driver);
        let result = registry.resolve("did:example:123").await;

        assert!(result.did_document.is_some());
        assert_eq!(result.error(), None);
    }

    #[tokio::test]
    async fn test_unregistered_method_is_not_supported() {
        let driver = RemoteResolver::new(
            ResolverConfig::new("https://resolver.example.com").unwrap(),
        );
        let registry = MethodRegistry::new().with_method("example", driver);
        let result = registry.resolve("did:other:123").await;

        assert!(result.did_document.is_none());
        assert_eq!(result.error(), Some("methodNotSupported"));
        assert_eq!(
            result.did_resolution_metadata.message.as_deref(),
            Some("Unsupported DID method: other")
        );
    }

    #[tokio::test]
    async fn test_invalid_did_is_invalid_did_url() {
        let registry = MethodRegistry::new();
        let result = registry.resolve("banana").await;

        assert!(result.did_document.is_none());
        assert_eq!(result.error(), Some("invalidDidUrl"));
    }

    #[test]
    fn test_accessors() {
        let driver = RemoteResolver::new(
            ResolverConfig::new("https://resolver.example.com").unwrap(),
        );
        let registry = MethodRegistry::new().with_method("example", driver);

        assert!(!registry.is_empty());
        assert_eq!(registry.len(), 1);
        assert!(registry.get("example").is_some());
        assert!(registry.get("other").is_none());
        assert_eq!(registry.methods(), vec!["example"]);
    }
}
