//! DID URL parsing.
//!
//! This module handles the decomposition of DID URLs into their
//! components. A DID URL has the shape
//! `did:<method>:<id>[/path][?query][#fragment]`; resolution dispatches
//! on the method, forwards the query to the remote endpoint after
//! validation, and never transmits the path or fragment.

use std::fmt;

use crate::error::ResolutionError;

/// A parsed DID URL.
#[derive(Debug, Clone, PartialEq)]
pub struct DidUrl {
    /// The base DID without path, query or fragment,
    /// e.g. `did:example:123`.
    pub did: String,
    /// The method name, e.g. `example`.
    pub method: String,
    /// The method-specific identifier, which may itself contain colons.
    pub id: String,
    /// Optional path component, without the leading `/`.
    pub path: Option<String>,
    /// Optional query string, without the leading `?`.
    pub query: Option<String>,
    /// Optional fragment, without the leading `#`.
    pub fragment: Option<String>,
}

impl DidUrl {
    /// Parses and validates a DID URL string.
    ///
    /// The method name must be non-empty lowercase ASCII letters or
    /// digits and the method-specific identifier must be non-empty.
    /// Empty path, query or fragment components are treated as absent.
    ///
    /// # Arguments
    ///
    /// * `input` - The DID URL to parse
    pub fn parse(input: &str) -> Result<Self, ResolutionError> {
        let invalid = || ResolutionError::InvalidDid(input.to_string());

        let (rest, fragment) = match input.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (input, None),
        };
        let (rest, query) = match rest.split_once('?') {
            Some((rest, query)) => (rest, Some(query)),
            None => (rest, None),
        };
        let (did, path) = match rest.split_once('/') {
            Some((did, path)) => (did, Some(path)),
            None => (rest, None),
        };

        let (method, id) = did
            .strip_prefix("did:")
            .and_then(|s| s.split_once(':'))
            .ok_or_else(invalid)?;

        if method.is_empty()
            || !method
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(invalid());
        }
        if id.is_empty() {
            return Err(invalid());
        }

        Ok(DidUrl {
            did: did.to_string(),
            method: method.to_string(),
            id: id.to_string(),
            path: path.filter(|p| !p.is_empty()).map(str::to_string),
            query: query.filter(|q| !q.is_empty()).map(str::to_string),
            fragment: fragment.filter(|f| !f.is_empty()).map(str::to_string),
        })
    }
}

impl fmt::Display for DidUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.did)?;
        if let Some(path) = &self.path {
            write!(f, "/{}", path)?;
        }
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}
