//! URL resolution strategy
//!
//! A [`Resolver`] maps a resource base path plus an optional identifier or
//! page number to a concrete endpoint string. The default [`PathResolver`]
//! is plain concatenation; swap in your own implementation (or a
//! [`ResolverFactory`] on the service factory) for endpoints that deviate
//! from the `{base}/{id}` convention.

use std::sync::Arc;

/// Strategy object producing endpoint paths for one resource.
///
/// Every method is pure and synchronous. No validation is performed on
/// identifiers; whatever string the caller hands over is interpolated as-is.
pub trait Resolver: Send + Sync {
    /// Target for list and create operations.
    fn root(&self) -> String;

    /// Target for fetching a single resource by identifier.
    fn resource(&self, id: &str) -> String;

    /// Target for a full update of one resource.
    fn update(&self, id: &str) -> String;

    /// Target for a partial update of one resource.
    fn patch(&self, id: &str) -> String;

    /// Target for deleting one resource.
    fn delete(&self, id: &str) -> String;

    /// Target for a paged listing.
    fn page(&self, page: u64) -> String;
}

/// Default resolver: string concatenation over a fixed base path.
///
/// `root` is the base path unchanged, identifier targets are `{base}/{id}`,
/// and the page target is `{base}/page/{n}`.
#[derive(Debug, Clone)]
pub struct PathResolver {
    base: String,
}

impl PathResolver {
    /// Create a resolver over the given base path.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// The base path this resolver was constructed with.
    pub fn base(&self) -> &str {
        &self.base
    }
}

impl Resolver for PathResolver {
    fn root(&self) -> String {
        self.base.clone()
    }

    fn resource(&self, id: &str) -> String {
        format!("{}/{}", self.base, id)
    }

    fn update(&self, id: &str) -> String {
        self.resource(id)
    }

    fn patch(&self, id: &str) -> String {
        self.resource(id)
    }

    fn delete(&self, id: &str) -> String {
        self.resource(id)
    }

    fn page(&self, page: u64) -> String {
        format!("{}/page/{}", self.base, page)
    }
}

/// Factory producing a resolver from a base path.
///
/// Captured by [`ServiceFactory`](crate::ServiceFactory) so every service it
/// constructs gets a fresh resolver for its own base path.
pub type ResolverFactory = dyn Fn(&str) -> Arc<dyn Resolver> + Send + Sync;
