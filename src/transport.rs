//! Transport abstraction
//!
//! Defines the object-safe [`Transport`] trait the service dispatches
//! through. Implementations own every network concern: connection pooling,
//! timeouts, retries, authentication headers. This crate treats the
//! transport as an opaque collaborator and never closes or disposes it.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// Per-request headers, passed through to the transport untouched.
pub type Headers = HashMap<String, String>;

/// Injected capability performing the actual HTTP verb exchange.
///
/// One method per CRUD verb. Each takes a fully resolved URL, an optional
/// JSON body where the verb carries one, and optional headers, and returns
/// the transport's parsed response body if there was one. `Ok(None)` is the
/// idiomatic shape for bodyless responses such as `204 No Content`.
///
/// Implementations are shared behind `Arc<dyn Transport>`, so methods take
/// `&self` and must be safe to call concurrently.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a POST request.
    async fn post(
        &self,
        url: &str,
        body: Option<Value>,
        headers: Option<Headers>,
    ) -> Result<Option<Value>>;

    /// Send a GET request.
    async fn get(&self, url: &str, headers: Option<Headers>) -> Result<Option<Value>>;

    /// Send a PUT request.
    async fn put(
        &self,
        url: &str,
        body: Option<Value>,
        headers: Option<Headers>,
    ) -> Result<Option<Value>>;

    /// Send a PATCH request.
    async fn patch(
        &self,
        url: &str,
        body: Option<Value>,
        headers: Option<Headers>,
    ) -> Result<Option<Value>>;

    /// Send a DELETE request.
    async fn delete(&self, url: &str, headers: Option<Headers>) -> Result<Option<Value>>;
}
