//! # crudkit
//!
//! A factory for uniform CRUD HTTP clients bound to REST-style resource
//! endpoints. The crate is a thin composition layer: you inject a
//! [`Transport`] (the thing that actually talks HTTP) and optionally a
//! [`Resolver`] strategy (the thing that builds endpoint URLs), and get back
//! per-resource [`CrudService`] values exposing seven uniform operations.
//!
//! The crate performs no I/O of its own, no retries, no authentication, and
//! no validation; every operation is one resolver call followed by one
//! transport call, with the transport's result returned unchanged.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use crudkit::{Page, ServiceFactory, Transport};
//! use serde_json::{json, Value};
//!
//! async fn example(api: Arc<dyn Transport>) -> crudkit::Result<()> {
//!     let factory = ServiceFactory::new(api);
//!     let users = factory.service("/api/users");
//!
//!     let _created: Option<Value> = users.create(&json!({"name": "Ada"}), None).await?;
//!     let _user: Option<Value> = users.get("42", None).await?;
//!     let _page: Option<Page<Value>> = users.page(0, &json!({"filter": "x"}), None).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub use builder::{ServiceFactory, ServiceOverrides};
pub use error::{Error, Result};
pub use resolver::{PathResolver, Resolver, ResolverFactory};
pub use service::CrudService;
pub use transport::{Headers, Transport};
pub use types::{Envelope, Page};

pub mod builder;
pub mod error;
pub mod resolver;
pub mod service;
pub mod transport;
pub mod types;

// Re-export the trait attribute for transport implementors
pub use async_trait::async_trait;

/// Prelude module for common imports
///
/// ```rust
/// use crudkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        CrudService, Envelope, Error, Headers, Page, PathResolver, Resolver, Result,
        ServiceFactory, ServiceOverrides, Transport,
    };
}

/// Crate version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
    }
}
