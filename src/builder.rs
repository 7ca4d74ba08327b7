//! Service factory
//!
//! Captures a shared transport (and optionally a resolver factory) once,
//! then stamps out independent [`CrudService`] values per resource base
//! path. A plain configuration record plus a construction method — no
//! runtime class generation, no caching of constructed services.

use std::sync::Arc;

use crate::resolver::{PathResolver, Resolver, ResolverFactory};
use crate::service::CrudService;
use crate::transport::Transport;

/// Factory for per-resource CRUD services sharing one transport.
///
/// # Example
///
/// ```rust,no_run
/// # use std::sync::Arc;
/// # use crudkit::{ServiceFactory, Transport};
/// # fn example(api: Arc<dyn Transport>) {
/// let factory = ServiceFactory::new(api);
/// let users = factory.service("/api/users");
/// let orders = factory.service("/api/orders");
/// # }
/// ```
pub struct ServiceFactory {
    transport: Arc<dyn Transport>,
    resolver_factory: Option<Box<ResolverFactory>>,
}

impl ServiceFactory {
    /// Capture the shared transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            resolver_factory: None,
        }
    }

    /// Capture a resolver factory applied to each service's base path.
    ///
    /// Without one, services get [`PathResolver`] over their base path.
    pub fn resolver_factory<F>(mut self, factory: F) -> Self
    where
        F: Fn(&str) -> Arc<dyn Resolver> + Send + Sync + 'static,
    {
        self.resolver_factory = Some(Box::new(factory));
        self
    }

    /// Construct a service for one resource base path.
    pub fn service(&self, base_path: impl AsRef<str>) -> CrudService {
        self.service_with(base_path, ServiceOverrides::default())
    }

    /// Construct a service with per-instance overrides.
    ///
    /// Each override wins independently over the captured default; an
    /// overriding resolver also bypasses the captured resolver factory.
    pub fn service_with(
        &self,
        base_path: impl AsRef<str>,
        overrides: ServiceOverrides,
    ) -> CrudService {
        let base_path = base_path.as_ref();

        let transport = overrides
            .transport
            .unwrap_or_else(|| Arc::clone(&self.transport));

        let resolver = overrides.resolver.unwrap_or_else(|| {
            match &self.resolver_factory {
                Some(factory) => factory(base_path),
                None => Arc::new(PathResolver::new(base_path)),
            }
        });

        CrudService::new(transport, resolver)
    }
}

/// Per-instance overrides for [`ServiceFactory::service_with`].
#[derive(Default)]
pub struct ServiceOverrides {
    /// Replaces the factory's captured transport for this service only.
    pub transport: Option<Arc<dyn Transport>>,
    /// Replaces the resolver the factory would otherwise construct.
    pub resolver: Option<Arc<dyn Resolver>>,
}

impl ServiceOverrides {
    /// Override the transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Override the resolver.
    pub fn resolver(mut self, resolver: Arc<dyn Resolver>) -> Self {
        self.resolver = Some(resolver);
        self
    }
}
