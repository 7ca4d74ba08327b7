//! Per-resource CRUD service façade

use std::fmt::Display;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::resolver::Resolver;
use crate::transport::{Headers, Transport};

/// CRUD façade bound to one transport and one resolver.
///
/// A stateless mediator: every method asks the resolver for a URL, invokes
/// the matching transport verb with it, and returns the transport's result
/// unchanged. Both collaborators are immutable after construction, so a
/// service can be cloned and shared across tasks freely.
///
/// Payload and result types are generic at each call site; the service
/// itself never interprets the data passing through it.
///
/// Non-CRUD endpoints are added by composition rather than subtyping: wrap
/// the service, or write free functions against [`transport`](Self::transport)
/// and [`resolver`](Self::resolver).
#[derive(Clone)]
pub struct CrudService {
    transport: Arc<dyn Transport>,
    resolver: Arc<dyn Resolver>,
}

impl CrudService {
    /// Bind a transport and a resolver into a service.
    ///
    /// Usually called through [`ServiceFactory`](crate::ServiceFactory)
    /// rather than directly.
    pub fn new(transport: Arc<dyn Transport>, resolver: Arc<dyn Resolver>) -> Self {
        Self { transport, resolver }
    }

    /// The transport this service dispatches through.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// The resolver this service builds URLs with.
    pub fn resolver(&self) -> &Arc<dyn Resolver> {
        &self.resolver
    }

    /// The resource root URL, as produced by the resolver.
    pub fn root_url(&self) -> String {
        self.resolver.root()
    }

    /// Create a resource: `POST` to the resource root.
    pub async fn create<B, R>(&self, data: &B, headers: Option<Headers>) -> Result<Option<R>>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.resolver.root();
        debug!(%url, "create");
        let body = serde_json::to_value(data)?;
        decode(self.transport.post(&url, Some(body), headers).await?)
    }

    /// List resources: `GET` on the resource root.
    pub async fn list<R>(&self, headers: Option<Headers>) -> Result<Option<R>>
    where
        R: DeserializeOwned,
    {
        let url = self.resolver.root();
        debug!(%url, "list");
        decode(self.transport.get(&url, headers).await?)
    }

    /// Fetch a single resource by identifier: `GET` on the resource target.
    pub async fn get<I, R>(&self, id: I, headers: Option<Headers>) -> Result<Option<R>>
    where
        I: Display,
        R: DeserializeOwned,
    {
        let url = self.resolver.resource(&id.to_string());
        debug!(%url, "get");
        decode(self.transport.get(&url, headers).await?)
    }

    /// Fully update a resource: `PUT` to the update target.
    pub async fn update<I, B, R>(
        &self,
        id: I,
        data: &B,
        headers: Option<Headers>,
    ) -> Result<Option<R>>
    where
        I: Display,
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.resolver.update(&id.to_string());
        debug!(%url, "update");
        let body = serde_json::to_value(data)?;
        decode(self.transport.put(&url, Some(body), headers).await?)
    }

    /// Partially update a resource: `PATCH` to the patch target.
    pub async fn patch<I, B, R>(
        &self,
        id: I,
        data: &B,
        headers: Option<Headers>,
    ) -> Result<Option<R>>
    where
        I: Display,
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.resolver.patch(&id.to_string());
        debug!(%url, "patch");
        let body = serde_json::to_value(data)?;
        decode(self.transport.patch(&url, Some(body), headers).await?)
    }

    /// Delete a resource: `DELETE` on the delete target.
    pub async fn delete<I, R>(&self, id: I, headers: Option<Headers>) -> Result<Option<R>>
    where
        I: Display,
        R: DeserializeOwned,
    {
        let url = self.resolver.delete(&id.to_string());
        debug!(%url, "delete");
        decode(self.transport.delete(&url, headers).await?)
    }

    /// Fetch one page of a listing: `POST` to the page target.
    ///
    /// The body carries the query (filters, sort); servers that page via
    /// request bodies rather than query strings expect exactly this shape.
    pub async fn page<B, R>(
        &self,
        page: u64,
        data: &B,
        headers: Option<Headers>,
    ) -> Result<Option<R>>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.resolver.page(page);
        debug!(%url, page, "page");
        let body = serde_json::to_value(data)?;
        decode(self.transport.post(&url, Some(body), headers).await?)
    }
}

fn decode<R: DeserializeOwned>(raw: Option<Value>) -> Result<Option<R>> {
    raw.map(serde_json::from_value).transpose().map_err(Into::into)
}
