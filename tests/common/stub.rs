//! Recording stub transport

use std::sync::{Arc, Mutex};

use crudkit::{Headers, Result, Transport, async_trait};
use serde_json::Value;

/// One recorded transport invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub verb: &'static str,
    pub url: String,
    pub body: Option<Value>,
    pub headers: Option<Headers>,
}

/// Transport double that records every call and replays a canned outcome.
pub struct StubTransport {
    calls: Mutex<Vec<Call>>,
    canned: Option<Value>,
    fail_with: Option<String>,
}

impl StubTransport {
    /// Stub whose every verb succeeds with no response body.
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            canned: None,
            fail_with: None,
        })
    }

    /// Stub whose every verb succeeds with a clone of `value`.
    pub fn returning(value: Value) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            canned: Some(value),
            fail_with: None,
        })
    }

    /// Stub whose every verb fails with the given message.
    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            canned: None,
            fail_with: Some(message.to_string()),
        })
    }

    /// All calls recorded so far, in dispatch order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// The single recorded call; panics unless exactly one was made.
    pub fn only_call(&self) -> Call {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one transport call");
        calls.into_iter().next().unwrap()
    }

    fn record(
        &self,
        verb: &'static str,
        url: &str,
        body: Option<Value>,
        headers: Option<Headers>,
    ) -> Result<Option<Value>> {
        self.calls.lock().unwrap().push(Call {
            verb,
            url: url.to_string(),
            body,
            headers,
        });

        match &self.fail_with {
            Some(message) => Err(anyhow::anyhow!("{message}").into()),
            None => Ok(self.canned.clone()),
        }
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn post(
        &self,
        url: &str,
        body: Option<Value>,
        headers: Option<Headers>,
    ) -> Result<Option<Value>> {
        self.record("post", url, body, headers)
    }

    async fn get(&self, url: &str, headers: Option<Headers>) -> Result<Option<Value>> {
        self.record("get", url, None, headers)
    }

    async fn put(
        &self,
        url: &str,
        body: Option<Value>,
        headers: Option<Headers>,
    ) -> Result<Option<Value>> {
        self.record("put", url, body, headers)
    }

    async fn patch(
        &self,
        url: &str,
        body: Option<Value>,
        headers: Option<Headers>,
    ) -> Result<Option<Value>> {
        self.record("patch", url, body, headers)
    }

    async fn delete(&self, url: &str, headers: Option<Headers>) -> Result<Option<Value>> {
        self.record("delete", url, None, headers)
    }
}
