//! Common test utilities
//!
//! - `stub` — a recording stub transport: logs every call and replays a
//!   canned response, so tests can assert the exact verb/URL/body/headers
//!   the service dispatched.
//! - `responses` — canned JSON response bodies.

#![allow(dead_code)]

pub mod responses;
pub mod stub;

pub use responses::{user_list_response, user_page_response, user_response};
pub use stub::{Call, StubTransport};
