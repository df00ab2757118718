//! Mock implementations for testing.
//!
//! Lets the gateway and the app controller run without network access.

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
