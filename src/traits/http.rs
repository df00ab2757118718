//! HTTP client trait abstraction.
//!
//! The dashboard only ever issues GET requests, so the trait is a single
//! async method. Production code uses the reqwest adapter; tests swap in
//! [`crate::adapters::MockHttpClient`].

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;
use thiserror::Error;

/// Header names are stored lower-cased.
pub type Headers = HashMap<String, String>;

const CONTENT_TYPE: &str = "content-type";

/// A fully read response.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: Headers,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: Bytes) -> Self {
        Self::with_headers(status, Headers::new(), body)
    }

    pub fn with_headers(status: u16, headers: Headers, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// 200 with a JSON body, the shape every dashboard endpoint answers with.
    pub fn json_ok(value: &serde_json::Value) -> Self {
        let headers = Headers::from([(
            CONTENT_TYPE.to_string(),
            "application/json".to_string(),
        )]);
        Self::with_headers(200, headers, Bytes::from(value.to_string()))
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).map(String::as_str)
    }

    /// Body as UTF-8 text, for error messages.
    pub fn text(&self) -> Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.body.to_vec())
    }

    /// Decode the body into a wire model.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}

/// Transport-level HTTP errors.
///
/// Non-2xx statuses are not errors at this layer; they come back as a
/// [`Response`] and the gateway decides what they mean.
#[derive(Debug, Clone, Error)]
pub enum HttpError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Request timeout: {0}")]
    Timeout(String),
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Body could not be read
    #[error("Failed to read body: {0}")]
    Body(String),
    #[error("HTTP error: {0}")]
    Other(String),
}

/// Trait for HTTP client operations.
///
/// # Example
///
/// ```ignore
/// use minidash::traits::{HttpClient, Headers, HttpError};
///
/// async fn fetch_text<C: HttpClient>(client: &C) -> Result<String, HttpError> {
///     let response = client.get("http://localhost:8000/api/researchers/", &Headers::new()).await?;
///     response.text().map_err(|e| HttpError::Body(e.to_string()))
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request.
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;
}
