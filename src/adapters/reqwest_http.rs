//! [`HttpClient`] backed by reqwest.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use std::time::Duration;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Production transport for the dashboard gateway.
///
/// Without a timeout a hung backend keeps the loading flag up until the
/// connection drops.
#[derive(Debug, Clone, Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests give up after `timeout` and surface [`HttpError::Timeout`].
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_timeout() {
            HttpError::Timeout(message)
        } else if err.is_connect() {
            HttpError::ConnectionFailed(message)
        } else if err.is_builder() {
            HttpError::InvalidUrl(message)
        } else if err.is_body() || err.is_decode() {
            HttpError::Body(message)
        } else {
            HttpError::Other(message)
        }
    }
}

/// Lower-cased names; values that are not visible ASCII are skipped.
fn lower_headers(map: &HeaderMap) -> Headers {
    let mut headers = Headers::with_capacity(map.len());
    for (name, value) in map {
        if let Ok(value) = value.to_str() {
            headers.insert(name.as_str().to_owned(), value.to_owned());
        }
    }
    headers
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let reply = request.send().await?;
        let status = reply.status().as_u16();
        let reply_headers = lower_headers(reply.headers());
        let body = reply.bytes().await?;

        Ok(Response::with_headers(status, reply_headers, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_client_builds() {
        assert!(ReqwestHttpClient::with_timeout(Duration::from_millis(250)).is_ok());
    }

    #[test]
    fn test_lower_headers_keeps_json_content_type() {
        let mut map = HeaderMap::new();
        map.insert("Content-Type", "application/json".parse().unwrap());
        map.insert("X-Request-Id", "abc123".parse().unwrap());

        let headers = lower_headers(&map);
        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(headers.get("x-request-id").map(String::as_str), Some("abc123"));
    }

    #[tokio::test]
    async fn test_malformed_base_url_is_invalid_url() {
        let client = ReqwestHttpClient::new();
        let err = client
            .get("localhost:8000 /api/researchers/", &Headers::new())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            HttpError::InvalidUrl(_) | HttpError::Other(_)
        ));
    }
}
