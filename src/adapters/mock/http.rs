//! In-memory [`HttpClient`] for gateway and app tests.
//!
//! Responses are configured per URL. Each request is recorded so tests can
//! assert how many fetches a transition triggered.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// One GET seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub url: String,
    pub headers: Headers,
}

/// What the mock answers with for a URL.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Any status, including 4xx/5xx
    Success(Response),
    Error(HttpError),
}

/// A URL can carry a queue of one-shot responses (consumed in order) and a
/// sticky response used once the queue is empty.
///
/// ```ignore
/// let client = MockHttpClient::new();
/// client.set_response(
///     "http://test/api/researchers/",
///     MockResponse::Success(Response::json_ok(&json!({"success": true, "researchers": []}))),
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    queued: Arc<Mutex<HashMap<String, VecDeque<MockResponse>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sticky response for a URL (exact match).
    pub fn set_response(&self, url: &str, response: MockResponse) {
        lock(&self.responses).insert(url.to_string(), response);
    }

    /// Queue a one-shot response for a URL, served before the sticky one.
    pub fn push_response(&self, url: &str, response: MockResponse) {
        lock(&self.queued)
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }

    /// Every request so far, oldest first.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        lock(&self.requests).clone()
    }

    /// Number of requests made to `url`.
    pub fn request_count(&self, url: &str) -> usize {
        lock(&self.requests).iter().filter(|r| r.url == url).count()
    }

    /// Forget recorded requests; configured responses stay.
    pub fn clear_requests(&self) {
        lock(&self.requests).clear();
    }

    fn next_response(&self, url: &str) -> Option<MockResponse> {
        if let Some(response) = lock(&self.queued).get_mut(url).and_then(|q| q.pop_front()) {
            return Some(response);
        }
        lock(&self.responses).get(url).cloned()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        lock(&self.requests).push(RecordedRequest {
            url: url.to_string(),
            headers: headers.clone(),
        });

        match self.next_response(url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::ConnectionFailed(format!(
                "No mock response for URL: {}",
                url
            ))),
        }
    }
}
