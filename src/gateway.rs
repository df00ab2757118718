//! Remote data gateway for the dashboard API.
//!
//! Two idempotent, read-only calls: the researcher roster and the aggregate
//! stats snapshot. The gateway only maps HTTP outcomes to typed results;
//! deciding what a failure does to the displayed data is the store's job.

use thiserror::Error;

use crate::adapters::ReqwestHttpClient;
use crate::models::{DashboardStats, Researcher, ResearchersResponse, StatsResponse};
use crate::traits::{Headers, HttpClient, HttpError, Response};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const RESEARCHERS_PATH: &str = "/api/researchers/";
pub const DASHBOARD_STATS_PATH: &str = "/api/dashboard-stats/";

/// Error type for gateway operations.
///
/// [`GatewayError::Transport`], [`GatewayError::Status`] and
/// [`GatewayError::Parse`] are transport/parse failures;
/// [`GatewayError::Rejected`] is a well-formed payload with `success: false`.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Request never produced a response
    #[error("transport error: {0}")]
    Transport(#[from] HttpError),

    /// Server answered with a non-2xx status
    #[error("server returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not the expected JSON shape
    #[error("malformed payload: {0}")]
    Parse(#[from] serde_json::Error),

    /// Payload said `success: false`
    #[error("{endpoint} returned success: false")]
    Rejected { endpoint: &'static str },
}

impl GatewayError {
    /// Network, status or decoding failure.
    pub fn is_transport(&self) -> bool {
        !self.is_logical()
    }

    /// The server answered properly but reported failure.
    pub fn is_logical(&self) -> bool {
        matches!(self, GatewayError::Rejected { .. })
    }
}

/// Client for the dashboard API.
#[derive(Debug, Clone)]
pub struct DashboardGateway<C = ReqwestHttpClient> {
    base_url: String,
    client: C,
}

impl DashboardGateway<ReqwestHttpClient> {
    /// Gateway against `base_url` using a default reqwest client.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::new(base_url, ReqwestHttpClient::new())
    }
}

impl<C: HttpClient> DashboardGateway<C> {
    /// Create a gateway with an injected HTTP client.
    pub fn new(base_url: impl Into<String>, client: C) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn researchers_url(&self) -> String {
        format!("{}{}", self.base_url, RESEARCHERS_PATH)
    }

    pub fn stats_url(&self) -> String {
        format!("{}{}", self.base_url, DASHBOARD_STATS_PATH)
    }

    /// Fetch the full researcher roster.
    pub async fn fetch_researchers(&self) -> Result<Vec<Researcher>, GatewayError> {
        let response = self.get(&self.researchers_url()).await?;
        let payload: ResearchersResponse = response.json()?;
        if !payload.success {
            return Err(GatewayError::Rejected {
                endpoint: RESEARCHERS_PATH,
            });
        }
        tracing::debug!(count = payload.researchers.len(), "researchers fetched");
        Ok(payload.researchers)
    }

    /// Fetch the aggregate stats snapshot.
    pub async fn fetch_dashboard_stats(&self) -> Result<DashboardStats, GatewayError> {
        let response = self.get(&self.stats_url()).await?;
        let payload: StatsResponse = response.json()?;
        if !payload.success {
            return Err(GatewayError::Rejected {
                endpoint: DASHBOARD_STATS_PATH,
            });
        }
        payload.stats.ok_or_else(|| {
            GatewayError::Parse(serde::de::Error::missing_field("stats"))
        })
    }

    async fn get(&self, url: &str) -> Result<Response, GatewayError> {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let response = self.client.get(url, &headers).await?;
        if !response.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "<non-utf8 body>".to_string());
            return Err(GatewayError::Status {
                status: response.status,
                body,
            });
        }
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockHttpClient, MockResponse};
    use bytes::Bytes;
    use serde_json::json;

    const BASE: &str = "http://dash.test";

    fn gateway() -> (DashboardGateway<MockHttpClient>, MockHttpClient) {
        let mock = MockHttpClient::new();
        (DashboardGateway::new(format!("{}/", BASE), mock.clone()), mock)
    }

    #[test]
    fn test_urls_strip_trailing_slash() {
        let (gw, _) = gateway();
        assert_eq!(gw.base_url(), BASE);
        assert_eq!(gw.researchers_url(), "http://dash.test/api/researchers/");
        assert_eq!(gw.stats_url(), "http://dash.test/api/dashboard-stats/");
    }

    #[tokio::test]
    async fn test_fetch_researchers_success() {
        let (gw, mock) = gateway();
        mock.set_response(
            &gw.researchers_url(),
            MockResponse::Success(Response::json_ok(&json!({
                "success": true,
                "researchers": [
                    {"id": "1", "name": "A", "mode": "CP", "status": "pending", "surveyProgress": 10}
                ],
                "total": 1
            }))),
        );

        let roster = gw.fetch_researchers().await.unwrap();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].name, "A");

        let requests = mock.get_requests();
        assert_eq!(
            requests[0].headers.get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[tokio::test]
    async fn test_fetch_researchers_rejected() {
        let (gw, mock) = gateway();
        mock.set_response(
            &gw.researchers_url(),
            MockResponse::Success(Response::json_ok(&json!({"success": false}))),
        );

        let err = gw.fetch_researchers().await.unwrap_err();
        assert!(err.is_logical());
        assert!(!err.is_transport());
    }

    #[tokio::test]
    async fn test_fetch_researchers_non_json_body() {
        let (gw, mock) = gateway();
        mock.set_response(
            &gw.researchers_url(),
            MockResponse::Success(Response::new(200, Bytes::from("<html></html>"))),
        );

        let err = gw.fetch_researchers().await.unwrap_err();
        assert!(matches!(err, GatewayError::Parse(_)));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_fetch_stats_http_status() {
        let (gw, mock) = gateway();
        mock.set_response(
            &gw.stats_url(),
            MockResponse::Success(Response::new(502, Bytes::from("bad gateway"))),
        );

        match gw.fetch_dashboard_stats().await {
            Err(GatewayError::Status { status, body }) => {
                assert_eq!(status, 502);
                assert_eq!(body, "bad gateway");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_stats_missing_object_is_parse_error() {
        let (gw, mock) = gateway();
        mock.set_response(
            &gw.stats_url(),
            MockResponse::Success(Response::json_ok(&json!({"success": true}))),
        );

        let err = gw.fetch_dashboard_stats().await.unwrap_err();
        assert!(matches!(err, GatewayError::Parse(_)));
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let (gw, mock) = gateway();
        mock.set_response(
            &gw.stats_url(),
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );

        let err = gw.fetch_dashboard_stats().await.unwrap_err();
        assert!(matches!(err, GatewayError::Transport(HttpError::ConnectionFailed(_))));
    }
}
