//! Dashboard configuration.
//!
//! Defaults reproduce the plain dashboard: local API, 30 second clock tick,
//! no automatic refetch, no request timeout. Environment variables and CLI
//! flags layer on top.
//!
//! # Example
//!
//! ```ignore
//! use minidash::config::DashboardConfig;
//!
//! let config = DashboardConfig::from_env()
//!     .with_api_base_url("http://reports.internal:8000")
//!     .with_refresh_interval(Some(std::time::Duration::from_secs(120)));
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::gateway::DEFAULT_BASE_URL;
use crate::metrics::AggregatePolicy;

pub const ENV_API_URL: &str = "MINIDASH_API_URL";
pub const ENV_EXPORT_DIR: &str = "MINIDASH_EXPORT_DIR";
pub const ENV_REFRESH_SECS: &str = "MINIDASH_REFRESH_SECS";
pub const ENV_TIMEOUT_SECS: &str = "MINIDASH_TIMEOUT_SECS";
pub const ENV_RECOUNT: &str = "MINIDASH_RECOUNT";
pub const ENV_LOG: &str = "MINIDASH_LOG";

/// Interval of the "last updated" clock.
pub const DEFAULT_CLOCK_INTERVAL: Duration = Duration::from_secs(30);

/// Runtime configuration for the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Base URL of the API serving `/api/researchers/` and `/api/dashboard-stats/`
    pub api_base_url: String,
    /// Directory that receives `researchers_data.csv`
    pub export_dir: PathBuf,
    /// How often the "last updated" timestamp advances
    pub clock_interval: Duration,
    /// Automatic data refresh; `None` refetches only on mount, navigation and Refresh
    pub refresh_interval: Option<Duration>,
    /// Per-request timeout; `None` waits indefinitely
    pub request_timeout: Option<Duration>,
    /// How server stats combine with the roster
    pub aggregate_policy: AggregatePolicy,
    /// Log file; `None` uses the cache directory
    pub log_file: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            export_dir: PathBuf::from("."),
            clock_interval: DEFAULT_CLOCK_INTERVAL,
            refresh_interval: None,
            request_timeout: None,
            aggregate_policy: AggregatePolicy::default(),
            log_file: None,
        }
    }
}

impl DashboardConfig {
    /// Create a new DashboardConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    pub fn with_clock_interval(mut self, interval: Duration) -> Self {
        self.clock_interval = interval;
        self
    }

    pub fn with_refresh_interval(mut self, interval: Option<Duration>) -> Self {
        self.refresh_interval = interval;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_aggregate_policy(mut self, policy: AggregatePolicy) -> Self {
        self.aggregate_policy = policy;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Defaults overridden by `MINIDASH_*` environment variables.
    ///
    /// Unparsable numeric values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`DashboardConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.is_empty()) {
            config.api_base_url = url;
        }
        if let Some(dir) = lookup(ENV_EXPORT_DIR).filter(|v| !v.is_empty()) {
            config.export_dir = PathBuf::from(dir);
        }
        if let Some(secs) = lookup(ENV_REFRESH_SECS).and_then(|v| parse_secs(&v)) {
            config.refresh_interval = Some(secs);
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS).and_then(|v| parse_secs(&v)) {
            config.request_timeout = Some(secs);
        }
        if lookup(ENV_RECOUNT).is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true")) {
            config.aggregate_policy = AggregatePolicy::AlwaysRecompute;
        }
        if let Some(path) = lookup(ENV_LOG).filter(|v| !v.is_empty()) {
            config.log_file = Some(PathBuf::from(path));
        }

        config
    }

    /// Log file path: the configured one, else `<cache>/minidash/minidash.log`.
    pub fn resolved_log_file(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::cache_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join("minidash")
                .join("minidash.log")
        })
    }
}

/// Positive whole seconds; zero and garbage yield `None`.
fn parse_secs(value: &str) -> Option<Duration> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|s| *s > 0)
        .map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_dashboard_config_default() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.clock_interval, Duration::from_secs(30));
        assert!(config.refresh_interval.is_none());
        assert!(config.request_timeout.is_none());
        assert_eq!(config.aggregate_policy, AggregatePolicy::PreferServer);
    }

    #[test]
    fn test_builder_chain() {
        let config = DashboardConfig::new()
            .with_api_base_url("http://x:1")
            .with_export_dir("/tmp/out")
            .with_refresh_interval(Some(Duration::from_secs(60)))
            .with_request_timeout(Some(Duration::from_secs(5)))
            .with_aggregate_policy(AggregatePolicy::AlwaysRecompute)
            .with_log_file("/tmp/dash.log");
        assert_eq!(config.api_base_url, "http://x:1");
        assert_eq!(config.export_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.refresh_interval, Some(Duration::from_secs(60)));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(5)));
        assert_eq!(config.resolved_log_file(), PathBuf::from("/tmp/dash.log"));
    }

    #[test]
    fn test_from_lookup_reads_all_keys() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, "http://api.test"),
            (ENV_EXPORT_DIR, "/exports"),
            (ENV_REFRESH_SECS, "90"),
            (ENV_TIMEOUT_SECS, "15"),
            (ENV_RECOUNT, "true"),
            (ENV_LOG, "/var/log/minidash.log"),
        ]));
        assert_eq!(config.api_base_url, "http://api.test");
        assert_eq!(config.export_dir, PathBuf::from("/exports"));
        assert_eq!(config.refresh_interval, Some(Duration::from_secs(90)));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.aggregate_policy, AggregatePolicy::AlwaysRecompute);
        assert_eq!(config.log_file, Some(PathBuf::from("/var/log/minidash.log")));
    }

    #[test]
    fn test_from_lookup_ignores_bad_values() {
        let config = DashboardConfig::from_lookup(lookup_from(&[
            (ENV_API_URL, ""),
            (ENV_REFRESH_SECS, "soon"),
            (ENV_TIMEOUT_SECS, "0"),
            (ENV_RECOUNT, "no"),
        ]));
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_default_log_file_name() {
        let path = DashboardConfig::default().resolved_log_file();
        assert!(path.ends_with("minidash/minidash.log"));
    }
}
