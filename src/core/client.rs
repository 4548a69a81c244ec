use std::time::Duration;

use crate::core::metrics::{records_from_value, HistoryPayload, HostRecord};
use crate::error::Result;

const LATEST_PATH: &str = "/latest_sysdata";
const HISTORY_PATH: &str = "/api/history";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of a snapshot fetch.
///
/// Failures are display-only: the caller surfaces a status message and the
/// next poll tick retries naturally. Nothing here propagates as an error.
#[derive(Debug)]
pub enum FetchOutcome {
    /// Successful response. `None` when the body was valid JSON but not a
    /// record list, which renders the same as zero records.
    Records(Option<Vec<HostRecord>>),
    /// The server answered with a non-success status code.
    ResponseFailure(reqwest::StatusCode),
    /// Network-level failure: connect error, timeout, or unreadable body.
    TransportFailure(String),
}

/// Blocking HTTP client for the metrics endpoint.
pub struct MetricsClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl MetricsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the latest per-host snapshot list.
    pub fn fetch_latest(&self) -> FetchOutcome {
        let url = format!("{}{}", self.base_url, LATEST_PATH);

        let response = match self.http.get(&url).send() {
            Ok(response) => response,
            Err(err) => {
                log::error!("Snapshot fetch failed: {}", err);
                return FetchOutcome::TransportFailure(err.to_string());
            }
        };

        let status = response.status();
        if !status.is_success() {
            log::warn!("Snapshot fetch returned {}", status);
            return FetchOutcome::ResponseFailure(status);
        }

        match response.json::<serde_json::Value>() {
            Ok(value) => FetchOutcome::Records(records_from_value(value)),
            Err(err) => {
                log::error!("Snapshot body unreadable: {}", err);
                FetchOutcome::TransportFailure(err.to_string())
            }
        }
    }

    /// Fetch the historical series payload. Best-effort: on any failure the
    /// charts simply keep their last data.
    pub fn fetch_history(&self) -> Option<HistoryPayload> {
        let url = format!("{}{}", self.base_url, HISTORY_PATH);

        let response = match self.http.get(&url).send() {
            Ok(response) => response,
            Err(err) => {
                log::debug!("History fetch failed: {}", err);
                return None;
            }
        };

        if !response.status().is_success() {
            log::debug!("History fetch returned {}", response.status());
            return None;
        }

        response.json().ok()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = MetricsClient::new("http://mon.local:5000/").unwrap();
        assert_eq!(client.base_url(), "http://mon.local:5000");
    }

    #[test]
    fn test_transport_failure_on_unreachable_host() {
        // Reserved TEST-NET-1 address, nothing listens there
        let client = MetricsClient::new("http://192.0.2.1:1").unwrap();

        match client.fetch_latest() {
            FetchOutcome::TransportFailure(_) => {}
            other => panic!("expected transport failure, got {:?}", other),
        }
    }
}
