//! Outbound HTTP access to the National Weather Service API.
use std::time::Duration;

use reqwest::header;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{lib::telemetry::FetchSpan, server::config::WeatherSection};

/// MIME type the NWS API expects for machine consumers.
const GEO_JSON_ACCEPT: &str = "application/geo+json";

/// Result of one upstream fetch.
///
/// Callers branch on presence of data only; the reason a fetch produced no
/// data is logged but never distinguishable through this type.
#[derive(Debug)]
pub enum FetchOutcome {
    Payload(Value),
    NoData,
}

impl FetchOutcome {
    pub fn into_payload(self) -> Option<Value> {
        match self {
            FetchOutcome::Payload(value) => Some(value),
            FetchOutcome::NoData => None,
        }
    }
}

/// Issues GET requests against the configured NWS base URL.
///
/// Holds configuration values only. Each fetch builds a fresh
/// `reqwest::Client` so no connection or pool outlives a single call.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    api_base: String,
    user_agent: String,
    timeout: Duration,
}

impl WeatherClient {
    pub fn new(section: &WeatherSection) -> Self {
        Self {
            api_base: section.api_base.clone(),
            user_agent: section.user_agent.clone(),
            timeout: Duration::from_secs(section.request_timeout_secs),
        }
    }

    /// Active-alerts endpoint for a two-letter state/area code.
    ///
    /// The code is interpolated verbatim; the upstream answers unknown areas
    /// with an empty feature list rather than an error.
    pub fn alerts_url(&self, state: &str) -> String {
        format!("{}/alerts/active/area/{}", self.api_base, state)
    }

    /// Point-lookup endpoint mapping coordinates to a forecast resource.
    pub fn points_url(&self, latitude: f64, longitude: f64) -> String {
        format!("{}/points/{},{}", self.api_base, latitude, longitude)
    }

    /// Perform one GET and parse the body as JSON.
    ///
    /// Every failure mode collapses into `FetchOutcome::NoData`: client
    /// construction, connection errors, timeouts, non-2xx statuses, and
    /// malformed bodies alike.
    pub async fn fetch_json(&self, url: &str) -> FetchOutcome {
        let span = FetchSpan::start(url);

        let client = match reqwest::Client::builder().timeout(self.timeout).build() {
            Ok(client) => client,
            Err(err) => {
                warn!(
                    target: "nws_mcp::weather",
                    error = %err,
                    "Failed to construct HTTP client"
                );
                span.finish("no_data");
                return FetchOutcome::NoData;
            }
        };

        let response = client
            .get(url)
            .header(header::ACCEPT, GEO_JSON_ACCEPT)
            .header(header::USER_AGENT, self.user_agent.as_str())
            .send()
            .await;

        let response = match response {
            Ok(response) => response,
            Err(err) => {
                warn!(
                    target: "nws_mcp::weather",
                    url = url,
                    error = %err,
                    "Upstream request failed"
                );
                span.finish("no_data");
                return FetchOutcome::NoData;
            }
        };

        let status = response.status();
        if !status.is_success() {
            warn!(
                target: "nws_mcp::weather",
                url = url,
                status = %status,
                "Upstream returned a non-success status"
            );
            span.finish("no_data");
            return FetchOutcome::NoData;
        }

        match response.json::<Value>().await {
            Ok(payload) => {
                debug!(
                    target: "nws_mcp::weather",
                    url = url,
                    "Upstream payload parsed"
                );
                span.finish("payload");
                FetchOutcome::Payload(payload)
            }
            Err(err) => {
                warn!(
                    target: "nws_mcp::weather",
                    url = url,
                    error = %err,
                    "Upstream body was not valid JSON"
                );
                span.finish("no_data");
                FetchOutcome::NoData
            }
        }
    }
}
