//! Weather tools backed by the National Weather Service API.
//!
//! `get_alerts` and `get_forecast` mediate between the MCP host and the NWS
//! feed; `greet` is a self-contained demonstration tool with no upstream.

pub mod alerts;
pub mod client;
pub mod forecast;
pub mod greeting;
pub mod request;

use rmcp::model::ErrorData;
use serde_json::json;

use crate::lib::errors::{ToolErrorDescriptor, WeatherDataError};

pub use alerts::{active_alerts, ALERTS_UNAVAILABLE_MESSAGE, NO_ACTIVE_ALERTS_MESSAGE};
pub use client::{FetchOutcome, WeatherClient};
pub use forecast::{
    forecast, ForecastPeriod, FORECAST_UNAVAILABLE_MESSAGE, POINT_LOOKUP_FAILED_MESSAGE,
};
pub use greeting::{greet, render_greeting};
pub use request::{GetAlertsRequest, GetForecastRequest, GreetRequest};

/// Separator between formatted alert/forecast blocks.
pub const BLOCK_SEPARATOR: &str = "\n---\n";

const FORECAST_PAYLOAD_INVALID_ERROR: ToolErrorDescriptor = ToolErrorDescriptor::new(
    "FORECAST_PAYLOAD_INVALID",
    "Upstream forecast payload did not match the expected shape",
    "Retry later; the NWS feed occasionally serves partial documents.",
);

/// Map a hard forecast-path failure onto MCP `ErrorData`.
pub fn weather_error_to_error_data(err: WeatherDataError) -> ErrorData {
    let built = FORECAST_PAYLOAD_INVALID_ERROR
        .builder()
        .retryable(true)
        .details(json!({ "reason": err.to_string() }))
        .build();
    match built {
        Ok(data) => data,
        Err(builder_err) => ErrorData::internal_error(builder_err.to_string(), None),
    }
}
