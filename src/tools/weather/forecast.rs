//! Two-step forecast lookup and formatting.
//!
//! The NWS API cannot serve a forecast directly from coordinates: a point
//! lookup first resolves the coordinate pair to a forecast URL, which is
//! then dereferenced with a second fetch.
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::lib::errors::WeatherDataError;

use super::{WeatherClient, BLOCK_SEPARATOR};

/// Returned when the point lookup fails or lacks a forecast URL.
pub const POINT_LOOKUP_FAILED_MESSAGE: &str = "Unable to fetch forecast data for this location.";
/// Returned when the forecast resource itself cannot be fetched.
pub const FORECAST_UNAVAILABLE_MESSAGE: &str = "Unable to fetch detailed forecast.";

/// One forecast time window as served under `properties.periods`.
///
/// Unlike the alerts path there is no placeholder substitution: a period
/// missing any of these fields fails deserialization and the tool call.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastPeriod {
    pub name: String,
    pub temperature: f64,
    #[serde(rename = "temperatureUnit")]
    pub temperature_unit: String,
    #[serde(rename = "windSpeed")]
    pub wind_speed: String,
    #[serde(rename = "windDirection")]
    pub wind_direction: String,
    #[serde(rename = "detailedForecast")]
    pub detailed_forecast: String,
}

impl ForecastPeriod {
    fn render(&self) -> String {
        format!(
            "{name}:\nTemperature: {temperature}°{unit}\nWind: {wind_speed} {wind_direction}\nForecast: {detailed}",
            name = self.name,
            temperature = self.temperature,
            unit = self.temperature_unit,
            wind_speed = self.wind_speed,
            wind_direction = self.wind_direction,
            detailed = self.detailed_forecast,
        )
    }
}

/// Fetch and format the forecast for a coordinate pair.
///
/// Degraded outcomes (unreachable upstream, missing forecast URL) come back
/// as `Ok` with a fixed sentence; only a reachable forecast document with a
/// broken shape is a hard `Err`.
pub async fn forecast(
    client: &WeatherClient,
    latitude: f64,
    longitude: f64,
    max_periods: usize,
) -> Result<String, WeatherDataError> {
    let points_url = client.points_url(latitude, longitude);
    let Some(points) = client.fetch_json(&points_url).await.into_payload() else {
        return Ok(POINT_LOOKUP_FAILED_MESSAGE.to_string());
    };

    let Some(forecast_url) = points
        .pointer("/properties/forecast")
        .and_then(Value::as_str)
    else {
        warn!(
            target: "nws_mcp::weather",
            url = %points_url,
            "Point lookup succeeded but carried no forecast URL"
        );
        return Ok(POINT_LOOKUP_FAILED_MESSAGE.to_string());
    };

    let Some(payload) = client.fetch_json(forecast_url).await.into_payload() else {
        return Ok(FORECAST_UNAVAILABLE_MESSAGE.to_string());
    };

    let periods = payload
        .pointer("/properties/periods")
        .and_then(Value::as_array)
        .ok_or(WeatherDataError::MissingField {
            field: "properties.periods",
        })?;

    render_periods(periods, max_periods)
}

/// Format the leading `max_periods` entries, preserving upstream order.
pub fn render_periods(periods: &[Value], max_periods: usize) -> Result<String, WeatherDataError> {
    let blocks = periods
        .iter()
        .take(max_periods)
        .map(|entry| {
            serde_json::from_value::<ForecastPeriod>(entry.clone())
                .map(|period| period.render())
                .map_err(|source| WeatherDataError::MalformedPeriod { source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(blocks.join(BLOCK_SEPARATOR))
}
