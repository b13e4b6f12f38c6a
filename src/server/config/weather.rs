use std::path::Path;

use serde::Deserialize;

use crate::lib::errors::ConfigError;

pub const DEFAULT_API_BASE: &str = "https://api.weather.gov";
pub const DEFAULT_USER_AGENT: &str = "nws-mcp/0.2 (weather-tools)";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_FORECAST_PERIODS: usize = 5;

/// Upstream National Weather Service settings.
#[derive(Debug, Clone)]
pub struct WeatherSection {
    pub api_base: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
    pub forecast_periods: usize,
}

impl Default for WeatherSection {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            forecast_periods: DEFAULT_FORECAST_PERIODS,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct RawWeatherSection {
    pub api_base: Option<String>,
    pub user_agent: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub forecast_periods: Option<usize>,
}

pub fn parse_weather_section(
    raw: Option<RawWeatherSection>,
    path: &Path,
) -> Result<WeatherSection, ConfigError> {
    let weather_raw = raw.unwrap_or_default();

    let api_base = match weather_raw.api_base {
        Some(value) => validate_api_base(value, path)?,
        None => DEFAULT_API_BASE.to_string(),
    };

    let user_agent = weather_raw
        .user_agent
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
    if user_agent.trim().is_empty() {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "weather.user_agent",
            message: "The NWS API rejects requests without an identifying User-Agent".into(),
        });
    }

    let request_timeout_secs = weather_raw
        .request_timeout_secs
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
    if request_timeout_secs == 0 {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "weather.request_timeout_secs",
            message: "Use a timeout of at least 1 second".into(),
        });
    }

    let forecast_periods = weather_raw
        .forecast_periods
        .unwrap_or(DEFAULT_FORECAST_PERIODS);
    if forecast_periods == 0 {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "weather.forecast_periods",
            message: "Use at least 1 forecast period".into(),
        });
    }

    Ok(WeatherSection {
        api_base,
        user_agent,
        request_timeout_secs,
        forecast_periods,
    })
}

fn validate_api_base(value: String, path: &Path) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
        return Err(ConfigError::InvalidField {
            path: path.to_path_buf(),
            field: "weather.api_base",
            message: "Use an http:// or https:// base URL".into(),
        });
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}
