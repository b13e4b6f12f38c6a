//! Input shapes for the weather tools.
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Input for `greet`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GreetRequest {
    /// Name to greet; used verbatim, may be empty.
    pub name: String,
}

/// Input for `get_alerts`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetAlertsRequest {
    /// Two-letter US state/area code, e.g. `CA` or `NY`.
    pub state: String,
}

/// Input for `get_forecast`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetForecastRequest {
    /// Latitude of the location.
    pub latitude: f64,
    /// Longitude of the location.
    pub longitude: f64,
}
