//! Active-alert fetching and formatting.
use serde_json::Value;

use super::{WeatherClient, BLOCK_SEPARATOR};

/// Returned when the fetch fails or the payload has no `features` array.
/// Both causes intentionally share one sentence.
pub const ALERTS_UNAVAILABLE_MESSAGE: &str = "Unable to fetch alerts or no alerts found.";
/// Returned when the upstream answers with an empty `features` array.
pub const NO_ACTIVE_ALERTS_MESSAGE: &str = "No active alerts for this state.";

const UNKNOWN_PLACEHOLDER: &str = "Unknown";
const NO_DESCRIPTION_PLACEHOLDER: &str = "No description available";
const NO_INSTRUCTION_PLACEHOLDER: &str = "No specific instructions provided";

/// Fetch and format active alerts for a state/area code.
pub async fn active_alerts(client: &WeatherClient, state: &str) -> String {
    let url = client.alerts_url(state);
    let Some(payload) = client.fetch_json(&url).await.into_payload() else {
        return ALERTS_UNAVAILABLE_MESSAGE.to_string();
    };

    let Some(features) = payload.get("features").and_then(Value::as_array) else {
        return ALERTS_UNAVAILABLE_MESSAGE.to_string();
    };
    if features.is_empty() {
        return NO_ACTIVE_ALERTS_MESSAGE.to_string();
    }

    render_alerts(features)
}

/// Format a non-empty list of alert features into joined text blocks.
pub fn render_alerts(features: &[Value]) -> String {
    features
        .iter()
        .map(format_alert)
        .collect::<Vec<_>>()
        .join(BLOCK_SEPARATOR)
}

/// Format one alert feature, tolerating any missing display field.
fn format_alert(feature: &Value) -> String {
    let properties = feature.get("properties");
    let field = |key: &str, placeholder: &'static str| -> String {
        properties
            .and_then(|props| props.get(key))
            .and_then(Value::as_str)
            .unwrap_or(placeholder)
            .to_string()
    };

    format!(
        "Event: {event}\nArea: {area}\nSeverity: {severity}\nDescription: {description}\nInstructions: {instruction}",
        event = field("event", UNKNOWN_PLACEHOLDER),
        area = field("areaDesc", UNKNOWN_PLACEHOLDER),
        severity = field("severity", UNKNOWN_PLACEHOLDER),
        description = field("description", NO_DESCRIPTION_PLACEHOLDER),
        instruction = field("instruction", NO_INSTRUCTION_PLACEHOLDER),
    )
}
