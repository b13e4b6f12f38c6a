use anyhow::Result;
use serde_json::json;

use nws_mcp::{
    lib::errors::WeatherDataError,
    server::config::WeatherSection,
    tools::weather::{
        active_alerts, forecast, FetchOutcome, WeatherClient, ALERTS_UNAVAILABLE_MESSAGE,
        FORECAST_UNAVAILABLE_MESSAGE, NO_ACTIVE_ALERTS_MESSAGE, POINT_LOOKUP_FAILED_MESSAGE,
    },
};

use crate::common::{spawn_stub_api, StubRoute};

fn client_for(base_url: &str) -> WeatherClient {
    WeatherClient::new(&WeatherSection {
        api_base: base_url.to_string(),
        user_agent: "nws-mcp-tests/0.2".to_string(),
        request_timeout_secs: 5,
        forecast_periods: 5,
    })
}

fn forecast_period(name: &str) -> serde_json::Value {
    json!({
        "name": name,
        "temperature": 62,
        "temperatureUnit": "F",
        "windSpeed": "8 mph",
        "windDirection": "SW",
        "detailedForecast": "Partly cloudy."
    })
}

#[tokio::test]
async fn alerts_render_formatted_blocks() -> Result<()> {
    let body = json!({
        "features": [
            { "properties": { "event": "Flood Warning", "areaDesc": "Sacramento County", "severity": "Severe" } },
            { "properties": { "event": "Heat Advisory" } }
        ]
    });
    let stub = spawn_stub_api(vec![StubRoute::ok(
        "/alerts/active/area/CA",
        body.to_string(),
    )])
    .await?;

    let text = active_alerts(&client_for(&stub.base_url), "CA").await;
    let blocks: Vec<&str> = text.split("\n---\n").collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].contains("Event: Flood Warning"));
    assert!(blocks[0].contains("Description: No description available"));
    assert!(blocks[1].contains("Event: Heat Advisory"));
    assert!(blocks[1].contains("Area: Unknown"));
    Ok(())
}

#[tokio::test]
async fn alerts_empty_features_yields_no_active_alerts() -> Result<()> {
    let stub = spawn_stub_api(vec![StubRoute::ok(
        "/alerts/active/area/ZZ",
        json!({ "features": [] }).to_string(),
    )])
    .await?;

    let text = active_alerts(&client_for(&stub.base_url), "ZZ").await;
    assert_eq!(text, NO_ACTIVE_ALERTS_MESSAGE);
    Ok(())
}

#[tokio::test]
async fn alerts_payload_without_features_is_unavailable() -> Result<()> {
    let stub = spawn_stub_api(vec![StubRoute::ok(
        "/alerts/active/area/CA",
        json!({ "title": "watches and warnings" }).to_string(),
    )])
    .await?;

    let text = active_alerts(&client_for(&stub.base_url), "CA").await;
    assert_eq!(text, ALERTS_UNAVAILABLE_MESSAGE);
    Ok(())
}

#[tokio::test]
async fn alerts_upstream_failure_is_unavailable() -> Result<()> {
    let stub = spawn_stub_api(vec![StubRoute::failing("/alerts/active/area/CA", 500)]).await?;

    let text = active_alerts(&client_for(&stub.base_url), "CA").await;
    assert_eq!(text, ALERTS_UNAVAILABLE_MESSAGE);
    Ok(())
}

#[tokio::test]
async fn forecast_point_lookup_failure_stops_the_pipeline() -> Result<()> {
    let stub = spawn_stub_api(vec![StubRoute::failing("/points/0,0", 503)]).await?;

    let text = forecast(&client_for(&stub.base_url), 0.0, 0.0, 5).await?;
    assert_eq!(text, POINT_LOOKUP_FAILED_MESSAGE);
    assert_eq!(stub.hits(), 1, "no second fetch may happen");
    Ok(())
}

#[tokio::test]
async fn forecast_missing_locator_degrades_without_second_fetch() -> Result<()> {
    let stub = spawn_stub_api(vec![StubRoute::ok(
        "/points/0,0",
        json!({ "properties": { "gridId": "TOP" } }).to_string(),
    )])
    .await?;

    let text = forecast(&client_for(&stub.base_url), 0.0, 0.0, 5).await?;
    assert_eq!(text, POINT_LOOKUP_FAILED_MESSAGE);
    assert_eq!(stub.hits(), 1);
    Ok(())
}

#[tokio::test]
async fn forecast_detail_fetch_failure_reports_detailed_sentinel() -> Result<()> {
    let forecast_path = "/gridpoints/TOP/31,80/forecast";
    let stub_detail = spawn_stub_api(vec![StubRoute::failing(forecast_path, 500)]).await?;
    let points_body = json!({
        "properties": { "forecast": format!("{}{}", stub_detail.base_url, forecast_path) }
    });
    let stub_points = spawn_stub_api(vec![StubRoute::ok(
        "/points/38.8977,-77.0365",
        points_body.to_string(),
    )])
    .await?;

    let text = forecast(&client_for(&stub_points.base_url), 38.8977, -77.0365, 5).await?;
    assert_eq!(text, FORECAST_UNAVAILABLE_MESSAGE);
    assert_eq!(stub_points.hits(), 1);
    assert_eq!(stub_detail.hits(), 1);
    Ok(())
}

#[tokio::test]
async fn forecast_happy_path_truncates_and_preserves_order() -> Result<()> {
    let periods: Vec<serde_json::Value> =
        (0..7).map(|i| forecast_period(&format!("Period {i}"))).collect();
    let forecast_path = "/gridpoints/TOP/31,80/forecast";

    let stub = spawn_stub_api(vec![StubRoute::ok(
        forecast_path,
        json!({ "properties": { "periods": periods } }).to_string(),
    )])
    .await?;
    let points_body = json!({
        "properties": { "forecast": format!("{}{}", stub.base_url, forecast_path) }
    });
    let stub_points = spawn_stub_api(vec![StubRoute::ok(
        "/points/38.8977,-77.0365",
        points_body.to_string(),
    )])
    .await?;

    let text = forecast(&client_for(&stub_points.base_url), 38.8977, -77.0365, 5).await?;
    let blocks: Vec<&str> = text.split("\n---\n").collect();
    assert_eq!(blocks.len(), 5);
    for (i, block) in blocks.iter().enumerate() {
        assert!(block.starts_with(&format!("Period {i}:")), "block: {block}");
        assert!(block.contains("Temperature: 62°F"));
        assert!(block.contains("Wind: 8 mph SW"));
    }
    Ok(())
}

#[tokio::test]
async fn forecast_missing_periods_is_a_hard_error() -> Result<()> {
    let forecast_path = "/gridpoints/TOP/31,80/forecast";
    let stub = spawn_stub_api(vec![StubRoute::ok(
        forecast_path,
        json!({ "properties": {} }).to_string(),
    )])
    .await?;
    let points_body = json!({
        "properties": { "forecast": format!("{}{}", stub.base_url, forecast_path) }
    });
    let stub_points = spawn_stub_api(vec![StubRoute::ok(
        "/points/0,0",
        points_body.to_string(),
    )])
    .await?;

    let error = forecast(&client_for(&stub_points.base_url), 0.0, 0.0, 5)
        .await
        .expect_err("missing periods must fail the call");
    assert!(matches!(
        error,
        WeatherDataError::MissingField {
            field: "properties.periods"
        }
    ));
    Ok(())
}

#[tokio::test]
async fn fetch_json_collapses_malformed_bodies() -> Result<()> {
    let stub = spawn_stub_api(vec![StubRoute::ok("/alerts/active/area/CA", "not json")]).await?;

    let client = client_for(&stub.base_url);
    let outcome = client.fetch_json(&client.alerts_url("CA")).await;
    assert!(matches!(outcome, FetchOutcome::NoData));
    Ok(())
}

#[tokio::test]
async fn fetch_json_collapses_connection_failures() -> Result<()> {
    // Bind then drop a listener so the port is very likely unoccupied.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);

    let client = client_for(&format!("http://{addr}"));
    let outcome = client.fetch_json(&client.alerts_url("CA")).await;
    assert!(matches!(outcome, FetchOutcome::NoData));
    Ok(())
}
