use tracing::{debug, info};

use super::{ServerConfig, CONFIG_ENV_KEY, DEFAULT_CONFIG_PATH};

pub fn log_env_source(path: &std::path::Path, from_env: bool) {
    if from_env {
        info!(
            target: "nws_mcp::config",
            path = %path.display(),
            "Loading configuration using MCP_CONFIG_PATH environment variable"
        );
    } else {
        debug!(
            target: "nws_mcp::config",
            path = %path.display(),
            env = CONFIG_ENV_KEY,
            default = DEFAULT_CONFIG_PATH,
            "MCP_CONFIG_PATH not set; using default config.toml"
        );
    }
}

pub fn log_loaded(config: &ServerConfig) {
    info!(
        target: "nws_mcp::config",
        path = %config.source_path.display(),
        host = %config.server.host,
        port = config.server.port,
        api_base = %config.weather.api_base,
        request_timeout_secs = config.weather.request_timeout_secs,
        forecast_periods = config.weather.forecast_periods,
        "Configuration file loaded successfully"
    );
}
