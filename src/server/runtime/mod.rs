//! MCP server startup, tool registration, and resource serving.
mod resources;
mod server_info;
mod startup;
mod tool_registry;

pub use resources::{STATUS_RESOURCE_NAME, STATUS_RESOURCE_URI, STATUS_TEXT};
pub use server_info::build_instructions;
pub use startup::{run_server, RuntimeExit};
pub use tool_registry::WeatherServer;
