//! Read-only MCP resources served next to the weather tools.
use rmcp::model::{
    AnnotateAble, ErrorData, ListResourcesResult, RawResource, ReadResourceResult,
    ResourceContents,
};
use serde_json::json;

pub const STATUS_RESOURCE_URI: &str = "resource://status";
pub const STATUS_RESOURCE_NAME: &str = "status";
/// Fixed liveness text; reading the resource has no side effects.
pub const STATUS_TEXT: &str = "nws-mcp is running and ready to serve weather tools.";

/// List the resources this server exposes.
pub fn list_resources() -> ListResourcesResult {
    let mut status = RawResource::new(STATUS_RESOURCE_URI, STATUS_RESOURCE_NAME);
    status.description = Some("Fixed liveness indicator for this server.".to_string());
    status.mime_type = Some("text/plain".to_string());

    ListResourcesResult {
        resources: vec![status.no_annotation()],
        next_cursor: None,
    }
}

/// Read one resource by URI.
pub fn read_resource(uri: &str) -> Result<ReadResourceResult, ErrorData> {
    if uri != STATUS_RESOURCE_URI {
        return Err(ErrorData::resource_not_found(
            "resource_not_found",
            Some(json!({ "uri": uri })),
        ));
    }

    Ok(ReadResourceResult {
        contents: vec![ResourceContents::text(STATUS_TEXT, STATUS_RESOURCE_URI)],
    })
}
