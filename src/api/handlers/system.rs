//! System health and tool catalog handlers.

use axum::Json;
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

use crate::mcp::WikiTool;

/// Health check response
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    #[schema(example = "healthy")]
    pub status: String,
    /// Service name
    #[schema(example = "wikijs-mcp")]
    pub service: String,
}

/// One tool and the REST route that serves it
#[derive(Serialize, ToSchema)]
pub struct ToolEntry {
    /// MCP tool name
    #[schema(example = "wiki_search")]
    pub name: String,
    #[schema(example = "POST")]
    pub method: String,
    #[schema(example = "/search")]
    pub path: String,
    pub description: String,
}

/// Tool catalog response
#[derive(Serialize, ToSchema)]
pub struct ToolsResponse {
    pub tools: Vec<ToolEntry>,
}

fn route_for(tool: WikiTool) -> &'static str {
    match tool {
        WikiTool::Search => "/search",
        WikiTool::GetPage => "/page",
        WikiTool::ListPages => "/pages",
        WikiTool::GetTree => "/tree",
        WikiTool::CreatePage => "/page/create",
        WikiTool::UpdatePage => "/page/update",
        WikiTool::DeletePage => "/page/delete",
        WikiTool::MovePage => "/page/move",
    }
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses(
        (status = 200, description = "Health check successful", body = HealthResponse)
    )
)]
#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
    })
}

/// List the available tools
#[utoipa::path(
    get,
    path = "/tools",
    tag = "system",
    responses(
        (status = 200, description = "Tool catalog", body = ToolsResponse)
    )
)]
#[instrument]
pub async fn list_tools() -> Json<ToolsResponse> {
    let tools = WikiTool::ALL
        .into_iter()
        .map(|tool| ToolEntry {
            name: tool.name().to_string(),
            method: "POST".to_string(),
            path: route_for(tool).to_string(),
            description: tool.description().to_string(),
        })
        .collect();
    Json(ToolsResponse { tools })
}
