//! MCP server implementation
//!
//! Exposes the eight wiki tools over rmcp. Each tool method only wraps its
//! typed parameters into a [`ToolCall`] and hands it to the [`Dispatcher`];
//! failures come back as `is_error` tool results, never as protocol errors.

use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};

use crate::config::WikiConfig;

use super::dispatch::{Dispatcher, ToolCall, ToolResponse};
use super::params::{
    CreatePageParams, DeletePageParams, GetPageParams, GetTreeParams, ListPagesParams,
    MovePageParams, SearchParams, UpdatePageParams,
};

impl From<ToolResponse> for CallToolResult {
    fn from(response: ToolResponse) -> Self {
        let content = vec![Content::text(response.text)];
        if response.is_error {
            CallToolResult::error(content)
        } else {
            CallToolResult::success(content)
        }
    }
}

/// Wiki.js MCP server
#[derive(Clone)]
pub struct McpServer {
    dispatcher: Dispatcher,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl McpServer {
    pub fn new(config: impl Into<Arc<WikiConfig>>) -> Self {
        Self {
            dispatcher: Dispatcher::new(config),
            tool_router: Self::tool_router(),
        }
    }

    /// Names of the registered tools.
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }

    async fn call(&self, call: ToolCall) -> Result<CallToolResult, McpError> {
        Ok(self.dispatcher.dispatch(call).await.into())
    }

    #[tool(
        description = "Search for pages in the Wiki.js instance. Falls back to matching titles, descriptions and paths when full-text search is unavailable. Default limit: 10."
    )]
    pub async fn wiki_search(
        &self,
        params: Parameters<SearchParams>,
    ) -> Result<CallToolResult, McpError> {
        self.call(ToolCall::Search(params.0)).await
    }

    #[tool(description = "Get a specific wiki page by path or ID. Provide exactly one of them.")]
    pub async fn wiki_get_page(
        &self,
        params: Parameters<GetPageParams>,
    ) -> Result<CallToolResult, McpError> {
        self.call(ToolCall::GetPage(params.0)).await
    }

    #[tool(description = "List wiki pages. Default limit: 50.")]
    pub async fn wiki_list_pages(
        &self,
        params: Parameters<ListPagesParams>,
    ) -> Result<CallToolResult, McpError> {
        self.call(ToolCall::ListPages(params.0)).await
    }

    #[tool(description = "Get the wiki page tree structure, optionally below a parent path.")]
    pub async fn wiki_get_tree(
        &self,
        params: Parameters<GetTreeParams>,
    ) -> Result<CallToolResult, McpError> {
        self.call(ToolCall::GetTree(params.0)).await
    }

    #[tool(description = "Create a new wiki page with markdown content.")]
    pub async fn wiki_create_page(
        &self,
        params: Parameters<CreatePageParams>,
    ) -> Result<CallToolResult, McpError> {
        self.call(ToolCall::CreatePage(params.0)).await
    }

    #[tool(
        description = "Update an existing wiki page. Unspecified fields keep their current values, except tags: omitting tags clears them."
    )]
    pub async fn wiki_update_page(
        &self,
        params: Parameters<UpdatePageParams>,
    ) -> Result<CallToolResult, McpError> {
        self.call(ToolCall::UpdatePage(params.0)).await
    }

    #[tool(description = "Delete a wiki page by ID.")]
    pub async fn wiki_delete_page(
        &self,
        params: Parameters<DeletePageParams>,
    ) -> Result<CallToolResult, McpError> {
        self.call(ToolCall::DeletePage(params.0)).await
    }

    #[tool(description = "Move a wiki page to a new path and/or locale.")]
    pub async fn wiki_move_page(
        &self,
        params: Parameters<MovePageParams>,
    ) -> Result<CallToolResult, McpError> {
        self.call(ToolCall::MovePage(params.0)).await
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build()).with_instructions(
            "Wiki.js MCP Server - Search, read, create, update, delete and move wiki pages",
        )
    }
}
