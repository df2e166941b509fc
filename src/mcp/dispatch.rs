//! Tool dispatch.
//!
//! Every transport (MCP, REST, CLI) funnels tool invocations through
//! [`Dispatcher`]. Arguments are validated before any network activity; a
//! fresh [`WikiClient`] is opened for the invocation and dropped with it; every
//! error is rendered into the same text envelope.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::WikiConfig;
use crate::mcp::format;
use crate::mcp::params::{
    CreatePageParams, DeletePageParams, GetPageParams, GetTreeParams, ListPagesParams,
    MovePageParams, SearchParams, UpdatePageParams,
};
use crate::wiki::{WikiClient, WikiError, WikiResult};

/// The closed set of tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WikiTool {
    Search,
    GetPage,
    ListPages,
    GetTree,
    CreatePage,
    UpdatePage,
    DeletePage,
    MovePage,
}

impl WikiTool {
    pub const ALL: [WikiTool; 8] = [
        WikiTool::Search,
        WikiTool::GetPage,
        WikiTool::ListPages,
        WikiTool::GetTree,
        WikiTool::CreatePage,
        WikiTool::UpdatePage,
        WikiTool::DeletePage,
        WikiTool::MovePage,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WikiTool::Search => "wiki_search",
            WikiTool::GetPage => "wiki_get_page",
            WikiTool::ListPages => "wiki_list_pages",
            WikiTool::GetTree => "wiki_get_tree",
            WikiTool::CreatePage => "wiki_create_page",
            WikiTool::UpdatePage => "wiki_update_page",
            WikiTool::DeletePage => "wiki_delete_page",
            WikiTool::MovePage => "wiki_move_page",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            WikiTool::Search => "Search for pages in the Wiki.js instance",
            WikiTool::GetPage => "Get a specific wiki page by path or ID",
            WikiTool::ListPages => "List wiki pages",
            WikiTool::GetTree => "Get the wiki page tree structure",
            WikiTool::CreatePage => "Create a new wiki page",
            WikiTool::UpdatePage => "Update an existing wiki page",
            WikiTool::DeletePage => "Delete a wiki page",
            WikiTool::MovePage => "Move a wiki page to a new path and/or locale",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }
}

/// A tool invocation with typed arguments.
#[derive(Debug, Clone)]
pub enum ToolCall {
    Search(SearchParams),
    GetPage(GetPageParams),
    ListPages(ListPagesParams),
    GetTree(GetTreeParams),
    CreatePage(CreatePageParams),
    UpdatePage(UpdatePageParams),
    DeletePage(DeletePageParams),
    MovePage(MovePageParams),
}

fn parse_args<T: DeserializeOwned>(tool: WikiTool, arguments: Value) -> WikiResult<T> {
    // Tools with only optional arguments may be called with no argument bag.
    let arguments = match arguments {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(arguments)
        .map_err(|e| WikiError::validation(format!("Invalid arguments for {}: {e}", tool.name())))
}

impl ToolCall {
    /// Decode a JSON argument bag for `tool`.
    pub fn parse(tool: WikiTool, arguments: Value) -> WikiResult<Self> {
        Ok(match tool {
            WikiTool::Search => ToolCall::Search(parse_args(tool, arguments)?),
            WikiTool::GetPage => ToolCall::GetPage(parse_args(tool, arguments)?),
            WikiTool::ListPages => ToolCall::ListPages(parse_args(tool, arguments)?),
            WikiTool::GetTree => ToolCall::GetTree(parse_args(tool, arguments)?),
            WikiTool::CreatePage => ToolCall::CreatePage(parse_args(tool, arguments)?),
            WikiTool::UpdatePage => ToolCall::UpdatePage(parse_args(tool, arguments)?),
            WikiTool::DeletePage => ToolCall::DeletePage(parse_args(tool, arguments)?),
            WikiTool::MovePage => ToolCall::MovePage(parse_args(tool, arguments)?),
        })
    }

    pub fn tool(&self) -> WikiTool {
        match self {
            ToolCall::Search(_) => WikiTool::Search,
            ToolCall::GetPage(_) => WikiTool::GetPage,
            ToolCall::ListPages(_) => WikiTool::ListPages,
            ToolCall::GetTree(_) => WikiTool::GetTree,
            ToolCall::CreatePage(_) => WikiTool::CreatePage,
            ToolCall::UpdatePage(_) => WikiTool::UpdatePage,
            ToolCall::DeletePage(_) => WikiTool::DeletePage,
            ToolCall::MovePage(_) => WikiTool::MovePage,
        }
    }

    /// Argument checks that need no network access.
    pub fn validate(&self) -> WikiResult<()> {
        match self {
            ToolCall::GetPage(params) => params.lookup().map(|_| ()),
            ToolCall::MovePage(params) => params.validate(),
            _ => Ok(()),
        }
    }
}

/// Uniform tool result: text plus an error flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolResponse {
    pub text: String,
    pub is_error: bool,
}

impl ToolResponse {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn failure(error: &WikiError) -> Self {
        Self {
            text: format!("Error: {error}"),
            is_error: true,
        }
    }

    pub fn unknown_tool(name: &str) -> Self {
        Self {
            text: format!("Unknown tool: {name}"),
            is_error: true,
        }
    }
}

/// Routes tool calls to page operations.
#[derive(Clone)]
pub struct Dispatcher {
    config: Arc<WikiConfig>,
}

impl Dispatcher {
    pub fn new(config: impl Into<Arc<WikiConfig>>) -> Self {
        Self {
            config: config.into(),
        }
    }

    /// Dispatch by tool name with a raw JSON argument bag.
    ///
    /// Unknown names produce an "Unknown tool" response rather than an error.
    pub async fn dispatch_named(&self, name: &str, arguments: Value) -> ToolResponse {
        let Some(tool) = WikiTool::from_name(name) else {
            warn!(tool = name, "unknown tool requested");
            return ToolResponse::unknown_tool(name);
        };
        match ToolCall::parse(tool, arguments) {
            Ok(call) => self.dispatch(call).await,
            Err(e) => ToolResponse::failure(&e),
        }
    }

    /// Run a typed tool call and wrap the outcome.
    pub async fn dispatch(&self, call: ToolCall) -> ToolResponse {
        let tool = call.tool();
        debug!(tool = tool.name(), "dispatching tool call");
        match self.run(call).await {
            Ok(text) => ToolResponse::success(text),
            Err(e) => {
                warn!(tool = tool.name(), error = %e, "tool call failed");
                ToolResponse::failure(&e)
            }
        }
    }

    async fn run(&self, call: ToolCall) -> WikiResult<String> {
        call.validate()?;
        let client = WikiClient::new(&self.config)?;

        match call {
            ToolCall::Search(params) => search(&client, params).await,
            ToolCall::GetPage(params) => get_page(&client, params).await,
            ToolCall::ListPages(params) => list_pages(&client, params).await,
            ToolCall::GetTree(params) => get_tree(&client, params).await,
            ToolCall::CreatePage(params) => create_page(&client, params).await,
            ToolCall::UpdatePage(params) => update_page(&client, params).await,
            ToolCall::DeletePage(params) => delete_page(&client, params).await,
            ToolCall::MovePage(params) => move_page(&client, params).await,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

async fn search(client: &WikiClient, params: SearchParams) -> WikiResult<String> {
    let outcome = client
        .search_pages(&params.query, params.effective_limit(), client.default_locale())
        .await?;
    Ok(format::search_results(&params.query, outcome.results()))
}

async fn get_page(client: &WikiClient, params: GetPageParams) -> WikiResult<String> {
    let page = params.lookup()?.fetch(client).await?;
    Ok(page
        .as_ref()
        .map(format::page_detail)
        .unwrap_or_else(|| format::PAGE_NOT_FOUND.to_string()))
}

async fn list_pages(client: &WikiClient, params: ListPagesParams) -> WikiResult<String> {
    let limit = params.effective_limit();
    let pages = client.list_pages(limit).await?;
    Ok(format::page_list(&pages, limit))
}

async fn get_tree(client: &WikiClient, params: GetTreeParams) -> WikiResult<String> {
    let request = params.into_request(client.default_locale());
    let items = client.get_page_tree(&request).await?;
    Ok(format::page_tree(&request.path, &items))
}

async fn create_page(client: &WikiClient, params: CreatePageParams) -> WikiResult<String> {
    let vars = params.into_vars(client.default_locale());
    let created = client.create_page(&vars).await?;
    Ok(format::page_created(&created))
}

async fn update_page(client: &WikiClient, params: UpdatePageParams) -> WikiResult<String> {
    let (id, changes) = params.changes();
    let updated = client.update_page(id, changes).await?;
    Ok(format::page_updated(&updated))
}

async fn delete_page(client: &WikiClient, params: DeletePageParams) -> WikiResult<String> {
    let result = client.delete_page(params.id).await?;
    Ok(format::page_deleted(params.id, &result))
}

async fn move_page(client: &WikiClient, params: MovePageParams) -> WikiResult<String> {
    let locale = params.destination_locale_or(client.default_locale());
    let moved = client
        .move_page(params.id, &params.destination_path, locale)
        .await?;
    Ok(format::page_moved(&moved))
}
