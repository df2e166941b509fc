//! API route configuration.

use axum::Router;
use axum::routing::{get, post};
use tokio_util::sync::CancellationToken;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, DeleteResponse, ErrorResponse, HealthResponse, MoveResponse, MutationResponse,
    PageListResponse, PageResponse, SearchResponse, ToolEntry, ToolsResponse, TreeResponse,
};
use super::state::AppState;
use crate::mcp::create_mcp_service;
use crate::mcp::params::{
    CreatePageParams, DeletePageParams, GetPageParams, GetTreeParams, ListPagesParams,
    MovePageParams, SearchParams, UpdatePageParams,
};
use crate::wiki::{
    MovedPage, Page, PageMutation, PageRef, PageSummary, PageTag, ResponseResult, SearchResult,
    SearchStrategy, TreeItem, TreeMode,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wiki.js MCP API",
        description = "REST bridge to the Wiki.js page tools",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::health,
        handlers::list_tools,
        handlers::search,
        handlers::get_page,
        handlers::list_pages,
        handlers::get_tree,
        handlers::create_page,
        handlers::update_page,
        handlers::delete_page,
        handlers::move_page,
    ),
    components(
        schemas(
            HealthResponse,
            ToolEntry,
            ToolsResponse,
            SearchParams,
            GetPageParams,
            ListPagesParams,
            GetTreeParams,
            CreatePageParams,
            UpdatePageParams,
            DeletePageParams,
            MovePageParams,
            SearchResponse,
            PageResponse,
            PageListResponse,
            TreeResponse,
            MutationResponse,
            DeleteResponse,
            MoveResponse,
            SearchResult,
            SearchStrategy,
            Page,
            PageTag,
            PageSummary,
            TreeItem,
            TreeMode,
            PageMutation,
            PageRef,
            ResponseResult,
            MovedPage,
            ErrorResponse,
        )
    ),
    tags(
        (name = "system", description = "Health and tool catalog endpoints"),
        (name = "pages", description = "Wiki page operations")
    )
)]
pub struct ApiDoc;

/// Create the API router: REST routes, `/docs` and the MCP service at `/mcp`
pub fn create_router(state: AppState, cancellation_token: CancellationToken) -> Router {
    let api = ApiDoc::openapi();
    let mcp_service = create_mcp_service(state.config_arc(), cancellation_token);

    let system_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/tools", get(handlers::list_tools));

    let page_routes = Router::new()
        .route("/search", post(handlers::search))
        .route("/page", post(handlers::get_page))
        .route("/pages", post(handlers::list_pages))
        .route("/tree", post(handlers::get_tree))
        .route("/page/create", post(handlers::create_page))
        .route("/page/update", post(handlers::update_page))
        .route("/page/delete", post(handlers::delete_page))
        .route("/page/move", post(handlers::move_page));

    system_routes
        .merge(page_routes)
        .merge(Scalar::with_url("/docs", api))
        .with_state(state)
        .nest_service("/mcp", mcp_service)
}
