//! Page handlers.
//!
//! Every route is a POST taking the same argument shape as the matching MCP
//! tool. Responses carry typed data plus a human-readable `message`.

use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;
use tracing::{error, instrument, warn};
use utoipa::ToSchema;

use crate::api::AppState;
use crate::mcp::format::PAGE_NOT_FOUND;
use crate::mcp::params::{
    CreatePageParams, DeletePageParams, GetPageParams, GetTreeParams, ListPagesParams,
    MovePageParams, SearchParams, UpdatePageParams,
};
use crate::wiki::{
    MovedPage, Page, PageMutation, PageSummary, ResponseResult, SearchResult, SearchStrategy,
    TreeItem, WikiError,
};

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Error response DTO
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Page not found")]
    pub error: String,
}

/// Search response DTO
#[derive(Serialize, ToSchema)]
pub struct SearchResponse {
    #[schema(example = "Found 2 pages for query 'install'")]
    pub message: String,
    /// Which search path produced the results
    pub strategy: SearchStrategy,
    pub results: Vec<SearchResult>,
}

/// Single page response DTO
#[derive(Serialize, ToSchema)]
pub struct PageResponse {
    pub page: Page,
}

/// Page listing response DTO
#[derive(Serialize, ToSchema)]
pub struct PageListResponse {
    #[schema(example = "Found 12 pages (limit: 50)")]
    pub message: String,
    pub pages: Vec<PageSummary>,
}

/// Page tree response DTO
#[derive(Serialize, ToSchema)]
pub struct TreeResponse {
    #[schema(example = "Wiki page tree from 'root'")]
    pub message: String,
    pub tree: Vec<TreeItem>,
}

/// Create/update response DTO
#[derive(Serialize, ToSchema)]
pub struct MutationResponse {
    #[schema(example = "Successfully created page")]
    pub message: String,
    pub result: PageMutation,
}

/// Delete response DTO
#[derive(Serialize, ToSchema)]
pub struct DeleteResponse {
    #[schema(example = "Successfully deleted page")]
    pub message: String,
    pub id: i64,
    pub result: ResponseResult,
}

/// Move response DTO
#[derive(Serialize, ToSchema)]
pub struct MoveResponse {
    #[schema(example = "Successfully moved page")]
    pub message: String,
    pub result: MovedPage,
}

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

fn error_body(status: StatusCode, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

/// Validation → 400, missing mutation target → 404, anything else → 500.
fn error_response(e: WikiError) -> ApiError {
    let status = match &e {
        WikiError::Validation { .. } => StatusCode::BAD_REQUEST,
        WikiError::PageNotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        error!(error = %e, "request failed");
    } else {
        warn!(error = %e, "request rejected");
    }
    error_body(status, e.to_string())
}

// =============================================================================
// Handlers
// =============================================================================

/// Search pages
#[utoipa::path(
    post,
    path = "/search",
    tag = "pages",
    request_body = SearchParams,
    responses(
        (status = 200, description = "Search results", body = SearchResponse),
        (status = 500, description = "Upstream failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Json(params): Json<SearchParams>,
) -> ApiResult<SearchResponse> {
    let client = state.client().map_err(error_response)?;
    let outcome = client
        .search_pages(&params.query, params.effective_limit(), client.default_locale())
        .await
        .map_err(error_response)?;

    let strategy = outcome.strategy();
    let results = outcome.into_results();
    let message = if results.is_empty() {
        format!("No pages found for query: {}", params.query)
    } else {
        format!("Found {} pages for query '{}'", results.len(), params.query)
    };

    Ok(Json(SearchResponse {
        message,
        strategy,
        results,
    }))
}

/// Get a page by path or id
#[utoipa::path(
    post,
    path = "/page",
    tag = "pages",
    request_body = GetPageParams,
    responses(
        (status = 200, description = "Page found", body = PageResponse),
        (status = 400, description = "Neither or both of path and id given", body = ErrorResponse),
        (status = 404, description = "Page not found", body = ErrorResponse),
        (status = 500, description = "Upstream failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_page(
    State(state): State<AppState>,
    Json(params): Json<GetPageParams>,
) -> ApiResult<PageResponse> {
    let lookup = params.lookup().map_err(error_response)?;
    let client = state.client().map_err(error_response)?;

    let page = lookup.fetch(&client).await.map_err(error_response)?;

    match page {
        Some(page) => Ok(Json(PageResponse { page })),
        None => Err(error_body(StatusCode::NOT_FOUND, PAGE_NOT_FOUND)),
    }
}

/// List pages
#[utoipa::path(
    post,
    path = "/pages",
    tag = "pages",
    request_body = ListPagesParams,
    responses(
        (status = 200, description = "Page listing", body = PageListResponse),
        (status = 500, description = "Upstream failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_pages(
    State(state): State<AppState>,
    Json(params): Json<ListPagesParams>,
) -> ApiResult<PageListResponse> {
    let client = state.client().map_err(error_response)?;
    let limit = params.effective_limit();
    let pages = client.list_pages(limit).await.map_err(error_response)?;

    let message = if pages.is_empty() {
        "No pages found".to_string()
    } else {
        format!("Found {} pages (limit: {})", pages.len(), limit)
    };
    Ok(Json(PageListResponse { message, pages }))
}

/// Get the page tree
#[utoipa::path(
    post,
    path = "/tree",
    tag = "pages",
    request_body = GetTreeParams,
    responses(
        (status = 200, description = "Page tree", body = TreeResponse),
        (status = 500, description = "Upstream failure", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_tree(
    State(state): State<AppState>,
    Json(params): Json<GetTreeParams>,
) -> ApiResult<TreeResponse> {
    let client = state.client().map_err(error_response)?;
    let request = params.into_request(client.default_locale());
    let tree = client
        .get_page_tree(&request)
        .await
        .map_err(error_response)?;

    let message = if tree.is_empty() {
        "No pages found in tree".to_string()
    } else {
        let root = if request.path.is_empty() {
            "root"
        } else {
            request.path.as_str()
        };
        format!("Wiki page tree from '{root}'")
    };
    Ok(Json(TreeResponse { message, tree }))
}

/// Create a page
#[utoipa::path(
    post,
    path = "/page/create",
    tag = "pages",
    request_body = CreatePageParams,
    responses(
        (status = 200, description = "Page created", body = MutationResponse),
        (status = 500, description = "Wiki.js refused the page", body = ErrorResponse)
    )
)]
#[instrument(skip(state, params), fields(path = %params.path))]
pub async fn create_page(
    State(state): State<AppState>,
    Json(params): Json<CreatePageParams>,
) -> ApiResult<MutationResponse> {
    let client = state.client().map_err(error_response)?;
    let vars = params.into_vars(client.default_locale());
    let result = client.create_page(&vars).await.map_err(error_response)?;

    Ok(Json(MutationResponse {
        message: "Successfully created page".to_string(),
        result,
    }))
}

/// Update a page
#[utoipa::path(
    post,
    path = "/page/update",
    tag = "pages",
    request_body = UpdatePageParams,
    responses(
        (status = 200, description = "Page updated", body = MutationResponse),
        (status = 404, description = "Page not found", body = ErrorResponse),
        (status = 500, description = "Wiki.js refused the update", body = ErrorResponse)
    )
)]
#[instrument(skip(state, params), fields(id = params.id))]
pub async fn update_page(
    State(state): State<AppState>,
    Json(params): Json<UpdatePageParams>,
) -> ApiResult<MutationResponse> {
    let client = state.client().map_err(error_response)?;
    let (id, changes) = params.changes();
    let result = client
        .update_page(id, changes)
        .await
        .map_err(error_response)?;

    Ok(Json(MutationResponse {
        message: "Successfully updated page".to_string(),
        result,
    }))
}

/// Delete a page
#[utoipa::path(
    post,
    path = "/page/delete",
    tag = "pages",
    request_body = DeletePageParams,
    responses(
        (status = 200, description = "Page deleted", body = DeleteResponse),
        (status = 500, description = "Wiki.js refused the deletion", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_page(
    State(state): State<AppState>,
    Json(params): Json<DeletePageParams>,
) -> ApiResult<DeleteResponse> {
    let client = state.client().map_err(error_response)?;
    let result = client
        .delete_page(params.id)
        .await
        .map_err(error_response)?;

    Ok(Json(DeleteResponse {
        message: "Successfully deleted page".to_string(),
        id: params.id,
        result,
    }))
}

/// Move a page
#[utoipa::path(
    post,
    path = "/page/move",
    tag = "pages",
    request_body = MovePageParams,
    responses(
        (status = 200, description = "Page moved", body = MoveResponse),
        (status = 400, description = "Empty destination path", body = ErrorResponse),
        (status = 404, description = "Page not found", body = ErrorResponse),
        (status = 500, description = "Wiki.js refused the move", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn move_page(
    State(state): State<AppState>,
    Json(params): Json<MovePageParams>,
) -> ApiResult<MoveResponse> {
    params.validate().map_err(error_response)?;
    let client = state.client().map_err(error_response)?;
    let locale = params.destination_locale_or(client.default_locale());
    let result = client
        .move_page(params.id, &params.destination_path, locale)
        .await
        .map_err(error_response)?;

    Ok(Json(MoveResponse {
        message: "Successfully moved page".to_string(),
        result,
    }))
}
