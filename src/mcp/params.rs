//! Tool argument types.
//!
//! Shared by the MCP tools, the REST endpoints and the CLI; each derives both
//! the MCP input schema (schemars) and the OpenAPI schema (utoipa).

use rmcp::{schemars, schemars::JsonSchema};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::serde_utils::{optional_page_id, page_id};
use crate::wiki::{
    CreatePageVars, Page, PageChanges, TreeMode, TreeRequest, WikiClient, WikiError, WikiResult,
};

pub const DEFAULT_SEARCH_LIMIT: usize = 10;
pub const DEFAULT_LIST_LIMIT: i64 = 50;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct SearchParams {
    #[schemars(description = "Search query for finding pages")]
    pub query: String,
    #[schemars(description = "Maximum number of results (default: 10)")]
    pub limit: Option<usize>,
}

impl SearchParams {
    pub fn effective_limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_SEARCH_LIMIT)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct GetPageParams {
    #[schemars(description = "Page path (e.g. 'docs/getting-started'). Use either path or id.")]
    pub path: Option<String>,
    #[schemars(description = "Page ID. Use either path or id.")]
    #[serde(default, deserialize_with = "optional_page_id")]
    pub id: Option<i64>,
    #[schemars(description = "Locale for path lookups (default: en)")]
    pub locale: Option<String>,
}

/// A validated page lookup: exactly one of path or id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageLookup {
    Path { path: String, locale: Option<String> },
    Id(i64),
}

impl PageLookup {
    /// Fetch the page; path lookups without a locale use the client's default.
    pub async fn fetch(self, client: &WikiClient) -> WikiResult<Option<Page>> {
        match self {
            PageLookup::Path { path, locale } => {
                let locale = locale.as_deref().unwrap_or(client.default_locale());
                client.get_page_by_path(&path, locale).await
            }
            PageLookup::Id(id) => client.get_page_by_id(id).await,
        }
    }
}

impl GetPageParams {
    pub fn lookup(&self) -> WikiResult<PageLookup> {
        match (&self.path, self.id) {
            (Some(path), None) => Ok(PageLookup::Path {
                path: path.clone(),
                locale: self.locale.clone(),
            }),
            (None, Some(id)) => Ok(PageLookup::Id(id)),
            (None, None) => Err(WikiError::validation(
                "Either 'path' or 'id' parameter is required",
            )),
            (Some(_), Some(_)) => Err(WikiError::validation(
                "Cannot specify both 'path' and 'id' parameters - use only one",
            )),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct ListPagesParams {
    #[schemars(description = "Number of pages to return (default: 50)")]
    pub limit: Option<i64>,
}

impl ListPagesParams {
    pub fn effective_limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIST_LIMIT)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct GetTreeParams {
    #[schemars(description = "Parent path to get the tree from (default: root)")]
    pub parent_path: Option<String>,
    #[schemars(description = "Tree mode: ALL, FOLDERS or PAGES (default: ALL)")]
    pub mode: Option<TreeMode>,
    #[schemars(description = "Locale (default: en)")]
    pub locale: Option<String>,
    #[schemars(description = "Parent folder ID (optional)")]
    #[serde(default, deserialize_with = "optional_page_id")]
    pub parent_id: Option<i64>,
}

impl GetTreeParams {
    /// Tree request rooted at `parent_path` (empty for the root).
    pub fn into_request(self, default_locale: &str) -> TreeRequest {
        TreeRequest {
            path: self.parent_path.unwrap_or_default(),
            parent: self.parent_id,
            mode: self.mode.unwrap_or_default(),
            locale: self.locale.unwrap_or_else(|| default_locale.to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct CreatePageParams {
    #[schemars(description = "Page path (e.g. 'docs/new-page')")]
    pub path: String,
    #[schemars(description = "Page title")]
    pub title: String,
    #[schemars(description = "Page content in markdown")]
    pub content: String,
    #[schemars(description = "Page description (default: empty)")]
    pub description: Option<String>,
    #[schemars(description = "Page tags (default: none)")]
    pub tags: Option<Vec<String>>,
    #[schemars(description = "Locale (default: en)")]
    pub locale: Option<String>,
    #[schemars(description = "Editor (default: markdown)")]
    pub editor: Option<String>,
    #[schemars(description = "Publish immediately (default: true)")]
    pub is_published: Option<bool>,
    #[schemars(description = "Private page (default: false)")]
    pub is_private: Option<bool>,
}

impl CreatePageParams {
    /// Full variable set; `locale` falls back to `default_locale`.
    pub fn into_vars(self, default_locale: &str) -> CreatePageVars {
        let mut vars = CreatePageVars::new(self.path, self.title, self.content);
        vars.locale = self.locale.unwrap_or_else(|| default_locale.to_string());
        if let Some(description) = self.description {
            vars.description = description;
        }
        if let Some(tags) = self.tags {
            vars.tags = tags;
        }
        if let Some(editor) = self.editor {
            vars.editor = editor;
        }
        if let Some(is_published) = self.is_published {
            vars.is_published = is_published;
        }
        if let Some(is_private) = self.is_private {
            vars.is_private = is_private;
        }
        vars
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct UpdatePageParams {
    #[schemars(description = "Page ID to update")]
    #[serde(deserialize_with = "page_id")]
    pub id: i64,
    #[schemars(description = "New page content in markdown")]
    pub content: Option<String>,
    #[schemars(description = "New page title")]
    pub title: Option<String>,
    #[schemars(description = "New page description")]
    pub description: Option<String>,
    #[schemars(
        description = "New page tags. Omitting tags clears the page's existing tags; pass the current tags to keep them."
    )]
    pub tags: Option<Vec<String>>,
    #[schemars(description = "New editor")]
    pub editor: Option<String>,
    #[schemars(description = "New locale")]
    pub locale: Option<String>,
    #[schemars(description = "New path (prefer wiki_move_page for relocating pages)")]
    pub path: Option<String>,
    #[schemars(description = "Published flag")]
    pub is_published: Option<bool>,
    #[schemars(description = "Private flag")]
    pub is_private: Option<bool>,
}

impl UpdatePageParams {
    pub fn changes(self) -> (i64, PageChanges) {
        (
            self.id,
            PageChanges {
                content: self.content,
                title: self.title,
                description: self.description,
                tags: self.tags,
                editor: self.editor,
                is_private: self.is_private,
                is_published: self.is_published,
                locale: self.locale,
                path: self.path,
            },
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct DeletePageParams {
    #[schemars(description = "Page ID to delete")]
    #[serde(deserialize_with = "page_id")]
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, ToSchema)]
pub struct MovePageParams {
    #[schemars(description = "Page ID to move")]
    #[serde(deserialize_with = "page_id")]
    pub id: i64,
    #[schemars(description = "Destination path (e.g. 'archive/old-page')")]
    pub destination_path: String,
    #[schemars(description = "Destination locale (default: en)")]
    pub destination_locale: Option<String>,
}

impl MovePageParams {
    pub fn validate(&self) -> WikiResult<()> {
        if self.destination_path.trim().is_empty() {
            return Err(WikiError::validation("'destination_path' must not be empty"));
        }
        Ok(())
    }

    pub fn destination_locale_or<'a>(&'a self, default_locale: &'a str) -> &'a str {
        self.destination_locale.as_deref().unwrap_or(default_locale)
    }
}
