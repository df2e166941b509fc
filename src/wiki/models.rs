//! Wiki.js page models as returned by the GraphQL API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::serde_utils::{null_as_default, string_or_number};

/// Tag attached to a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageTag {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tag: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// Full page as returned by `pages.single` and `pages.singleByPath`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub editor: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub is_published: Option<bool>,
    #[serde(default)]
    pub is_private: Option<bool>,
    #[serde(default)]
    pub author_id: Option<i64>,
    #[serde(default)]
    pub author_name: Option<String>,
    #[serde(default)]
    pub author_email: Option<String>,
    #[serde(default)]
    pub creator_id: Option<i64>,
    #[serde(default)]
    pub creator_name: Option<String>,
    #[serde(default)]
    pub creator_email: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<PageTag>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Page {
    pub fn tag_names(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.tag.clone()).collect()
    }
}

/// Entry of `pages.list`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageSummary {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Entry of `pages.search.results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SearchResult {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub locale: String,
}

impl From<&PageSummary> for SearchResult {
    fn from(page: &PageSummary) -> Self {
        Self {
            id: page.id.to_string(),
            title: page.title.clone(),
            description: page.description.clone(),
            path: page.path.clone(),
            locale: page
                .locale
                .clone()
                .unwrap_or_else(|| crate::config::DEFAULT_LOCALE.to_string()),
        }
    }
}

/// Node of `pages.tree`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TreeItem {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub depth: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_private: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_folder: bool,
    #[serde(default, rename = "privateNS")]
    pub private_ns: Option<String>,
    #[serde(default)]
    pub parent: Option<i64>,
    #[serde(default)]
    pub page_id: Option<i64>,
    #[serde(default)]
    pub locale: Option<String>,
}

/// Success envelope embedded in every mutation response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub succeeded: bool,
    #[serde(default)]
    pub error_code: Option<i64>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Page fields echoed back by create and update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageRef {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Response of `pages.create` / `pages.update` / `pages.delete` / `pages.move`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMutation {
    #[serde(default)]
    pub response_result: Option<ResponseResult>,
    #[serde(default)]
    pub page: Option<PageRef>,
}

/// Outcome of a move, carrying the page as it was before the move.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MovedPage {
    pub id: i64,
    pub title: String,
    pub from_path: String,
    pub from_locale: String,
    pub to_path: String,
    pub to_locale: String,
    pub message: Option<String>,
}
