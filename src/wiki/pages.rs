//! Page operations built on the GraphQL gateway.
//!
//! Every operation is one or two sequential round-trips. Nothing here keeps
//! state between calls; update and move read the page fresh each time.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};
use utoipa::ToSchema;

use crate::wiki::client::WikiClient;
use crate::wiki::error::{WikiError, WikiResult};
use crate::wiki::models::{
    MovedPage, Page, PageMutation, PageSummary, ResponseResult, SearchResult, TreeItem,
};
use crate::wiki::queries::{
    self, CreatePageVars, IdVars, ListVars, MovePageVars, PathVars, SearchVars, TreeMode,
    TreeVars, UpdatePageVars,
};

/// Listing size scanned by the substring fallback of [`WikiClient::search_pages`].
pub const FALLBACK_SCAN_LIMIT: i64 = 1000;

/// Which strategy produced a set of search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchStrategy {
    /// `pages.search`
    Primary,
    /// Substring filter over `pages.list`
    Fallback,
}

/// Search results together with the path that produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Primary(Vec<SearchResult>),
    Fallback {
        results: Vec<SearchResult>,
        /// Why the primary search was abandoned
        reason: String,
    },
}

impl SearchOutcome {
    pub fn results(&self) -> &[SearchResult] {
        match self {
            SearchOutcome::Primary(results) => results,
            SearchOutcome::Fallback { results, .. } => results,
        }
    }

    pub fn strategy(&self) -> SearchStrategy {
        match self {
            SearchOutcome::Primary(_) => SearchStrategy::Primary,
            SearchOutcome::Fallback { .. } => SearchStrategy::Fallback,
        }
    }

    pub fn into_results(self) -> Vec<SearchResult> {
        match self {
            SearchOutcome::Primary(results) => results,
            SearchOutcome::Fallback { results, .. } => results,
        }
    }
}

/// Tree request; `path` and `parent` narrow the subtree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TreeRequest {
    pub path: String,
    pub parent: Option<i64>,
    pub mode: TreeMode,
    pub locale: String,
}

/// Fields to change on an existing page. `None` keeps the current value,
/// except for `tags` (see [`PageChanges::merge_onto`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageChanges {
    pub content: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub editor: Option<String>,
    pub is_private: Option<bool>,
    pub is_published: Option<bool>,
    pub locale: Option<String>,
    pub path: Option<String>,
}

impl PageChanges {
    /// Merge the requested changes over the current page.
    ///
    /// `pages.update` has no partial-update semantics: any argument left out is
    /// written back empty, so every field falls back to the current value.
    /// Tags are the exception: omitted tags are sent as an empty list and clear
    /// the page's tags. Callers that want to keep tags must pass them.
    pub fn merge_onto(self, current: &Page) -> UpdatePageVars {
        UpdatePageVars {
            id: current.id,
            content: self.content.unwrap_or_else(|| current.content.clone()),
            description: self
                .description
                .unwrap_or_else(|| current.description.clone()),
            editor: self.editor.unwrap_or_else(|| {
                current
                    .editor
                    .clone()
                    .unwrap_or_else(|| "markdown".to_string())
            }),
            is_private: self.is_private.or(current.is_private).unwrap_or(false),
            is_published: self.is_published.or(current.is_published).unwrap_or(true),
            locale: self.locale.unwrap_or_else(|| {
                current
                    .locale
                    .clone()
                    .unwrap_or_else(|| crate::config::DEFAULT_LOCALE.to_string())
            }),
            path: self.path.unwrap_or_else(|| current.path.clone()),
            tags: self.tags.unwrap_or_default(),
            title: self.title.unwrap_or_else(|| current.title.clone()),
        }
    }
}

/// Walk `data` along `path`, yielding `Null` where a segment is missing.
fn take_at(mut data: Map<String, Value>, path: &[&str]) -> Value {
    let Some((first, rest)) = path.split_first() else {
        return Value::Object(data);
    };
    let mut current = data.remove(*first).unwrap_or(Value::Null);
    for segment in rest {
        current = match current {
            Value::Object(mut map) => map.remove(*segment).unwrap_or(Value::Null),
            _ => Value::Null,
        };
    }
    current
}

fn decode<T: DeserializeOwned>(value: Value, what: &str) -> WikiResult<T> {
    serde_json::from_value(value).map_err(|e| WikiError::InvalidResponse {
        message: format!("unexpected shape for {what}: {e}"),
    })
}

fn decode_list<T: DeserializeOwned>(value: Value, what: &str) -> WikiResult<Vec<T>> {
    Ok(decode::<Option<Vec<T>>>(value, what)?.unwrap_or_default())
}

/// Turn a failed `responseResult` into [`WikiError::Operation`].
fn ensure_succeeded(action: &'static str, result: Option<&ResponseResult>) -> WikiResult<()> {
    match result {
        Some(r) if r.succeeded => Ok(()),
        other => Err(WikiError::Operation {
            action,
            message: other
                .and_then(|r| r.message.clone())
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Unknown error".to_string()),
        }),
    }
}

impl WikiClient {
    /// Search pages, falling back to a filtered listing when `pages.search`
    /// fails for any reason.
    ///
    /// Results are capped at `limit` client-side on both paths, keeping
    /// upstream order. Errors from the fallback listing propagate.
    pub async fn search_pages(
        &self,
        query: &str,
        limit: usize,
        locale: &str,
    ) -> WikiResult<SearchOutcome> {
        match self.search_primary(query, locale).await {
            Ok(mut results) => {
                results.truncate(limit);
                Ok(SearchOutcome::Primary(results))
            }
            Err(e) => {
                warn!(error = %e, "pages.search failed, falling back to listing filter");
                let results = self.search_fallback(query, limit).await?;
                Ok(SearchOutcome::Fallback {
                    results,
                    reason: e.to_string(),
                })
            }
        }
    }

    async fn search_primary(&self, query: &str, locale: &str) -> WikiResult<Vec<SearchResult>> {
        let vars = SearchVars {
            query,
            path: "",
            locale,
        };
        let data = self.execute_with(queries::SEARCH_PAGES, &vars).await?;
        let Value::Object(mut search) = take_at(data, &["pages", "search"]) else {
            return Err(WikiError::InvalidResponse {
                message: "pages.search missing from response".to_string(),
            });
        };
        decode_list(
            search.remove("results").unwrap_or(Value::Null),
            "pages.search.results",
        )
    }

    async fn search_fallback(&self, query: &str, limit: usize) -> WikiResult<Vec<SearchResult>> {
        let needle = query.to_lowercase();
        let pages = self.list_pages(FALLBACK_SCAN_LIMIT).await?;

        let results: Vec<SearchResult> = pages
            .iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.path.to_lowercase().contains(&needle)
            })
            .take(limit)
            .map(SearchResult::from)
            .collect();

        debug!(
            scanned = pages.len(),
            matched = results.len(),
            "fallback search complete"
        );
        Ok(results)
    }

    /// Fetch a page by path. `Ok(None)` when it does not exist.
    pub async fn get_page_by_path(&self, path: &str, locale: &str) -> WikiResult<Option<Page>> {
        let data = self
            .execute_with(queries::GET_PAGE_BY_PATH, &PathVars { path, locale })
            .await?;
        decode(
            take_at(data, &["pages", "singleByPath"]),
            "pages.singleByPath",
        )
    }

    /// Fetch a page by id. `Ok(None)` when it does not exist.
    pub async fn get_page_by_id(&self, id: i64) -> WikiResult<Option<Page>> {
        let data = self
            .execute_with(queries::GET_PAGE_BY_ID, &IdVars { id })
            .await?;
        decode(take_at(data, &["pages", "single"]), "pages.single")
    }

    /// List pages; an empty wiki yields an empty list.
    pub async fn list_pages(&self, limit: i64) -> WikiResult<Vec<PageSummary>> {
        let data = self
            .execute_with(queries::LIST_PAGES, &ListVars { limit })
            .await?;
        decode_list(take_at(data, &["pages", "list"]), "pages.list")
    }

    /// Fetch the page tree. An empty `path` means the root.
    pub async fn get_page_tree(&self, request: &TreeRequest) -> WikiResult<Vec<TreeItem>> {
        let vars = TreeVars {
            path: Some(request.path.as_str()).filter(|p| !p.is_empty()),
            parent: request.parent,
            mode: request.mode,
            locale: &request.locale,
            include_ancestors: false,
        };
        let data = self.execute_with(queries::GET_PAGE_TREE, &vars).await?;
        decode_list(take_at(data, &["pages", "tree"]), "pages.tree")
    }

    /// Create a page. Fails with [`WikiError::Operation`] when upstream refuses.
    pub async fn create_page(&self, page: &CreatePageVars) -> WikiResult<PageMutation> {
        let data = self.execute_with(queries::CREATE_PAGE, page).await?;
        let result: Option<PageMutation> =
            decode(take_at(data, &["pages", "create"]), "pages.create")?;
        let result = result.unwrap_or_default();
        ensure_succeeded("create", result.response_result.as_ref())?;
        Ok(result)
    }

    /// Update a page by reading it, merging `changes`, and writing every field.
    ///
    /// The read always completes before the write starts. Concurrent edits made
    /// between the two calls are overwritten (last writer wins).
    pub async fn update_page(&self, id: i64, changes: PageChanges) -> WikiResult<PageMutation> {
        let current = self
            .get_page_by_id(id)
            .await?
            .ok_or(WikiError::PageNotFound { id })?;

        let vars = changes.merge_onto(&current);
        let data = self.execute_with(queries::UPDATE_PAGE, &vars).await?;
        let result: Option<PageMutation> =
            decode(take_at(data, &["pages", "update"]), "pages.update")?;
        let result = result.unwrap_or_default();
        ensure_succeeded("update", result.response_result.as_ref())?;
        Ok(result)
    }

    /// Delete a page.
    pub async fn delete_page(&self, id: i64) -> WikiResult<ResponseResult> {
        let data = self
            .execute_with(queries::DELETE_PAGE, &IdVars { id })
            .await?;
        let result: Option<PageMutation> =
            decode(take_at(data, &["pages", "delete"]), "pages.delete")?;
        let response = result.and_then(|r| r.response_result);
        ensure_succeeded("delete", response.as_ref())?;
        Ok(response.unwrap_or_default())
    }

    /// Move a page to a new path and/or locale.
    ///
    /// The page is looked up first so the result can name where it came from.
    pub async fn move_page(
        &self,
        id: i64,
        destination_path: &str,
        destination_locale: &str,
    ) -> WikiResult<MovedPage> {
        let current = self
            .get_page_by_id(id)
            .await?
            .ok_or(WikiError::PageNotFound { id })?;

        let vars = MovePageVars {
            id,
            destination_path,
            destination_locale,
        };
        let data = self.execute_with(queries::MOVE_PAGE, &vars).await?;
        let result: Option<PageMutation> =
            decode(take_at(data, &["pages", "move"]), "pages.move")?;
        let response = result.and_then(|r| r.response_result);
        ensure_succeeded("move", response.as_ref())?;

        Ok(MovedPage {
            id,
            title: current.title,
            from_path: current.path,
            from_locale: current
                .locale
                .unwrap_or_else(|| crate::config::DEFAULT_LOCALE.to_string()),
            to_path: destination_path.to_string(),
            to_locale: destination_locale.to_string(),
            message: response.and_then(|r| r.message),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(value: Value) -> Page {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_take_at_missing_segments_yield_null() {
        let data = json!({"pages": {"single": null}});
        let Value::Object(map) = data else { unreachable!() };
        assert_eq!(take_at(map.clone(), &["pages", "single"]), Value::Null);
        assert_eq!(take_at(map, &["pages", "nope", "deeper"]), Value::Null);
    }

    #[test]
    fn test_merge_preserves_unspecified_fields_and_clears_tags() {
        let current = page(json!({
            "id": 5,
            "path": "docs/a",
            "title": "A",
            "description": "desc",
            "content": "old",
            "editor": "markdown",
            "locale": "en",
            "isPublished": false,
            "isPrivate": true,
            "tags": [{"id": 1, "tag": "x", "title": "x"}]
        }));
        let changes = PageChanges {
            content: Some("new".to_string()),
            ..Default::default()
        };

        let vars = changes.merge_onto(&current);

        assert_eq!(vars.id, 5);
        assert_eq!(vars.title, "A");
        assert_eq!(vars.content, "new");
        assert_eq!(vars.description, "desc");
        assert_eq!(vars.path, "docs/a");
        assert!(!vars.is_published);
        assert!(vars.is_private);
        assert!(vars.tags.is_empty());
    }

    #[test]
    fn test_merge_defaults_when_current_fields_absent() {
        let current = page(json!({"id": 1, "path": "p", "title": "T"}));
        let vars = PageChanges {
            tags: Some(vec!["keep".to_string()]),
            ..Default::default()
        }
        .merge_onto(&current);

        assert_eq!(vars.editor, "markdown");
        assert_eq!(vars.locale, "en");
        assert!(vars.is_published);
        assert!(!vars.is_private);
        assert_eq!(vars.tags, vec!["keep".to_string()]);
    }

    #[test]
    fn test_ensure_succeeded_reports_message_or_unknown() {
        let failed = ResponseResult {
            succeeded: false,
            message: Some("slug taken".to_string()),
            ..Default::default()
        };
        let err = ensure_succeeded("create", Some(&failed)).unwrap_err();
        assert_eq!(err.to_string(), "Failed to create page: slug taken");

        let err = ensure_succeeded("delete", None).unwrap_err();
        assert_eq!(err.to_string(), "Failed to delete page: Unknown error");
    }
}
