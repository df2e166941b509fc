//! GraphQL query catalog for the Wiki.js `pages` schema.
//!
//! Each document is paired with the struct that serializes its variables, so
//! variable names and nullability live in one place. Wiki.js rejects unknown
//! or mistyped arguments outright ("Unknown argument ..."), so any change here
//! must match the upstream schema exactly.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use rmcp::schemars::{self, JsonSchema};

/// `pages.search` → `{ results[], totalHits }`
pub const SEARCH_PAGES: &str = r#"
query SearchPages($query: String!, $path: String, $locale: String) {
  pages {
    search(query: $query, path: $path, locale: $locale) {
      results {
        id
        title
        description
        path
        locale
      }
      totalHits
    }
  }
}
"#;

/// `pages.singleByPath` → page or null
pub const GET_PAGE_BY_PATH: &str = r#"
query GetPageByPath($path: String!, $locale: String!) {
  pages {
    singleByPath(path: $path, locale: $locale) {
      id
      path
      title
      description
      content
      contentType
      isPublished
      isPrivate
      createdAt
      updatedAt
      editor
      locale
      authorId
      authorName
      authorEmail
      creatorId
      creatorName
      creatorEmail
      tags {
        id
        tag
        title
      }
    }
  }
}
"#;

/// `pages.single` → page or null
pub const GET_PAGE_BY_ID: &str = r#"
query GetPageById($id: Int!) {
  pages {
    single(id: $id) {
      id
      path
      title
      description
      content
      contentType
      isPublished
      isPrivate
      createdAt
      updatedAt
      editor
      locale
      authorId
      authorName
      authorEmail
      creatorId
      creatorName
      creatorEmail
      tags {
        id
        tag
        title
      }
    }
  }
}
"#;

/// `pages.list` → `[PageListItem]`
pub const LIST_PAGES: &str = r#"
query ListPages($limit: Int!) {
  pages {
    list(limit: $limit) {
      id
      path
      title
      description
      updatedAt
      createdAt
      locale
    }
  }
}
"#;

/// `pages.tree` → `[PageTreeItem]`
pub const GET_PAGE_TREE: &str = r#"
query GetPageTree($path: String, $parent: Int, $mode: PageTreeMode!, $locale: String!, $includeAncestors: Boolean) {
  pages {
    tree(path: $path, parent: $parent, mode: $mode, locale: $locale, includeAncestors: $includeAncestors) {
      id
      path
      depth
      title
      isPrivate
      isFolder
      privateNS
      parent
      pageId
      locale
    }
  }
}
"#;

/// `pages.create` → `{ responseResult, page }`
pub const CREATE_PAGE: &str = r#"
mutation CreatePage(
  $content: String!,
  $description: String!,
  $editor: String!,
  $isPublished: Boolean!,
  $isPrivate: Boolean!,
  $locale: String!,
  $path: String!,
  $tags: [String]!,
  $title: String!
) {
  pages {
    create(
      content: $content,
      description: $description,
      editor: $editor,
      isPublished: $isPublished,
      isPrivate: $isPrivate,
      locale: $locale,
      path: $path,
      tags: $tags,
      title: $title
    ) {
      responseResult {
        succeeded
        errorCode
        slug
        message
      }
      page {
        id
        path
        title
      }
    }
  }
}
"#;

/// `pages.update` → `{ responseResult, page }`
pub const UPDATE_PAGE: &str = r#"
mutation UpdatePage(
  $id: Int!,
  $content: String,
  $description: String,
  $editor: String,
  $isPrivate: Boolean,
  $isPublished: Boolean,
  $locale: String,
  $path: String,
  $tags: [String],
  $title: String
) {
  pages {
    update(
      id: $id,
      content: $content,
      description: $description,
      editor: $editor,
      isPrivate: $isPrivate,
      isPublished: $isPublished,
      locale: $locale,
      path: $path,
      tags: $tags,
      title: $title
    ) {
      responseResult {
        succeeded
        errorCode
        message
      }
      page {
        id
        path
        title
        updatedAt
      }
    }
  }
}
"#;

/// `pages.delete` → `{ responseResult }`
pub const DELETE_PAGE: &str = r#"
mutation DeletePage($id: Int!) {
  pages {
    delete(id: $id) {
      responseResult {
        succeeded
        errorCode
        message
      }
    }
  }
}
"#;

/// `pages.move` → `{ responseResult }`
pub const MOVE_PAGE: &str = r#"
mutation MovePage($id: Int!, $destinationPath: String!, $destinationLocale: String!) {
  pages {
    move(id: $id, destinationPath: $destinationPath, destinationLocale: $destinationLocale) {
      responseResult {
        succeeded
        errorCode
        message
      }
    }
  }
}
"#;

// =============================================================================
// Variables
// =============================================================================

#[derive(Debug, Serialize)]
pub struct SearchVars<'a> {
    pub query: &'a str,
    pub path: &'a str,
    pub locale: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PathVars<'a> {
    pub path: &'a str,
    pub locale: &'a str,
}

#[derive(Debug, Serialize)]
pub struct IdVars {
    pub id: i64,
}

#[derive(Debug, Serialize)]
pub struct ListVars {
    pub limit: i64,
}

/// Which nodes `pages.tree` returns.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ToSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum TreeMode {
    #[default]
    All,
    Folders,
    Pages,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeVars<'a> {
    /// `None` serializes as `null`, which Wiki.js reads as the root
    pub path: Option<&'a str>,
    pub parent: Option<i64>,
    pub mode: TreeMode,
    pub locale: &'a str,
    pub include_ancestors: bool,
}

/// Full variable set of `CreatePage`; every argument is required upstream.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePageVars {
    pub content: String,
    pub description: String,
    pub editor: String,
    pub is_published: bool,
    pub is_private: bool,
    pub locale: String,
    pub path: String,
    pub tags: Vec<String>,
    pub title: String,
}

impl CreatePageVars {
    /// Markdown, published, public, `en`, no description, no tags.
    pub fn new(
        path: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            description: String::new(),
            editor: "markdown".to_string(),
            is_published: true,
            is_private: false,
            locale: crate::config::DEFAULT_LOCALE.to_string(),
            path: path.into(),
            tags: Vec::new(),
            title: title.into(),
        }
    }
}

/// Variable set of `UpdatePage` after merging with the current page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePageVars {
    pub id: i64,
    pub content: String,
    pub description: String,
    pub editor: String,
    pub is_private: bool,
    pub is_published: bool,
    pub locale: String,
    pub path: String,
    pub tags: Vec<String>,
    pub title: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovePageVars<'a> {
    pub id: i64,
    pub destination_path: &'a str,
    pub destination_locale: &'a str,
}

/// Operation name declared by a GraphQL document (`query Foo(...)` → `Foo`).
pub fn operation_name(document: &str) -> Option<&str> {
    let rest = document
        .trim_start()
        .strip_prefix("query")
        .or_else(|| document.trim_start().strip_prefix("mutation"))?;
    let name = rest
        .trim_start()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .next()?;
    (!name.is_empty()).then_some(name)
}
