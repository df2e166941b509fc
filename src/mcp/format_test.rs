//! Tests for tool result rendering

use serde_json::json;

use crate::mcp::format;
use crate::wiki::{
    MovedPage, Page, PageMutation, PageRef, PageSummary, ResponseResult, SearchResult, TreeItem,
};

fn hit(id: &str, title: &str, description: &str) -> SearchResult {
    SearchResult {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        path: format!("docs/{id}"),
        locale: "en".to_string(),
    }
}

fn tree_item(path: &str, title: &str, depth: u32, is_folder: bool) -> TreeItem {
    serde_json::from_value(json!({
        "id": 1,
        "path": path,
        "title": title,
        "depth": depth,
        "isFolder": is_folder
    }))
    .unwrap()
}

#[test]
fn test_search_results_header_and_entries() {
    let text = format::search_results(
        "test",
        &[hit("1", "Test Page", "A test"), hit("2", "Other", "")],
    );

    assert!(text.starts_with("Found 2 pages for query 'test':\n\n"));
    assert!(text.contains("**Test Page**\nPath: docs/1 (ID: 1)\nDescription: A test\n"));
    assert!(text.contains("**Other**\nPath: docs/2 (ID: 2)\n\n"));
}

#[test]
fn test_search_results_empty() {
    assert_eq!(
        format::search_results("nothing", &[]),
        "No pages found for query: nothing"
    );
}

#[test]
fn test_page_detail_includes_metadata_and_content() {
    let page: Page = serde_json::from_value(json!({
        "id": 1,
        "path": "test-page",
        "title": "Test Page",
        "description": "A test page",
        "content": "# Test Content",
        "editor": "markdown",
        "locale": "en",
        "authorName": "Test Author",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-02T00:00:00Z",
        "tags": [{"tag": "test"}, {"tag": "example"}]
    }))
    .unwrap();

    let text = format::page_detail(&page);

    assert!(text.starts_with("# Test Page\n\n"));
    assert!(text.contains("**Path:** test-page\n"));
    assert!(text.contains("**ID:** 1\n"));
    assert!(text.contains("**Author:** Test Author\n"));
    assert!(text.contains("**Tags:** test, example\n"));
    assert!(text.ends_with("\n---\n\n# Test Content"));
}

#[test]
fn test_page_detail_omits_empty_optional_lines() {
    let page: Page =
        serde_json::from_value(json!({"id": 3, "title": "Bare", "content": "x"})).unwrap();

    let text = format::page_detail(&page);

    assert!(!text.contains("**Description:**"));
    assert!(!text.contains("**Tags:**"));
    assert!(!text.contains("**Author:**"));
    assert!(text.contains("**Editor:** unknown\n"));
    assert!(text.contains("**Locale:** en\n"));
}

#[test]
fn test_page_list_shows_limit() {
    let pages: Vec<PageSummary> = serde_json::from_value(json!([
        {"id": 1, "path": "home", "title": "Home", "updatedAt": "2024-01-02"},
        {"id": 2, "path": "about", "title": "About", "description": "Who we are"}
    ]))
    .unwrap();

    let text = format::page_list(&pages, 50);

    assert!(text.starts_with("Found 2 pages (limit: 50):\n\n"));
    assert!(text.contains("**Home**\nPath: home (ID: 1)\nUpdated: 2024-01-02\n"));
    assert!(text.contains("Description: Who we are\n"));
    assert_eq!(format::page_list(&[], 10), "No pages found");
}

#[test]
fn test_page_tree_indents_by_depth() {
    let items = vec![
        tree_item("docs", "Docs", 0, true),
        tree_item("docs/intro", "Intro", 1, false),
    ];

    let text = format::page_tree("", &items);

    assert_eq!(
        text,
        "Wiki page tree from 'root':\n\n📁 Docs/\n  📄 Intro (docs/intro)\n"
    );
    assert!(format::page_tree("docs", &items).starts_with("Wiki page tree from 'docs':"));
    assert_eq!(format::page_tree("", &[]), "No pages found in tree");
}

#[test]
fn test_mutation_summaries() {
    let created = PageMutation {
        response_result: Some(ResponseResult {
            succeeded: true,
            ..Default::default()
        }),
        page: Some(PageRef {
            id: 42,
            path: "docs/new".to_string(),
            title: "New".to_string(),
            updated_at: None,
        }),
    };
    let text = format::page_created(&created);
    assert_eq!(
        text,
        "✅ Successfully created page:\n\n**Title:** New\n**Path:** docs/new\n**ID:** 42\n"
    );

    let mut updated = created.clone();
    if let Some(page) = updated.page.as_mut() {
        page.updated_at = Some("2024-03-01T00:00:00Z".to_string());
    }
    let text = format::page_updated(&updated);
    assert!(text.starts_with("✅ Successfully updated page:"));
    assert!(text.ends_with("**Updated:** 2024-03-01T00:00:00Z\n"));
}

#[test]
fn test_page_deleted_appends_upstream_message() {
    let quiet = format::page_deleted(7, &ResponseResult::default());
    assert_eq!(quiet, "✅ Successfully deleted page with ID: 7");

    let chatty = format::page_deleted(
        7,
        &ResponseResult {
            succeeded: true,
            message: Some("Page has been deleted.".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(
        chatty,
        "✅ Successfully deleted page with ID: 7\n\nPage has been deleted."
    );
}

#[test]
fn test_page_moved_lists_both_locations() {
    let text = format::page_moved(&MovedPage {
        id: 8,
        title: "Moving".to_string(),
        from_path: "old/place".to_string(),
        from_locale: "en".to_string(),
        to_path: "new/place".to_string(),
        to_locale: "de".to_string(),
        message: None,
    });

    assert!(text.contains("**From:** old/place (en)\n"));
    assert!(text.contains("**To:** new/place (de)\n"));
    assert!(text.contains("**ID:** 8\n"));
}
