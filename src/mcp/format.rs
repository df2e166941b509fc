//! Human-readable renderings of tool results.

use std::fmt::Write;

use crate::wiki::{
    MovedPage, Page, PageMutation, PageSummary, ResponseResult, SearchResult, TreeItem,
};

pub const PAGE_NOT_FOUND: &str = "Page not found";

pub fn search_results(query: &str, results: &[SearchResult]) -> String {
    if results.is_empty() {
        return format!("No pages found for query: {query}");
    }

    let mut out = format!("Found {} pages for query '{}':\n\n", results.len(), query);
    for page in results {
        let _ = writeln!(out, "**{}**", page.title);
        let _ = writeln!(out, "Path: {} (ID: {})", page.path, page.id);
        if !page.description.is_empty() {
            let _ = writeln!(out, "Description: {}", page.description);
        }
        out.push('\n');
    }
    out
}

pub fn page_detail(page: &Page) -> String {
    let mut out = format!("# {}\n\n", page.title);
    let _ = writeln!(out, "**Path:** {}", page.path);
    let _ = writeln!(out, "**ID:** {}", page.id);
    if !page.description.is_empty() {
        let _ = writeln!(out, "**Description:** {}", page.description);
    }
    let _ = writeln!(
        out,
        "**Editor:** {}",
        page.editor.as_deref().unwrap_or("unknown")
    );
    let _ = writeln!(
        out,
        "**Locale:** {}",
        page.locale.as_deref().unwrap_or(crate::config::DEFAULT_LOCALE)
    );
    if let Some(author) = page.author_name.as_deref().filter(|a| !a.is_empty()) {
        let _ = writeln!(out, "**Author:** {author}");
    }
    let _ = writeln!(out, "**Created:** {}", page.created_at.as_deref().unwrap_or("-"));
    let _ = writeln!(out, "**Updated:** {}", page.updated_at.as_deref().unwrap_or("-"));
    if !page.tags.is_empty() {
        let _ = writeln!(out, "**Tags:** {}", page.tag_names().join(", "));
    }
    out.push_str("\n---\n\n");
    out.push_str(&page.content);
    out
}

pub fn page_list(pages: &[PageSummary], limit: i64) -> String {
    if pages.is_empty() {
        return "No pages found".to_string();
    }

    let mut out = format!("Found {} pages (limit: {}):\n\n", pages.len(), limit);
    for page in pages {
        let _ = writeln!(out, "**{}**", page.title);
        let _ = writeln!(out, "Path: {} (ID: {})", page.path, page.id);
        if !page.description.is_empty() {
            let _ = writeln!(out, "Description: {}", page.description);
        }
        if let Some(updated) = &page.updated_at {
            let _ = writeln!(out, "Updated: {updated}");
        }
        out.push('\n');
    }
    out
}

pub fn page_tree(parent_path: &str, items: &[TreeItem]) -> String {
    if items.is_empty() {
        return "No pages found in tree".to_string();
    }

    let root = if parent_path.is_empty() { "root" } else { parent_path };
    let mut out = format!("Wiki page tree from '{root}':\n\n");
    for item in items {
        let indent = "  ".repeat(item.depth as usize);
        if item.is_folder {
            let _ = writeln!(out, "{indent}📁 {}/", item.title);
        } else {
            let _ = writeln!(out, "{indent}📄 {} ({})", item.title, item.path);
        }
    }
    out
}

fn mutation_summary(verb: &str, result: &PageMutation) -> String {
    let mut out = format!("✅ Successfully {verb} page:\n\n");
    if let Some(page) = &result.page {
        let _ = writeln!(out, "**Title:** {}", page.title);
        let _ = writeln!(out, "**Path:** {}", page.path);
        let _ = writeln!(out, "**ID:** {}", page.id);
        if let Some(updated) = &page.updated_at {
            let _ = writeln!(out, "**Updated:** {updated}");
        }
    }
    out
}

pub fn page_created(result: &PageMutation) -> String {
    mutation_summary("created", result)
}

pub fn page_updated(result: &PageMutation) -> String {
    mutation_summary("updated", result)
}

pub fn page_deleted(id: i64, result: &ResponseResult) -> String {
    let mut out = format!("✅ Successfully deleted page with ID: {id}");
    if let Some(message) = result.message.as_deref().filter(|m| !m.is_empty()) {
        let _ = write!(out, "\n\n{message}");
    }
    out
}

pub fn page_moved(moved: &MovedPage) -> String {
    format!(
        "✅ Successfully moved page:\n\n**Title:** {}\n**From:** {} ({})\n**To:** {} ({})\n**ID:** {}\n",
        moved.title, moved.from_path, moved.from_locale, moved.to_path, moved.to_locale, moved.id
    )
}
