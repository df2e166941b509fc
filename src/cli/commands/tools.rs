use serde::Serialize;
use tabled::{Table, Tabled};

use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::{apply_table_style, truncate_with_ellipsis};
use crate::mcp::WikiTool;

#[derive(Debug, Serialize)]
pub struct ToolInfo {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Tabled)]
pub(crate) struct ToolDisplay {
    #[tabled(rename = "Tool")]
    pub(crate) name: String,
    #[tabled(rename = "Description")]
    pub(crate) description: String,
}

impl From<&ToolInfo> for ToolDisplay {
    fn from(tool: &ToolInfo) -> Self {
        Self {
            name: tool.name.to_string(),
            description: truncate_with_ellipsis(tool.description, 60),
        }
    }
}

pub fn catalog() -> Vec<ToolInfo> {
    WikiTool::ALL
        .into_iter()
        .map(|tool| ToolInfo {
            name: tool.name(),
            description: tool.description(),
        })
        .collect()
}

/// Render the tool catalog as a table or JSON
pub fn list_tools(format: &str) -> CliResult<String> {
    let tools = catalog();

    match format {
        "json" => serde_json::to_string_pretty(&tools).map_err(CliError::Output),
        _ => {
            let rows: Vec<ToolDisplay> = tools.iter().map(ToolDisplay::from).collect();
            let mut table = Table::new(rows);
            apply_table_style(&mut table);
            Ok(table.to_string())
        }
    }
}
