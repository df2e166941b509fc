use serde_json::Value;

use crate::cli::error::{CliError, CliResult};
use crate::mcp::Dispatcher;

/// Parse the `--args` JSON bag; absent means no arguments.
pub fn parse_args(raw: Option<&str>) -> CliResult<Value> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Value::Object(Default::default())),
        Some(raw) => {
            serde_json::from_str(raw).map_err(|source| CliError::InvalidArguments { source })
        }
    }
}

/// Invoke a tool by name and return its text.
///
/// A result flagged as an error becomes `CliError::ToolFailed` so the process
/// exits non-zero.
pub async fn call_tool(
    dispatcher: &Dispatcher,
    name: &str,
    args: Option<&str>,
) -> CliResult<String> {
    let arguments = parse_args(args)?;
    let response = dispatcher.dispatch_named(name, arguments).await;

    if response.is_error {
        return Err(CliError::ToolFailed {
            tool: name.to_string(),
            message: response.text,
        });
    }
    Ok(response.text)
}
