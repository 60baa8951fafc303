use super::super::{CallToolResult, Content};
use forge_ledger::LedgerError;
use serde_json::json;

pub(in crate::tools::dispatch) fn tool_error(
    code: &'static str,
    message: impl Into<String>,
) -> CallToolResult {
    let message = message.into();
    let mut result = CallToolResult::error(vec![Content::text(message.clone())]);
    result.structured_content = Some(json!({ "error": { "code": code, "message": message } }));
    result
}

pub(in crate::tools::dispatch) fn ledger_error(error: &LedgerError) -> CallToolResult {
    tool_error(error.code(), error.to_string())
}
