use super::super::{CallToolResult, Content, ForgeService, McpError};
use super::error::ledger_error;
use crate::tools::render;
use crate::tools::schemas::cp::{AddCpRequest, ParseCpRequest, SetCpRequest};

/// Observe the CP balance stated in `request.text`, if any.
pub(in crate::tools::dispatch) async fn parse_cp_from_text(
    service: &ForgeService,
    request: ParseCpRequest,
) -> Result<CallToolResult, McpError> {
    let mut ledger = service.ledger.lock().await;
    let text = match ledger.update_from_text(&service.parser, &request.text) {
        Some(change) => render::cp_found(&change),
        None => render::NO_CP_FOUND.to_string(),
    };
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

pub(in crate::tools::dispatch) async fn get_current_cp(
    service: &ForgeService,
) -> Result<CallToolResult, McpError> {
    let summary = service.ledger.lock().await.summary();
    Ok(CallToolResult::success(vec![Content::text(
        render::status(&summary),
    )]))
}

pub(in crate::tools::dispatch) async fn set_cp(
    service: &ForgeService,
    request: SetCpRequest,
) -> Result<CallToolResult, McpError> {
    let change = service.ledger.lock().await.set_cp(request.cp);
    Ok(CallToolResult::success(vec![Content::text(
        render::cp_set(&change),
    )]))
}

pub(in crate::tools::dispatch) async fn add_cp(
    service: &ForgeService,
    request: AddCpRequest,
) -> Result<CallToolResult, McpError> {
    let outcome = service.ledger.lock().await.add_cp(request.cp);
    match outcome {
        Ok(change) => Ok(CallToolResult::success(vec![Content::text(
            render::cp_added(request.cp, &change),
        )])),
        Err(err) => Ok(ledger_error(&err)),
    }
}
