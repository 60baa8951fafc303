use super::super::{CallToolResult, Content, ForgeService, McpError};
use super::error::{ledger_error, tool_error};
use crate::tools::render;
use crate::tools::schemas::sheet::{RemovePerkRequest, SelectPerkRequest};
use forge_ledger::{render_sheet, LedgerError};

pub(in crate::tools::dispatch) async fn select_perk(
    service: &ForgeService,
    request: SelectPerkRequest,
) -> Result<CallToolResult, McpError> {
    let outcome = service
        .ledger
        .lock()
        .await
        .select_perk(&request.domain, &request.perk_name);
    match outcome {
        Ok(purchase) => Ok(CallToolResult::success(vec![Content::text(
            render::purchase(&purchase),
        )])),
        Err(err) => Ok(ledger_error(&err)),
    }
}

pub(in crate::tools::dispatch) async fn get_current_sheet(
    service: &ForgeService,
) -> Result<CallToolResult, McpError> {
    let ledger = service.ledger.lock().await;
    Ok(CallToolResult::success(vec![Content::text(
        render::sheet_listing(ledger.state()),
    )]))
}

pub(in crate::tools::dispatch) async fn generate_sheet_export(
    service: &ForgeService,
) -> Result<CallToolResult, McpError> {
    let ledger = service.ledger.lock().await;
    Ok(CallToolResult::success(vec![Content::text(render_sheet(
        ledger.state(),
    ))]))
}

pub(in crate::tools::dispatch) async fn clear_sheet(
    service: &ForgeService,
) -> Result<CallToolResult, McpError> {
    let mut ledger = service.ledger.lock().await;
    let refunded = ledger.clear_sheet();
    Ok(CallToolResult::success(vec![Content::text(
        render::sheet_cleared(refunded, ledger.current_cp()),
    )]))
}

pub(in crate::tools::dispatch) async fn remove_perk(
    service: &ForgeService,
    request: RemovePerkRequest,
) -> Result<CallToolResult, McpError> {
    let outcome = service.ledger.lock().await.remove_perk(&request.perk_name);
    match outcome {
        Ok(refund) => Ok(CallToolResult::success(vec![Content::text(
            render::perk_removed(&refund),
        )])),
        Err(err @ LedgerError::PerkNotFound(_)) => Ok(tool_error(
            err.code(),
            format!("Perk not found in sheet: {}", request.perk_name),
        )),
        Err(err) => Ok(ledger_error(&err)),
    }
}
