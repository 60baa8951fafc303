use super::super::{CallToolResult, Content, ForgeService, McpError};
use crate::tools::render;
use crate::tools::schemas::offers::{DomainOptionsRequest, DomainPerksRequest};

/// Random domain offer, each annotated with total and affordable perk counts.
pub(in crate::tools::dispatch) async fn get_domain_options(
    service: &ForgeService,
    request: DomainOptionsRequest,
) -> Result<CallToolResult, McpError> {
    let offer_size = service.offer_size_for(request.count);
    let mut ledger = service.ledger.lock().await;
    if ledger.catalog().is_empty() {
        return Ok(CallToolResult::success(vec![Content::text(
            render::NO_DOMAINS,
        )]));
    }

    let domains: Vec<_> = ledger
        .list_domains(offer_size)
        .into_iter()
        .filter_map(|name| {
            let stats = ledger.domain_stats(&name)?;
            Some((name, stats))
        })
        .collect();
    Ok(CallToolResult::success(vec![Content::text(
        render::domain_offer(&domains),
    )]))
}

/// Random offer of affordable perks. The domain name is matched exactly, as in `select_perk`;
/// unknown domains read as "nothing affordable".
pub(in crate::tools::dispatch) async fn get_perks_from_domain(
    service: &ForgeService,
    request: DomainPerksRequest,
) -> Result<CallToolResult, McpError> {
    let offer_size = service.offer_size_for(request.count);
    let perks = service
        .ledger
        .lock()
        .await
        .list_affordable_perks(&request.domain, offer_size);
    Ok(CallToolResult::success(vec![Content::text(
        render::perk_offer(&request.domain, &perks),
    )]))
}
