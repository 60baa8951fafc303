// Human-readable tool output.

use forge_ledger::{
    CpChange, DomainStats, LedgerState, LedgerSummary, PerkRecord, Purchase, Refund,
};

/// Offer previews cut descriptions to this many characters.
const DESCRIPTION_PREVIEW_CHARS: usize = 100;

pub(super) const NO_CP_FOUND: &str = "No CP values found in the provided text.";
pub(super) const EMPTY_SHEET: &str = "No perks selected yet.";
pub(super) const NO_DOMAINS: &str = "No domains available. The perk catalog is empty.";

pub(super) fn cp_found(change: &CpChange) -> String {
    format!(
        "Found CP: {current}. Updated from {previous} to {current}. Total CP earned: {total}",
        current = change.current,
        previous = change.previous,
        total = change.total
    )
}

pub(super) fn status(summary: &LedgerSummary) -> String {
    format!(
        "Current CP: {}\nTotal CP Earned: {}\nCP Spent: {}\nPerks Selected: {}",
        summary.current_cp, summary.total_cp, summary.spent_cp, summary.perk_count
    )
}

pub(super) fn cp_set(change: &CpChange) -> String {
    format!("CP manually set from {} to {}", change.previous, change.current)
}

pub(super) fn cp_added(delta: i64, change: &CpChange) -> String {
    format!(
        "Added {delta} CP. Current CP: {}, Total earned: {}",
        change.current, change.total
    )
}

pub(super) fn domain_offer(domains: &[(String, DomainStats)]) -> String {
    let lines: Vec<String> = domains
        .iter()
        .map(|(name, stats)| {
            format!(
                "{name} ({} total, {} affordable)",
                stats.total, stats.affordable
            )
        })
        .collect();
    format!("Available domains:\n{}", lines.join("\n"))
}

pub(super) fn perk_offer(domain: &str, perks: &[PerkRecord]) -> String {
    if perks.is_empty() {
        return format!("No affordable perks available in domain: {domain}");
    }
    let entries: Vec<String> = perks
        .iter()
        .map(|perk| {
            format!(
                "**{}** ({}) [{} CP]\n{}",
                perk.name,
                perk.origin,
                perk.cost,
                perk.description_preview(DESCRIPTION_PREVIEW_CHARS)
            )
        })
        .collect();
    format!("Available perks from {domain}:\n\n{}", entries.join("\n\n"))
}

pub(super) fn purchase(purchase: &Purchase) -> String {
    format!(
        "Successfully selected \"{}\" for {} CP. Remaining CP: {}",
        purchase.perk.name, purchase.cost, purchase.remaining
    )
}

pub(super) fn sheet_listing(state: &LedgerState) -> String {
    if state.selected_perks.is_empty() {
        return EMPTY_SHEET.to_string();
    }
    let entries: Vec<String> = state
        .selected_perks
        .iter()
        .enumerate()
        .map(|(index, perk)| {
            format!(
                "{}. **{}** ({}) [{} CP]",
                index + 1,
                perk.name,
                perk.origin,
                perk.cost
            )
        })
        .collect();
    format!(
        "Current Character Sheet:\n{}\n\nTotal CP Spent: {}\nRemaining CP: {}",
        entries.join("\n"),
        state.spent_cp(),
        state.current_cp
    )
}

pub(super) fn sheet_cleared(refunded: u64, current: u64) -> String {
    format!("Sheet cleared. Refunded {refunded} CP. Current CP: {current}")
}

pub(super) fn perk_removed(refund: &Refund) -> String {
    format!(
        "Removed \"{}\" and refunded {} CP. Current CP: {}",
        refund.perk.name, refund.refunded, refund.current
    )
}
