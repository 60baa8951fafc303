use forge_ledger::{CpChange, DomainStats, LedgerState, PerkRecord, Refund};

use crate::settings::PanelSettings;

pub const EMPTY_SHEET: &str = "No perks selected yet";
pub const NO_AFFORDABLE_PERKS: &str = "No affordable perks in this domain";
pub const NO_DOMAINS: &str = "No domains available. The perk catalog is empty.";
pub const NO_CP_FOUND: &str = "No CP found in text";
const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// The panel's CP box.
pub fn render_status(state: &LedgerState) -> String {
    format!(
        "Current CP: {}\nTotal Earned: {}\nSpent: {}",
        state.current_cp,
        state.total_cp,
        state.spent_cp()
    )
}

pub fn render_cp_update(change: &CpChange) -> String {
    format!(
        "CP updated from {} to {} (total: {})",
        change.previous, change.current, change.total
    )
}

pub fn render_domains(domains: &[(String, DomainStats)]) -> String {
    let mut out = String::new();
    for (name, stats) in domains {
        out.push_str(&format!(
            "{name} ({} total, {} affordable)\n",
            stats.total, stats.affordable
        ));
    }
    out.trim_end().to_string()
}

pub fn render_perk_offer(perks: &[PerkRecord]) -> String {
    if perks.is_empty() {
        return NO_AFFORDABLE_PERKS.to_string();
    }
    let mut out = String::new();
    for perk in perks {
        out.push_str(&format!(
            "{} ({}) [{} CP]\n    {}\n",
            perk.name,
            perk.origin,
            perk.cost,
            perk.description_preview(DESCRIPTION_PREVIEW_CHARS)
        ));
    }
    out.trim_end().to_string()
}

/// Numbered sheet; the numbers are what `remove --index` takes.
pub fn render_sheet_entries(state: &LedgerState) -> String {
    if state.selected_perks.is_empty() {
        return EMPTY_SHEET.to_string();
    }
    let mut out = String::new();
    for (index, perk) in state.selected_perks.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} ({}) [{} CP]\n    {}\n",
            index + 1,
            perk.name,
            perk.origin,
            perk.cost,
            perk.description
        ));
    }
    out.trim_end().to_string()
}

pub fn render_refund(refund: &Refund) -> String {
    format!(
        "Removed \"{}\" and refunded {} CP. Current CP: {}",
        refund.perk.name, refund.refunded, refund.current
    )
}

pub fn render_settings(settings: &PanelSettings) -> String {
    let mut out = String::new();
    out.push_str(&format!("enabled: {}\n", settings.enabled));
    out.push_str(&format!("auto_track_cp: {}\n", settings.auto_track_cp));
    out.push_str(&format!("auto_insert_sheet: {}\n", settings.auto_insert_sheet));
    out.push_str(&format!("cp_patterns: {}", settings.cp_patterns.len()));
    out
}

pub fn render_patterns(patterns: &[String]) -> String {
    if patterns.is_empty() {
        return "No CP patterns configured".to_string();
    }
    patterns
        .iter()
        .enumerate()
        .map(|(index, pattern)| format!("{}. {pattern}", index + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
