use crate::ledger::LedgerState;

/// Centered title line of the exported sheet
pub const SHEET_TITLE: &str = r#"<div align="center"> <b>THE CELESTIAL FORGE</b> </div>"#;

/// Rule separating sheet sections
pub const SHEET_RULE: &str = "<hr>";

/// Render the sheet as the copy/paste block used in chat responses.
///
/// Layout: title, rule, then per perk a `[name] - origin - cost CP` line, its description, one
/// indented line per sub-perk, and a rule. A non-empty sheet ends with the current CP, the perk
/// count and a final rule; an empty sheet is just title and rule.
pub fn render_sheet(state: &LedgerState) -> String {
    let mut out = String::new();
    push_line(&mut out, SHEET_TITLE);
    push_line(&mut out, SHEET_RULE);

    for perk in &state.selected_perks {
        push_line(
            &mut out,
            &format!("[{}] - {} - {} CP", perk.name, perk.origin, perk.cost),
        );
        push_line(&mut out, &perk.description);
        for sub in &perk.sub_perks {
            push_line(
                &mut out,
                &format!("  └ {} - {} - {} CP", sub.name, sub.origin, sub.cost),
            );
        }
        push_line(&mut out, SHEET_RULE);
    }

    if !state.selected_perks.is_empty() {
        push_line(&mut out, &format!("Current CP: {}", state.current_cp));
        push_line(
            &mut out,
            &format!("Total Perks: {}", state.selected_perks.len()),
        );
        push_line(&mut out, SHEET_RULE);
    }

    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}
