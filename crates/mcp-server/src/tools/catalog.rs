use serde_json::json;

#[derive(Clone, Copy, Debug)]
pub(crate) struct ToolDescriptor {
    pub(crate) name: &'static str,
    pub(crate) summary: &'static str,
}

pub(crate) const TOOL_CATALOG: &[ToolDescriptor] = &[
    ToolDescriptor {
        name: "parse_cp_from_text",
        summary: "Read a stated CP balance from text; rises count as earned CP.",
    },
    ToolDescriptor {
        name: "get_current_cp",
        summary: "Current, earned and spent CP plus perk count.",
    },
    ToolDescriptor {
        name: "set_cp",
        summary: "Correct the current balance (does not change CP earned).",
    },
    ToolDescriptor {
        name: "add_cp",
        summary: "Grant CP (raises current and earned).",
    },
    ToolDescriptor {
        name: "get_domain_options",
        summary: "Random domain offer with total/affordable counts.",
    },
    ToolDescriptor {
        name: "get_perks_from_domain",
        summary: "Random offer of affordable perks from one domain.",
    },
    ToolDescriptor {
        name: "select_perk",
        summary: "Buy a perk by exact domain and name.",
    },
    ToolDescriptor {
        name: "get_current_sheet",
        summary: "List purchased perks with spent/remaining CP.",
    },
    ToolDescriptor {
        name: "generate_sheet_export",
        summary: "Formatted sheet block for AI responses.",
    },
    ToolDescriptor {
        name: "clear_sheet",
        summary: "Remove all perks and refund their CP.",
    },
    ToolDescriptor {
        name: "remove_perk",
        summary: "Remove the first sheet entry with this name and refund it.",
    },
];

pub(crate) fn tool_inventory_json(version: &str) -> serde_json::Value {
    let tools: Vec<serde_json::Value> = TOOL_CATALOG
        .iter()
        .map(|tool| json!({ "name": tool.name, "summary": tool.summary }))
        .collect();

    json!({
        "binary": "forge-mcp",
        "version": version,
        "count": tools.len(),
        "tools": tools,
    })
}

pub(crate) fn tool_instructions() -> String {
    let mut lines = vec![
        "Celestial Forge tracks Choice Points (CP) and the perks bought with them.".to_string(),
        "Recommended flow: parse_cp_from_text (or add_cp) → get_domain_options → get_perks_from_domain → select_perk → generate_sheet_export."
            .to_string(),
        "Tools:".to_string(),
    ];
    for tool in TOOL_CATALOG {
        lines.push(format!("- {}: {}", tool.name, tool.summary));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_lists_every_tool_once() {
        let inventory = tool_inventory_json("0.0.0");
        assert_eq!(inventory["count"], TOOL_CATALOG.len());
        let mut names: Vec<&str> = TOOL_CATALOG.iter().map(|t| t.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TOOL_CATALOG.len());
    }

    #[test]
    fn instructions_mention_every_tool() {
        let text = tool_instructions();
        for tool in TOOL_CATALOG {
            assert!(text.contains(tool.name), "missing {}", tool.name);
        }
    }
}
