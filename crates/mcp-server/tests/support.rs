#![allow(dead_code)]

use anyhow::{Context, Result};
use rmcp::model::{CallToolRequestParam, CallToolResult};
use rmcp::service::{RoleClient, RunningService, ServiceExt};
use rmcp::transport::TokioChildProcess;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::process::Command;

pub const CATALOG_JSON: &str = r#"{
  "Crafting": [
    { "name": "Forgeborn", "origin": "Smithing", "cost": 100, "description": "Hammer and anvil." },
    { "name": "Tinker", "origin": "Gadgets", "cost": 50, "description": "Small machines." }
  ],
  "Magic": [
    { "name": "Archmage", "origin": "Wizardry", "cost": 600, "description": "Everything." }
  ]
}"#;

pub fn locate_forge_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_forge-mcp") {
        return Ok(PathBuf::from(path));
    }

    // `.../target/{debug|release}/deps/<test>` → `.../target/{debug|release}/forge-mcp`
    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("forge-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in ["target/debug/forge-mcp", "target/release/forge-mcp"] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!("failed to locate forge-mcp binary; build with: cargo build -p forge-mcp")
}

pub fn write_catalog(dir: &Path) -> Result<PathBuf> {
    let path = dir.join("perks.json");
    std::fs::write(&path, CATALOG_JSON).context("write perks.json")?;
    Ok(path)
}

pub async fn start_server(perks_path: &Path) -> Result<RunningService<RoleClient, ()>> {
    let mut cmd = Command::new(locate_forge_mcp_bin()?);
    cmd.env("FORGE_PERKS_PATH", perks_path);
    cmd.env_remove("FORGE_OFFER_SIZE");
    cmd.env("RUST_LOG", "warn");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")?
        .context("initialize MCP session")
}

pub async fn call(
    service: &RunningService<RoleClient, ()>,
    name: &'static str,
    args: serde_json::Value,
) -> Result<CallToolResult> {
    tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: name.into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .with_context(|| format!("timeout calling {name}"))?
    .with_context(|| format!("call {name}"))
}

pub fn text(result: &CallToolResult) -> Result<&str> {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .context("tool result missing text output")
}
