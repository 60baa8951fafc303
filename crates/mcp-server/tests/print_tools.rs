use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::time::Duration;
use tokio::process::Command;

mod support;

use support::{locate_forge_mcp_bin, start_server, write_catalog};

#[tokio::test]
async fn print_tools_matches_list_tools() -> Result<()> {
    let bin = locate_forge_mcp_bin()?;

    let output = Command::new(&bin)
        .arg("--print-tools")
        .output()
        .await
        .context("run forge-mcp --print-tools")?;
    assert!(
        output.status.success(),
        "print-tools failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).context("decode print-tools stdout")?;
    let payload: Value = serde_json::from_str(&stdout).context("parse print-tools JSON")?;
    assert_eq!(
        payload
            .get("version")
            .and_then(Value::as_str)
            .unwrap_or_default(),
        env!("CARGO_PKG_VERSION"),
        "print-tools version mismatch"
    );

    let printed_tools = payload
        .get("tools")
        .and_then(Value::as_array)
        .context("print-tools missing tools array")?;
    let printed: HashSet<String> = printed_tools
        .iter()
        .filter_map(|tool| tool.get("name").and_then(Value::as_str))
        .map(|name| name.to_string())
        .collect();
    assert!(!printed.is_empty(), "print-tools returned no tools");

    let tmp = tempfile::tempdir().context("tempdir")?;
    let service = start_server(&write_catalog(tmp.path())?).await?;

    let tools = tokio::time::timeout(
        Duration::from_secs(10),
        service.list_tools(Default::default()),
    )
    .await
    .context("timeout listing tools")??;
    let listed: HashSet<String> = tools
        .tools
        .iter()
        .map(|t| t.name.as_ref().to_string())
        .collect();

    assert_eq!(printed, listed, "print-tools mismatch with list_tools");
    service.cancel().await.context("shutdown mcp server")?;
    Ok(())
}
