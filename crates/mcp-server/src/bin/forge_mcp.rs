use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    forge_mcp::main_entry().await
}
