use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    forge_cli::main_entry().await
}
