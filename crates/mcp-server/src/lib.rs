//! Celestial Forge MCP Server
//!
//! Exposes the CP ledger to AI agents via MCP protocol. One ledger lives for the lifetime of
//! the server process.
//!
//! ## Tools
//!
//! - `parse_cp_from_text` - Update CP from a stated balance in free text
//! - `get_current_cp` / `set_cp` / `add_cp` - Inspect and adjust the balance
//! - `get_domain_options` / `get_perks_from_domain` - Random offers
//! - `select_perk` / `remove_perk` / `clear_sheet` - Sheet mutations
//! - `get_current_sheet` / `generate_sheet_export` - Sheet views
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "celestial-forge": {
//!       "command": "forge-mcp",
//!       "env": { "FORGE_PERKS_PATH": "/path/to/perks.json" }
//!     }
//!   }
//! }
//! ```

use anyhow::{Context, Result};
use rmcp::transport::stdio;
use rmcp::ServiceExt;

pub mod runtime_env;
#[cfg(test)]
mod test_support;
mod tools;

pub use runtime_env::ServerConfig;
pub use tools::ForgeService;

pub async fn main_entry() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--print-tools") {
        let inventory = tools::tool_inventory_json(env!("CARGO_PKG_VERSION"));
        println!(
            "{}",
            serde_json::to_string_pretty(&inventory).context("serialize tool inventory")?
        );
        return Ok(());
    }

    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = ServerConfig::from_env();
    let service = ForgeService::from_config(&config);

    log::info!("Starting Celestial Forge MCP server");
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("Celestial Forge MCP server stopped");
    Ok(())
}
