//! MCP tool dispatch for the Celestial Forge
//!
//! One [`ForgeService`] owns one ledger. Clones share it, so every connection served by the
//! process sees the same balance and sheet.

use forge_ledger::{CpParser, LedgerEngine};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::model::{CallToolResult, Content};
use rmcp::ErrorData as McpError;
use std::sync::Arc;
use tokio::sync::Mutex;

mod router;
mod service;

/// Celestial Forge MCP Service
#[derive(Clone)]
pub struct ForgeService {
    /// Tool router
    tool_router: ToolRouter<Self>,
    /// The session ledger
    ledger: Arc<Mutex<LedgerEngine>>,
    /// Built-in CP pattern cascade
    parser: Arc<CpParser>,
    /// Offer size when a call omits `count`
    offer_size: usize,
}
