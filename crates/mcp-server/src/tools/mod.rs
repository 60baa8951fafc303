//! Celestial Forge MCP tool surface.
//!
//! Split into schemas (tool inputs), dispatch (service + router), and plain-text rendering of
//! ledger results.

pub(crate) mod catalog;
mod dispatch;
mod render;
mod schemas;

pub(crate) use catalog::tool_inventory_json;
pub use dispatch::ForgeService;
