// Per-tool dispatch functions used by the MCP tool router.

pub(super) mod cp;
pub(super) mod error;
pub(super) mod offers;
pub(super) mod sheet;

mod tool_router;

pub(super) fn build_tool_router() -> rmcp::handler::server::tool::ToolRouter<super::ForgeService>
{
    tool_router::build_tool_router()
}
