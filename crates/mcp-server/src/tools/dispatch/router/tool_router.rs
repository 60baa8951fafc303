use super::super::{CallToolResult, ForgeService, McpError};
use crate::tools::schemas::cp::{AddCpRequest, ParseCpRequest, SetCpRequest};
use crate::tools::schemas::offers::{DomainOptionsRequest, DomainPerksRequest};
use crate::tools::schemas::sheet::{RemovePerkRequest, SelectPerkRequest};

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::{tool, tool_router};

pub(super) fn build_tool_router() -> ToolRouter<ForgeService> {
    ForgeService::tool_router()
}

#[tool_router]
impl ForgeService {
    /// Update CP from a balance stated in free text.
    #[tool(description = "Parse Choice Points (CP) from text, typically AI responses")]
    pub async fn parse_cp_from_text(
        &self,
        Parameters(request): Parameters<ParseCpRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::cp::parse_cp_from_text(self, request).await
    }

    #[tool(description = "Get current CP status and statistics")]
    pub async fn get_current_cp(&self) -> Result<CallToolResult, McpError> {
        super::cp::get_current_cp(self).await
    }

    #[tool(description = "Manually set current CP value")]
    pub async fn set_cp(
        &self,
        Parameters(request): Parameters<SetCpRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::cp::set_cp(self, request).await
    }

    #[tool(description = "Add CP to current total")]
    pub async fn add_cp(
        &self,
        Parameters(request): Parameters<AddCpRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::cp::add_cp(self, request).await
    }

    #[tool(description = "Get random domain options for perk selection")]
    pub async fn get_domain_options(
        &self,
        Parameters(request): Parameters<DomainOptionsRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::offers::get_domain_options(self, request).await
    }

    #[tool(description = "Get available perks from a specific domain")]
    pub async fn get_perks_from_domain(
        &self,
        Parameters(request): Parameters<DomainPerksRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::offers::get_perks_from_domain(self, request).await
    }

    #[tool(description = "Select a perk and add it to the character sheet")]
    pub async fn select_perk(
        &self,
        Parameters(request): Parameters<SelectPerkRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::sheet::select_perk(self, request).await
    }

    #[tool(description = "Get the current character sheet with all selected perks")]
    pub async fn get_current_sheet(&self) -> Result<CallToolResult, McpError> {
        super::sheet::get_current_sheet(self).await
    }

    #[tool(description = "Generate formatted sheet export for AI responses")]
    pub async fn generate_sheet_export(&self) -> Result<CallToolResult, McpError> {
        super::sheet::generate_sheet_export(self).await
    }

    #[tool(description = "Clear all selected perks and refund CP")]
    pub async fn clear_sheet(&self) -> Result<CallToolResult, McpError> {
        super::sheet::clear_sheet(self).await
    }

    #[tool(description = "Remove a specific perk from the sheet and refund its CP")]
    pub async fn remove_perk(
        &self,
        Parameters(request): Parameters<RemovePerkRequest>,
    ) -> Result<CallToolResult, McpError> {
        super::sheet::remove_perk(self, request).await
    }
}
