use super::{router, ForgeService};
use crate::runtime_env::{ServerConfig, MAX_OFFER_SIZE};
use crate::tools::catalog;
use forge_ledger::{CpParser, LedgerEngine, PerkCatalog};
use rmcp::model::{Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool_handler, ServerHandler};
use std::sync::Arc;
use tokio::sync::Mutex;

impl ForgeService {
    pub fn new(catalog: PerkCatalog, offer_size: usize) -> Self {
        Self::with_engine(LedgerEngine::new(Arc::new(catalog)), offer_size)
    }

    /// Load the catalog named by `config`; an unloadable catalog leaves the server running
    /// with nothing to offer.
    pub fn from_config(config: &ServerConfig) -> Self {
        let catalog = PerkCatalog::load_first_available(&config.perks_candidates);
        if catalog.is_empty() {
            log::warn!("Perk catalog is empty; domain and perk offers will be empty");
        }
        Self::new(catalog, config.offer_size)
    }

    pub fn with_engine(engine: LedgerEngine, offer_size: usize) -> Self {
        Self {
            tool_router: router::build_tool_router(),
            ledger: Arc::new(Mutex::new(engine)),
            parser: Arc::new(CpParser::builtin()),
            offer_size: offer_size.clamp(1, MAX_OFFER_SIZE),
        }
    }

    /// Offer size for a request: explicit `count` wins, capped at [`MAX_OFFER_SIZE`].
    pub(super) fn offer_size_for(&self, count: Option<usize>) -> usize {
        count.unwrap_or(self.offer_size).min(MAX_OFFER_SIZE)
    }
}

#[tool_handler]
impl ServerHandler for ForgeService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(catalog::tool_instructions()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
