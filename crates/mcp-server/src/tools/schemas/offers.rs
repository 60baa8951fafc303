use rmcp::schemars;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize, schemars::JsonSchema)]
pub struct DomainOptionsRequest {
    /// Offer size (default: server offer size, usually 4)
    #[schemars(description = "Number of domains to return (default: 4)")]
    pub count: Option<usize>,
}

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct DomainPerksRequest {
    #[schemars(description = "Domain name to get perks from")]
    pub domain: String,

    /// Offer size (default: server offer size, usually 4)
    #[schemars(description = "Number of perks to return (default: 4)")]
    pub count: Option<usize>,
}
