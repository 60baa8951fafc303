use rmcp::schemars;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct SelectPerkRequest {
    #[schemars(description = "Domain the perk belongs to")]
    pub domain: String,

    /// Exact perk name within the domain
    #[schemars(description = "Name of the perk to select")]
    pub perk_name: String,
}

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct RemovePerkRequest {
    /// Exact perk name; the first matching sheet entry is removed
    #[schemars(description = "Name of the perk to remove")]
    pub perk_name: String,
}
