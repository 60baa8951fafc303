use rmcp::schemars;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct ParseCpRequest {
    /// Text to scan for a CP balance
    #[schemars(description = "Text to parse for CP values")]
    pub text: String,
}

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct SetCpRequest {
    /// New current balance; negative values clamp to 0
    #[schemars(description = "CP value to set")]
    pub cp: i64,
}

#[derive(Debug, Deserialize, Serialize, schemars::JsonSchema)]
pub struct AddCpRequest {
    /// CP to grant (must not be negative)
    #[schemars(description = "CP value to add")]
    pub cp: i64,
}
