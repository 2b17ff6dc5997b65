use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Query surface the minter expects from any NFT collection it reads
/// ownership from. The domain registry answers the same message.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// Number of tokens held by `owner`.
    /// Return type: BalanceResponse
    BalanceOf { owner: String },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct BalanceResponse {
    pub balance: u64,
}
