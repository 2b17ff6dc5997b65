use cosmwasm_std::Addr;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use crate::nft::BalanceResponse;
pub use cw721::{ContractInfoResponse, NumTokensResponse, OwnerOfResponse};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    /// Name of the TLD, e.g. ".satrap"
    pub name: String,
    /// Symbol of the TLD, e.g. ".SATRAP"
    pub symbol: String,
    /// Address allowed to mint domains. Defaults to the instantiator.
    pub minter: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Mint a new domain, can only be called by the minter
    Mint {
        name: String,
        owner: String,
    },

    // Only owner
    ChangeMinter {
        minter: String,
    },
    TransferOwnership {
        owner: String,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// Number of domains held by `owner`.
    /// Return type: BalanceResponse
    BalanceOf {
        owner: String,
    },
    Minter {},
    Owner {},
    /// Name and symbol of the TLD: `ContractInfoResponse`
    ContractInfo {},
    /// Total number of domains minted
    NumTokens {},
    Domain {
        name: String,
    },
    OwnerOf {
        token_id: String,
    },
}

/// Set as response data on a successful mint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MintResponse {
    pub token_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MinterResponse {
    pub minter: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DomainResponse {
    pub name: String,
    pub token_id: String,
    pub owner: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
