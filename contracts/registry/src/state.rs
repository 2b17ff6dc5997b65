use cosmwasm_std::{Addr, CanonicalAddr};
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub name: String,
    pub symbol: String,
    pub owner: CanonicalAddr,
    pub minter: CanonicalAddr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Domain {
    pub token_id: String,
    pub owner: Addr,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");
pub const TOKEN_COUNT: Item<u64> = Item::new("TOKEN_COUNT");
// name -> domain
pub const DOMAINS: Map<String, Domain> = Map::new("DOMAINS");
// token_id -> name
pub const TOKEN_NAMES: Map<String, String> = Map::new("TOKEN_NAMES");
// owner -> number of domains held
pub const BALANCES: Map<String, u64> = Map::new("BALANCES");
