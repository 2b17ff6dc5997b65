use crate::msg::DiscountSource;
use cosmwasm_std::CanonicalAddr;
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tld::pricing::PriceTiers;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub owner: CanonicalAddr,
    pub main_nft_address: CanonicalAddr,
    pub tld_address: CanonicalAddr,
    pub royalty_fee_receiver: CanonicalAddr,
    pub prices: PriceTiers,
    pub payment_denom: String,
    pub discount_percentage: u64,
    pub discount_source: DiscountSource,
    pub referral_fee_bps: u64,
    pub royalty_fee_bps: u64,
}

pub const MAX_FEE_BPS: u64 = 5_000;

pub const CONFIG: Item<Config> = Item::new("CONFIG");
pub const PAUSED: Item<bool> = Item::new("PAUSED");
pub const PARTNER_NFTS: Item<Vec<CanonicalAddr>> = Item::new("PARTNER_NFTS");
// Free domains claimed per requester
pub const FREE_CLAIMS: Map<String, u64> = Map::new("FREE_CLAIMS");
