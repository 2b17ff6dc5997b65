use cosmwasm_std::{Addr, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tld::pricing::PriceTiers;

/// Collections whose holders are eligible for the discount.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DiscountSource {
    /// Holders of the main collection.
    Main,
    /// Holders of any registered partner collection.
    Partners,
    /// Holders of the main collection or any partner collection.
    Any,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    /// Collection whose holders get free domains, one per token held
    pub main_nft_address: String,
    /// Domain registry this contract mints through
    pub tld_address: String,
    pub prices: PriceTiers,
    pub payment_denom: String,
    pub discount_percentage: u64,
    pub discount_source: DiscountSource,
    pub referral_fee_bps: u64,
    pub royalty_fee_bps: u64,
    /// Defaults to the instantiator
    pub royalty_fee_receiver: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    Mint {
        name: String,
        recipient: String,
        referrer: Option<String>,
    },
    ClaimFreeDomain {
        name: String,
        recipient: String,
    },

    // Only owner
    OwnerFreeMint {
        name: String,
        recipient: String,
    },
    TogglePaused {},
    AddPartnerNftAddress {
        address: String,
    },
    RemovePartnerNftAddress {
        address: String,
    },
    ChangePrices {
        prices: PriceTiers,
    },
    ChangeDiscount {
        percentage: u64,
        source: DiscountSource,
    },
    ChangeReferralFee {
        referral_fee_bps: u64,
    },
    ChangeRoyaltyFee {
        royalty_fee_bps: u64,
    },
    ChangeRoyaltyFeeReceiver {
        address: String,
    },
    TransferOwnership {
        owner: String,
    },
    Withdraw {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
    Owner {},
    Paused {},
    Prices {},
    PriceForLength {
        length: u64,
    },
    /// Price `requester` would pay for `name`, discount applied.
    /// Without a requester the base price is returned.
    MintPrice {
        name: String,
        requester: Option<String>,
    },
    CanGetDiscount {
        address: String,
    },
    CanClaimFreeDomain {
        address: String,
    },
    FreeClaims {
        address: String,
    },
    PartnerNftAddresses {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub owner: Addr,
    pub main_nft_address: Addr,
    pub tld_address: Addr,
    pub royalty_fee_receiver: Addr,
    pub prices: PriceTiers,
    pub payment_denom: String,
    pub discount_percentage: u64,
    pub discount_source: DiscountSource,
    pub referral_fee_bps: u64,
    pub royalty_fee_bps: u64,
    pub paused: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PausedResponse {
    pub paused: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PriceResponse {
    pub price: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MintPriceResponse {
    pub base_price: Uint128,
    pub discounted: bool,
    pub price: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct EligibilityResponse {
    pub eligible: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct FreeClaimsResponse {
    pub claimed: u64,
    pub entitled: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PartnerNftAddressesResponse {
    pub addresses: Vec<Addr>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
