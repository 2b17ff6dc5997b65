use cosmwasm_std::{StdError, Uint128};
use cw0::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized: Sender is {sender}, but owner is {owner}.")]
    Unauthorized { sender: String, owner: String },

    #[error("MintingPaused")]
    MintingPaused {},

    #[error("Value below price: sent {amount}, required {required}.")]
    InsufficientPayment { amount: Uint128, required: Uint128 },

    #[error("InvalidPriceTiers: shorter names must not be cheaper than longer ones.")]
    InvalidPriceTiers {},

    #[error("InvalidDiscount: {percentage}% is above 100%.")]
    InvalidDiscount { percentage: u64 },

    #[error("FeeTooHigh: referral fee {referral_fee_bps} bps, royalty fee {royalty_fee_bps} bps.")]
    FeeTooHigh {
        referral_fee_bps: u64,
        royalty_fee_bps: u64,
    },

    #[error("PartnerNftAlreadyAdded: {address}")]
    PartnerNftAlreadyAdded { address: String },

    #[error("PartnerNftNotFound: {address}")]
    PartnerNftNotFound { address: String },
}
