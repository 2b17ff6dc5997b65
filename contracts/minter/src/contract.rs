use crate::error::ContractError;
use crate::handler::{
    add_partner_nft_address, change_discount, change_prices, change_referral_fee,
    change_royalty_fee, change_royalty_fee_receiver, claim_free_domain, get_can_claim_free_domain,
    get_can_get_discount, get_config, get_free_claims, get_mint_price, get_owner, get_paused,
    get_partner_nft_addresses, get_price_for_length, get_prices, mint, owner_free_mint,
    remove_partner_nft_address, toggle_paused, transfer_ownership, validate_discount,
    validate_fees, validate_prices, withdraw,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{Config, CONFIG, PARTNER_NFTS, PAUSED};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:partner-minter";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    validate_prices(&msg.prices)?;
    validate_discount(msg.discount_percentage)?;
    validate_fees(msg.referral_fee_bps, msg.royalty_fee_bps)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let owner = deps.api.addr_canonicalize(info.sender.as_str())?;
    let main_nft_address = deps.api.addr_canonicalize(msg.main_nft_address.as_str())?;
    let tld_address = deps.api.addr_canonicalize(msg.tld_address.as_str())?;
    let royalty_fee_receiver = match msg.royalty_fee_receiver {
        Some(receiver) => deps.api.addr_canonicalize(receiver.as_str())?,
        None => owner.clone(),
    };
    CONFIG.save(
        deps.storage,
        &Config {
            owner,
            main_nft_address,
            tld_address,
            royalty_fee_receiver,
            prices: msg.prices,
            payment_denom: msg.payment_denom,
            discount_percentage: msg.discount_percentage,
            discount_source: msg.discount_source,
            referral_fee_bps: msg.referral_fee_bps,
            royalty_fee_bps: msg.royalty_fee_bps,
        },
    )?;
    // Minting starts paused until the owner opens it
    PAUSED.save(deps.storage, &true)?;
    PARTNER_NFTS.save(deps.storage, &vec![])?;
    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("main_nft_address", msg.main_nft_address)
        .add_attribute("tld_address", msg.tld_address))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Mint {
            name,
            recipient,
            referrer,
        } => mint(deps, env, info, name, recipient, referrer),
        ExecuteMsg::ClaimFreeDomain { name, recipient } => {
            claim_free_domain(deps, env, info, name, recipient)
        }

        // Only owner
        ExecuteMsg::OwnerFreeMint { name, recipient } => {
            owner_free_mint(deps, env, info, name, recipient)
        }
        ExecuteMsg::TogglePaused {} => toggle_paused(deps, env, info),
        ExecuteMsg::AddPartnerNftAddress { address } => {
            add_partner_nft_address(deps, env, info, address)
        }
        ExecuteMsg::RemovePartnerNftAddress { address } => {
            remove_partner_nft_address(deps, env, info, address)
        }
        ExecuteMsg::ChangePrices { prices } => change_prices(deps, env, info, prices),
        ExecuteMsg::ChangeDiscount { percentage, source } => {
            change_discount(deps, env, info, percentage, source)
        }
        ExecuteMsg::ChangeReferralFee { referral_fee_bps } => {
            change_referral_fee(deps, env, info, referral_fee_bps)
        }
        ExecuteMsg::ChangeRoyaltyFee { royalty_fee_bps } => {
            change_royalty_fee(deps, env, info, royalty_fee_bps)
        }
        ExecuteMsg::ChangeRoyaltyFeeReceiver { address } => {
            change_royalty_fee_receiver(deps, env, info, address)
        }
        ExecuteMsg::TransferOwnership { owner } => transfer_ownership(deps, env, info, owner),
        ExecuteMsg::Withdraw {} => withdraw(deps, env, info),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_binary(&get_config(deps)?),
        QueryMsg::Owner {} => to_binary(&get_owner(deps)?),
        QueryMsg::Paused {} => to_binary(&get_paused(deps)?),
        QueryMsg::Prices {} => to_binary(&get_prices(deps)?),
        QueryMsg::PriceForLength { length } => to_binary(&get_price_for_length(deps, length)?),
        QueryMsg::MintPrice { name, requester } => {
            to_binary(&get_mint_price(deps, name, requester)?)
        }
        QueryMsg::CanGetDiscount { address } => to_binary(&get_can_get_discount(deps, address)?),
        QueryMsg::CanClaimFreeDomain { address } => {
            to_binary(&get_can_claim_free_domain(deps, address)?)
        }
        QueryMsg::FreeClaims { address } => to_binary(&get_free_claims(deps, address)?),
        QueryMsg::PartnerNftAddresses {} => to_binary(&get_partner_nft_addresses(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    Ok(Response::default())
}
