use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, DiscountSource, EligibilityResponse, FreeClaimsResponse, MintPriceResponse,
    OwnerResponse, PartnerNftAddressesResponse, PausedResponse, PriceResponse,
};
use crate::state::{Config, CONFIG, FREE_CLAIMS, MAX_FEE_BPS, PARTNER_NFTS, PAUSED};
use cosmwasm_std::{
    to_binary, Addr, BankMsg, CanonicalAddr, Coin, CosmosMsg, Deps, DepsMut, Env, MessageInfo,
    QueryRequest, Response, StdResult, Uint128, WasmMsg, WasmQuery,
};
use cw0::may_pay;
use std::convert::TryFrom;
use tld::nft::{BalanceResponse, QueryMsg as NftQueryMsg};
use tld::pricing::{discounted_price, fee_share, PriceTiers};
use tld::registry::ExecuteMsg as RegistryExecuteMsg;
use tld::utils::name_length;

fn only_owner(deps: Deps, info: &MessageInfo) -> Result<bool, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if sender != config.owner {
        return Err(ContractError::Unauthorized {
            sender: info.sender.to_string(),
            owner: deps.api.addr_humanize(&config.owner)?.to_string(),
        });
    }
    Ok(true)
}

pub fn validate_prices(prices: &PriceTiers) -> Result<(), ContractError> {
    if !prices.is_non_increasing() {
        return Err(ContractError::InvalidPriceTiers {});
    }
    Ok(())
}

pub fn validate_discount(percentage: u64) -> Result<(), ContractError> {
    if percentage > 100 {
        return Err(ContractError::InvalidDiscount { percentage });
    }
    Ok(())
}

pub fn validate_fees(referral_fee_bps: u64, royalty_fee_bps: u64) -> Result<(), ContractError> {
    if referral_fee_bps > MAX_FEE_BPS || royalty_fee_bps > MAX_FEE_BPS {
        return Err(ContractError::FeeTooHigh {
            referral_fee_bps,
            royalty_fee_bps,
        });
    }
    Ok(())
}

fn query_nft_balance(deps: Deps, collection: &CanonicalAddr, owner: &Addr) -> StdResult<u64> {
    let contract_addr = deps.api.addr_humanize(collection)?.to_string();
    let balance_response: BalanceResponse =
        deps.querier.query(&QueryRequest::Wasm(WasmQuery::Smart {
            contract_addr,
            msg: to_binary(&NftQueryMsg::BalanceOf {
                owner: owner.to_string(),
            })?,
        }))?;
    Ok(balance_response.balance)
}

fn holds_main_nft(deps: Deps, config: &Config, owner: &Addr) -> StdResult<bool> {
    Ok(query_nft_balance(deps, &config.main_nft_address, owner)? > 0)
}

fn holds_partner_nft(deps: Deps, owner: &Addr) -> StdResult<bool> {
    for collection in PARTNER_NFTS.load(deps.storage)?.iter() {
        if query_nft_balance(deps, collection, owner)? > 0 {
            return Ok(true);
        }
    }
    Ok(false)
}

pub fn can_get_discount(deps: Deps, config: &Config, requester: &Addr) -> StdResult<bool> {
    match config.discount_source {
        DiscountSource::Main => holds_main_nft(deps, config, requester),
        DiscountSource::Partners => holds_partner_nft(deps, requester),
        DiscountSource::Any => {
            Ok(holds_main_nft(deps, config, requester)? || holds_partner_nft(deps, requester)?)
        }
    }
}

/// Returns `(claimed, entitled)`. One free domain per main collection token held.
pub fn free_claim_status(deps: Deps, config: &Config, requester: &Addr) -> StdResult<(u64, u64)> {
    let claimed = FREE_CLAIMS
        .may_load(deps.storage, requester.to_string())?
        .unwrap_or_default();
    let entitled = query_nft_balance(deps, &config.main_nft_address, requester)?;
    Ok((claimed, entitled))
}

pub fn get_cost(
    deps: Deps,
    config: &Config,
    name: &str,
    requester: Option<&Addr>,
) -> StdResult<MintPriceResponse> {
    let base_price = config.prices.price_for(name_length(name));
    let discounted = match requester {
        Some(requester) => can_get_discount(deps, config, requester)?,
        None => false,
    };
    let price = if discounted {
        discounted_price(base_price, config.discount_percentage)
    } else {
        base_price
    };
    Ok(MintPriceResponse {
        base_price,
        discounted,
        price,
    })
}

fn mint_domain_msg(
    deps: Deps,
    config: &Config,
    name: String,
    recipient: &Addr,
) -> StdResult<CosmosMsg> {
    let tld_address = deps.api.addr_humanize(&config.tld_address)?.to_string();
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: tld_address,
        msg: to_binary(&RegistryExecuteMsg::Mint {
            name,
            owner: recipient.to_string(),
        })?,
        funds: vec![],
    }))
}

fn send_fee_msg(to_address: String, amount: Uint128, denom: &str) -> CosmosMsg {
    CosmosMsg::Bank(BankMsg::Send {
        to_address,
        amount: vec![Coin {
            denom: String::from(denom),
            amount,
        }],
    })
}

fn validate_not_paused(deps: Deps) -> Result<(), ContractError> {
    if PAUSED.load(deps.storage)? {
        return Err(ContractError::MintingPaused {});
    }
    Ok(())
}

pub fn mint(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    name: String,
    recipient: String,
    referrer: Option<String>,
) -> Result<Response, ContractError> {
    validate_not_paused(deps.as_ref())?;

    let config = CONFIG.load(deps.storage)?;
    let payment = may_pay(&info, &config.payment_denom)?;
    let cost = get_cost(deps.as_ref(), &config, &name, Some(&info.sender))?;
    if payment < cost.price {
        return Err(ContractError::InsufficientPayment {
            amount: payment,
            required: cost.price,
        });
    }

    let recipient = deps.api.addr_validate(&recipient)?;
    let referrer = referrer
        .map(|referrer| deps.api.addr_validate(&referrer))
        .transpose()?;

    let mut messages: Vec<CosmosMsg> =
        vec![mint_domain_msg(deps.as_ref(), &config, name.clone(), &recipient)?];

    let mut response = Response::new();
    if let Some(referrer) = referrer {
        let referral_fee = fee_share(payment, config.referral_fee_bps);
        if !referral_fee.is_zero() {
            messages.push(send_fee_msg(
                referrer.to_string(),
                referral_fee,
                &config.payment_denom,
            ));
        }
        response = response
            .add_attribute("referrer", referrer)
            .add_attribute("referral_fee", referral_fee.to_string());
    }

    let royalty_fee = fee_share(payment, config.royalty_fee_bps);
    if !royalty_fee.is_zero() {
        let royalty_fee_receiver = deps.api.addr_humanize(&config.royalty_fee_receiver)?;
        messages.push(send_fee_msg(
            royalty_fee_receiver.to_string(),
            royalty_fee,
            &config.payment_denom,
        ));
    }

    Ok(response
        .add_messages(messages)
        .add_attribute("method", "mint")
        .add_attribute("name", name)
        .add_attribute("recipient", recipient)
        .add_attribute("price", cost.price.to_string())
        .add_attribute("discounted", cost.discounted.to_string())
        .add_attribute("payment", payment.to_string())
        .add_attribute("royalty_fee", royalty_fee.to_string()))
}

pub fn claim_free_domain(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    name: String,
    recipient: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let (claimed, entitled) = free_claim_status(deps.as_ref(), &config, &info.sender)?;

    // Claims past the quota succeed without minting anything. The `claimed`
    // attribute is the only signal the caller gets.
    if claimed >= entitled {
        return Ok(Response::new()
            .add_attribute("method", "claim_free_domain")
            .add_attribute("requester", info.sender)
            .add_attribute("name", name)
            .add_attribute("claimed", "false"));
    }

    let recipient = deps.api.addr_validate(&recipient)?;
    FREE_CLAIMS.save(deps.storage, info.sender.to_string(), &(claimed + 1))?;
    let message = mint_domain_msg(deps.as_ref(), &config, name.clone(), &recipient)?;

    Ok(Response::new()
        .add_message(message)
        .add_attribute("method", "claim_free_domain")
        .add_attribute("requester", info.sender)
        .add_attribute("name", name)
        .add_attribute("recipient", recipient)
        .add_attribute("claimed", "true")
        .add_attribute("claims_left", (entitled - claimed - 1).to_string()))
}

pub fn owner_free_mint(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    name: String,
    recipient: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let config = CONFIG.load(deps.storage)?;
    let recipient = deps.api.addr_validate(&recipient)?;
    let message = mint_domain_msg(deps.as_ref(), &config, name.clone(), &recipient)?;
    Ok(Response::new()
        .add_message(message)
        .add_attribute("method", "owner_free_mint")
        .add_attribute("name", name)
        .add_attribute("recipient", recipient))
}

pub fn toggle_paused(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let paused = PAUSED.update(deps.storage, |paused| -> StdResult<bool> { Ok(!paused) })?;
    Ok(Response::new()
        .add_attribute("method", "toggle_paused")
        .add_attribute("paused", paused.to_string()))
}

pub fn add_partner_nft_address(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let canonical_address = deps.api.addr_canonicalize(address.as_str())?;
    let mut partner_nfts = PARTNER_NFTS.load(deps.storage)?;
    if partner_nfts.contains(&canonical_address) {
        return Err(ContractError::PartnerNftAlreadyAdded { address });
    }
    partner_nfts.push(canonical_address);
    PARTNER_NFTS.save(deps.storage, &partner_nfts)?;
    Ok(Response::new()
        .add_attribute("method", "add_partner_nft_address")
        .add_attribute("address", address))
}

pub fn remove_partner_nft_address(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let canonical_address = deps.api.addr_canonicalize(address.as_str())?;
    let mut partner_nfts = PARTNER_NFTS.load(deps.storage)?;
    let index = match partner_nfts.iter().position(|nft| *nft == canonical_address) {
        Some(index) => index,
        None => return Err(ContractError::PartnerNftNotFound { address }),
    };
    partner_nfts.remove(index);
    PARTNER_NFTS.save(deps.storage, &partner_nfts)?;
    Ok(Response::new()
        .add_attribute("method", "remove_partner_nft_address")
        .add_attribute("address", address))
}

pub fn change_prices(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    prices: PriceTiers,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    validate_prices(&prices)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.prices = prices.clone();
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "change_prices")
        .add_attribute("price_1_char", prices.price_1_char.to_string())
        .add_attribute("price_2_char", prices.price_2_char.to_string())
        .add_attribute("price_3_char", prices.price_3_char.to_string())
        .add_attribute("price_4_char", prices.price_4_char.to_string())
        .add_attribute("price_5_char", prices.price_5_char.to_string()))
}

pub fn change_discount(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    percentage: u64,
    source: DiscountSource,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    validate_discount(percentage)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.discount_percentage = percentage;
    config.discount_source = source;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "change_discount")
        .add_attribute("percentage", percentage.to_string())
        .add_attribute("source", format!("{:?}", source).to_lowercase()))
}

pub fn change_referral_fee(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    referral_fee_bps: u64,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;
    validate_fees(referral_fee_bps, config.royalty_fee_bps)?;
    config.referral_fee_bps = referral_fee_bps;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "change_referral_fee")
        .add_attribute("referral_fee_bps", referral_fee_bps.to_string()))
}

pub fn change_royalty_fee(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    royalty_fee_bps: u64,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;
    validate_fees(config.referral_fee_bps, royalty_fee_bps)?;
    config.royalty_fee_bps = royalty_fee_bps;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "change_royalty_fee")
        .add_attribute("royalty_fee_bps", royalty_fee_bps.to_string()))
}

pub fn change_royalty_fee_receiver(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.royalty_fee_receiver = deps.api.addr_canonicalize(address.as_str())?;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "change_royalty_fee_receiver")
        .add_attribute("royalty_fee_receiver", address))
}

pub fn transfer_ownership(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.owner = deps.api.addr_canonicalize(owner.as_str())?;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "transfer_ownership")
        .add_attribute("owner", owner))
}

pub fn withdraw(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let config = CONFIG.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(env.contract.address, config.payment_denom)?;

    let mut response = Response::new();
    if !balance.amount.is_zero() {
        response = response.add_message(CosmosMsg::Bank(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: vec![balance.clone()],
        }));
    }
    Ok(response
        .add_attribute("method", "withdraw")
        .add_attribute("amount", balance.amount.to_string()))
}

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: deps.api.addr_humanize(&config.owner)?,
        main_nft_address: deps.api.addr_humanize(&config.main_nft_address)?,
        tld_address: deps.api.addr_humanize(&config.tld_address)?,
        royalty_fee_receiver: deps.api.addr_humanize(&config.royalty_fee_receiver)?,
        prices: config.prices,
        payment_denom: config.payment_denom,
        discount_percentage: config.discount_percentage,
        discount_source: config.discount_source,
        referral_fee_bps: config.referral_fee_bps,
        royalty_fee_bps: config.royalty_fee_bps,
        paused: PAUSED.load(deps.storage)?,
    })
}

pub fn get_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let config = CONFIG.load(deps.storage)?;
    let owner = deps.api.addr_humanize(&config.owner)?;
    Ok(OwnerResponse { owner })
}

pub fn get_paused(deps: Deps) -> StdResult<PausedResponse> {
    let paused = PAUSED.load(deps.storage)?;
    Ok(PausedResponse { paused })
}

pub fn get_prices(deps: Deps) -> StdResult<PriceTiers> {
    let config = CONFIG.load(deps.storage)?;
    Ok(config.prices)
}

pub fn get_price_for_length(deps: Deps, length: u64) -> StdResult<PriceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let length = usize::try_from(length).unwrap_or(usize::MAX);
    Ok(PriceResponse {
        price: config.prices.price_for(length),
    })
}

pub fn get_mint_price(
    deps: Deps,
    name: String,
    requester: Option<String>,
) -> StdResult<MintPriceResponse> {
    let config = CONFIG.load(deps.storage)?;
    let requester = requester
        .map(|requester| deps.api.addr_validate(&requester))
        .transpose()?;
    get_cost(deps, &config, &name, requester.as_ref())
}

pub fn get_can_get_discount(deps: Deps, address: String) -> StdResult<EligibilityResponse> {
    let config = CONFIG.load(deps.storage)?;
    let address = deps.api.addr_validate(&address)?;
    Ok(EligibilityResponse {
        eligible: can_get_discount(deps, &config, &address)?,
    })
}

pub fn get_can_claim_free_domain(deps: Deps, address: String) -> StdResult<EligibilityResponse> {
    let config = CONFIG.load(deps.storage)?;
    let address = deps.api.addr_validate(&address)?;
    let (claimed, entitled) = free_claim_status(deps, &config, &address)?;
    Ok(EligibilityResponse {
        eligible: claimed < entitled,
    })
}

pub fn get_free_claims(deps: Deps, address: String) -> StdResult<FreeClaimsResponse> {
    let config = CONFIG.load(deps.storage)?;
    let address = deps.api.addr_validate(&address)?;
    let (claimed, entitled) = free_claim_status(deps, &config, &address)?;
    Ok(FreeClaimsResponse { claimed, entitled })
}

pub fn get_partner_nft_addresses(deps: Deps) -> StdResult<PartnerNftAddressesResponse> {
    let addresses = PARTNER_NFTS
        .load(deps.storage)?
        .iter()
        .map(|address| deps.api.addr_humanize(address))
        .collect::<StdResult<Vec<Addr>>>()?;
    Ok(PartnerNftAddressesResponse { addresses })
}
