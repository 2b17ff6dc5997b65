use crate::error::ContractError;
use crate::state::{Domain, BALANCES, CONFIG, DOMAINS, TOKEN_COUNT, TOKEN_NAMES};
use cosmwasm_std::{to_binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use tld::registry::{
    BalanceResponse, ContractInfoResponse, DomainResponse, MintResponse, MinterResponse,
    NumTokensResponse, OwnerOfResponse, OwnerResponse,
};
use tld::utils::{get_token_id_from_name, is_valid_name, normalize_name};

fn only_owner(deps: Deps, info: &MessageInfo) -> Result<bool, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if sender != config.owner {
        return Err(ContractError::NotOwner {
            sender: info.sender.to_string(),
            owner: deps.api.addr_humanize(&config.owner)?.to_string(),
        });
    }
    Ok(true)
}

fn only_minter(deps: Deps, info: &MessageInfo) -> Result<bool, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let sender = deps.api.addr_canonicalize(info.sender.as_str())?;
    if sender != config.minter {
        return Err(ContractError::NotMinter {
            sender: info.sender.to_string(),
        });
    }
    Ok(true)
}

pub fn mint(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    name: String,
    owner: String,
) -> Result<Response, ContractError> {
    only_minter(deps.as_ref(), &info)?;

    let name = normalize_name(&name);
    if !is_valid_name(&name) {
        return Err(ContractError::InvalidName { name });
    }
    if DOMAINS.may_load(deps.storage, name.clone())?.is_some() {
        return Err(ContractError::DomainTaken { name });
    }

    let owner = deps.api.addr_validate(&owner)?;
    let token_id = get_token_id_from_name(&name);
    DOMAINS.save(
        deps.storage,
        name.clone(),
        &Domain {
            token_id: token_id.clone(),
            owner: owner.clone(),
        },
    )?;
    TOKEN_NAMES.save(deps.storage, token_id.clone(), &name)?;
    BALANCES.update(deps.storage, owner.to_string(), |balance| -> StdResult<u64> {
        Ok(balance.unwrap_or_default() + 1)
    })?;
    TOKEN_COUNT.update(deps.storage, |count| -> StdResult<u64> { Ok(count + 1) })?;

    Ok(Response::new()
        .set_data(to_binary(&MintResponse {
            token_id: token_id.clone(),
        })?)
        .add_attribute("method", "mint")
        .add_attribute("name", name)
        .add_attribute("owner", owner)
        .add_attribute("token_id", token_id))
}

pub fn change_minter(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    minter: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let canonical_minter = deps.api.addr_canonicalize(minter.as_str())?;
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.minter = canonical_minter;
        Ok(config)
    })?;
    Ok(Response::new()
        .add_attribute("method", "change_minter")
        .add_attribute("minter", minter))
}

pub fn transfer_ownership(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: String,
) -> Result<Response, ContractError> {
    only_owner(deps.as_ref(), &info)?;
    let canonical_owner = deps.api.addr_canonicalize(owner.as_str())?;
    CONFIG.update(deps.storage, |mut config| -> StdResult<_> {
        config.owner = canonical_owner;
        Ok(config)
    })?;
    Ok(Response::new()
        .add_attribute("method", "transfer_ownership")
        .add_attribute("owner", owner))
}

pub fn get_balance_of(deps: Deps, owner: String) -> StdResult<BalanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let balance = BALANCES.may_load(deps.storage, owner.to_string())?.unwrap_or_default();
    Ok(BalanceResponse { balance })
}

pub fn get_minter(deps: Deps) -> StdResult<MinterResponse> {
    let config = CONFIG.load(deps.storage)?;
    let minter = deps.api.addr_humanize(&config.minter)?;
    Ok(MinterResponse { minter })
}

pub fn get_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let config = CONFIG.load(deps.storage)?;
    let owner = deps.api.addr_humanize(&config.owner)?;
    Ok(OwnerResponse { owner })
}

pub fn get_contract_info(deps: Deps) -> StdResult<ContractInfoResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ContractInfoResponse {
        name: config.name,
        symbol: config.symbol,
    })
}

pub fn get_num_tokens(deps: Deps) -> StdResult<NumTokensResponse> {
    let count = TOKEN_COUNT.load(deps.storage)?;
    Ok(NumTokensResponse { count })
}

pub fn get_domain(deps: Deps, name: String) -> StdResult<DomainResponse> {
    let name = normalize_name(&name);
    let domain = DOMAINS.load(deps.storage, name.clone())?;
    Ok(DomainResponse {
        name,
        token_id: domain.token_id,
        owner: domain.owner,
    })
}

pub fn get_owner_of(deps: Deps, token_id: String) -> StdResult<OwnerOfResponse> {
    let name = TOKEN_NAMES.load(deps.storage, token_id)?;
    let domain = DOMAINS.load(deps.storage, name)?;
    Ok(OwnerOfResponse {
        owner: domain.owner.to_string(),
        approvals: vec![],
    })
}
