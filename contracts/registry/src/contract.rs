use crate::error::ContractError;
use crate::handler::{
    change_minter, get_balance_of, get_contract_info, get_domain, get_minter, get_num_tokens,
    get_owner, get_owner_of, mint, transfer_ownership,
};
use crate::state::{Config, CONFIG, TOKEN_COUNT};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;
use tld::registry::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:tld-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let owner = deps.api.addr_canonicalize(info.sender.as_str())?;
    let minter = match msg.minter {
        Some(minter) => deps.api.addr_canonicalize(minter.as_str())?,
        None => owner.clone(),
    };
    CONFIG.save(
        deps.storage,
        &Config {
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
            owner,
            minter: minter.clone(),
        },
    )?;
    TOKEN_COUNT.save(deps.storage, &0u64)?;
    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("minter", deps.api.addr_humanize(&minter)?)
        .add_attribute("name", msg.name)
        .add_attribute("symbol", msg.symbol))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Only minter
        ExecuteMsg::Mint { name, owner } => mint(deps, env, info, name, owner),

        // Only owner
        ExecuteMsg::ChangeMinter { minter } => change_minter(deps, env, info, minter),
        ExecuteMsg::TransferOwnership { owner } => transfer_ownership(deps, env, info, owner),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::BalanceOf { owner } => to_binary(&get_balance_of(deps, owner)?),
        QueryMsg::Minter {} => to_binary(&get_minter(deps)?),
        QueryMsg::Owner {} => to_binary(&get_owner(deps)?),
        QueryMsg::ContractInfo {} => to_binary(&get_contract_info(deps)?),
        QueryMsg::NumTokens {} => to_binary(&get_num_tokens(deps)?),
        QueryMsg::Domain { name } => to_binary(&get_domain(deps, name)?),
        QueryMsg::OwnerOf { token_id } => to_binary(&get_owner_of(deps, token_id)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    Ok(Response::default())
}
