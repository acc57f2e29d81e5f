#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult,
    SubMsgResult,
};
use cw2::{ensure_from_older_version, set_contract_version};

use crate::{
    execute,
    msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg},
    query,
    state::{Config, CONFIG, IS_LOCKED, SHARE_REGISTRY},
    ContractError,
};

pub(crate) const CONTRACT_NAME: &str = "crates.io:share-dispatcher";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = msg.owner.unwrap_or(info.sender.to_string());
    let ownership = cw_ownable::initialize_owner(deps.storage, deps.api, Some(owner.as_str()))?;

    CONFIG.save(deps.storage, &Config { denom: msg.denom })?;
    IS_LOCKED.save(deps.storage, &false)?;

    for member_share in msg.share_holders.unwrap_or_default() {
        let member_share = member_share.into_checked(deps.as_ref())?;

        SHARE_REGISTRY.add_share_holder(deps.storage, &member_share.addr, member_share.shares)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute(
            "share_total",
            SHARE_REGISTRY.share_total(deps.storage)?.to_string(),
        )
        .add_attributes(ownership.into_attributes()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::AddShareHolder { addr, shares } => {
            execute::add_share_holder(deps, info, addr, shares)
        }
        ExecuteMsg::RemoveShareHolder { addr } => execute::remove_share_holder(deps, info, addr),
        ExecuteMsg::UpdateShareHolders { add, remove } => {
            execute::update_share_holders(deps, info, add, remove)
        }
        ExecuteMsg::ReceiveNative {} => execute::receive_native(deps, info),
        ExecuteMsg::DispatchBalance {} => execute::dispatch_balance(deps, env),
        ExecuteMsg::Lock { value } => execute::lock(deps, info, value),
        ExecuteMsg::UpdateOwnership(action) => {
            let ownership = cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;
            Ok(Response::new().add_attributes(ownership.into_attributes()))
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::ShareHolderCount {} => {
            to_json_binary(&SHARE_REGISTRY.share_holder_count(deps.storage)?)
        }
        QueryMsg::ShareHolderShares { addr } => {
            to_json_binary(&query::share_holder_shares(deps, addr)?)
        }
        QueryMsg::ShareTotal {} => to_json_binary(&SHARE_REGISTRY.share_total(deps.storage)?),
        QueryMsg::ShareHolders { start_after, limit } => {
            to_json_binary(&query::share_holders(deps, start_after, limit)?)
        }
        QueryMsg::Balance {} => to_json_binary(&query::balance(deps, &env)?),
        QueryMsg::DispatchPreview {} => to_json_binary(&query::dispatch_preview(deps, &env)?),
        QueryMsg::LastDispatch {} => to_json_binary(&query::last_dispatch(deps)?),
        QueryMsg::Config {} => to_json_binary(&CONFIG.load(deps.storage)?),
        QueryMsg::IsLocked {} => to_json_binary(&query::is_locked(deps)),
        QueryMsg::DumpState {} => to_json_binary(&query::dump_state(deps, &env)?),
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.result {
        SubMsgResult::Err(reason) => execute::payout_failed(deps, msg.id, reason),
        // Payouts only reply on error
        SubMsgResult::Ok(_) => Ok(Response::default()),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let _version = ensure_from_older_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::default())
}
