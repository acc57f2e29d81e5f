use cosmwasm_std::{Addr, Deps, Env, StdError, StdResult, Uint128};
use cw_shares::{plan_distribution, DispatchReport, DistributionPlan, MemberShare};
use cw_utils::maybe_addr;

use crate::{
    msg::DumpStateResponse,
    state::{CONFIG, IS_LOCKED, LAST_DISPATCH, SHARE_REGISTRY},
};

pub fn share_holder_shares(deps: Deps, addr: String) -> StdResult<Uint128> {
    let addr = deps.api.addr_validate(&addr)?;

    SHARE_REGISTRY.share_holder_shares(deps.storage, &addr)
}

pub fn share_holders(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Vec<MemberShare<Addr>>> {
    let start_after = maybe_addr(deps.api, start_after)?;

    SHARE_REGISTRY.share_holders(deps.storage, start_after.as_ref(), limit)
}

pub fn balance(deps: Deps, env: &Env) -> StdResult<Uint128> {
    let config = CONFIG.load(deps.storage)?;

    Ok(deps
        .querier
        .query_balance(&env.contract.address, config.denom)?
        .amount)
}

pub fn dispatch_preview(deps: Deps, env: &Env) -> StdResult<DistributionPlan> {
    let balance = balance(deps, env)?;

    SHARE_REGISTRY
        .snapshot(deps.storage)
        .and_then(|holders| plan_distribution(balance, &holders))
        .map_err(|e| StdError::generic_err(e.to_string()))
}

pub fn last_dispatch(deps: Deps) -> StdResult<Option<DispatchReport>> {
    LAST_DISPATCH.may_load(deps.storage)
}

pub fn is_locked(deps: Deps) -> bool {
    IS_LOCKED.load(deps.storage).unwrap_or_default()
}

pub fn dump_state(deps: Deps, env: &Env) -> StdResult<DumpStateResponse> {
    Ok(DumpStateResponse {
        config: CONFIG.load(deps.storage)?,
        is_locked: is_locked(deps),
        balance: balance(deps, env)?,
        share_total: SHARE_REGISTRY.share_total(deps.storage)?,
        share_holder_count: SHARE_REGISTRY.share_holder_count(deps.storage)?,
    })
}
