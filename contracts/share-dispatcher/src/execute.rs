use cosmwasm_std::{Attribute, DepsMut, Env, MessageInfo, Response, Uint128};
use cw_ownable::assert_owner;
use cw_shares::{DispatchOptions, MemberShare};

use crate::{
    ledger::BankLedger,
    query::is_locked,
    state::{CONFIG, IS_LOCKED, LAST_DISPATCH, PENDING_PAYOUTS, SHARE_REGISTRY},
    ContractError,
};

pub fn add_share_holder(
    deps: DepsMut,
    info: MessageInfo,
    addr: String,
    shares: Uint128,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let addr = deps.api.addr_validate(&addr)?;
    let previous = SHARE_REGISTRY.add_share_holder(deps.storage, &addr, shares)?;

    Ok(Response::new()
        .add_attribute("action", "add_share_holder")
        .add_attribute("addr", addr)
        .add_attribute("shares", shares)
        .add_attribute(
            "previous_shares",
            previous.unwrap_or_default().to_string(),
        )
        .add_attribute(
            "share_total",
            SHARE_REGISTRY.share_total(deps.storage)?.to_string(),
        ))
}

pub fn remove_share_holder(
    deps: DepsMut,
    info: MessageInfo,
    addr: String,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let addr = deps.api.addr_validate(&addr)?;
    let removed = SHARE_REGISTRY.remove_share_holder(deps.storage, &addr)?;

    Ok(Response::new()
        .add_attribute("action", "remove_share_holder")
        .add_attribute("addr", addr)
        .add_attribute("removed", removed.is_some().to_string())
        .add_attribute(
            "share_total",
            SHARE_REGISTRY.share_total(deps.storage)?.to_string(),
        ))
}

pub fn update_share_holders(
    deps: DepsMut,
    info: MessageInfo,
    add: Vec<MemberShare<String>>,
    remove: Vec<String>,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    let mut attrs = vec![];

    for addr in remove {
        let addr = deps.api.addr_validate(&addr)?;

        if SHARE_REGISTRY
            .remove_share_holder(deps.storage, &addr)?
            .is_some()
        {
            attrs.push(Attribute::new("removed", addr));
        }
    }

    for member_share in add {
        let member_share = member_share.into_checked(deps.as_ref())?;

        SHARE_REGISTRY.add_share_holder(deps.storage, &member_share.addr, member_share.shares)?;
        attrs.push(Attribute::new("added", member_share.addr));
    }

    Ok(Response::new()
        .add_attribute("action", "update_share_holders")
        .add_attributes(attrs)
        .add_attribute(
            "share_total",
            SHARE_REGISTRY.share_total(deps.storage)?.to_string(),
        ))
}

// Funds can also arrive through plain bank sends; this only checks the denom
pub fn receive_native(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let amount = cw_utils::must_pay(&info, &config.denom)?;

    Ok(Response::new()
        .add_attribute("action", "receive_native")
        .add_attribute("sender", info.sender)
        .add_attribute("amount", amount))
}

pub fn dispatch_balance(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    if is_locked(deps.as_ref()) {
        return Err(ContractError::Locked {});
    }

    let config = CONFIG.load(deps.storage)?;
    let mut ledger = BankLedger::new(deps.querier, &env.contract.address, &config.denom);

    let report = cw_shares::dispatch_balance(
        deps.storage,
        &SHARE_REGISTRY,
        &mut ledger,
        &DispatchOptions::default(),
    )?;

    // Reply ids restart at zero on every dispatch
    PENDING_PAYOUTS.clear(deps.storage);
    for (id, payout) in &ledger.pending {
        PENDING_PAYOUTS.save(deps.storage, *id, payout)?;
    }
    LAST_DISPATCH.save(deps.storage, &report)?;

    let attrs = report
        .paid
        .iter()
        .map(|payout| Attribute::new("addr", payout.addr.to_string()));

    Ok(Response::new()
        .add_attribute("action", "dispatch_balance")
        .add_attribute("balance", report.balance)
        .add_attribute("total_shares", report.total_shares)
        .add_attribute("distributed", report.total_paid())
        .add_attribute("remainder", report.remainder)
        .add_attributes(attrs)
        .add_submessages(ledger.msgs))
}

pub fn payout_failed(deps: DepsMut, id: u64, reason: String) -> Result<Response, ContractError> {
    let payout = PENDING_PAYOUTS
        .may_load(deps.storage, id)?
        .ok_or(ContractError::UnknownReplyId { id })?;
    PENDING_PAYOUTS.remove(deps.storage, id);

    LAST_DISPATCH.update(deps.storage, |mut report| -> Result<_, ContractError> {
        report.mark_failed(&payout.addr, 1, reason.clone());
        Ok(report)
    })?;

    Ok(Response::new()
        .add_attribute("action", "payout_failed")
        .add_attribute("addr", payout.addr)
        .add_attribute("amount", payout.amount)
        .add_attribute("reason", reason))
}

pub fn lock(deps: DepsMut, info: MessageInfo, value: bool) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;

    IS_LOCKED.save(deps.storage, &value)?;

    Ok(Response::new()
        .add_attribute("action", "lock")
        .add_attribute("is_locked", value.to_string()))
}
