use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};

use crate::{MemberShare, SharesError};

#[cw_serde]
pub struct Payout {
    pub addr: Addr,
    pub amount: Uint128,
}

/// A proportional split of `balance` over a set of share holders.
#[cw_serde]
pub struct DistributionPlan {
    pub balance: Uint128,
    pub total_shares: Uint128,
    pub payouts: Vec<Payout>,
    /// Left in the fund by floor division. Always below `total_shares`.
    pub remainder: Uint128,
}

impl DistributionPlan {
    pub fn empty(balance: Uint128) -> Self {
        DistributionPlan {
            balance,
            total_shares: Uint128::zero(),
            payouts: vec![],
            remainder: balance,
        }
    }

    pub fn distributed(&self) -> Uint128 {
        self.balance - self.remainder
    }
}

/// Splits `balance` between `holders` as `floor(balance * shares / total)`.
///
/// Payouts keep the order of `holders` and skip anything that rounds to
/// zero. Nothing is paid when the total is zero.
pub fn plan_distribution(
    balance: Uint128,
    holders: &[MemberShare<Addr>],
) -> Result<DistributionPlan, SharesError> {
    let total_shares = holders
        .iter()
        .try_fold(Uint128::zero(), |acc, holder| acc.checked_add(holder.shares))?;

    if total_shares.is_zero() {
        return Ok(DistributionPlan::empty(balance));
    }

    let mut payouts = Vec::with_capacity(holders.len());
    let mut remainder = balance;
    for holder in holders {
        let amount = balance.checked_multiply_ratio(holder.shares, total_shares)?;
        if amount.is_zero() {
            continue;
        }

        remainder = remainder.checked_sub(amount)?;
        payouts.push(Payout {
            addr: holder.addr.clone(),
            amount,
        });
    }

    Ok(DistributionPlan {
        balance,
        total_shares,
        payouts,
        remainder,
    })
}
