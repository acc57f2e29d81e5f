use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Storage, Uint128};

use crate::{plan_distribution, DistributionPlan, Ledger, Payout, ShareRegistry, SharesError};

#[cw_serde]
pub struct DispatchOptions {
    /// Attempts per recipient before its payout is reported as failed.
    pub max_attempts: u32,
}

impl Default for DispatchOptions {
    fn default() -> Self {
        DispatchOptions { max_attempts: 1 }
    }
}

#[cw_serde]
pub struct FailedPayout {
    pub addr: Addr,
    pub amount: Uint128,
    pub attempts: u32,
    pub reason: String,
}

/// Outcome of one dispatch. Failed amounts stay in the fund.
#[cw_serde]
pub struct DispatchReport {
    pub balance: Uint128,
    pub total_shares: Uint128,
    pub paid: Vec<Payout>,
    pub failed: Vec<FailedPayout>,
    pub remainder: Uint128,
}

impl DispatchReport {
    pub fn total_paid(&self) -> Uint128 {
        self.paid.iter().map(|payout| payout.amount).sum()
    }

    pub fn total_failed(&self) -> Uint128 {
        self.failed.iter().map(|failed| failed.amount).sum()
    }

    /// Moves the payout to `addr` from `paid` into `failed`.
    pub fn mark_failed(&mut self, addr: &Addr, attempts: u32, reason: String) -> bool {
        let Some(index) = self.paid.iter().position(|payout| &payout.addr == addr) else {
            return false;
        };

        let payout = self.paid.remove(index);
        self.failed.push(FailedPayout {
            addr: payout.addr,
            amount: payout.amount,
            attempts,
            reason,
        });
        true
    }
}

impl From<DistributionPlan> for DispatchReport {
    fn from(plan: DistributionPlan) -> Self {
        DispatchReport {
            balance: plan.balance,
            total_shares: plan.total_shares,
            paid: plan.payouts,
            failed: vec![],
            remainder: plan.remainder,
        }
    }
}

/// Pays every share holder its proportional part of the ledger balance.
///
/// The registry is read once up front. Each payout is attempted on its own:
/// a recipient that keeps failing after `max_attempts` is reported in
/// `failed` and the remaining recipients are still paid.
pub fn dispatch_balance<L: Ledger>(
    storage: &dyn Storage,
    registry: &ShareRegistry,
    ledger: &mut L,
    options: &DispatchOptions,
) -> Result<DispatchReport, SharesError> {
    let balance = ledger.balance().map_err(|e| SharesError::Ledger {
        reason: e.to_string(),
    })?;
    let holders = registry.snapshot(storage)?;
    let plan = plan_distribution(balance, &holders)?;

    let max_attempts = options.max_attempts.max(1);
    let mut report = DispatchReport {
        balance,
        total_shares: plan.total_shares,
        paid: Vec::with_capacity(plan.payouts.len()),
        failed: vec![],
        remainder: plan.remainder,
    };

    for payout in plan.payouts {
        let mut attempts = 0;
        let outcome = loop {
            attempts += 1;
            match ledger.transfer(&payout.addr, payout.amount) {
                Ok(()) => break Ok(()),
                Err(e) if attempts >= max_attempts => break Err(e.to_string()),
                Err(_) => continue,
            }
        };

        match outcome {
            Ok(()) => report.paid.push(payout),
            Err(reason) => report.failed.push(FailedPayout {
                addr: payout.addr,
                amount: payout.amount,
                attempts,
                reason,
            }),
        }
    }

    Ok(report)
}
