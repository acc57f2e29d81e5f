use std::collections::BTreeMap;

use cosmwasm_std::{Addr, StdError, Uint128};

use crate::{Ledger, ShareRegistry};

mod registry;

const REGISTRY: ShareRegistry = ShareRegistry::new("holders", "total", "count");

/// In-memory fund that moves amounts into recipient balances.
///
/// Recipients listed in `failures` reject that many transfers before
/// accepting one; `u32::MAX` rejects forever.
#[derive(Default)]
struct MockLedger {
    fund: Uint128,
    received: BTreeMap<Addr, Uint128>,
    failures: BTreeMap<Addr, u32>,
    transfer_calls: u32,
}

impl MockLedger {
    fn with_fund(fund: u128) -> Self {
        MockLedger {
            fund: Uint128::new(fund),
            ..Default::default()
        }
    }

    fn deposit(&mut self, amount: u128) {
        self.fund += Uint128::new(amount);
    }

    fn fail_times(mut self, addr: &Addr, times: u32) -> Self {
        self.failures.insert(addr.clone(), times);
        self
    }

    fn received(&self, addr: &Addr) -> Uint128 {
        self.received.get(addr).copied().unwrap_or_default()
    }
}

impl Ledger for MockLedger {
    type Error = StdError;

    fn balance(&self) -> Result<Uint128, StdError> {
        Ok(self.fund)
    }

    fn transfer(&mut self, recipient: &Addr, amount: Uint128) -> Result<(), StdError> {
        self.transfer_calls += 1;

        if let Some(remaining) = self.failures.get_mut(recipient) {
            if *remaining > 0 {
                if *remaining != u32::MAX {
                    *remaining -= 1;
                }
                return Err(StdError::generic_err(format!(
                    "{} cannot receive funds",
                    recipient
                )));
            }
        }

        self.fund = self.fund.checked_sub(amount)?;
        *self.received.entry(recipient.clone()).or_default() += amount;
        Ok(())
    }
}

/// A ledger whose balance cannot be read.
struct OfflineLedger;

impl Ledger for OfflineLedger {
    type Error = StdError;

    fn balance(&self) -> Result<Uint128, StdError> {
        Err(StdError::generic_err("ledger unavailable"))
    }

    fn transfer(&mut self, _recipient: &Addr, _amount: Uint128) -> Result<(), StdError> {
        Err(StdError::generic_err("ledger unavailable"))
    }
}
