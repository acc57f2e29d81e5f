use cosmwasm_std::{Addr, Order, StdResult, Storage, Uint128};
use cw_storage_plus::{Bound, Item, Map};

use crate::{MemberShare, SharesError};

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 30;

/// Storage-backed registry of share holders.
///
/// Weights live in a map keyed by holder address, next to a running share
/// total and a holder count. Every mutation keeps
/// `total == sum(shares)` and `count == len(holders)`.
///
/// None of the operations treat misuse as an error: re-adding a holder
/// replaces its weight, removing an unknown holder does nothing, and an
/// unknown holder reads as zero shares.
pub struct ShareRegistry<'a> {
    holders: Map<'a, &'a Addr, Uint128>,
    total: Item<'a, Uint128>,
    count: Item<'a, u64>,
}

impl<'a> ShareRegistry<'a> {
    pub const fn new(
        holders_namespace: &'a str,
        total_namespace: &'a str,
        count_namespace: &'a str,
    ) -> Self {
        ShareRegistry {
            holders: Map::new(holders_namespace),
            total: Item::new(total_namespace),
            count: Item::new(count_namespace),
        }
    }

    /// Inserts `addr` with `shares`, or replaces its current weight.
    ///
    /// Returns the previous weight if the holder was already registered.
    /// Fails only when the share total would overflow.
    pub fn add_share_holder(
        &self,
        storage: &mut dyn Storage,
        addr: &Addr,
        shares: Uint128,
    ) -> Result<Option<Uint128>, SharesError> {
        let previous = self.holders.may_load(storage, addr)?;

        let total = self
            .share_total(storage)?
            .checked_sub(previous.unwrap_or_default())?
            .checked_add(shares)?;

        if previous.is_none() {
            let count = self.share_holder_count(storage)?;
            self.count.save(storage, &(count + 1))?;
        }
        self.holders.save(storage, addr, &shares)?;
        self.total.save(storage, &total)?;

        Ok(previous)
    }

    /// Removes `addr` and returns its weight. Unknown holders are a no-op.
    pub fn remove_share_holder(
        &self,
        storage: &mut dyn Storage,
        addr: &Addr,
    ) -> Result<Option<Uint128>, SharesError> {
        let Some(shares) = self.holders.may_load(storage, addr)? else {
            return Ok(None);
        };

        let total = self.share_total(storage)?.checked_sub(shares)?;
        let count = self.share_holder_count(storage)?.saturating_sub(1);

        self.holders.remove(storage, addr);
        self.total.save(storage, &total)?;
        self.count.save(storage, &count)?;

        Ok(Some(shares))
    }

    pub fn share_holder_count(&self, storage: &dyn Storage) -> StdResult<u64> {
        Ok(self.count.may_load(storage)?.unwrap_or_default())
    }

    /// Zero for unknown holders.
    pub fn share_holder_shares(&self, storage: &dyn Storage, addr: &Addr) -> StdResult<Uint128> {
        Ok(self.holders.may_load(storage, addr)?.unwrap_or_default())
    }

    pub fn share_total(&self, storage: &dyn Storage) -> StdResult<Uint128> {
        Ok(self.total.may_load(storage)?.unwrap_or_default())
    }

    pub fn is_share_holder(&self, storage: &dyn Storage, addr: &Addr) -> bool {
        self.holders.has(storage, addr)
    }

    /// Lists holders in ascending address order.
    pub fn share_holders(
        &self,
        storage: &dyn Storage,
        start_after: Option<&Addr>,
        limit: Option<u32>,
    ) -> StdResult<Vec<MemberShare<Addr>>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
        let start = start_after.map(Bound::exclusive);

        self.holders
            .range(storage, start, None, Order::Ascending)
            .take(limit)
            .map(|item| item.map(|(addr, shares)| MemberShare { addr, shares }))
            .collect()
    }

    /// Reads every holder once, in ascending address order, and checks the
    /// result against the stored total.
    pub fn snapshot(&self, storage: &dyn Storage) -> Result<Vec<MemberShare<Addr>>, SharesError> {
        let holders = self
            .holders
            .range(storage, None, None, Order::Ascending)
            .map(|item| item.map(|(addr, shares)| MemberShare { addr, shares }))
            .collect::<StdResult<Vec<_>>>()?;

        let computed = holders
            .iter()
            .try_fold(Uint128::zero(), |acc, holder| acc.checked_add(holder.shares))?;
        let stored = self.share_total(storage)?;

        if computed != stored {
            return Err(SharesError::InconsistentTotal { stored, computed });
        }

        Ok(holders)
    }
}
