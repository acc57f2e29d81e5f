use cosmwasm_schema::cw_serde;
use cw_shares::{DispatchReport, Payout, ShareRegistry};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// The single denomination held and dispatched by the contract
    pub denom: String,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const IS_LOCKED: Item<bool> = Item::new("is_locked");
pub const SHARE_REGISTRY: ShareRegistry =
    ShareRegistry::new("share_holders", "share_total", "share_count");

// Payouts of the latest dispatch, keyed by submessage reply id
pub const PENDING_PAYOUTS: Map<u64, Payout> = Map::new("pending_payouts");
pub const LAST_DISPATCH: Item<DispatchReport> = Item::new("last_dispatch");

