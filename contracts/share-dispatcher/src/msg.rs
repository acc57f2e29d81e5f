use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use cw_ownable::{cw_ownable_execute, cw_ownable_query};
#[allow(unused_imports)]
use cw_shares::{DispatchReport, DistributionPlan, MemberShare};

use crate::state::Config;

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the sender
    pub owner: Option<String>,
    pub denom: String,
    pub share_holders: Option<Vec<MemberShare<String>>>,
}

#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    /// Registers a share holder, or replaces the shares of an existing one
    AddShareHolder { addr: String, shares: Uint128 },
    /// Unregisters a share holder. Unknown addresses are ignored.
    RemoveShareHolder { addr: String },
    /// Applies `remove` first, then `add`
    UpdateShareHolders {
        add: Vec<MemberShare<String>>,
        remove: Vec<String>,
    },
    /// Deposits the attached funds
    ReceiveNative {},
    /// Pays out the contract's balance to all share holders
    DispatchBalance {},
    Lock { value: bool },
}

#[cw_ownable_query]
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(u64)]
    ShareHolderCount {},
    #[returns(Uint128)]
    ShareHolderShares { addr: String },
    #[returns(Uint128)]
    ShareTotal {},
    #[returns(Vec<MemberShare<Addr>>)]
    ShareHolders {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    #[returns(Uint128)]
    Balance {},
    /// What a dispatch would pay right now
    #[returns(DistributionPlan)]
    DispatchPreview {},
    #[returns(Option<DispatchReport>)]
    LastDispatch {},
    #[returns(Config)]
    Config {},
    #[returns(bool)]
    IsLocked {},
    #[returns(DumpStateResponse)]
    DumpState {},
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct DumpStateResponse {
    pub config: Config,
    pub is_locked: bool,
    pub balance: Uint128,
    pub share_total: Uint128,
    pub share_holder_count: u64,
}
