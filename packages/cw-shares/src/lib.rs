mod dispatch;
mod distribution;
mod error;
mod ledger;
mod registry;
mod shares;

pub use dispatch::{dispatch_balance, DispatchOptions, DispatchReport, FailedPayout};
pub use distribution::{plan_distribution, DistributionPlan, Payout};
pub use error::SharesError;
pub use ledger::Ledger;
pub use registry::{ShareRegistry, DEFAULT_LIMIT, MAX_LIMIT};
pub use shares::MemberShare;

#[cfg(test)]
mod tests;
