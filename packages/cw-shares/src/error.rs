use cosmwasm_std::{CheckedMultiplyRatioError, OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SharesError {
    #[error("{0}")]
    StdError(#[from] StdError),

    #[error("{0}")]
    OverflowError(#[from] OverflowError),

    #[error("{0}")]
    CheckedMultiplyRatioError(#[from] CheckedMultiplyRatioError),

    /// The stored share total no longer matches the registered holders.
    /// This is never caused by caller input.
    #[error("Share total {stored} does not match the sum of holder shares {computed}")]
    InconsistentTotal { stored: Uint128, computed: Uint128 },

    #[error("Ledger error: {reason}")]
    Ledger { reason: String },
}
