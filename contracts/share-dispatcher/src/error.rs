use cosmwasm_std::StdError;
use cw_ownable::OwnershipError;
use cw_shares::SharesError;
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    StdError(#[from] StdError),

    #[error("{0}")]
    OwnershipError(#[from] OwnershipError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("{0}")]
    SharesError(#[from] SharesError),

    #[error("Locked")]
    Locked {},

    #[error("UnknownReplyId {id}")]
    UnknownReplyId { id: u64 },
}
