use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Access denied")]
    AccessDenied {},

    #[error("Request not found")]
    RequestNotFound {},

    #[error("Request is not in a state that allows this operation")]
    InvalidState {},

    #[error("Request fields do not match the stored request")]
    FieldMismatch {},

    #[error("Request has expired")]
    Expired {},

    #[error("Insufficient funds (need {needed}, have {available})")]
    InsufficientFunds { needed: Uint128, available: Uint128 },

    #[error("Deposit must be a single non-zero coin of {denom}")]
    InvalidFunds { denom: String },

    #[error("Funds may only be sent with a deposit")]
    UnexpectedFunds {},
}
