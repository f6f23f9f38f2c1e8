use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Amount must be greater than zero")]
    InvalidAmount {},

    #[error("Insufficient balance (need {needed}, have {available})")]
    InsufficientBalance { needed: Uint128, available: Uint128 },
}
