use cosmwasm_std::StdError;
use request_wallet::ContractError as WalletError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    /// Failure raised by the delegated wallet logic, relayed as is
    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error("Implementation {address} is not a request wallet")]
    InvalidImplementation { address: String },
}
