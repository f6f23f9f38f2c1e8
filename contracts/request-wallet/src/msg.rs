use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::state::RequestState;

#[cw_serde]
pub struct InstantiateMsg {
    /// Native denomination the wallet holds (defaults to "ucosm")
    pub denom: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Send native funds to the wallet; non-owners get their spending limit set
    Deposit {},
    /// Transfer native funds immediately (owner only)
    Spend { destination: String, value: Uint128 },
    /// Add or remove an address from the whitelist (owner only)
    SetWhitelisted { address: String, whitelisted: bool },
    /// Ask for a transfer (whitelisted addresses)
    Request {
        destination: String,
        value: Uint128,
        expiration: u64,
        /// Token contract address, or None for native currency
        token: Option<String>,
    },
    /// Approve a pending request, repeating its exact terms (owner only)
    Approve {
        id: u64,
        destination: String,
        value: Uint128,
        expiration: u64,
        token: Option<String>,
    },
    /// Reject a pending request, repeating its exact terms (owner only)
    Reject {
        id: u64,
        destination: String,
        value: Uint128,
        expiration: u64,
        token: Option<String>,
    },
    /// Carry out an approved, unexpired request
    Execute { id: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(WhitelistedResponse)]
    IsWhitelisted { address: String },

    #[returns(SpendingLimitResponse)]
    SpendingLimit { address: String },

    /// Get request by ID
    #[returns(RequestResponse)]
    Request { id: u64 },

    /// List requests in ID order
    #[returns(RequestsResponse)]
    Requests {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// List requests created by `sender`
    #[returns(RequestsResponse)]
    RequestsBySender {
        sender: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Whether `Execute` would currently pass its state and expiry checks
    #[returns(ExecutableResponse)]
    IsExecutable { id: u64 },
}

/// Data attached to the response of `ExecuteMsg::Request`
#[cw_serde]
pub struct RequestAddedResponse {
    pub id: u64,
}

// Response types

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub denom: String,
}

#[cw_serde]
pub struct WhitelistedResponse {
    pub whitelisted: bool,
}

#[cw_serde]
pub struct SpendingLimitResponse {
    pub limit: Uint128,
}

#[cw_serde]
pub struct RequestResponse {
    pub id: u64,
    pub sender: Addr,
    pub destination: Addr,
    pub value: Uint128,
    pub token: Option<Addr>,
    pub expiration: u64,
    pub created_at: u64,
    pub state: RequestState,
}

#[cw_serde]
pub struct RequestsResponse {
    pub requests: Vec<RequestResponse>,
}

#[cw_serde]
pub struct ExecutableResponse {
    pub executable: bool,
    pub expired: bool,
}
