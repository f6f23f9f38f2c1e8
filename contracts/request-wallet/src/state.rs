use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
#[derive(Copy, Eq)]
pub enum RequestState {
    Pending = 0,
    Approved = 1,
    Executed = 2,
    Rejected = 3,
}

impl RequestState {
    /// Numeric code reported in `request_update` events
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RequestState::Executed | RequestState::Rejected)
    }
}

#[cw_serde]
pub struct Request {
    /// Request unique ID
    pub id: u64,
    /// Address that created the request
    pub sender: Addr,
    /// Recipient of the transfer
    pub destination: Addr,
    /// Amount to transfer
    pub value: Uint128,
    /// Token contract (None = native currency)
    pub token: Option<Addr>,
    /// Timestamp after which the request can no longer be executed
    pub expiration: u64,
    /// Creation time
    pub created_at: u64,
    pub state: RequestState,
}

#[cw_serde]
pub struct Config {
    /// Privileged account, fixed at instantiation
    pub owner: Addr,
    /// Native denomination held by the wallet
    pub denom: String,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Addresses allowed to create requests
pub const WHITELIST: Map<&Addr, bool> = Map::new("whitelist");

/// Authorized outgoing amount per depositor, set on deposit
pub const SPENDING_LIMITS: Map<&Addr, Uint128> = Map::new("spending_limits");

/// Next request ID
pub const NEXT_REQUEST_ID: Item<u64> = Item::new("next_request_id");

/// Requests indexed by ID
pub const REQUESTS: Map<u64, Request> = Map::new("requests");

/// Requests by sender (for queries)
pub const SENDER_REQUESTS: Map<(&Addr, u64), ()> = Map::new("sender_requests");
