use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Addr;
use request_wallet::msg::{
    ConfigResponse, ExecutableResponse, QueryMsg as WalletQueryMsg, RequestResponse,
    RequestsResponse, SpendingLimitResponse, WhitelistedResponse,
};

pub use request_wallet::msg::{ExecuteMsg, InstantiateMsg as WalletInstantiateMsg};

#[cw_serde]
pub struct InstantiateMsg {
    /// Address of a deployed request wallet
    pub implementation: String,
    /// Settings for the wallet state held at the proxy's address
    pub wallet: WalletInstantiateMsg,
}

/// Wallet queries plus `Implementation`; the wallet variants share the wallet's wire format.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ImplementationResponse)]
    Implementation {},

    #[returns(ConfigResponse)]
    Config {},

    #[returns(WhitelistedResponse)]
    IsWhitelisted { address: String },

    #[returns(SpendingLimitResponse)]
    SpendingLimit { address: String },

    #[returns(RequestResponse)]
    Request { id: u64 },

    #[returns(RequestsResponse)]
    Requests {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(RequestsResponse)]
    RequestsBySender {
        sender: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(ExecutableResponse)]
    IsExecutable { id: u64 },
}

impl QueryMsg {
    /// The wallet query this message forwards to, or `None` for the proxy's own queries.
    pub fn into_wallet(self) -> Option<WalletQueryMsg> {
        let msg = match self {
            QueryMsg::Implementation {} => return None,
            QueryMsg::Config {} => WalletQueryMsg::Config {},
            QueryMsg::IsWhitelisted { address } => WalletQueryMsg::IsWhitelisted { address },
            QueryMsg::SpendingLimit { address } => WalletQueryMsg::SpendingLimit { address },
            QueryMsg::Request { id } => WalletQueryMsg::Request { id },
            QueryMsg::Requests { start_after, limit } => {
                WalletQueryMsg::Requests { start_after, limit }
            }
            QueryMsg::RequestsBySender {
                sender,
                start_after,
                limit,
            } => WalletQueryMsg::RequestsBySender {
                sender,
                start_after,
                limit,
            },
            QueryMsg::IsExecutable { id } => WalletQueryMsg::IsExecutable { id },
        };
        Some(msg)
    }
}

#[cw_serde]
pub struct ImplementationResponse {
    pub implementation: Addr,
}
