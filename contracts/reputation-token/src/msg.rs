use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
pub use shared::TokenBalanceResponse;

#[cw_serde]
pub struct InstantiateMsg {}

#[cw_serde]
pub enum ExecuteMsg {
    /// Move tokens from the caller to `recipient`
    Transfer { recipient: String, amount: Uint128 },
    /// Mint new tokens to `recipient` (minter only, used to fund fixtures)
    Inflate { recipient: String, amount: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(TokenBalanceResponse)]
    Balance { address: String },

    #[returns(TotalSupplyResponse)]
    TotalSupply {},

    #[returns(MinterResponse)]
    Minter {},
}

#[cw_serde]
pub struct TotalSupplyResponse {
    pub total_supply: Uint128,
}

#[cw_serde]
pub struct MinterResponse {
    pub minter: Addr,
}
