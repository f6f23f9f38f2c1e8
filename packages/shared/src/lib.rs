// Shared types and helpers for the request wallet contracts

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};

/// Execute messages a fungible token must accept to be paid out by the wallet.
#[cw_serde]
pub enum TokenExecuteMsg {
    /// Move `amount` from the caller's balance to `recipient`
    Transfer { recipient: String, amount: Uint128 },
}

/// Queries a fungible token must answer to be paid out by the wallet.
#[cw_serde]
#[derive(QueryResponses)]
pub enum TokenQueryMsg {
    #[returns(TokenBalanceResponse)]
    Balance { address: String },
}

#[cw_serde]
pub struct TokenBalanceResponse {
    pub balance: Uint128,
}

/// Build the message that transfers `amount` of `token` held by the caller to `recipient`.
pub fn token_transfer_msg(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&TokenExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into())
}

/// Balance of `address` as recorded by the `token` contract.
pub fn query_token_balance(
    querier: &QuerierWrapper,
    token: &Addr,
    address: &Addr,
) -> StdResult<Uint128> {
    let res: TokenBalanceResponse = querier.query_wasm_smart(
        token,
        &TokenQueryMsg::Balance {
            address: address.to_string(),
        },
    )?;
    Ok(res.balance)
}

/// An expiration is inclusive: a deadline equal to the current time is still valid.
pub fn has_expired(current_time: u64, expiration: u64) -> bool {
    current_time > expiration
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::from_json;

    #[test]
    fn test_has_expired() {
        assert!(has_expired(101, 100));
        assert!(!has_expired(100, 100));
        assert!(!has_expired(50, 100));
    }

    #[test]
    fn transfer_msg_targets_token() {
        let token = Addr::unchecked("token");
        let recipient = Addr::unchecked("guest2");
        let msg = token_transfer_msg(&token, &recipient, Uint128::new(1000)).unwrap();

        match msg {
            CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr,
                msg,
                funds,
            }) => {
                assert_eq!(contract_addr, "token");
                assert!(funds.is_empty());
                let decoded: TokenExecuteMsg = from_json(msg).unwrap();
                assert_eq!(
                    decoded,
                    TokenExecuteMsg::Transfer {
                        recipient: "guest2".to_string(),
                        amount: Uint128::new(1000),
                    }
                );
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
