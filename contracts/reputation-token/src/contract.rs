use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, MinterResponse, QueryMsg, TokenBalanceResponse,
    TotalSupplyResponse,
};
use crate::state::{BALANCES, MINTER, TOTAL_SUPPLY};

const CONTRACT_NAME: &str = "crates.io:reputation-token";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    _msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    MINTER.save(deps.storage, &info.sender)?;
    TOTAL_SUPPLY.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("minter", info.sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, info, recipient, amount)
        }
        ExecuteMsg::Inflate { recipient, amount } => {
            execute_inflate(deps, info, recipient, amount)
        }
    }
}

pub fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let recipient_addr = deps.api.addr_validate(&recipient)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {});
    }

    BALANCES.update(deps.storage, &info.sender, |balance| {
        let available = balance.unwrap_or_default();
        available
            .checked_sub(amount)
            .map_err(|_| ContractError::InsufficientBalance {
                needed: amount,
                available,
            })
    })?;
    BALANCES.update(deps.storage, &recipient_addr, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;

    Ok(Response::new()
        .add_attribute("method", "transfer")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient_addr)
        .add_attribute("amount", amount))
}

pub fn execute_inflate(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if info.sender != MINTER.load(deps.storage)? {
        return Err(ContractError::Unauthorized {});
    }

    let recipient_addr = deps.api.addr_validate(&recipient)?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {});
    }

    TOTAL_SUPPLY.update(deps.storage, |supply| -> StdResult<_> {
        Ok(supply.checked_add(amount)?)
    })?;
    BALANCES.update(deps.storage, &recipient_addr, |balance| -> StdResult<_> {
        Ok(balance.unwrap_or_default().checked_add(amount)?)
    })?;

    Ok(Response::new()
        .add_attribute("method", "inflate")
        .add_attribute("to", recipient_addr)
        .add_attribute("amount", amount))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::TotalSupply {} => to_json_binary(&TotalSupplyResponse {
            total_supply: TOTAL_SUPPLY.load(deps.storage)?,
        }),
        QueryMsg::Minter {} => to_json_binary(&MinterResponse {
            minter: MINTER.load(deps.storage)?,
        }),
    }
}

fn query_balance(deps: Deps, address: String) -> StdResult<TokenBalanceResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let balance = BALANCES.may_load(deps.storage, &addr)?.unwrap_or_default();
    Ok(TokenBalanceResponse { balance })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::from_json;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};

    fn balance(deps: Deps, address: &str) -> Uint128 {
        let bin = query(
            deps,
            mock_env(),
            QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
        from_json::<TokenBalanceResponse>(bin).unwrap().balance
    }

    #[test]
    fn inflate_and_transfer() {
        let mut deps = mock_dependencies();
        instantiate(deps.as_mut(), mock_env(), mock_info("owner", &[]), InstantiateMsg {})
            .unwrap();

        let msg = ExecuteMsg::Inflate {
            recipient: "wallet".to_string(),
            amount: Uint128::new(10_000),
        };
        execute(deps.as_mut(), mock_env(), mock_info("owner", &[]), msg).unwrap();
        assert_eq!(balance(deps.as_ref(), "wallet"), Uint128::new(10_000));

        let msg = ExecuteMsg::Transfer {
            recipient: "guest2".to_string(),
            amount: Uint128::new(1_000),
        };
        let res = execute(deps.as_mut(), mock_env(), mock_info("wallet", &[]), msg).unwrap();
        assert_eq!(res.attributes.len(), 4);
        assert_eq!(balance(deps.as_ref(), "wallet"), Uint128::new(9_000));
        assert_eq!(balance(deps.as_ref(), "guest2"), Uint128::new(1_000));

        let bin = query(deps.as_ref(), mock_env(), QueryMsg::TotalSupply {}).unwrap();
        let supply: TotalSupplyResponse = from_json(bin).unwrap();
        assert_eq!(supply.total_supply, Uint128::new(10_000));
    }

    #[test]
    fn only_minter_inflates() {
        let mut deps = mock_dependencies();
        instantiate(deps.as_mut(), mock_env(), mock_info("owner", &[]), InstantiateMsg {})
            .unwrap();

        let msg = ExecuteMsg::Inflate {
            recipient: "guest1".to_string(),
            amount: Uint128::new(1),
        };
        let err = execute(deps.as_mut(), mock_env(), mock_info("guest1", &[]), msg).unwrap_err();
        assert_eq!(err, ContractError::Unauthorized {});
    }

    #[test]
    fn transfer_cannot_overdraw() {
        let mut deps = mock_dependencies();
        instantiate(deps.as_mut(), mock_env(), mock_info("owner", &[]), InstantiateMsg {})
            .unwrap();

        let msg = ExecuteMsg::Transfer {
            recipient: "guest2".to_string(),
            amount: Uint128::new(5),
        };
        let err = execute(deps.as_mut(), mock_env(), mock_info("guest1", &[]), msg).unwrap_err();
        assert_eq!(
            err,
            ContractError::InsufficientBalance {
                needed: Uint128::new(5),
                available: Uint128::zero(),
            }
        );
        assert_eq!(balance(deps.as_ref(), "guest2"), Uint128::zero());
    }
}
