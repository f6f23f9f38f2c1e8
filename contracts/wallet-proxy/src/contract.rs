//! Runs the linked wallet logic on proxy state; `IMPLEMENTATION` is only a checked pointer.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::{query_contract_info, set_contract_version};
use request_wallet::contract as wallet;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, ImplementationResponse, InstantiateMsg, QueryMsg};
use crate::state::IMPLEMENTATION;

const CONTRACT_NAME: &str = "crates.io:wallet-proxy";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let implementation = deps.api.addr_validate(&msg.implementation)?;

    let version = query_contract_info(&deps.querier, implementation.to_string()).map_err(|_| {
        ContractError::InvalidImplementation {
            address: implementation.to_string(),
        }
    })?;
    if version.contract != wallet::CONTRACT_NAME {
        return Err(ContractError::InvalidImplementation {
            address: implementation.to_string(),
        });
    }

    IMPLEMENTATION.save(deps.storage, &implementation)?;

    // The instantiator becomes the owner of the state held here.
    let res = wallet::instantiate(deps.branch(), env, info, msg.wallet)?;
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(res
        .add_attribute("proxy", "instantiate")
        .add_attribute("implementation", implementation))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    Ok(wallet::execute(deps, env, info, msg)?)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg.into_wallet() {
        Some(wallet_msg) => wallet::query(deps, env, wallet_msg),
        None => to_json_binary(&query_implementation(deps)?),
    }
}

fn query_implementation(deps: Deps) -> StdResult<ImplementationResponse> {
    Ok(ImplementationResponse {
        implementation: IMPLEMENTATION.load(deps.storage)?,
    })
}
