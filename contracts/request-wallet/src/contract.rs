use cosmwasm_std::{
    coins, entry_point, to_json_binary, Addr, Api, BankMsg, Binary, CosmosMsg, Deps, DepsMut,
    Env, Event, MessageInfo, Order, Response, StdResult, Storage, Uint128,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use crate::error::ContractError;
use crate::ledger::{self, RequestTerms};
use crate::msg::{
    ConfigResponse, ExecutableResponse, ExecuteMsg, InstantiateMsg, QueryMsg,
    RequestAddedResponse, RequestResponse, RequestsResponse, SpendingLimitResponse,
    WhitelistedResponse,
};
use crate::state::{
    Config, Request, CONFIG, NEXT_REQUEST_ID, REQUESTS, SENDER_REQUESTS, SPENDING_LIMITS,
    WHITELIST,
};

pub const CONTRACT_NAME: &str = "crates.io:request-wallet";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_DENOM: &str = "ucosm";
const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        owner: info.sender,
        denom: msg.denom.unwrap_or_else(|| DEFAULT_DENOM.to_string()),
    };
    CONFIG.save(deps.storage, &config)?;
    NEXT_REQUEST_ID.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("denom", config.denom))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    // Native funds only enter through Deposit.
    if !matches!(msg, ExecuteMsg::Deposit {}) && !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds {});
    }

    match msg {
        ExecuteMsg::Deposit {} => execute_deposit(deps, info),
        ExecuteMsg::Spend { destination, value } => {
            execute_spend(deps, env, info, destination, value)
        }
        ExecuteMsg::SetWhitelisted {
            address,
            whitelisted,
        } => execute_set_whitelisted(deps, info, address, whitelisted),
        ExecuteMsg::Request {
            destination,
            value,
            expiration,
            token,
        } => {
            let terms = parse_terms(deps.api, destination, value, expiration, token)?;
            execute_create_request(deps, env, info, terms)
        }
        ExecuteMsg::Approve {
            id,
            destination,
            value,
            expiration,
            token,
        } => {
            let terms = parse_terms(deps.api, destination, value, expiration, token)?;
            execute_approve_request(deps, info, id, terms)
        }
        ExecuteMsg::Reject {
            id,
            destination,
            value,
            expiration,
            token,
        } => {
            let terms = parse_terms(deps.api, destination, value, expiration, token)?;
            execute_reject_request(deps, info, id, terms)
        }
        ExecuteMsg::Execute { id } => execute_run_request(deps, env, id),
    }
}

fn parse_terms(
    api: &dyn Api,
    destination: String,
    value: Uint128,
    expiration: u64,
    token: Option<String>,
) -> StdResult<RequestTerms> {
    Ok(RequestTerms {
        destination: api.addr_validate(&destination)?,
        value,
        expiration,
        token: token.map(|t| api.addr_validate(&t)).transpose()?,
    })
}

fn ensure_owner(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.owner {
        return Err(ContractError::AccessDenied {});
    }
    Ok(())
}

fn is_whitelisted(storage: &dyn Storage, config: &Config, addr: &Addr) -> StdResult<bool> {
    if *addr == config.owner {
        return Ok(true);
    }
    Ok(WHITELIST.may_load(storage, addr)?.unwrap_or(false))
}

fn request_update_event(request: &Request) -> Event {
    Event::new("request_update")
        .add_attribute("id", request.id.to_string())
        .add_attribute("state", request.state.code().to_string())
}

pub fn execute_deposit(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let value = match info.funds.as_slice() {
        [coin] if coin.denom == config.denom && !coin.amount.is_zero() => coin.amount,
        _ => {
            return Err(ContractError::InvalidFunds {
                denom: config.denom,
            })
        }
    };

    let mut res = Response::new()
        .add_attribute("method", "deposit")
        .add_attribute("depositor", info.sender.clone())
        .add_attribute("value", value);

    // Guests get their limit replaced by the latest deposit; the owner has none.
    if info.sender != config.owner {
        SPENDING_LIMITS.save(deps.storage, &info.sender, &value)?;
        res = res.add_event(
            Event::new("spending_limit_updated")
                .add_attribute("addr", info.sender.clone())
                .add_attribute("value", value),
        );
    }

    Ok(res.add_event(
        Event::new("deposit")
            .add_attribute("depositor", info.sender)
            .add_attribute("value", value),
    ))
}

pub fn execute_spend(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    destination: String,
    value: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let destination_addr = deps.api.addr_validate(&destination)?;

    let available = deps
        .querier
        .query_balance(&env.contract.address, &config.denom)?
        .amount;
    if available < value {
        return Err(ContractError::InsufficientFunds {
            needed: value,
            available,
        });
    }

    let mut res = Response::new();
    if !value.is_zero() {
        res = res.add_message(BankMsg::Send {
            to_address: destination_addr.to_string(),
            amount: coins(value.u128(), config.denom),
        });
    }

    Ok(res
        .add_attribute("method", "spend")
        .add_attribute("destination", destination_addr.clone())
        .add_attribute("value", value)
        .add_event(
            Event::new("spent")
                .add_attribute("sender", info.sender)
                .add_attribute("destination", destination_addr)
                .add_attribute("value", value),
        ))
}

pub fn execute_set_whitelisted(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    whitelisted: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let addr = deps.api.addr_validate(&address)?;
    WHITELIST.save(deps.storage, &addr, &whitelisted)?;

    Ok(Response::new()
        .add_attribute("method", "set_whitelisted")
        .add_attribute("address", addr.clone())
        .add_attribute("whitelisted", whitelisted.to_string())
        .add_event(
            Event::new("whitelisted")
                .add_attribute("addr", addr)
                .add_attribute("value", whitelisted.to_string()),
        ))
}

pub fn execute_create_request(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    terms: RequestTerms,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !is_whitelisted(deps.storage, &config, &info.sender)? {
        return Err(ContractError::AccessDenied {});
    }

    let id = NEXT_REQUEST_ID.load(deps.storage)?;
    NEXT_REQUEST_ID.save(deps.storage, &(id + 1))?;

    let request = ledger::create(id, info.sender.clone(), terms, env.block.time.seconds());
    REQUESTS.save(deps.storage, id, &request)?;
    SENDER_REQUESTS.save(deps.storage, (&info.sender, id), &())?;

    Ok(Response::new()
        .set_data(to_json_binary(&RequestAddedResponse { id })?)
        .add_attribute("method", "request")
        .add_attribute("id", id.to_string())
        .add_attribute("sender", info.sender.clone())
        .add_attribute("destination", request.destination)
        .add_attribute("value", request.value)
        .add_attribute("expiration", request.expiration.to_string())
        .add_event(
            Event::new("request_added")
                .add_attribute("sender", info.sender)
                .add_attribute("id", id.to_string()),
        ))
}

pub fn execute_approve_request(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
    terms: RequestTerms,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let request = REQUESTS.update(deps.storage, id, |maybe_request| {
        let request = maybe_request.ok_or(ContractError::RequestNotFound {})?;
        ledger::approve(request, &terms)
    })?;

    Ok(Response::new()
        .add_attribute("method", "approve")
        .add_attribute("id", id.to_string())
        .add_event(request_update_event(&request)))
}

pub fn execute_reject_request(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
    terms: RequestTerms,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    let request = REQUESTS.update(deps.storage, id, |maybe_request| {
        let request = maybe_request.ok_or(ContractError::RequestNotFound {})?;
        ledger::reject(request, &terms)
    })?;

    Ok(Response::new()
        .add_attribute("method", "reject")
        .add_attribute("id", id.to_string())
        .add_event(request_update_event(&request)))
}

pub fn execute_run_request(deps: DepsMut, env: Env, id: u64) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let request = REQUESTS
        .may_load(deps.storage, id)?
        .ok_or(ContractError::RequestNotFound {})?;

    let request = ledger::execute(request, env.block.time.seconds())?;

    let transfer: Option<CosmosMsg> = match &request.token {
        _ if request.value.is_zero() => None,
        None => {
            let available = deps
                .querier
                .query_balance(&env.contract.address, &config.denom)?
                .amount;
            if available < request.value {
                return Err(ContractError::InsufficientFunds {
                    needed: request.value,
                    available,
                });
            }
            Some(
                BankMsg::Send {
                    to_address: request.destination.to_string(),
                    amount: coins(request.value.u128(), &config.denom),
                }
                .into(),
            )
        }
        Some(token) => {
            let available =
                shared::query_token_balance(&deps.querier, token, &env.contract.address)?;
            if available < request.value {
                return Err(ContractError::InsufficientFunds {
                    needed: request.value,
                    available,
                });
            }
            Some(shared::token_transfer_msg(
                token,
                &request.destination,
                request.value,
            )?)
        }
    };

    REQUESTS.save(deps.storage, id, &request)?;

    // A zero-value payout has nothing to send; it still completes the request.
    let mut res = Response::new()
        .add_messages(transfer)
        .add_attribute("method", "execute")
        .add_attribute("id", id.to_string())
        .add_attribute("destination", request.destination.clone())
        .add_attribute("value", request.value);
    if let Some(token) = &request.token {
        res = res.add_attribute("token", token.clone());
    }

    Ok(res.add_event(request_update_event(&request)))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::IsWhitelisted { address } => {
            to_json_binary(&query_is_whitelisted(deps, address)?)
        }
        QueryMsg::SpendingLimit { address } => {
            to_json_binary(&query_spending_limit(deps, address)?)
        }
        QueryMsg::Request { id } => to_json_binary(&query_request(deps, id)?),
        QueryMsg::Requests { start_after, limit } => {
            to_json_binary(&query_requests(deps, start_after, limit)?)
        }
        QueryMsg::RequestsBySender {
            sender,
            start_after,
            limit,
        } => to_json_binary(&query_requests_by_sender(
            deps,
            sender,
            start_after,
            limit,
        )?),
        QueryMsg::IsExecutable { id } => to_json_binary(&query_is_executable(deps, env, id)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        denom: config.denom,
    })
}

fn query_is_whitelisted(deps: Deps, address: String) -> StdResult<WhitelistedResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let config = CONFIG.load(deps.storage)?;
    Ok(WhitelistedResponse {
        whitelisted: is_whitelisted(deps.storage, &config, &addr)?,
    })
}

fn query_spending_limit(deps: Deps, address: String) -> StdResult<SpendingLimitResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let limit = SPENDING_LIMITS
        .may_load(deps.storage, &addr)?
        .unwrap_or_default();
    Ok(SpendingLimitResponse { limit })
}

fn query_request(deps: Deps, id: u64) -> StdResult<RequestResponse> {
    let request = REQUESTS.load(deps.storage, id)?;
    Ok(request_to_response(request))
}

fn query_requests(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<RequestsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let requests = REQUESTS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, request)| request_to_response(request)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(RequestsResponse { requests })
}

fn query_requests_by_sender(
    deps: Deps,
    sender: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<RequestsResponse> {
    let sender_addr = deps.api.addr_validate(&sender)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let requests = SENDER_REQUESTS
        .prefix(&sender_addr)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|id| {
            let request = REQUESTS.load(deps.storage, id?)?;
            Ok(request_to_response(request))
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(RequestsResponse { requests })
}

fn query_is_executable(deps: Deps, env: Env, id: u64) -> StdResult<ExecutableResponse> {
    let request = REQUESTS.load(deps.storage, id)?;
    let now = env.block.time.seconds();
    Ok(ExecutableResponse {
        executable: ledger::ensure_executable(&request, now).is_ok(),
        expired: ledger::is_expired(&request, now),
    })
}

fn request_to_response(request: Request) -> RequestResponse {
    RequestResponse {
        id: request.id,
        sender: request.sender,
        destination: request.destination,
        value: request.value,
        token: request.token,
        expiration: request.expiration,
        created_at: request.created_at,
        state: request.state,
    }
}
