//! Storage-free transition rules for a single request.

use cosmwasm_std::{Addr, Uint128};

use crate::error::ContractError;
use crate::state::{Request, RequestState};

/// The fields a request is created with and that approve/reject must repeat verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestTerms {
    pub destination: Addr,
    pub value: Uint128,
    pub expiration: u64,
    pub token: Option<Addr>,
}

pub fn create(id: u64, sender: Addr, terms: RequestTerms, now: u64) -> Request {
    Request {
        id,
        sender,
        destination: terms.destination,
        value: terms.value,
        token: terms.token,
        expiration: terms.expiration,
        created_at: now,
        state: RequestState::Pending,
    }
}

pub fn matches(request: &Request, terms: &RequestTerms) -> bool {
    request.destination == terms.destination
        && request.value == terms.value
        && request.expiration == terms.expiration
        && request.token == terms.token
}

pub fn approve(request: Request, terms: &RequestTerms) -> Result<Request, ContractError> {
    decide(request, terms, RequestState::Approved)
}

pub fn reject(request: Request, terms: &RequestTerms) -> Result<Request, ContractError> {
    decide(request, terms, RequestState::Rejected)
}

fn decide(
    mut request: Request,
    terms: &RequestTerms,
    outcome: RequestState,
) -> Result<Request, ContractError> {
    if !matches(&request, terms) {
        return Err(ContractError::FieldMismatch {});
    }
    if request.state != RequestState::Pending {
        return Err(ContractError::InvalidState {});
    }
    request.state = outcome;
    Ok(request)
}

pub fn is_expired(request: &Request, now: u64) -> bool {
    shared::has_expired(now, request.expiration)
}

/// Checks that `request` may be executed at `now` without changing it.
pub fn ensure_executable(request: &Request, now: u64) -> Result<(), ContractError> {
    if request.state != RequestState::Approved {
        return Err(ContractError::InvalidState {});
    }
    // An approved request past its deadline stays Approved; it just can't run.
    if is_expired(request, now) {
        return Err(ContractError::Expired {});
    }
    Ok(())
}

pub fn execute(mut request: Request, now: u64) -> Result<Request, ContractError> {
    ensure_executable(&request, now)?;
    request.state = RequestState::Executed;
    Ok(request)
}
