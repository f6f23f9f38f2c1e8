use cosmwasm_std::Addr;
use cw_storage_plus::Item;

/// Deployed wallet whose logic every call is delegated to.
/// Set once at instantiation; the key stays clear of the wallet's own namespaces.
pub const IMPLEMENTATION: Item<Addr> = Item::new("proxy_implementation");
