use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Account allowed to inflate the supply
pub const MINTER: Item<Addr> = Item::new("minter");

pub const TOTAL_SUPPLY: Item<Uint128> = Item::new("total_supply");

/// Token balances indexed by holder
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");
