//! # Storage
//!
//! | Key               | Tier       | Type      | Description                 |
//! |-------------------|------------|-----------|-----------------------------|
//! | `Owner`           | Instance   | `Address` | Identity allowed to mint    |
//! | `TotalSupply`     | Instance   | `i128`    | Sum of everything minted    |
//! | `Balance(address)`| Persistent | `i128`    | Per-account balance         |
//!
//! Instance TTL is bumped by 7 days when below 1 day remaining; balances by
//! 30 days when below 7 days remaining.

use soroban_sdk::{contracttype, Address, Env};

const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const BALANCE_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Owner,
    TotalSupply,
    Balance(Address),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
    bump_instance(env);
}

pub fn get_owner(env: &Env) -> Option<Address> {
    let owner = env.storage().instance().get(&DataKey::Owner);
    if owner.is_some() {
        bump_instance(env);
    }
    owner
}

pub fn read_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    env.storage()
        .instance()
        .set(&DataKey::TotalSupply, &supply);
    bump_instance(env);
}

/// Balance of `account`; absent entries read as 0.
pub fn read_balance(env: &Env, account: &Address) -> i128 {
    let key = DataKey::Balance(account.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
            balance
        }
        None => 0,
    }
}

pub fn write_balance(env: &Env, account: &Address, balance: i128) {
    let key = DataKey::Balance(account.clone());
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}
