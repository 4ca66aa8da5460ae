//! # Staking Token Contract
//!
//! A fungible balance ledger. Only the owner can create supply (`mint`);
//! `transfer` moves existing balance and conserves the total supply, so the
//! sum of all balances always equals [`StakingToken::total_supply`].
//!
//! There is no burn, allowance or batch path.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String};

mod events;
mod storage;

#[cfg(test)]
mod invariants;

pub const TOKEN_NAME: &str = "Staking Token";
pub const TOKEN_SYMBOL: &str = "STK";
pub const TOKEN_DECIMALS: u32 = 6;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized      = 1,
    AlreadyInitialized  = 2,
    NotTokenOwner       = 101,
    InsufficientBalance = 102,
    InvalidAmount       = 103,
    Overflow            = 104,
    Unauthorized        = 1000,
}

#[contract]
pub struct StakingToken;

#[contractimpl]
impl StakingToken {
    /// Record the designated owner. Callable once.
    pub fn init(env: Env, owner: Address) -> Result<(), Error> {
        owner.require_auth();
        if storage::has_owner(&env) {
            return Err(Error::AlreadyInitialized);
        }
        storage::set_owner(&env, &owner);
        Ok(())
    }

    /// Create `amount` new tokens for `recipient` and return its new balance.
    ///
    /// `caller` must be the owner.
    pub fn mint(env: Env, caller: Address, amount: i128, recipient: Address) -> Result<i128, Error> {
        caller.require_auth();
        let owner = storage::get_owner(&env).ok_or(Error::NotInitialized)?;
        if caller != owner {
            return Err(Error::Unauthorized);
        }
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let balance = storage::read_balance(&env, &recipient)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        let supply = storage::read_total_supply(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        storage::write_balance(&env, &recipient, balance);
        storage::write_total_supply(&env, supply);

        events::emit_mint(&env, &recipient, amount, balance);
        Ok(balance)
    }

    /// Move `amount` from `sender` to `recipient` and return the recipient's
    /// new balance.
    ///
    /// Only the account itself may spend: `caller` must equal `sender`.
    pub fn transfer(
        env: Env,
        caller: Address,
        amount: i128,
        sender: Address,
        recipient: Address,
    ) -> Result<i128, Error> {
        caller.require_auth();
        if caller != sender {
            return Err(Error::NotTokenOwner);
        }
        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        let sender_balance = storage::read_balance(&env, &sender);
        if sender_balance < amount {
            return Err(Error::InsufficientBalance);
        }

        // Sequential read-after-write keeps self-transfers balance-neutral.
        storage::write_balance(&env, &sender, sender_balance - amount);
        let recipient_balance = storage::read_balance(&env, &recipient) + amount;
        storage::write_balance(&env, &recipient, recipient_balance);

        events::emit_transfer(&env, &sender, &recipient, amount);
        Ok(recipient_balance)
    }

    /// Balance of `account`, 0 for accounts that never held tokens.
    pub fn balance(env: Env, account: Address) -> i128 {
        storage::read_balance(&env, &account)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::read_total_supply(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        storage::get_owner(&env).ok_or(Error::NotInitialized)
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, TOKEN_NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, TOKEN_SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        TOKEN_DECIMALS
    }
}
