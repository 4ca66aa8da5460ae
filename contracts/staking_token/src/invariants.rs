#![allow(dead_code)]

extern crate std;

use soroban_sdk::Address;

use crate::StakingTokenClient;

/// INV-1: The sum of all balances equals the total supply.
///
/// `accounts` must list every address that ever held tokens.
pub fn assert_supply_matches_balances(client: &StakingTokenClient, accounts: &[Address]) {
    let sum: i128 = accounts.iter().map(|a| client.balance(a)).sum();
    let supply = client.total_supply();
    assert_eq!(
        sum, supply,
        "INV-1 violated: balances sum to {} but total supply is {}",
        sum, supply
    );
}

/// INV-2: No account balance is negative.
pub fn assert_balances_non_negative(client: &StakingTokenClient, accounts: &[Address]) {
    for account in accounts {
        let balance = client.balance(account);
        assert!(balance >= 0, "INV-2 violated: negative balance {}", balance);
    }
}

/// INV-3: Total supply never decreases.
pub fn assert_supply_monotonic(supply_before: i128, supply_after: i128) {
    assert!(
        supply_after >= supply_before,
        "INV-3 violated: total supply decreased from {} to {}",
        supply_before,
        supply_after
    );
}
