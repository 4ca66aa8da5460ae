use soroban_sdk::{symbol_short, Address, Env};

/// Emitted when the owner mints new tokens.
///
/// # Topics
/// * `Symbol` - "mint"
/// * `Address` - The recipient
///
/// # Data
/// * `i128` - The minted amount
/// * `i128` - The recipient's balance afterwards
pub fn emit_mint(env: &Env, recipient: &Address, amount: i128, new_balance: i128) {
    let topics = (symbol_short!("mint"), recipient.clone());
    env.events().publish(topics, (amount, new_balance));
}

/// Emitted when tokens move between two accounts.
///
/// # Topics
/// * `Symbol` - "transfer"
/// * `Address` - The sender
/// * `Address` - The recipient
///
/// # Data
/// * `i128` - The transferred amount
pub fn emit_transfer(env: &Env, sender: &Address, recipient: &Address, amount: i128) {
    let topics = (symbol_short!("transfer"), sender.clone(), recipient.clone());
    env.events().publish(topics, amount);
}
