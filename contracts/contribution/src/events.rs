//! Events published by the contribution contract.
//!
//! Every event's first topic is a short symbol, the second is the project id.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectCreated {
    pub project_id: u64,
    pub beneficiary: Address,
    pub target_amount: i128,
    pub minimum_contribution: i128,
    pub end_block: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectFunded {
    pub project_id: u64,
    pub contributor: Address,
    pub amount: i128,
    /// Project total after this contribution.
    pub current_amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectCompleted {
    pub project_id: u64,
    pub current_amount: i128,
}

/// Topics: `("created", project_id)`.
pub fn emit_project_created(env: &Env, event: ProjectCreated) {
    env.events()
        .publish((symbol_short!("created"), event.project_id), event);
}

/// Topics: `("funded", project_id)`.
pub fn emit_project_funded(env: &Env, event: ProjectFunded) {
    env.events()
        .publish((symbol_short!("funded"), event.project_id), event);
}

/// Topics: `("completed", project_id)`.
pub fn emit_project_completed(env: &Env, event: ProjectCompleted) {
    env.events()
        .publish((symbol_short!("completed"), event.project_id), event);
}
