//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the contribution
//! contract.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key            | Type      | Description                          |
//! |----------------|-----------|--------------------------------------|
//! | `Owner`        | `Address` | Identity allowed to create/complete  |
//! | `ProjectNonce` | `u64`     | Next project id to hand out          |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                         | Type            | Description                     |
//! |-----------------------------|-----------------|---------------------------------|
//! | `ProjConfig(id)`            | `ProjectConfig` | Immutable project configuration |
//! | `ProjState(id)`             | `ProjectState`  | Mutable project state           |
//! | `Contribution(id, address)` | `i128`          | Cumulative amount per contributor |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Project, ProjectConfig, ProjectState};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Designated owner (Instance).
    Owner,
    /// Project id nonce (Instance).
    ProjectNonce,
    /// Immutable project configuration keyed by id (Persistent).
    ProjConfig(u64),
    /// Mutable project state keyed by id (Persistent).
    ProjState(u64),
    /// Cumulative contribution of one address to one project (Persistent).
    Contribution(u64, Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

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

/// Returns `None` until `init` has run.
pub fn get_owner(env: &Env) -> Option<Address> {
    let owner = env.storage().instance().get(&DataKey::Owner);
    if owner.is_some() {
        bump_instance(env);
    }
    owner
}

/// Current nonce value, i.e. the id the next project will receive.
pub fn get_project_nonce(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ProjectNonce)
        .unwrap_or(0)
}

pub fn set_project_nonce(env: &Env, nonce: u64) {
    env.storage()
        .instance()
        .set(&DataKey::ProjectNonce, &nonce);
    bump_instance(env);
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn project_exists(env: &Env, id: u64) -> bool {
    env.storage().persistent().has(&DataKey::ProjConfig(id))
}

/// Save both the immutable config and the initial mutable state of a project.
pub fn save_project(env: &Env, project: &Project) {
    let config_key = DataKey::ProjConfig(project.id);
    let state_key = DataKey::ProjState(project.id);

    let config = ProjectConfig {
        id: project.id,
        name: project.name.clone(),
        description: project.description.clone(),
        target_amount: project.target_amount,
        minimum_contribution: project.minimum_contribution,
        beneficiary: project.beneficiary.clone(),
        end_block: project.end_block,
    };

    let state = ProjectState {
        current_amount: project.current_amount,
        is_active: project.is_active,
    };

    env.storage().persistent().set(&config_key, &config);
    env.storage().persistent().set(&state_key, &state);
    bump_persistent(env, &config_key);
    bump_persistent(env, &state_key);
}

/// Load the full `Project`, or `None` if no project has this id.
pub fn load_project(env: &Env, id: u64) -> Option<Project> {
    let config = load_project_config(env, id)?;
    let state = load_project_state(env, id)?;
    Some(Project::from_parts(config, state))
}

pub fn load_project_config(env: &Env, id: u64) -> Option<ProjectConfig> {
    let key = DataKey::ProjConfig(id);
    let config: Option<ProjectConfig> = env.storage().persistent().get(&key);
    if config.is_some() {
        bump_persistent(env, &key);
    }
    config
}

pub fn load_project_state(env: &Env, id: u64) -> Option<ProjectState> {
    let key = DataKey::ProjState(id);
    let state: Option<ProjectState> = env.storage().persistent().get(&key);
    if state.is_some() {
        bump_persistent(env, &key);
    }
    state
}

/// Save only the mutable project state.
pub fn save_project_state(env: &Env, id: u64, state: &ProjectState) {
    let key = DataKey::ProjState(id);
    env.storage().persistent().set(&key, state);
    bump_persistent(env, &key);
}

/// Cumulative amount `contributor` has put into project `id`; 0 if none.
pub fn get_contribution(env: &Env, id: u64, contributor: &Address) -> i128 {
    let key = DataKey::Contribution(id, contributor.clone());
    match env.storage().persistent().get::<_, i128>(&key) {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

pub fn set_contribution(env: &Env, id: u64, contributor: &Address, amount: i128) {
    let key = DataKey::Contribution(id, contributor.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}
