//! # Contribution Contract
//!
//! Crowdfunding ledger: an owner opens projects, anyone contributes to open
//! projects, and the owner closes them.
//!
//! | Phase     | Entry Point(s)                                       |
//! |-----------|------------------------------------------------------|
//! | Bootstrap | [`ContributionContract::init`]                       |
//! | Projects  | `create_project`, `complete_project`                 |
//! | Funding   | [`ContributionContract::contribute`]                 |
//! | Queries   | `get_project`, `get_contribution`, `project_count`, `owner` |
//!
//! Storage access is delegated to `storage`; the event payloads are
//! re-exported from `events`. Every entry point runs all of its guards before its first
//! write, so a failed call never leaves partial state behind.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String};

mod events;
mod storage;
mod types;

#[cfg(test)]
mod invariants;

pub use events::{ProjectCompleted, ProjectCreated, ProjectFunded};
pub use types::Project;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized      = 1,
    AlreadyInitialized  = 2,
    OwnerOnly           = 100,
    UnknownProject      = 101,
    /// Reserved. Never returned; the code stays allocated so it is not reused.
    InsufficientBalance = 102,
    ProjectExists       = 103,
    ProjectClosed       = 104,
    BelowMinimum        = 105,
    InvalidAmount       = 106,
    Overflow            = 107,
}

/// Fails with `OwnerOnly` unless `caller` is the stored owner.
fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    let owner = storage::get_owner(env).ok_or(Error::NotInitialized)?;
    if *caller != owner {
        return Err(Error::OwnerOnly);
    }
    Ok(())
}

#[contract]
pub struct ContributionContract;

#[contractimpl]
impl ContributionContract {
    /// Record the designated owner. Callable once.
    pub fn init(env: Env, owner: Address) -> Result<(), Error> {
        owner.require_auth();
        if storage::has_owner(&env) {
            return Err(Error::AlreadyInitialized);
        }
        storage::set_owner(&env, &owner);
        Ok(())
    }

    /// Open a new project and return its id.
    ///
    /// - `caller` must be the owner.
    /// - `end_block` is fixed to `duration + id`.
    pub fn create_project(
        env: Env,
        caller: Address,
        name: String,
        description: String,
        target_amount: i128,
        minimum_contribution: i128,
        beneficiary: Address,
        duration: u64,
    ) -> Result<u64, Error> {
        caller.require_auth();
        require_owner(&env, &caller)?;

        let id = storage::get_project_nonce(&env);
        if storage::project_exists(&env, id) {
            return Err(Error::ProjectExists);
        }
        if target_amount < 0 || minimum_contribution < 0 {
            return Err(Error::InvalidAmount);
        }
        let end_block = duration.checked_add(id).ok_or(Error::Overflow)?;

        let project = Project {
            id,
            name,
            description,
            target_amount,
            minimum_contribution,
            current_amount: 0,
            beneficiary,
            is_active: true,
            end_block,
        };

        storage::save_project(&env, &project);
        storage::set_project_nonce(&env, id + 1);

        events::emit_project_created(
            &env,
            ProjectCreated {
                project_id: id,
                beneficiary: project.beneficiary,
                target_amount,
                minimum_contribution,
                end_block,
            },
        );
        Ok(id)
    }

    /// Add `amount` to an open project on behalf of `contributor`.
    ///
    /// Amounts equal to the project's minimum are accepted.
    pub fn contribute(
        env: Env,
        project_id: u64,
        contributor: Address,
        amount: i128,
    ) -> Result<bool, Error> {
        contributor.require_auth();

        let config =
            storage::load_project_config(&env, project_id).ok_or(Error::UnknownProject)?;
        let mut state =
            storage::load_project_state(&env, project_id).ok_or(Error::UnknownProject)?;

        if !state.is_active {
            return Err(Error::ProjectClosed);
        }
        if amount < config.minimum_contribution {
            return Err(Error::BelowMinimum);
        }

        // The project total and the contributor entry move together.
        let contributed = storage::get_contribution(&env, project_id, &contributor)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        state.current_amount = state
            .current_amount
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        storage::save_project_state(&env, project_id, &state);
        storage::set_contribution(&env, project_id, &contributor, contributed);

        events::emit_project_funded(
            &env,
            ProjectFunded {
                project_id,
                contributor,
                amount,
                current_amount: state.current_amount,
            },
        );
        Ok(true)
    }

    /// Close a project for good. `caller` must be the owner.
    pub fn complete_project(env: Env, caller: Address, project_id: u64) -> Result<bool, Error> {
        caller.require_auth();

        let mut state =
            storage::load_project_state(&env, project_id).ok_or(Error::UnknownProject)?;
        require_owner(&env, &caller)?;
        if !state.is_active {
            return Err(Error::ProjectClosed);
        }

        state.is_active = false;
        storage::save_project_state(&env, project_id, &state);

        events::emit_project_completed(
            &env,
            ProjectCompleted {
                project_id,
                current_amount: state.current_amount,
            },
        );
        Ok(true)
    }

    /// Retrieve a project by its id.
    pub fn get_project(env: Env, project_id: u64) -> Result<Project, Error> {
        storage::load_project(&env, project_id).ok_or(Error::UnknownProject)
    }

    /// Cumulative amount `contributor` has given to `project_id`, 0 if nothing.
    pub fn get_contribution(env: Env, project_id: u64, contributor: Address) -> i128 {
        storage::get_contribution(&env, project_id, &contributor)
    }

    /// Number of projects created so far, which is also the next id.
    pub fn project_count(env: Env) -> u64 {
        storage::get_project_nonce(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        storage::get_owner(&env).ok_or(Error::NotInitialized)
    }
}
