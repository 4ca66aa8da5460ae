//! # Types
//!
//! Data structures stored and returned by the contribution contract.
//!
//! ## Config / State split
//!
//! A `Project` is stored as two separate ledger entries:
//!
//! - [`ProjectConfig`] — written once by `create_project`; never mutated.
//! - [`ProjectState`] — rewritten on every contribution and on completion.
//!
//! The public API exposes the reconstructed [`Project`] struct.
//!
//! ## Lifecycle
//!
//! ```text
//! active ──► closed
//! ```
//!
//! `is_active` only ever moves from `true` to `false`. A closed project
//! rejects every further contribution and completion.

use soroban_sdk::{contracttype, Address, String};

/// Immutable project configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectConfig {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub target_amount: i128,
    pub minimum_contribution: i128,
    pub beneficiary: Address,
    pub end_block: u64,
}

/// Mutable project state, updated on contributions and completion.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectState {
    pub current_amount: i128,
    pub is_active: bool,
}

/// Full representation of a crowdfunding project.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Project {
    /// Sequential identifier taken from the project nonce.
    pub id: u64,
    pub name: String,
    pub description: String,
    /// Funding target. Informational; reaching it does not close the project.
    pub target_amount: i128,
    /// Smallest accepted single contribution (inclusive).
    pub minimum_contribution: i128,
    /// Sum of every contribution recorded for this project.
    pub current_amount: i128,
    /// Address the funds are raised for.
    pub beneficiary: Address,
    /// `true` until the owner completes the project.
    pub is_active: bool,
    /// `duration + id`, fixed at creation.
    pub end_block: u64,
}

impl Project {
    pub(crate) fn from_parts(config: ProjectConfig, state: ProjectState) -> Self {
        Project {
            id: config.id,
            name: config.name,
            description: config.description,
            target_amount: config.target_amount,
            minimum_contribution: config.minimum_contribution,
            current_amount: state.current_amount,
            beneficiary: config.beneficiary,
            is_active: state.is_active,
            end_block: config.end_block,
        }
    }
}
