#![allow(dead_code)]

extern crate std;

use soroban_sdk::Address;

use crate::types::Project;
use crate::ContributionContractClient;

/// INV-1: Thresholds are never negative.
pub fn assert_thresholds_non_negative(project: &Project) {
    assert!(
        project.target_amount >= 0 && project.minimum_contribution >= 0,
        "INV-1 violated: project {} has a negative threshold ({}, {})",
        project.id,
        project.target_amount,
        project.minimum_contribution
    );
}

/// INV-2: `end_block` is `duration + id`.
pub fn assert_end_block(project: &Project, duration: u64) {
    assert_eq!(
        project.end_block,
        duration + project.id,
        "INV-2 violated: project {} end_block {} != {} + {}",
        project.id,
        project.end_block,
        duration,
        project.id
    );
}

/// INV-3: A contribution raises the project total by exactly `amount`.
pub fn assert_contribution_invariant(amount_before: i128, amount_after: i128, amount: i128) {
    assert_eq!(
        amount_after,
        amount_before + amount,
        "INV-3 violated: {} + {} != {}",
        amount_before,
        amount,
        amount_after
    );
}

/// INV-4: Project ids are sequential starting from 0.
pub fn assert_sequential_ids(projects: &[Project]) {
    for (i, project) in projects.iter().enumerate() {
        assert_eq!(
            project.id, i as u64,
            "INV-4 violated: expected id {}, got {}",
            i, project.id
        );
    }
}

/// INV-5: `is_active` only moves from `true` to `false`.
pub fn assert_valid_status_transition(was_active: bool, is_active: bool) {
    assert!(
        was_active || !is_active,
        "INV-5 violated: closed project was reopened"
    );
}

/// INV-6: Fields fixed at creation never change.
pub fn assert_project_immutable_fields(original: &Project, current: &Project) {
    assert_eq!(original.id, current.id, "INV-6 violated: id changed");
    assert_eq!(original.name, current.name, "INV-6 violated: name changed");
    assert_eq!(
        original.description, current.description,
        "INV-6 violated: description changed"
    );
    assert_eq!(
        original.target_amount, current.target_amount,
        "INV-6 violated: target_amount changed"
    );
    assert_eq!(
        original.minimum_contribution, current.minimum_contribution,
        "INV-6 violated: minimum_contribution changed"
    );
    assert_eq!(
        original.beneficiary, current.beneficiary,
        "INV-6 violated: beneficiary changed"
    );
    assert_eq!(
        original.end_block, current.end_block,
        "INV-6 violated: end_block changed"
    );
}

/// INV-7: `current_amount` equals the sum of the per-contributor entries.
///
/// `contributors` must list every address that ever contributed.
pub fn assert_total_matches_contributions(
    client: &ContributionContractClient,
    project_id: u64,
    contributors: &[Address],
) {
    let project = client.get_project(&project_id);
    let sum: i128 = contributors
        .iter()
        .map(|c| client.get_contribution(&project_id, c))
        .sum();
    assert_eq!(
        project.current_amount, sum,
        "INV-7 violated: project {} total {} != contributions {}",
        project_id, project.current_amount, sum
    );
}

/// Run all stateless project invariants.
pub fn assert_all_project_invariants(project: &Project) {
    assert_thresholds_non_negative(project);
    assert!(
        project.current_amount >= 0,
        "project {} has a negative total",
        project.id
    );
}
