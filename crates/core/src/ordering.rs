//! Task ordering engine.
//!
//! Priorities are positive integers, unique and contiguous (1..N)
//! within a project's task set, ascending display order. Deleting a
//! task leaves a gap that is never compacted; inserts always append
//! after the current maximum, so numbering stays monotonic.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::DbId;

/// Priority for a task inserted into a project whose current highest
/// priority is `highest` (`None` when the project has no tasks).
///
/// A new task always sorts last: `max + 1`, or 1 for an empty project.
pub fn next_priority(highest: Option<i32>) -> i32 {
    highest.unwrap_or(0) + 1
}

/// Map a submitted drag order to priority assignments: the task at
/// index `i` gets priority `i + 1`.
pub fn reorder_assignments(ordered_ids: &[DbId]) -> Vec<(DbId, i32)> {
    ordered_ids
        .iter()
        .enumerate()
        .map(|(i, &id)| (id, i as i32 + 1))
        .collect()
}

/// Check that a submitted reorder sequence is a duplicate-free
/// permutation of exactly the target project's current task ids.
///
/// Anything else (subset, superset, duplicates, ids from another
/// project) would leave at least one project with duplicate or gapped
/// priorities, so it is rejected before any write happens.
pub fn validate_reorder(ordered_ids: &[DbId], current_ids: &[DbId]) -> Result<(), CoreError> {
    if ordered_ids.is_empty() {
        return Err(CoreError::Validation(
            "orderedTaskIds must not be empty".into(),
        ));
    }

    let mut seen = HashSet::with_capacity(ordered_ids.len());
    for &id in ordered_ids {
        if !seen.insert(id) {
            return Err(CoreError::Validation(format!(
                "orderedTaskIds contains task {id} more than once"
            )));
        }
    }

    let current: HashSet<DbId> = current_ids.iter().copied().collect();
    if seen != current {
        return Err(CoreError::Validation(
            "orderedTaskIds must contain exactly the project's current task ids".into(),
        ));
    }

    Ok(())
}
