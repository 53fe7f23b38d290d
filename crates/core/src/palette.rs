//! Deterministic project color assignment.
//!
//! Colors are never stored: a project's color is recomputed on every
//! read from its id, so two projects with ids congruent mod 5 share a
//! color. That collision is cosmetic and accepted.

use crate::types::DbId;

/// Fixed ordered palette; index = `id mod 5`.
pub const PROJECT_PALETTE: [&str; 5] = ["#EF4444", "#F97316", "#3B82F6", "#10B981", "#6366F1"];

/// Display color for a project id.
pub fn project_color(id: DbId) -> &'static str {
    let index = id.rem_euclid(PROJECT_PALETTE.len() as DbId) as usize;
    PROJECT_PALETTE[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_follows_palette_order() {
        assert_eq!(project_color(0), "#EF4444");
        assert_eq!(project_color(1), "#F97316");
        assert_eq!(project_color(2), "#3B82F6");
        assert_eq!(project_color(3), "#10B981");
        assert_eq!(project_color(4), "#6366F1");
    }

    #[test]
    fn palette_has_period_five() {
        for id in 1..=25 {
            assert_eq!(project_color(id), project_color(id + 5));
        }
    }

    #[test]
    fn congruent_ids_share_a_color() {
        assert_eq!(project_color(2), project_color(12));
    }
}
