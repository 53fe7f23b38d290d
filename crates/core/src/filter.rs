//! Task filtering by selected project.

use crate::types::DbId;

/// Anything that belongs to a project. Implemented by the db crate's
/// task model so the filter stays testable without a database.
pub trait ProjectScoped {
    fn project_id(&self) -> DbId;
}

/// Tasks visible for a selection: all of them when no project is
/// selected, else exactly those belonging to the selected project.
/// Order-preserving, no mutation of the surviving elements.
pub fn visible_tasks<T: ProjectScoped>(tasks: Vec<T>, selected: Option<DbId>) -> Vec<T> {
    match selected {
        None => tasks,
        Some(project_id) => tasks
            .into_iter()
            .filter(|t| t.project_id() == project_id)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Item {
        id: DbId,
        project_id: DbId,
    }

    impl ProjectScoped for Item {
        fn project_id(&self) -> DbId {
            self.project_id
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: 1, project_id: 10 },
            Item { id: 2, project_id: 20 },
            Item { id: 3, project_id: 10 },
            Item { id: 4, project_id: 30 },
        ]
    }

    #[test]
    fn no_selection_returns_all_unchanged() {
        let filtered = visible_tasks(items(), None);
        assert_eq!(filtered.iter().map(|i| i.id).collect::<Vec<_>>(), [1, 2, 3, 4]);
    }

    #[test]
    fn selection_keeps_only_matching_project_in_order() {
        let filtered = visible_tasks(items(), Some(10));
        assert_eq!(filtered.iter().map(|i| i.id).collect::<Vec<_>>(), [1, 3]);
    }

    #[test]
    fn selection_with_no_matches_is_empty() {
        assert!(visible_tasks(items(), Some(99)).is_empty());
    }
}
