//! Required participants and who has clicked.

use std::collections::HashSet;

/// Separator between names in a `setUsers` payload.
const NAME_DELIMITER: char = ',';

/// Outcome of marking a participant as completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkResult {
    Marked { new_count: usize },
    AlreadyMarked,
}

/// The required participant list and the subset that has completed.
///
/// Created empty, replaced wholesale by [`Roster::set_required`], grown one
/// name at a time by [`Roster::mark_completed`].
#[derive(Debug, Clone, Default)]
pub struct Roster {
    required: Vec<String>,
    completed: HashSet<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the required list from a comma-separated string.
    ///
    /// Entries are trimmed and empty ones dropped. Duplicates are kept.
    /// Completion always resets.
    pub fn set_required(&mut self, raw_names: &str) {
        self.required = parse_names(raw_names);
        self.completed.clear();
    }

    /// Record that `name` performed its click.
    ///
    /// Membership in the required list is not checked.
    pub fn mark_completed(&mut self, name: &str) -> MarkResult {
        if self.completed.contains(name) {
            return MarkResult::AlreadyMarked;
        }
        self.completed.insert(name.to_string());
        MarkResult::Marked {
            new_count: self.completed.len(),
        }
    }

    /// Required names in display order.
    pub fn required(&self) -> &[String] {
        &self.required
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn total_count(&self) -> usize {
        self.required.len()
    }

    pub fn is_completed(&self, name: &str) -> bool {
        self.completed.contains(name)
    }

    pub fn is_complete(&self) -> bool {
        !self.required.is_empty() && self.completed.len() >= self.required.len()
    }
}

fn parse_names(raw: &str) -> Vec<String> {
    raw.split(NAME_DELIMITER)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_roster_is_empty() {
        let roster = Roster::new();
        assert!(roster.required().is_empty());
        assert_eq!(roster.completed_count(), 0);
        assert!(!roster.is_complete());
    }

    #[test]
    fn test_set_required_trims_and_drops_empty() {
        let mut roster = Roster::new();
        roster.set_required("Alice, Bob , ,Carol");
        assert_eq!(roster.required(), ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_set_required_empty_input() {
        let mut roster = Roster::new();
        roster.set_required("");
        assert!(roster.required().is_empty());
        roster.set_required(" , ,, ");
        assert!(roster.required().is_empty());
        assert!(!roster.is_complete());
    }

    #[test]
    fn test_set_required_keeps_duplicates() {
        let mut roster = Roster::new();
        roster.set_required("Alice,Alice");
        assert_eq!(roster.total_count(), 2);

        roster.mark_completed("Alice");
        assert_eq!(
            roster.mark_completed("Alice"),
            MarkResult::AlreadyMarked
        );
        assert!(!roster.is_complete());
    }

    #[test]
    fn test_set_required_clears_completed() {
        let mut roster = Roster::new();
        roster.set_required("a,b");
        roster.mark_completed("a");
        roster.mark_completed("b");
        assert!(roster.is_complete());

        roster.set_required("a,b");
        assert_eq!(roster.completed_count(), 0);
        assert!(!roster.is_completed("a"));
        assert!(!roster.is_complete());
    }

    #[test]
    fn test_mark_completed_counts_up() {
        let mut roster = Roster::new();
        roster.set_required("a,b,c");
        assert_eq!(roster.mark_completed("a"), MarkResult::Marked { new_count: 1 });
        assert_eq!(roster.mark_completed("b"), MarkResult::Marked { new_count: 2 });
        assert!(roster.is_completed("a"));
    }

    #[test]
    fn test_duplicate_click_is_noop() {
        let mut roster = Roster::new();
        roster.set_required("a,b");
        roster.mark_completed("a");
        assert_eq!(roster.mark_completed("a"), MarkResult::AlreadyMarked);
        assert_eq!(roster.completed_count(), 1);
    }

    #[test]
    fn test_unlisted_name_still_counts() {
        let mut roster = Roster::new();
        roster.set_required("a");
        assert_eq!(
            roster.mark_completed("stranger"),
            MarkResult::Marked { new_count: 1 }
        );
        assert!(roster.is_complete());
    }

    #[test]
    fn test_completed_count_is_monotonic_between_resets() {
        let mut roster = Roster::new();
        roster.set_required("a,b,c");
        let mut last = 0;
        for name in ["a", "a", "b", "c", "b", "zed"] {
            roster.mark_completed(name);
            assert!(roster.completed_count() >= last);
            last = roster.completed_count();
        }
        assert_eq!(last, 4);
    }
}
