//! In-memory entry collection.
//!
//! Entries are kept newest-first. Edits and star toggles never move an
//! entry; only `add` changes order, by prepending. Every operation is
//! total: unknown ids are ignored.

use crate::entry::DiaryEntry;

/// Ordered collection of diary entries for the session
#[derive(Debug, Default)]
pub struct Journal {
    entries: Vec<DiaryEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dated-today entry and put it at the front.
    /// Returns the new entry's id.
    pub fn add(&mut self, title: impl Into<String>, content: impl Into<String>) -> String {
        self.insert(DiaryEntry::new(title, content))
    }

    /// Put an already built entry at the front
    pub fn insert(&mut self, entry: DiaryEntry) -> String {
        let id = entry.id.clone();
        tracing::debug!("Adding entry {}", id);
        self.entries.insert(0, entry);
        id
    }

    /// Replace title and content of `id`, keeping everything else
    pub fn update(&mut self, id: &str, title: impl Into<String>, content: impl Into<String>) {
        match self.get_mut(id) {
            Some(entry) => {
                entry.title = title.into();
                entry.content = content.into();
                tracing::debug!("Updated entry {}", id);
            }
            None => tracing::debug!("Update ignored, no entry {}", id),
        }
    }

    /// Delete `id` from the collection
    pub fn remove(&mut self, id: &str) {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() < before {
            tracing::debug!("Removed entry {}", id);
        }
    }

    /// Flip the star flag on `id`
    pub fn toggle_star(&mut self, id: &str) {
        if let Some(entry) = self.get_mut(id) {
            entry.is_starred = !entry.is_starred;
            tracing::debug!("Entry {} starred: {}", id, entry.is_starred);
        }
    }

    /// Entries whose title or content contains `query`, ignoring case.
    /// An empty query yields every entry in order.
    pub fn filter(&self, query: &str) -> Vec<&DiaryEntry> {
        if query.is_empty() {
            return self.entries().iter().collect();
        }
        let needle = query.to_lowercase();
        self.entries.iter().filter(|e| e.matches(&needle)).collect()
    }

    pub fn entries(&self) -> &[DiaryEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&DiaryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut DiaryEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    /// Index of `id` in display order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn journal_with(titles: &[&str]) -> (Journal, Vec<String>) {
        let mut journal = Journal::new();
        let ids = titles
            .iter()
            .map(|t| journal.add(*t, format!("{} body", t)))
            .collect();
        (journal, ids)
    }

    fn titles(entries: &[&DiaryEntry]) -> Vec<String> {
        entries.iter().map(|e| e.title.clone()).collect()
    }

    #[test]
    fn test_add_is_newest_first() {
        let (journal, ids) = journal_with(&["one", "two", "three"]);
        assert_eq!(journal.len(), 3);
        assert_eq!(journal.entries()[0].id, ids[2]);
        assert_eq!(journal.entries()[1].id, ids[1]);
        assert_eq!(journal.entries()[2].id, ids[0]);
    }

    #[test]
    fn test_update_changes_only_text() {
        let (mut journal, ids) = journal_with(&["one", "two", "three"]);
        journal.toggle_star(&ids[1]);
        let before = journal.get(&ids[1]).unwrap().clone();

        journal.update(&ids[1], "renamed", "new body");

        let after = journal.get(&ids[1]).unwrap();
        assert_eq!(after.title, "renamed");
        assert_eq!(after.content, "new body");
        assert_eq!(after.id, before.id);
        assert_eq!(after.date, before.date);
        assert!(after.is_starred);
        assert_eq!(journal.position(&ids[1]), Some(1));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (mut journal, _) = journal_with(&["one", "two"]);
        let before = journal.entries().to_vec();
        journal.update("missing", "x", "y");
        assert_eq!(journal.entries(), before.as_slice());
    }

    #[test]
    fn test_remove() {
        let (mut journal, ids) = journal_with(&["one", "two", "three"]);
        journal.remove(&ids[1]);
        assert_eq!(journal.len(), 2);
        assert!(journal.get(&ids[1]).is_none());
        assert_eq!(titles(&journal.filter("")), vec!["three", "one"]);

        journal.remove("missing");
        assert_eq!(journal.len(), 2);
    }

    #[test]
    fn test_toggle_star_is_involution() {
        let (mut journal, ids) = journal_with(&["one"]);
        assert!(!journal.get(&ids[0]).unwrap().is_starred);
        journal.toggle_star(&ids[0]);
        assert!(journal.get(&ids[0]).unwrap().is_starred);
        journal.toggle_star(&ids[0]);
        assert!(!journal.get(&ids[0]).unwrap().is_starred);

        journal.toggle_star("missing");
        assert_eq!(journal.len(), 1);
    }

    #[test]
    fn test_star_does_not_move_entry() {
        let (mut journal, ids) = journal_with(&["one", "two", "three"]);
        journal.toggle_star(&ids[0]);
        assert_eq!(journal.position(&ids[0]), Some(2));
    }

    #[test]
    fn test_filter() {
        let mut journal = Journal::new();
        journal.add("Groceries", "milk, eggs");
        journal.add("Trip", "Went to the Lake");
        journal.add("Work", "lakeside meeting");

        assert_eq!(titles(&journal.filter("LAKE")), vec!["Work", "Trip"]);
        assert_eq!(titles(&journal.filter("trip")), vec!["Trip"]);
        assert_eq!(titles(&journal.filter("")), vec!["Work", "Trip", "Groceries"]);
        assert!(journal.filter("mountain").is_empty());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut journal = Journal::new();
        let id = journal.add("Trip", "Went to the lake");
        assert_eq!(journal.len(), 1);
        let entry = &journal.entries()[0];
        assert_eq!(entry.title, "Trip");
        assert_eq!(entry.content, "Went to the lake");
        assert!(!entry.is_starred);

        journal.toggle_star(&id);
        assert!(journal.get(&id).unwrap().is_starred);

        assert_eq!(journal.filter("lake").len(), 1);
        assert_eq!(journal.filter("lake")[0].id, id);
        assert!(journal.filter("mountain").is_empty());

        journal.remove(&id);
        assert!(journal.is_empty());
    }
}
