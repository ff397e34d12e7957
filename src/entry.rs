//! Diary entry model.
//!
//! An entry is created once by the journal and afterwards only its
//! title, content and star flag change. `id` and `date` are fixed at
//! creation.

use chrono::{Local, NaiveDate};
use uuid::Uuid;

/// Number of characters shown in a card preview before the ellipsis
pub const PREVIEW_CHARS: usize = 50;

/// Marker appended to truncated previews
pub const PREVIEW_ELLIPSIS: &str = "...";

/// Date format stored on every entry (MM/DD/YYYY)
pub const ENTRY_DATE_FORMAT: &str = "%m/%d/%Y";

/// Long form used by the editor's date label ("October 19, 2026")
pub const LONG_DATE_FORMAT: &str = "%B %-d, %Y";

/// One diary record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiaryEntry {
    /// Opaque unique id (UUID v4)
    pub id: String,
    pub title: String,
    pub content: String,
    /// Creation date, formatted with [`ENTRY_DATE_FORMAT`]
    pub date: String,
    pub is_starred: bool,
}

impl DiaryEntry {
    /// Create a new, unstarred entry dated today
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::new_on(title, content, Local::now().date_naive())
    }

    /// Create a new, unstarred entry with an explicit creation date
    pub fn new_on(title: impl Into<String>, content: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            content: content.into(),
            date: date.format(ENTRY_DATE_FORMAT).to_string(),
            is_starred: false,
        }
    }

    /// Content as shown in the list
    pub fn preview(&self) -> String {
        preview(&self.content)
    }

    /// Case-insensitive substring match on title or content.
    ///
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

/// Cut `content` to [`PREVIEW_CHARS`] characters, marking the cut with
/// [`PREVIEW_ELLIPSIS`]. Content at or under the limit is returned as-is.
pub fn preview(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}{}", &content[..cut], PREVIEW_ELLIPSIS),
        None => content.to_string(),
    }
}

/// Today's date as shown above the editor fields
pub fn long_date_label(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_entry_defaults() {
        let entry = DiaryEntry::new_on("Trip", "Went to the lake", date(2024, 3, 7));
        assert_eq!(entry.title, "Trip");
        assert_eq!(entry.content, "Went to the lake");
        assert_eq!(entry.date, "03/07/2024");
        assert!(!entry.is_starred);
        assert!(!entry.id.is_empty());
    }

    #[test]
    fn test_ids_are_unique() {
        let a = DiaryEntry::new("a", "a");
        let b = DiaryEntry::new("a", "a");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_preview_boundary() {
        let fifty = "x".repeat(50);
        assert_eq!(preview(&fifty), fifty);

        let fifty_one = "y".repeat(51);
        assert_eq!(preview(&fifty_one), format!("{}...", "y".repeat(50)));

        assert_eq!(preview(""), "");
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn test_preview_counts_chars_not_bytes() {
        let content = "é".repeat(51);
        let shown = preview(&content);
        assert_eq!(shown.chars().count(), 53);
        assert!(shown.starts_with(&"é".repeat(50)));
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn test_matches_title_or_content() {
        let entry = DiaryEntry::new("Trip", "Went to the LAKE");
        assert!(entry.matches("trip"));
        assert!(entry.matches("lake"));
        assert!(entry.matches("to the"));
        assert!(!entry.matches("mountain"));
    }

    #[test]
    fn test_long_date_label() {
        assert_eq!(long_date_label(date(2026, 10, 19)), "October 19, 2026");
        assert_eq!(long_date_label(date(2024, 1, 5)), "January 5, 2024");
    }
}
