//! Journal entry model

use crate::domain::Category;
use chrono::NaiveDate;
use std::fmt;

/// Store-assigned identifier of an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub i64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted journal entry.
///
/// `kind` keeps the label exactly as stored, so rows written by other tools
/// with labels outside [`Category`] still load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    pub id: EntryId,
    pub date: NaiveDate,
    pub kind: String,
    pub text: String,
}

impl JournalEntry {
    pub fn new(
        id: EntryId,
        date: NaiveDate,
        kind: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        JournalEntry {
            id,
            date,
            kind: kind.into(),
            text: text.into(),
        }
    }

    /// Category of this entry, `None` if the stored label is unknown
    pub fn category(&self) -> Option<Category> {
        Category::from_label(&self.kind)
    }
}

/// Validated input for creating an entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub category: Category,
    pub text: String,
}

impl NewEntry {
    pub fn new(date: NaiveDate, category: Category, text: impl Into<String>) -> Self {
        NewEntry {
            date,
            category,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_of_known_and_unknown_kinds() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let work = JournalEntry::new(EntryId(1), date, "work", "a");
        let odd = JournalEntry::new(EntryId(2), date, "chores", "b");

        assert_eq!(work.category(), Some(Category::Work));
        assert_eq!(odd.category(), None);
    }
}
