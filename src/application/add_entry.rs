//! Record entry use case

use crate::domain::time_ref::resolve_date;
use crate::domain::{Category, JournalEntry, NewEntry};
use crate::error::{JournalError, Result};
use crate::infrastructure::EntryStore;
use chrono::NaiveDate;
use serde::Deserialize;
use std::str::FromStr;
use tracing::info;

/// Raw entry fields as submitted by a user.
///
/// Deserializes from the web form, whose fields are `date`, `title` (the
/// category radio group) and `content`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EntrySubmission {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, rename = "title")]
    pub category: Option<String>,
    #[serde(default, rename = "content")]
    pub text: Option<String>,
}

impl EntrySubmission {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        EntrySubmission {
            date: Some(date.into()),
            category: Some(category.into()),
            text: Some(text.into()),
        }
    }

    /// Check required fields and parse them into a [`NewEntry`].
    ///
    /// All blank fields are reported together before any value is parsed.
    pub fn validate(&self, today: NaiveDate) -> Result<NewEntry> {
        let date = present(&self.date);
        let category = present(&self.category);
        let text = present(&self.text);

        let (Some(date), Some(category), Some(text)) = (date, category, text) else {
            let missing = [("date", date), ("category", category), ("text", text)]
                .into_iter()
                .filter(|(_, value)| value.is_none())
                .map(|(name, _)| name.to_string())
                .collect();
            return Err(JournalError::MissingFields(missing));
        };

        let date = resolve_date(date, today)?;
        let category = Category::from_str(category).map_err(JournalError::InvalidCategory)?;

        Ok(NewEntry::new(date, category, text))
    }
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

/// Validate a submission and persist it
pub fn record_entry<S>(
    store: &S,
    submission: &EntrySubmission,
    today: NaiveDate,
) -> Result<JournalEntry>
where
    S: EntryStore + ?Sized,
{
    let new_entry = submission.validate(today)?;
    let entry = store.create(&new_entry)?;
    info!(id = %entry.id, date = %entry.date, category = %entry.kind, "recorded entry");
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::SqliteEntryStore;

    fn today() -> NaiveDate {
        // Wednesday
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
    }

    #[test]
    fn test_validate_complete_submission() {
        let submission = EntrySubmission::new("2024-01-01", "Work", "  Shipped it  ");

        let entry = submission.validate(today()).unwrap();

        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(entry.category, Category::Work);
        assert_eq!(entry.text, "Shipped it");
    }

    #[test]
    fn test_validate_relative_date() {
        let submission = EntrySubmission::new("yesterday", "learning", "x");
        let entry = submission.validate(today()).unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_missing_fields_are_collected() {
        let submission = EntrySubmission {
            date: Some("   ".to_string()),
            category: Some("work".to_string()),
            text: None,
        };

        match submission.validate(today()).unwrap_err() {
            JournalError::MissingFields(fields) => assert_eq!(fields, vec!["date", "text"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_submission_reports_everything() {
        match EntrySubmission::default().validate(today()).unwrap_err() {
            JournalError::MissingFields(fields) => {
                assert_eq!(fields, vec!["date", "category", "text"])
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_fields_win_over_invalid_values() {
        let submission = EntrySubmission {
            date: Some("not a date".to_string()),
            category: None,
            text: Some("x".to_string()),
        };

        assert!(matches!(
            submission.validate(today()),
            Err(JournalError::MissingFields(_))
        ));
    }

    #[test]
    fn test_invalid_date_and_category() {
        let bad_date = EntrySubmission::new("2024-13-01", "work", "x");
        assert!(matches!(
            bad_date.validate(today()),
            Err(JournalError::InvalidTimeReference(_))
        ));

        let bad_category = EntrySubmission::new("2024-01-01", "chores", "x");
        match bad_category.validate(today()).unwrap_err() {
            JournalError::InvalidCategory(value) => assert_eq!(value, "chores"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_record_entry_persists() {
        let store = SqliteEntryStore::open_in_memory().unwrap();
        let submission = EntrySubmission::new("2024-01-03", "other", "Dentist");

        let entry = record_entry(&store, &submission, today()).unwrap();

        assert_eq!(entry.kind, "other");
        assert_eq!(store.list_all().unwrap(), vec![entry]);
    }

    #[test]
    fn test_rejected_submission_stores_nothing() {
        let store = SqliteEntryStore::open_in_memory().unwrap();
        let submission = EntrySubmission::new("2024-01-03", "other", "");

        assert!(record_entry(&store, &submission, today()).is_err());
        assert!(store.list_all().unwrap().is_empty());
    }
}
