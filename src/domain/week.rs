//! Week bucketing of journal entries
//!
//! Weeks run Sunday through Saturday and are keyed by their Sunday. All
//! arithmetic is on calendar dates; no time zone is involved.

use crate::domain::{Category, JournalEntry};
use crate::error::{JournalError, Result};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// Most recent Sunday on or before `date`.
///
/// `None` when that Sunday precedes [`NaiveDate::MIN`].
pub fn week_start(date: NaiveDate) -> Option<NaiveDate> {
    date.checked_sub_signed(Duration::days(
        date.weekday().num_days_from_sunday() as i64,
    ))
}

/// Entries of one Sunday-to-Saturday week, partitioned by category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekBucket {
    pub week_start: NaiveDate,
    pub work: Vec<JournalEntry>,
    pub learning: Vec<JournalEntry>,
    pub other: Vec<JournalEntry>,
}

impl WeekBucket {
    pub fn new(week_start: NaiveDate) -> Self {
        WeekBucket {
            week_start,
            work: Vec::new(),
            learning: Vec::new(),
            other: Vec::new(),
        }
    }

    /// Saturday closing this week, `None` past [`NaiveDate::MAX`]
    pub fn week_end(&self) -> Option<NaiveDate> {
        self.week_start.checked_add_signed(Duration::days(6))
    }

    /// Display heading, e.g. "Week of December 31, 2023"
    pub fn heading(&self) -> String {
        format!("Week of {}", self.week_start.format("%B %-d, %Y"))
    }

    pub fn entries(&self, category: Category) -> &[JournalEntry] {
        match category {
            Category::Work => &self.work,
            Category::Learning => &self.learning,
            Category::Other => &self.other,
        }
    }

    fn entries_mut(&mut self, category: Category) -> &mut Vec<JournalEntry> {
        match category {
            Category::Work => &mut self.work,
            Category::Learning => &mut self.learning,
            Category::Other => &mut self.other,
        }
    }

    pub fn len(&self) -> usize {
        self.work.len() + self.learning.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Group entries into weeks, oldest week first.
///
/// Every entry opens a bucket for its week. Within a category, entries keep
/// their relative input order. Entries whose stored kind is not a known
/// category are left out of all three lists, so a week holding only those
/// yields an empty bucket.
pub fn group_by_week(entries: &[JournalEntry]) -> Result<Vec<WeekBucket>> {
    let mut weeks: BTreeMap<NaiveDate, WeekBucket> = BTreeMap::new();

    for entry in entries {
        let start = week_start(entry.date).ok_or_else(|| {
            JournalError::InvalidData(format!(
                "entry {} dated {} has no representable week",
                entry.id, entry.date
            ))
        })?;
        let bucket = weeks.entry(start).or_insert_with(|| WeekBucket::new(start));
        if let Some(category) = entry.category() {
            bucket.entries_mut(category).push(entry.clone());
        }
    }

    Ok(weeks.into_values().collect())
}
