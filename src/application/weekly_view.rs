//! Weekly view use case

use crate::domain::{group_by_week, WeekBucket};
use crate::error::{JournalError, Result};
use crate::infrastructure::EntryStore;
use chrono::NaiveDate;

/// Builds the week-bucketed view from a store snapshot
pub struct WeeklyViewService<'a, S: EntryStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: EntryStore + ?Sized> WeeklyViewService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        WeeklyViewService { store }
    }

    /// Weeks containing entries dated within `from..=to`, oldest first
    pub fn execute(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<WeekBucket>> {
        if let (Some(from), Some(to)) = (from, to) {
            if from > to {
                return Err(JournalError::Config(format!(
                    "invalid date range: {} is after {}",
                    from, to
                )));
            }
        }

        let mut entries = self.store.list_all()?;
        entries.retain(|e| {
            from.map_or(true, |f| e.date >= f) && to.map_or(true, |t| e.date <= t)
        });

        group_by_week(&entries)
    }
}
