//! Domain layer - Entries, categories and week bucketing

pub mod category;
pub mod entry;
pub mod time_ref;
pub mod week;

pub use category::Category;
pub use entry::{EntryId, JournalEntry, NewEntry};
pub use time_ref::TimeReference;
pub use week::{group_by_week, week_start, WeekBucket};
