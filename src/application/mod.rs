//! Application layer - Use cases and orchestration

pub mod add_entry;
pub mod init;
pub mod manage_config;
pub mod weekly_view;

pub use add_entry::{record_entry, EntrySubmission};
pub use manage_config::ConfigService;
pub use weekly_view::WeeklyViewService;
