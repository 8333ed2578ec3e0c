//! Error types for workjournal

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the workjournal application
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Not a workjournal directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidTimeReference(String),

    #[error("Missing fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid stored entry: {0}")]
    InvalidData(String),

    #[error("Database schema version {db_version} is newer than supported {latest_supported}")]
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Failed to parse config.toml: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl JournalError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JournalError::NotJournalDirectory(_) => 2,
            JournalError::InvalidTimeReference(_) => 3,
            JournalError::MissingFields(_) => 4,
            JournalError::InvalidCategory(_) => 5,
            _ => 1,
        }
    }

    /// True for errors caused by what the user submitted rather than by the
    /// store or the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            JournalError::InvalidTimeReference(_)
                | JournalError::MissingFields(_)
                | JournalError::InvalidCategory(_)
        )
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            JournalError::NotJournalDirectory(path) => {
                format!(
                    "Not a workjournal directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'workjournal init' in this directory to create a new journal\n\
                    • Navigate to an existing journal directory\n\
                    • Set WORKJOURNAL_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            JournalError::InvalidTimeReference(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, next friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2024-01-08)\n\n\
                    Examples:\n\
                    workjournal add -c work -d yesterday \"Shipped the release\"\n\
                    workjournal add -c learning -d 2024-01-08 \"Read about lifetimes\"",
                    input
                )
            }
            JournalError::MissingFields(fields) => {
                format!(
                    "Missing fields: {}\n\n\
                    Every entry needs a date, a category and some text.\n\
                    Example: workjournal add -c work \"Reviewed the migration plan\"",
                    fields.join(", ")
                )
            }
            JournalError::InvalidCategory(category) => {
                format!(
                    "Invalid category: '{}'\n\n\
                    Valid categories: work, learning, other",
                    category
                )
            }
            JournalError::Config(msg) => {
                if msg.contains("date range") {
                    format!(
                        "{}\n\n\
                        Expected format: YYYY-MM-DD, with --from not after --to\n\
                        Example: workjournal list --from 2024-01-01 --to 2024-01-31",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using JournalError
pub type Result<T> = std::result::Result<T, JournalError>;
