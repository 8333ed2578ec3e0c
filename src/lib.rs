//! workjournal - Dated work/learning journal
//!
//! Entries are tagged Work, Learning or Other, stored in SQLite and shown
//! grouped by Sunday-to-Saturday week, either in the terminal or on a small
//! web page.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod web;

pub use error::JournalError;
