//! Entry persistence

use crate::domain::{EntryId, JournalEntry, NewEntry};
use crate::error::{JournalError, Result};
use crate::infrastructure::migrations::apply_migrations;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Storage contract consumed by the application layer
pub trait EntryStore {
    /// Persist a validated entry and return it with its assigned id
    fn create(&self, entry: &NewEntry) -> Result<JournalEntry>;

    /// Every stored entry, oldest date first, insertion order within a day
    fn list_all(&self) -> Result<Vec<JournalEntry>>;
}

/// SQLite-backed entry store owning a single connection
#[derive(Debug)]
pub struct SqliteEntryStore {
    conn: Connection,
}

impl SqliteEntryStore {
    /// Open (or create) a database file and bring its schema up to date
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        let store = Self::bootstrap(conn)?;
        info!(path = %path.display(), "opened entry store");
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::bootstrap(Connection::open_in_memory()?)
    }

    fn bootstrap(mut conn: Connection) -> Result<Self> {
        conn.busy_timeout(Duration::from_secs(5))?;
        apply_migrations(&mut conn)?;
        Ok(SqliteEntryStore { conn })
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl EntryStore for SqliteEntryStore {
    fn create(&self, entry: &NewEntry) -> Result<JournalEntry> {
        let date = entry.date.format(DATE_FORMAT).to_string();
        self.conn.execute(
            "INSERT INTO entries (date, kind, text) VALUES (?1, ?2, ?3);",
            params![date, entry.category.label(), entry.text],
        )?;
        let id = EntryId(self.conn.last_insert_rowid());
        debug!(%id, %date, category = %entry.category, "inserted entry");

        Ok(JournalEntry::new(
            id,
            entry.date,
            entry.category.label(),
            entry.text.clone(),
        ))
    }

    fn list_all(&self) -> Result<Vec<JournalEntry>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, date, kind, text FROM entries ORDER BY date ASC, id ASC;")?;
        let rows = stmt.query_map([], read_row)?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, date, kind, text) = row?;
            let date = NaiveDate::parse_from_str(&date, DATE_FORMAT).map_err(|_| {
                JournalError::InvalidData(format!("entry {} has invalid date '{}'", id, date))
            })?;
            entries.push(JournalEntry::new(EntryId(id), date, kind, text));
        }
        Ok(entries)
    }
}

type RawEntry = (i64, String, String, String);

fn read_row(row: &Row<'_>) -> rusqlite::Result<RawEntry> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let store = SqliteEntryStore::open_in_memory().unwrap();

        let first = store
            .create(&NewEntry::new(date(2024, 1, 1), Category::Work, "first"))
            .unwrap();
        let second = store
            .create(&NewEntry::new(date(2024, 1, 1), Category::Other, "second"))
            .unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.kind, "work");
        assert_eq!(second.category(), Some(Category::Other));
    }

    #[test]
    fn test_list_all_orders_by_date_then_insertion() {
        let store = SqliteEntryStore::open_in_memory().unwrap();
        store
            .create(&NewEntry::new(date(2024, 1, 8), Category::Work, "later"))
            .unwrap();
        store
            .create(&NewEntry::new(date(2024, 1, 1), Category::Work, "early a"))
            .unwrap();
        store
            .create(&NewEntry::new(date(2024, 1, 1), Category::Learning, "early b"))
            .unwrap();

        let texts: Vec<String> = store
            .list_all()
            .unwrap()
            .into_iter()
            .map(|e| e.text)
            .collect();

        assert_eq!(texts, vec!["early a", "early b", "later"]);
    }

    #[test]
    fn test_list_all_empty() {
        let store = SqliteEntryStore::open_in_memory().unwrap();
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_text_is_stored_verbatim() {
        let store = SqliteEntryStore::open_in_memory().unwrap();
        let text = "line one\n<b>line two</b> & 'quotes'";
        store
            .create(&NewEntry::new(date(2024, 1, 2), Category::Other, text))
            .unwrap();

        assert_eq!(store.list_all().unwrap()[0].text, text);
    }

    #[test]
    fn test_unknown_kind_loads_without_category() {
        let store = SqliteEntryStore::open_in_memory().unwrap();
        store
            .connection()
            .execute(
                "INSERT INTO entries (date, kind, text) VALUES ('2024-01-03', 'chores', 'dishes');",
                [],
            )
            .unwrap();

        let entries = store.list_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, "chores");
        assert_eq!(entries[0].category(), None);
    }

    #[test]
    fn test_invalid_stored_date_is_reported() {
        let store = SqliteEntryStore::open_in_memory().unwrap();
        store
            .connection()
            .execute(
                "INSERT INTO entries (date, kind, text) VALUES ('01/03/2024', 'work', 'x');",
                [],
            )
            .unwrap();

        match store.list_all().unwrap_err() {
            JournalError::InvalidData(msg) => assert!(msg.contains("01/03/2024")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_entries_survive_reopen() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("journal.db");

        {
            let store = SqliteEntryStore::open(&path).unwrap();
            store
                .create(&NewEntry::new(date(2024, 1, 3), Category::Learning, "kept"))
                .unwrap();
        }

        let reopened = SqliteEntryStore::open(&path).unwrap();
        let entries = reopened.list_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].text, "kept");
        assert_eq!(entries[0].date, date(2024, 1, 3));
    }
}
