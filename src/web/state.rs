//! Shared state handed to every handler

use std::sync::{Arc, Mutex};

use crate::infrastructure::SqliteEntryStore;
use crate::web::routes::WebError;

/// Shared handler state: the single store connection behind a lock
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<SqliteEntryStore>>,
}

impl AppState {
    pub fn new(store: SqliteEntryStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Run one synchronous store operation under the lock
    pub fn with_store<T, F>(&self, f: F) -> Result<T, WebError>
    where
        F: FnOnce(&SqliteEntryStore) -> crate::error::Result<T>,
    {
        let store = self.store.lock().map_err(|_| WebError::StorePoisoned)?;
        f(&*store).map_err(WebError::from)
    }
}
