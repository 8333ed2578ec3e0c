//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::fs;
use std::path::Path;
use tracing::info;

/// Initialize a new journal at the specified path.
///
/// Writes the default configuration and creates an empty database so the
/// workspace is immediately usable by `add`, `list` and `serve`.
pub fn init(path: &Path) -> Result<FileSystemRepository> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::default();
    repo.save_config(&config)?;
    repo.open_store(&config)?;

    info!(root = %path.display(), "initialized journal");
    println!("Initialized workjournal at {}", path.display());
    println!("Database: {}", config.database_path(path).display());

    Ok(repo)
}
