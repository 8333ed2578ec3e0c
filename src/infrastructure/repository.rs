//! Journal workspace on the file system

use crate::error::{JournalError, Result};
use crate::infrastructure::config::WORKSPACE_DIR;
use crate::infrastructure::{Config, SqliteEntryStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at a workspace root
pub const ROOT_ENV: &str = "WORKJOURNAL_ROOT";

/// Abstract access to a journal workspace
pub trait JournalRepository {
    /// Load configuration from .workjournal/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .workjournal/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .workjournal directory exists
    fn is_initialized(&self) -> bool;

    /// Create .workjournal directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of JournalRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Locate the workspace: `WORKJOURNAL_ROOT` first, then walk up from the
    /// current directory
    pub fn discover() -> Result<Self> {
        if let Some(root_path) = std::env::var_os(ROOT_ENV) {
            let path = PathBuf::from(root_path);
            if Self::has_meta_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            }
            return Err(JournalError::Config(format!(
                "{} is set to '{}' but no {} directory found. \
                Run 'workjournal init' in that directory or unset {}.",
                ROOT_ENV,
                path.display(),
                WORKSPACE_DIR,
                ROOT_ENV
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing .workjournal is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_meta_dir(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| JournalError::NotJournalDirectory(start.to_path_buf()))
    }

    fn has_meta_dir(path: &Path) -> bool {
        path.join(WORKSPACE_DIR).is_dir()
    }

    /// Open the entry store configured for this workspace
    pub fn open_store(&self, config: &Config) -> Result<SqliteEntryStore> {
        SqliteEntryStore::open(config.database_path(&self.root))
    }
}

impl JournalRepository for FileSystemRepository {
    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_meta_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let meta_dir = self.root.join(WORKSPACE_DIR);

        if meta_dir.exists() {
            return Err(JournalError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&meta_dir)?;
        Ok(())
    }
}
