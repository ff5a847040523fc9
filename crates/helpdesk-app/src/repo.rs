// Rust guideline compliant 2026-02-09

//! Repository discovery and path management utilities.

use crate::error::{AppError, Result};
use helpdesk_core::{Config, Storage};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the directory holding a Helpdesk repository.
pub const HELPDESK_DIR: &str = ".helpdesk";

/// Repository path metadata for a Helpdesk workspace.
#[derive(Debug, Clone)]
pub struct RepoContext {
    root: PathBuf,
    helpdesk_dir: PathBuf,
    records_path: PathBuf,
    config_path: PathBuf,
}

impl RepoContext {
    fn at(root: PathBuf) -> Self {
        let helpdesk_dir = root.join(HELPDESK_DIR);
        Self {
            root,
            records_path: helpdesk_dir.join("records.jsonl"),
            config_path: helpdesk_dir.join("config.toml"),
            helpdesk_dir,
        }
    }

    /// Discovers a Helpdesk repository starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `repo_root` - Optional repository root to pin discovery
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The repository root cannot be resolved
    /// - The `.helpdesk` directory is missing
    pub fn discover(repo_root: Option<&Path>) -> Result<Self> {
        let root = match repo_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let context = Self::at(root);
        if !context.helpdesk_dir.exists() {
            return Err(AppError::RepoNotInitialized {
                path: context.helpdesk_dir,
            });
        }
        Ok(context)
    }

    /// Creates the `.helpdesk` directory, an empty record file and a default
    /// config under `root`.
    ///
    /// Existing files are left as they are, so running it twice is harmless.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or file cannot be created.
    pub fn init(root: &Path) -> Result<Self> {
        let context = Self::at(root.to_path_buf());

        if !context.helpdesk_dir.exists() {
            fs::create_dir_all(&context.helpdesk_dir)?;
        }
        if !context.records_path.exists() {
            fs::File::create(&context.records_path)?;
        }
        if !context.config_path.exists() {
            Config::default().save(&context.helpdesk_dir)?;
        }

        Ok(context)
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.helpdesk` directory path.
    #[must_use]
    pub fn helpdesk_dir(&self) -> &Path {
        self.helpdesk_dir.as_path()
    }

    /// Returns the records JSONL path.
    #[must_use]
    pub fn records_path(&self) -> &Path {
        self.records_path.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Opens storage for the records file.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be initialized.
    pub fn open_storage(&self) -> Result<Storage> {
        Ok(Storage::new(self.records_path.clone())?)
    }

    /// Loads repository configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.helpdesk_dir())?)
    }
}
