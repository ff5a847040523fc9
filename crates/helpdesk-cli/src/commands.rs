// Rust guideline compliant 2026-02-06

//! Command implementations for the Helpdesk CLI.
//!
//! Each command returns the text to print so the binary decides where it
//! goes.

pub mod comments;
pub mod create;
pub mod edit;
pub mod init;
pub mod list;
pub mod set_status;
pub mod show;
pub mod user;

use helpdesk_app::{AppError, RepoContext};
use helpdesk_core::{Config, Storage};
use std::path::Path;

/// An opened repository plus the user acting in it.
#[derive(Debug)]
pub struct Session {
    repo: RepoContext,
    config: Config,
    storage: Storage,
    user: Option<String>,
}

impl Session {
    /// Opens the repository at `root` (or the current directory).
    ///
    /// `user` overrides the configured default user.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository is not initialized or its
    /// configuration is invalid.
    pub fn open(root: Option<&Path>, user: Option<String>) -> helpdesk_app::Result<Self> {
        let repo = RepoContext::discover(root)?;
        let config = repo.load_config()?;
        let storage = repo.open_storage()?;
        Ok(Self {
            repo,
            config,
            storage,
            user,
        })
    }

    /// Returns the repository paths.
    pub fn repo(&self) -> &RepoContext {
        &self.repo
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the record store.
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Returns the acting username.
    ///
    /// # Errors
    ///
    /// Returns an error if neither `--as` nor a default user is set.
    pub fn username(&self) -> helpdesk_app::Result<&str> {
        self.user
            .as_deref()
            .or(self.config.default_user.as_deref())
            .ok_or_else(|| {
                AppError::InvalidInput(
                    "No acting user. Pass --as <username> or set HELPDESK_USER.".to_string(),
                )
            })
    }
}
