// Rust guideline compliant 2026-02-06

//! Implementation of the `hd init` command.
//!
//! Creates the `.helpdesk` directory with an empty record file and a default
//! configuration.

use crate::OutputFormatter;
use anyhow::Result;
use helpdesk_app::RepoContext;
use std::path::Path;

/// Initializes a Helpdesk repository under `root`.
///
/// Existing files are kept, so re-running is safe.
///
/// # Errors
///
/// Returns an error if the directory or files cannot be created.
pub fn execute(root: &Path, formatter: &dyn OutputFormatter) -> Result<String> {
    let repo = RepoContext::init(root)?;
    Ok(formatter.format_message(&format!(
        "✓ Helpdesk repository initialized at {}",
        repo.helpdesk_dir().display()
    )))
}
