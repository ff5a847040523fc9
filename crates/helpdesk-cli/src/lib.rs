// Rust guideline compliant 2026-02-06

//! Helpdesk CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod logging;
pub mod output;
pub mod terminal;

pub use commands::Session;
pub use output::{create_formatter, OutputFormatter};
pub use terminal::{get_terminal_width, should_use_color, wrap_text};

use helpdesk_core::OutputFormat;

/// Picks the output format: an explicit `--format` wins, then `--json`,
/// then the repository configuration.
pub fn resolve_format(
    explicit: Option<OutputFormat>,
    json: bool,
    configured: Option<OutputFormat>,
) -> OutputFormat {
    match explicit {
        Some(format) => format,
        None if json => OutputFormat::Json,
        None => configured.unwrap_or_default(),
    }
}
