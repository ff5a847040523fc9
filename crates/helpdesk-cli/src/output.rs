// Rust guideline compliant 2026-02-06

//! Output formatting module for the Helpdesk CLI.
//!
//! This module provides functionality for formatting Helpdesk data
//! in various output formats (JSON, table, plain text).

use crate::terminal::wrap_text;
use chrono::{DateTime, Utc};
use helpdesk_app::{AppError, ErrorEnvelope, SuccessEnvelope, TicketDetail, TransitionOutcome};
use helpdesk_core::{Comment, CommentRule, OutputFormat, Ticket, TransitionRule, User};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tabled::{builder::Builder, settings::Style};
use termcolor::{Buffer, Color, ColorSpec, WriteColor};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

fn format_time(time: &DateTime<Utc>) -> String {
    time.format(TIME_FORMAT).to_string()
}

fn describe_rule(rule: &TransitionRule) -> String {
    let comment = match rule.comment {
        CommentRule::Hidden => "",
        CommentRule::Required(_) => ", comment required",
        CommentRule::Optional(_) => ", comment optional",
    };
    format!("{} (-> {}{})", rule.transition.verb(), rule.to, comment)
}

/// Output formatter trait.
///
/// Defines the interface for formatting Helpdesk data in different output formats.
pub trait OutputFormatter {
    /// Formats a single ticket, as returned by create and edit.
    fn format_ticket(&self, ticket: &Ticket) -> String;

    /// Formats the detail view of a ticket.
    fn format_detail(&self, detail: &TicketDetail) -> String;

    /// Formats a ticket list.
    fn format_ticket_list(&self, tickets: &[Ticket]) -> String;

    /// Formats the result of a status change.
    fn format_outcome(&self, outcome: &TransitionOutcome) -> String;

    /// Formats a single comment.
    fn format_comment(&self, comment: &Comment) -> String;

    /// Formats a ticket's comments.
    fn format_comment_list(&self, comments: &[Comment]) -> String;

    /// Formats a single user.
    fn format_user(&self, user: &User) -> String;

    /// Formats the user list.
    fn format_user_list(&self, users: &[User]) -> String;

    /// Formats an informational message.
    fn format_message(&self, message: &str) -> String;

    /// Formats an error message for display.
    fn format_error(&self, error: &str) -> String;

    /// Formats an application error for display.
    fn format_app_error(&self, error: &AppError) -> String {
        self.format_error(&error.to_string())
    }
}

/// JSON output formatter.
///
/// Wraps every payload in the standard success envelope.
pub struct JsonFormatter;

impl JsonFormatter {
    fn envelope<T: Serialize>(&self, result: T) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(result))
            .unwrap_or_else(|_| json!({ "status": "error", "message": "Failed to serialize output" }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_ticket(&self, ticket: &Ticket) -> String {
        self.envelope(ticket)
    }

    fn format_detail(&self, detail: &TicketDetail) -> String {
        self.envelope(detail)
    }

    fn format_ticket_list(&self, tickets: &[Ticket]) -> String {
        self.envelope(json!({
            "tickets": tickets,
            "total": tickets.len(),
        }))
    }

    fn format_outcome(&self, outcome: &TransitionOutcome) -> String {
        self.envelope(outcome)
    }

    fn format_comment(&self, comment: &Comment) -> String {
        self.envelope(comment)
    }

    fn format_comment_list(&self, comments: &[Comment]) -> String {
        self.envelope(json!({
            "comments": comments,
            "total": comments.len(),
        }))
    }

    fn format_user(&self, user: &User) -> String {
        self.envelope(user)
    }

    fn format_user_list(&self, users: &[User]) -> String {
        self.envelope(json!({
            "users": users,
            "total": users.len(),
        }))
    }

    fn format_message(&self, message: &str) -> String {
        self.envelope(json!({ "message": message }))
    }

    fn format_error(&self, error: &str) -> String {
        json!({ "status": "error", "message": error }).to_string()
    }

    fn format_app_error(&self, error: &AppError) -> String {
        serde_json::to_string_pretty(&ErrorEnvelope::from_error(error))
            .unwrap_or_else(|_| self.format_error(&error.to_string()))
    }
}

/// Table output formatter.
///
/// Formats data as human-readable tables with colors and alignment.
pub struct TableFormatter {
    use_color: bool,
}

impl TableFormatter {
    /// Creates a new table formatter.
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        let mut buffer = if self.use_color {
            Buffer::ansi()
        } else {
            Buffer::no_color()
        };
        let _ = buffer.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(buffer, "{}", text);
        let _ = buffer.reset();
        String::from_utf8_lossy(buffer.as_slice()).to_string()
    }

    fn ticket_fields(&self, ticket: &Ticket) -> String {
        let mut output = String::new();
        output.push_str(&format!("ID:          {}\n", ticket.id));
        output.push_str(&format!("Title:       {}\n", ticket.title));
        output.push_str(&format!(
            "Status:      {}\n",
            self.paint(ticket.status.as_str(), Color::Cyan)
        ));
        output.push_str(&format!("Priority:    {}\n", ticket.priority));
        output.push_str(&format!("Owner:       {}\n", ticket.owner));
        output.push_str(&format!("Created:     {}\n", format_time(&ticket.created)));
        output.push_str(&format!("Updated:     {}\n", format_time(&ticket.updated)));
        if !ticket.description.is_empty() {
            output.push_str(&format!(
                "Description: {}\n",
                wrap_text(&ticket.description, 13)
            ));
        }
        output
    }
}

impl OutputFormatter for TableFormatter {
    fn format_ticket(&self, ticket: &Ticket) -> String {
        self.ticket_fields(ticket)
    }

    fn format_detail(&self, detail: &TicketDetail) -> String {
        let mut output = self.ticket_fields(&detail.ticket);

        if !detail.transitions.is_empty() {
            let actions: Vec<String> = detail.transitions.iter().map(describe_rule).collect();
            output.push_str(&format!("Actions:     {}\n", actions.join(", ")));
        }
        if detail.can_edit {
            output.push_str("Editable:    yes\n");
        }

        output.push('\n');
        output.push_str(&self.format_comment_list(&detail.comments));
        output
    }

    fn format_ticket_list(&self, tickets: &[Ticket]) -> String {
        if tickets.is_empty() {
            return "No tickets found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Status", "Priority", "Title", "Created"]);

        for ticket in tickets {
            builder.push_record(vec![
                ticket.id.clone(),
                ticket.status.to_string(),
                ticket.priority.to_string(),
                ticket.title.clone(),
                format_time(&ticket.created),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_outcome(&self, outcome: &TransitionOutcome) -> String {
        match outcome {
            TransitionOutcome::Updated { ticket, comment } => {
                let mut output = format!(
                    "✓ Ticket {} is now {}",
                    ticket.id,
                    self.paint(ticket.status.as_str(), Color::Cyan)
                );
                if let Some(comment) = comment {
                    output.push_str(&format!(
                        "\n  Added {} comment {}",
                        comment.topic, comment.id
                    ));
                }
                output
            }
            TransitionOutcome::Discarded {
                ticket_id,
                removed_comments,
            } => format!(
                "✓ Ticket {} discarded ({} comments removed)",
                ticket_id, removed_comments
            ),
        }
    }

    fn format_comment(&self, comment: &Comment) -> String {
        format!("✓ Added comment {} to {}", comment.id, comment.ticket)
    }

    fn format_comment_list(&self, comments: &[Comment]) -> String {
        if comments.is_empty() {
            return "No comments found.".to_string();
        }

        let mut output = format!("Comments ({}):\n", comments.len());
        for comment in comments {
            output.push_str(&format!(
                "  [{}] {} ({}): {}\n",
                format_time(&comment.created),
                comment.author,
                comment.topic,
                wrap_text(&comment.body, 4)
            ));
        }
        output
    }

    fn format_user(&self, user: &User) -> String {
        let role = if user.is_staff { "staff" } else { "user" };
        format!(
            "✓ Registered {} ({}) as {} [{}]",
            user.username,
            user.full_name(),
            role,
            user.id
        )
    }

    fn format_user_list(&self, users: &[User]) -> String {
        if users.is_empty() {
            return "No users found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Username", "Name", "Email", "Staff"]);
        for user in users {
            builder.push_record(vec![
                user.id.clone(),
                user.username.clone(),
                user.full_name(),
                user.email.clone(),
                if user.is_staff { "yes" } else { "no" }.to_string(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("{}{}", self.paint("Error: ", Color::Red), error)
    }
}

/// Plain text output formatter.
///
/// Formats data as simple plain text without colors or tables.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_ticket(&self, ticket: &Ticket) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", ticket.id));
        output.push_str(&format!("{}\n", ticket.title));
        output.push_str(&format!("{}\n", ticket.status));
        output.push_str(&format!("{}\n", ticket.priority));
        output.push_str(&format!("{}\n", ticket.owner));
        if !ticket.description.is_empty() {
            output.push_str(&format!("{}\n", ticket.description));
        }
        output
    }

    fn format_detail(&self, detail: &TicketDetail) -> String {
        let mut output = self.format_ticket(&detail.ticket);
        for rule in &detail.transitions {
            output.push_str(&format!("action {}\n", describe_rule(rule)));
        }
        for comment in &detail.comments {
            output.push_str(&format!(
                "comment {} {} {} {}\n",
                comment.id, comment.author, comment.topic, comment.body
            ));
        }
        output
    }

    fn format_ticket_list(&self, tickets: &[Ticket]) -> String {
        if tickets.is_empty() {
            return "No tickets found.".to_string();
        }

        let mut output = String::new();
        for ticket in tickets {
            output.push_str(&format!(
                "{} {} {} {}\n",
                ticket.id, ticket.status, ticket.priority, ticket.title
            ));
        }
        output
    }

    fn format_outcome(&self, outcome: &TransitionOutcome) -> String {
        match outcome {
            TransitionOutcome::Updated { ticket, comment } => match comment {
                Some(comment) => format!("{} {} {}", ticket.id, ticket.status, comment.id),
                None => format!("{} {}", ticket.id, ticket.status),
            },
            TransitionOutcome::Discarded {
                ticket_id,
                removed_comments,
            } => format!("{} discarded {}", ticket_id, removed_comments),
        }
    }

    fn format_comment(&self, comment: &Comment) -> String {
        comment.id.clone()
    }

    fn format_comment_list(&self, comments: &[Comment]) -> String {
        if comments.is_empty() {
            return "No comments found.".to_string();
        }

        let mut output = String::new();
        for comment in comments {
            output.push_str(&format!(
                "{} {} {} {}\n",
                comment.id, comment.author, comment.topic, comment.body
            ));
        }
        output
    }

    fn format_user(&self, user: &User) -> String {
        user.id.clone()
    }

    fn format_user_list(&self, users: &[User]) -> String {
        if users.is_empty() {
            return "No users found.".to_string();
        }

        let mut output = String::new();
        for user in users {
            output.push_str(&format!(
                "{} {} {}\n",
                user.id,
                user.username,
                if user.is_staff { "staff" } else { "user" }
            ));
        }
        output
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &str) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
/// * `use_color` - Whether to use colored output (ignored for JSON and plain)
pub fn create_formatter(format: OutputFormat, use_color: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter::new(use_color)),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
