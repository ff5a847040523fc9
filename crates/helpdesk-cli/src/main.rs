// Rust guideline compliant 2026-02-06

//! Helpdesk CLI Application
//!
//! Command-line interface for the Helpdesk ticketing system.

use clap::Parser;
use helpdesk_app::{AppError, NewUser};
use helpdesk_cli::commands::{self, Session};
use helpdesk_cli::logging::init_tracing;
use helpdesk_cli::{create_formatter, resolve_format, should_use_color, OutputFormatter};
use helpdesk_core::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "hd",
    version,
    about = "Helpdesk: ticket tracking with a staff review workflow",
    long_about = "Helpdesk lets users submit support tickets and staff accept, reject, and complete them. Rejected tickets can be restored by their owner for another review.",
    after_help = "Examples:\n  hd init\n  hd user add alice --email alice@example.com --first-name Alice --last-name Liddell\n  hd --as alice create \"VPN drops every hour\" --priority high\n  hd --as root list --status active\n  hd --as root set-status tkt-abc123 rejected --comment \"Duplicate of tkt-def456\"\n  hd --as alice set-status tkt-abc123 restored --comment \"Not a duplicate\"\n"
)]
struct Cli {
    /// Act as this registered user
    #[arg(long = "as", global = true, value_name = "USERNAME")]
    as_user: Option<String>,

    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<FormatArg>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level (error, warn, info, debug)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum FormatArg {
    Json,
    Table,
    Plain,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Table => OutputFormat::Table,
            FormatArg::Plain => OutputFormat::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new Helpdesk repository
    Init,

    #[command(flatten)]
    Repo(RepoCommand),
}

/// Commands that run against an initialized repository.
#[derive(Debug, clap::Subcommand)]
enum RepoCommand {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Open a new ticket
    Create {
        /// Title of the ticket
        title: String,

        /// Description of the ticket
        #[arg(long)]
        description: Option<String>,

        /// Priority (high, medium, low)
        #[arg(long)]
        priority: Option<String>,
    },

    /// List visible tickets
    List {
        /// Filter by status
        #[arg(long)]
        status: Option<String>,

        /// Filter by priority
        #[arg(long)]
        priority: Option<String>,
    },

    /// List restored tickets awaiting review (staff only)
    Restored,

    /// Show details of a ticket
    Show {
        /// Ticket ID (full or partial)
        id: String,
    },

    /// Edit an active ticket's description or priority
    Edit {
        /// Ticket ID (full or partial)
        id: String,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New priority
        #[arg(long)]
        priority: Option<String>,
    },

    /// Change a ticket's status
    SetStatus {
        /// Ticket ID (full or partial)
        id: String,

        /// Target status (processed, rejected, restored, completed)
        status: String,

        /// Comment stored with the change
        #[arg(long)]
        comment: Option<String>,
    },

    /// Manage ticket comments
    Comments {
        #[command(subcommand)]
        action: CommentAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum UserAction {
    /// Register a user
    Add {
        /// Login name
        username: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Given name
        #[arg(long)]
        first_name: String,

        /// Family name
        #[arg(long)]
        last_name: String,

        /// Register as staff
        #[arg(long)]
        staff: bool,
    },

    /// List users
    List,
}

#[derive(Debug, clap::Subcommand)]
enum CommentAction {
    /// Add a discussion comment to a ticket
    Add {
        /// Ticket ID (full or partial)
        id: String,

        /// Comment text
        body: String,
    },

    /// List comments for a ticket
    List {
        /// Ticket ID (full or partial)
        id: String,
    },
}

fn dispatch(
    session: &Session,
    command: RepoCommand,
    formatter: &dyn OutputFormatter,
) -> anyhow::Result<String> {
    match command {
        RepoCommand::User { action } => match action {
            UserAction::Add {
                username,
                email,
                first_name,
                last_name,
                staff,
            } => commands::user::add(
                session,
                NewUser {
                    username,
                    email,
                    first_name,
                    last_name,
                    is_staff: staff,
                },
                formatter,
            ),
            UserAction::List => commands::user::list(session, formatter),
        },
        RepoCommand::Create {
            title,
            description,
            priority,
        } => commands::create::execute(session, title, description, priority, formatter),
        RepoCommand::List { status, priority } => {
            commands::list::execute(session, status, priority, formatter)
        }
        RepoCommand::Restored => commands::list::restored(session, formatter),
        RepoCommand::Show { id } => commands::show::execute(session, &id, formatter),
        RepoCommand::Edit {
            id,
            description,
            priority,
        } => commands::edit::execute(session, &id, description, priority, formatter),
        RepoCommand::SetStatus {
            id,
            status,
            comment,
        } => commands::set_status::execute(session, &id, &status, comment.as_deref(), formatter),
        RepoCommand::Comments { action } => match action {
            CommentAction::Add { id, body } => commands::comments::add(session, &id, &body, formatter),
            CommentAction::List { id } => commands::comments::list(session, &id, formatter),
        },
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = init_tracing(&cli.log_level, cli.log_file.as_deref())?;

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(ExitCode::SUCCESS);
    };

    let use_color = !cli.no_color && should_use_color();
    let explicit = cli.format.map(OutputFormat::from);

    let (format, result) = match command {
        Commands::Init => {
            let format = resolve_format(explicit, cli.json, None);
            let formatter = create_formatter(format, use_color);
            let root = std::env::current_dir()?;
            (format, commands::init::execute(&root, formatter.as_ref()))
        }
        Commands::Repo(command) => match Session::open(None, cli.as_user) {
            Ok(session) => {
                let format =
                    resolve_format(explicit, cli.json, Some(session.config().output_format));
                let formatter = create_formatter(format, use_color);
                (format, dispatch(&session, command, formatter.as_ref()))
            }
            Err(err) => (resolve_format(explicit, cli.json, None), Err(err.into())),
        },
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            let formatter = create_formatter(format, use_color);
            let rendered = match err.downcast_ref::<AppError>() {
                Some(app_error) => formatter.format_app_error(app_error),
                None => formatter.format_error(&format!("{:#}", err)),
            };
            if format == OutputFormat::Json {
                println!("{}", rendered);
            } else {
                eprintln!("{}", rendered);
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
