// Rust guideline compliant 2026-10-19

//! Pile CLI Application
//!
//! Command-line interface for the Pile gaming backlog tracker.

use clap::Parser;
use pile_app::{AppError, ErrorEnvelope, RepoContext};
use pile_cli::commands::{self, list::ListArgs, stats::StatsKind};
use pile_cli::logging::{init_tracing, resolve_level};
use pile_cli::{create_formatter, OutputFormatter};
use pile_core::Action;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "pile",
    version,
    about = "Pile: keep your Steam backlog honest",
    long_about = "Pile tracks the games you bought and never finished. It imports a Steam library, derives which games are really being played, and abandons the ones you stopped touching.",
    after_help = "Examples:\n  pile init\n  pile import 76561197960287930 --library owned_games.json\n  pile sync 76561197960287930 --library owned_games.json\n  pile list 76561197960287930 --status unplayed --sort rating\n  pile abandon 76561197960287930 570 --reason \"Too grindy\"\n  pile stats 76561197960287930 shame\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormatArg>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory containing `.pile` (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new Pile data directory
    Init,

    /// Import a Steam library into a user's pile
    Import {
        /// Steam ID (17 digits, starting with 7656119)
        steam_id: String,

        /// Saved GetOwnedGames response
        #[arg(long)]
        library: PathBuf,
    },

    /// Sync playtime and auto-abandon stale games
    Sync {
        /// Steam ID
        steam_id: String,

        /// Saved GetOwnedGames response
        #[arg(long)]
        library: PathBuf,
    },

    /// List a user's pile
    List {
        /// Steam ID
        steam_id: String,

        /// Filter by status
        #[arg(long)]
        status: Option<String>,

        /// Filter by genre
        #[arg(long)]
        genre: Option<String>,

        /// Sort by playtime, rating, or created_at
        #[arg(long)]
        sort: Option<String>,

        /// Sort direction (asc or desc)
        #[arg(long)]
        direction: Option<String>,

        /// Maximum number of games to show
        #[arg(long)]
        limit: Option<usize>,

        /// Number of games to skip
        #[arg(long, default_value_t = 0)]
        offset: usize,
    },

    /// Show one game of a user's pile
    Show {
        /// Steam ID
        steam_id: String,

        /// Steam app id
        app_id: u32,
    },

    /// Mark a game as being played
    Play {
        /// Steam ID
        steam_id: String,

        /// Steam app id
        app_id: u32,
    },

    /// Mark a game as completed
    Complete {
        /// Steam ID
        steam_id: String,

        /// Steam app id
        app_id: u32,
    },

    /// Abandon a game
    Abandon {
        /// Steam ID
        steam_id: String,

        /// Steam app id
        app_id: u32,

        /// Why the game was abandoned
        #[arg(long, default_value = "")]
        reason: String,
    },

    /// Grant amnesty to a game
    Amnesty {
        /// Steam ID
        steam_id: String,

        /// Steam app id
        app_id: u32,

        /// Why amnesty was granted
        #[arg(long, default_value = "")]
        reason: String,
    },

    /// Set a game's status directly
    SetStatus {
        /// Steam ID
        steam_id: String,

        /// Steam app id
        app_id: u32,

        /// New status
        status: String,
    },

    /// Show backlog statistics
    Stats {
        /// Steam ID
        steam_id: String,

        /// Which statistic to show
        #[arg(value_enum)]
        kind: StatsKind,
    },

    /// Delete every game from a user's pile
    Clear {
        /// Steam ID
        steam_id: String,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Show a user's sync state
    User {
        /// Steam ID
        steam_id: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let root = cli.root.as_deref();

    let config = RepoContext::discover(root)
        .and_then(|repo| repo.load_config())
        .unwrap_or_default();

    let format = match cli.format {
        Some(OutputFormatArg::Json) => pile_core::OutputFormat::Json,
        Some(OutputFormatArg::Table) => pile_core::OutputFormat::Table,
        Some(OutputFormatArg::Plain) => pile_core::OutputFormat::Plain,
        None if cli.json => pile_core::OutputFormat::Json,
        None => config.output_format,
    };
    init_tracing(resolve_level(cli.verbose, config.log_level));

    let formatter = create_formatter(format);
    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return ExitCode::SUCCESS;
    };

    match run(command, root, formatter.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report_error(error, format, formatter.as_ref());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands, root: Option<&Path>, formatter: &dyn OutputFormatter) -> anyhow::Result<()> {
    match command {
        Commands::Init => commands::init::execute(root, formatter),
        Commands::Import { steam_id, library } => {
            commands::import::execute(root, &steam_id, library, formatter)
        }
        Commands::Sync { steam_id, library } => {
            commands::sync::execute(root, &steam_id, library, formatter)
        }
        Commands::List {
            steam_id,
            status,
            genre,
            sort,
            direction,
            limit,
            offset,
        } => {
            let args = ListArgs {
                status,
                genre,
                sort,
                direction,
                limit,
                offset,
            };
            commands::list::execute(root, &steam_id, args, formatter)
        }
        Commands::Show { steam_id, app_id } => {
            commands::show::execute(root, &steam_id, app_id, formatter)
        }
        Commands::Play { steam_id, app_id } => {
            commands::action::execute(root, &steam_id, app_id, Action::StartPlaying, formatter)
        }
        Commands::Complete { steam_id, app_id } => {
            commands::action::execute(root, &steam_id, app_id, Action::Complete, formatter)
        }
        Commands::Abandon {
            steam_id,
            app_id,
            reason,
        } => commands::action::execute(
            root,
            &steam_id,
            app_id,
            Action::Abandon { reason },
            formatter,
        ),
        Commands::Amnesty {
            steam_id,
            app_id,
            reason,
        } => commands::action::execute(
            root,
            &steam_id,
            app_id,
            Action::GrantAmnesty { reason },
            formatter,
        ),
        Commands::SetStatus {
            steam_id,
            app_id,
            status,
        } => {
            let action = commands::action::set_status_action(&status)?;
            commands::action::execute(root, &steam_id, app_id, action, formatter)
        }
        Commands::Stats { steam_id, kind } => {
            commands::stats::execute(root, &steam_id, kind, formatter)
        }
        Commands::Clear { steam_id, yes } => {
            commands::clear::execute(root, &steam_id, yes, formatter)
        }
        Commands::User { steam_id } => commands::user::execute(root, &steam_id, formatter),
    }
}

/// Prints an error: a JSON envelope on stdout in JSON mode, plain text on stderr otherwise.
fn report_error(
    error: anyhow::Error,
    format: pile_core::OutputFormat,
    formatter: &dyn OutputFormatter,
) {
    if format != pile_core::OutputFormat::Json {
        eprintln!("{}", formatter.format_error(&format!("{:#}", error)));
        return;
    }

    let app_error = match error.downcast::<AppError>() {
        Ok(app_error) => app_error,
        Err(error) => match error.downcast::<pile_core::Error>() {
            Ok(core_error) => AppError::from(core_error),
            Err(error) => {
                println!("{}", formatter.format_error(&format!("{:#}", error)));
                return;
            }
        },
    };

    println!("{}", ErrorEnvelope::from_error(&app_error).to_json());
}
