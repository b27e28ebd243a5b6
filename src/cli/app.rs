//! CLI definitions and entry point

use std::io::IsTerminal as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use shiptivity::adapters::sqlite::SqliteClientStore;
use shiptivity::config::Config;
use shiptivity::output::OutputMode;

/// shiptivity - Kanban board for tracking clients
#[derive(Parser, Debug)]
#[command(
    name = "shiptivity",
    version,
    about = "Kanban board for tracking clients",
    long_about = "Track clients across backlog, in-progress and complete swimlanes.\n\n\
                  Serve the board over HTTP, or inspect and reorder it from the terminal.\n\
                  Every move renumbers the affected lanes and is saved atomically."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ~/.config/shiptivity/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// SQLite database file (overrides config and SHIPTIVITY_DB)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the REST API
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show the board
    Board {
        /// Only show one lane: backlog, in-progress, complete
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Show a single client
    Show {
        /// Client id
        id: String,
    },

    /// Move a client to a lane (drag-drop from the terminal)
    Move {
        /// Client id
        id: String,

        /// Destination lane: backlog, in-progress, complete
        #[arg(short, long)]
        to: String,

        /// Drop above this client (defaults to the bottom of the lane)
        #[arg(short, long, value_name = "ID")]
        before: Option<String>,
    },

    /// Insert the sample clients
    Seed {
        /// Insert missing sample clients even if the board is not empty
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Settings resolved for one invocation
#[derive(Debug, Clone)]
pub struct Context {
    /// Effective configuration
    pub config: Config,
    /// Output mode
    pub mode: OutputMode,
}

impl Context {
    /// Open the configured database
    pub fn open_store(&self) -> anyhow::Result<SqliteClientStore> {
        let path = &self.config.database.path;
        SqliteClientStore::open(path)
            .map_err(|e| anyhow::anyhow!("Failed to open database {}: {e}", path.display()))
    }
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    if mode == OutputMode::Json || !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_env();
    if let Some(db) = cli.db {
        config.database.path = db;
    }
    let ctx = Context { config, mode };

    match cli.command {
        Some(Command::Serve { host, port }) => commands::serve(ctx, host, port),
        Some(Command::Board { status }) => commands::board(&ctx, status.as_deref()),
        Some(Command::Show { id }) => commands::show(&ctx, &id),
        Some(Command::Move { id, to, before }) => {
            commands::move_client(&ctx, &id, &to, before.as_deref())
        },
        Some(Command::Seed { force }) => commands::seed(&ctx, force),
        Some(Command::Version) => {
            if mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("shiptivity v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("shiptivity v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'shiptivity --help' for usage");
                println!("Run 'shiptivity seed && shiptivity serve' to get started");
            }
            Ok(())
        },
    }
}
