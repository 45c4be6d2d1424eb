//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::logging::{self, LogTarget};
use super::output::{Output, OutputFormat};
use super::{landing, todo, tui};
use crate::manager::ListManager;
use crate::storage::Config;

#[derive(Parser)]
#[command(name = "tasks")]
#[command(author, version, about = "A local-first task list for the terminal")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Directory holding the stored list
    #[arg(long, global = true, env = "TASKS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Configuration file
    #[arg(long, global = true, env = "TASKS_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the task list
    List,

    /// Add a task
    Add {
        /// Task text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Replace the text of a task
    Edit {
        /// Task ID
        id: String,

        /// New text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },

    /// Open the interactive terminal UI
    Tui,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?.with_data_dir(cli.data_dir.clone());
    let format = cli.format.unwrap_or(config.default_format);
    let output = Output::new(format, cli.verbose);

    let log_target = match cli.command {
        Some(Commands::Tui) => LogTarget::File(config.resolve_data_dir()?.join("tasks.log")),
        _ => LogTarget::Stderr,
    };
    logging::init(cli.verbose, log_target)?;

    output.verbose("Tasks CLI starting");

    let command = match cli.command {
        Some(command) => command,
        None => {
            landing::show(&output);
            return Ok(());
        }
    };

    let store = config.file_store()?;
    output.verbose_ctx(
        "store",
        &format!(
            "Using {} under key '{}'",
            store.dir().display(),
            config.storage_key
        ),
    );
    let mut manager = ListManager::load(store, config.storage_key.clone());

    match command {
        Commands::List => todo::list(&output, &manager)?,
        Commands::Add { text } => todo::add(&output, &mut manager, &text.join(" "))?,
        Commands::Edit { id, text } => todo::edit(&output, &mut manager, &id, &text.join(" "))?,
        Commands::Delete { id } => todo::delete(&output, &mut manager, &id)?,
        Commands::Tui => tui::run(&output, manager, config.tick_rate_ms)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}

