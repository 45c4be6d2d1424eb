//! # Command-Line Interface
//!
//! The terminal front end for the task list.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | *(none)* | Landing screen |
//! | `list` | Show tasks in order |
//! | `add <text>` | Append a task |
//! | `edit <id> <text>` | Replace a task's text |
//! | `delete <id>` | Remove a task |
//! | `tui` | Interactive landing + list screens |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output and `debug`-level logs:
//! ```bash
//! tasks --verbose list
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod landing;
mod logging;
mod output;
mod todo;
mod tui;

pub use app::{run, Cli, Commands};
pub use logging::{LogTarget, LOG_ENV};
pub use output::{Output, OutputFormat};
