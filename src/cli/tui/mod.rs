//! Interactive TUI
//!
//! Two screens drawn with ratatui: a static landing screen whose only
//! action opens the list, and the list screen where tasks are added,
//! edited and deleted.

mod app;
mod event;
mod ui;
mod utils;
mod views;

use std::panic::{self, AssertUnwindSafe};

use anyhow::{anyhow, Result};

use super::Output;
use crate::manager::ListManager;
use crate::storage::KeyValueStore;
use app::App;
use event::EventHandler;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Landing,
    List,
}

/// Launch the TUI
pub fn run<S: KeyValueStore>(
    output: &Output,
    manager: ListManager<S>,
    tick_rate_ms: u64,
) -> Result<()> {
    output.verbose_ctx("tui", "Initializing TUI application");

    let mut terminal = ui::init_terminal()?;
    let mut app = App::new(manager);
    let event_handler = EventHandler::new(tick_rate_ms);

    // Run the main loop with panic safety so the terminal is always restored
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        app.run(&mut terminal, event_handler)
    }));

    let restore_result = ui::restore_terminal();

    match result {
        Ok(inner_result) => {
            restore_result?;
            inner_result?;
        }
        Err(panic_payload) => {
            let _ = restore_result;
            if let Some(s) = panic_payload.downcast_ref::<&str>() {
                return Err(anyhow!("TUI panicked: {}", s));
            } else if let Some(s) = panic_payload.downcast_ref::<String>() {
                return Err(anyhow!("TUI panicked: {}", s));
            }
            return Err(anyhow!("TUI panicked with unknown error"));
        }
    }

    output.verbose_ctx(
        "tui",
        &format!("Exited with {} task(s)", app.items().len()),
    );
    Ok(())
}
