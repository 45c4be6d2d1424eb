//! Landing screen
//!
//! Static welcome content with one way forward: open the list.

use super::output::Output;

pub const TITLE: &str = "My Tasks";
pub const TAGLINE: &str = "Keep track of what needs to be done.";

/// The single navigation action, phrased for the CLI
pub const CLI_ACTION: &str = "Run `tasks list` to see your tasks, or `tasks tui` to open them interactively.";

/// The single navigation action, phrased for the TUI
pub const TUI_ACTION: &str = "Press Enter to open your list";

pub fn show(output: &Output) {
    if output.is_json() {
        output.data(&serde_json::json!({
            "title": TITLE,
            "tagline": TAGLINE,
            "next": "tasks list",
        }));
    } else {
        println!("{}", TITLE);
        println!("{}", TAGLINE);
        println!();
        println!("{}", CLI_ACTION);
    }
}
