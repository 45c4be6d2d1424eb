//! Task list CLI commands

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::TodoId;
use crate::manager::ListManager;
use crate::storage::KeyValueStore;

fn parse_id(id: &str) -> Result<TodoId> {
    id.parse::<TodoId>()
        .with_context(|| format!("'{}' is not a task ID", id))
}

pub fn list<S: KeyValueStore>(output: &Output, manager: &ListManager<S>) -> Result<()> {
    let items = manager.items();
    output.verbose_ctx("list", &format!("{} task(s)", items.len()));

    if output.is_json() {
        output.data(&items);
        return Ok(());
    }

    if items.is_empty() {
        println!("No tasks yet. Add one with `tasks add <text>`.");
        return Ok(());
    }

    println!("{:<15} TASK", "ID");
    println!("{}", "-".repeat(50));
    for item in items {
        let marker = if item.is_editing { " (editing)" } else { "" };
        println!("{:<15} {}{}", item.id, item.text, marker);
    }

    Ok(())
}

pub fn add<S: KeyValueStore>(output: &Output, manager: &mut ListManager<S>, text: &str) -> Result<()> {
    manager.set_input(text);

    let id = match manager.submit_input() {
        Some(id) => id,
        None => {
            output.noop("Nothing to add: task text is empty");
            return Ok(());
        }
    };

    output.verbose_ctx("add", &format!("Stored {} task(s)", manager.items().len()));

    if let Some(item) = manager.get(id) {
        if output.is_json() {
            output.data(item);
        } else {
            output.success(&format!("Added task {}: {}", item.id, item.text));
        }
    }

    Ok(())
}

pub fn edit<S: KeyValueStore>(
    output: &Output,
    manager: &mut ListManager<S>,
    id: &str,
    text: &str,
) -> Result<()> {
    let id = parse_id(id)?;

    let (current, editing) = match manager.get(id) {
        Some(item) => (item.text.clone(), item.is_editing),
        None => {
            output.noop(&format!("No task with ID {}", id));
            return Ok(());
        }
    };

    // Same path the interactive UI takes: open the item, fill the buffer, save
    if !editing {
        manager.toggle_edit(id, &current);
    }
    manager.set_edit_buffer(text);

    if !manager.save_edit(id) {
        output.noop("Nothing to change: task text is empty");
        return Ok(());
    }

    if let Some(item) = manager.get(id) {
        if output.is_json() {
            output.data(item);
        } else {
            output.success(&format!("Updated task {}: {}", item.id, item.text));
        }
    }

    Ok(())
}

pub fn delete<S: KeyValueStore>(output: &Output, manager: &mut ListManager<S>, id: &str) -> Result<()> {
    let id = parse_id(id)?;

    if manager.delete(id) {
        output.success(&format!("Deleted task {}", id));
    } else {
        output.noop(&format!("No task with ID {}", id));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, OutputFormat};

    fn quiet() -> Output {
        Output::new(OutputFormat::Json, false)
    }

    #[test]
    fn parse_id_errors_mention_input() {
        let err = parse_id("abc").unwrap_err();
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn add_and_edit_through_commands() {
        let mut manager = ListManager::open(MemoryStore::new());

        add(&quiet(), &mut manager, "Buy milk").unwrap();
        let id = manager.items()[0].id;

        edit(&quiet(), &mut manager, &id.to_string(), "Buy oat milk").unwrap();

        let item = manager.get(id).unwrap();
        assert_eq!(item.text, "Buy oat milk");
        assert!(!item.is_editing);
    }

    #[test]
    fn edit_blank_keeps_text() {
        let mut manager = ListManager::open(MemoryStore::new());
        let id = manager.add("Keep").unwrap();

        edit(&quiet(), &mut manager, &id.to_string(), "  ").unwrap();

        assert_eq!(manager.get(id).unwrap().text, "Keep");
    }

    #[test]
    fn edit_and_delete_unknown_ids_are_noops() {
        let mut manager = ListManager::open(MemoryStore::new());
        manager.add("a");

        edit(&quiet(), &mut manager, "1", "b").unwrap();
        delete(&quiet(), &mut manager, "1").unwrap();

        assert_eq!(manager.items().len(), 1);
        assert_eq!(manager.items()[0].text, "a");
    }

    #[test]
    fn malformed_id_is_an_error() {
        let mut manager = ListManager::open(MemoryStore::new());
        assert!(delete(&quiet(), &mut manager, "first").is_err());
        assert!(edit(&quiet(), &mut manager, "x1", "text").is_err());
    }
}
