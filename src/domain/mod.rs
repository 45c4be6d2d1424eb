//! Domain models for the task list
//!
//! Contains the list logic without any I/O concerns.

mod id;
mod item;
mod list;

pub use id::{IdError, IdGenerator, TodoId};
pub use item::{normalize_text, ItemError, TodoItem};
pub use list::{ListError, Repairs, TodoList};
