//! Tasks - a local-first task list
//!
//! Items are added, edited and deleted through a [`ListManager`], which
//! keeps an in-memory [`TodoList`] and writes it through to a
//! [`KeyValueStore`] after every change.

pub mod domain;
pub mod storage;
pub mod manager;
pub mod cli;

pub use domain::{TodoId, TodoItem, TodoList};
pub use manager::ListManager;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
