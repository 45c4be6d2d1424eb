//! # Storage Layer
//!
//! Persistence for the task list and the user configuration.
//!
//! ## Storage Formats
//!
//! | Data | Format | Location |
//! |------|--------|----------|
//! | List | JSON array of items | `{data_dir}/{storage_key}.json` |
//! | List lock | Empty file | `{data_dir}/{storage_key}.lock` |
//! | Config | TOML | `~/.config/tasks/config.toml` |
//! | TUI log | Plain text | `{data_dir}/tasks.log` |
//!
//! ## Concurrency Safety
//!
//! - [`FileStore`] serializes readers and writers of a key with an `fs2`
//!   lock on a `{storage_key}.lock` sidecar file
//! - All writes are atomic (temp file + rename), so readers never see torn writes
//! - Concurrent writers are last-write-wins; there is no conflict detection
//!
//! ## Key Types
//!
//! - [`KeyValueStore`] - The `get`/`set` contract the list manager consumes
//! - [`FileStore`] - One file per key under the data directory
//! - [`MemoryStore`] - In-memory store for tests and embedding
//! - [`Config`] - User configuration

mod config;
mod file;
mod kv;

pub use config::{Config, ConfigError, OutputFormat, DEFAULT_STORAGE_KEY};
pub use file::FileStore;
pub use kv::{validate_key, KeyValueStore, MemoryStore, StoreError};
