//! # List Manager
//!
//! Owns the authoritative in-memory [`TodoList`] and keeps a
//! [`KeyValueStore`] consistent with it.
//!
//! ## Persistence policy
//!
//! - Every mutation that changes business data writes the whole list
//!   through to the store, overwriting the previous value.
//! - Storage failures are logged and swallowed. The in-memory list stays
//!   authoritative for the session; [`ListManager::is_in_sync`] reports
//!   whether the last write landed.
//! - Toggling edit mode does not write on its own. The flag reaches the
//!   store with the next persisted mutation.
//!
//! ## Rejected input
//!
//! Blank text on add or update is dropped silently (logged at `debug`).

use tracing::{debug, warn};

use crate::domain::{normalize_text, IdGenerator, TodoId, TodoItem, TodoList};
use crate::storage::{KeyValueStore, DEFAULT_STORAGE_KEY};

pub struct ListManager<S: KeyValueStore> {
    store: S,
    key: String,
    list: TodoList,
    ids: IdGenerator,
    input: String,
    edit_buffer: String,
    in_sync: bool,
}

impl<S: KeyValueStore> ListManager<S> {
    /// Creates a manager with an empty list, without touching the store
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            list: TodoList::new(),
            ids: IdGenerator::new(),
            input: String::new(),
            edit_buffer: String::new(),
            in_sync: false,
        }
    }

    /// Creates a manager under the default key and hydrates it
    pub fn open(store: S) -> Self {
        Self::load(store, DEFAULT_STORAGE_KEY)
    }

    /// Creates a manager and hydrates it from the store
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let mut manager = Self::new(store, key);
        manager.reload();
        manager
    }

    /// Replaces the in-memory list with what the store holds
    ///
    /// A missing record yields an empty list. Read and decode failures are
    /// logged and also yield an empty list.
    pub fn reload(&mut self) {
        self.list = match self.store.get(&self.key) {
            Ok(Some(raw)) => match serde_json::from_str::<TodoList>(&raw) {
                Ok(mut list) => {
                    let repairs = list.normalize();
                    if !repairs.is_empty() {
                        warn!(key = %self.key, ?repairs, "Repaired stored list");
                    }
                    self.in_sync = repairs.is_empty();
                    debug!(key = %self.key, count = list.len(), "Loaded list");
                    list
                }
                Err(e) => {
                    warn!(key = %self.key, error = %e, "Failed to decode stored list");
                    self.in_sync = false;
                    TodoList::new()
                }
            },
            Ok(None) => {
                debug!(key = %self.key, "No stored list, starting empty");
                self.in_sync = true;
                TodoList::new()
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read stored list");
                self.in_sync = false;
                TodoList::new()
            }
        };

        if let Some(max) = self.list.max_id() {
            self.ids.observe(max);
        }
    }

    /// Returns the current list
    pub fn list(&self) -> &TodoList {
        &self.list
    }

    /// Returns the items in display order
    pub fn items(&self) -> &[TodoItem] {
        self.list.items()
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.list.get(id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Returns true if the store holds exactly the in-memory list
    pub fn is_in_sync(&self) -> bool {
        self.in_sync
    }

    /// Text typed for a new item
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Text being edited for the open item
    pub fn edit_buffer(&self) -> &str {
        &self.edit_buffer
    }

    pub fn set_edit_buffer(&mut self, text: impl Into<String>) {
        self.edit_buffer = text.into();
    }

    /// Appends a new item and persists
    ///
    /// Returns the new ID, or `None` if `text` is blank or no ID is left.
    /// Clears the input buffer on success.
    pub fn add(&mut self, text: &str) -> Option<TodoId> {
        if let Err(e) = normalize_text(text) {
            debug!(error = %e, "Ignoring add");
            return None;
        }

        let id = match self.ids.next() {
            Ok(id) => id,
            Err(e) => {
                warn!(error = %e, "Failed to allocate item ID");
                return None;
            }
        };

        let item = match TodoItem::new(id, text) {
            Ok(item) => item,
            Err(e) => {
                debug!(error = %e, "Ignoring add");
                return None;
            }
        };

        if let Err(e) = self.list.push(item) {
            // Unreachable while the generator stays above every stored ID
            warn!(%id, error = %e, "Failed to append item");
            return None;
        }

        self.persist();
        self.input.clear();
        Some(id)
    }

    /// Adds the input buffer as a new item
    pub fn submit_input(&mut self) -> Option<TodoId> {
        let text = self.input.clone();
        self.add(&text)
    }

    /// Removes the item with `id` and persists
    ///
    /// Returns false if no such item exists. The list is written either way.
    pub fn delete(&mut self, id: TodoId) -> bool {
        let removed = self.list.remove(id).is_some();
        if !removed {
            debug!(%id, "Delete of unknown item");
        }
        self.persist();
        removed
    }

    /// Replaces the text of `id`, leaves edit mode and persists
    ///
    /// Blank `text` is ignored. Returns true if an item was changed. Clears
    /// the edit buffer when the text is accepted.
    pub fn update(&mut self, id: TodoId, text: &str) -> bool {
        match self.list.update_text(id, text) {
            Ok(updated) => {
                if !updated {
                    debug!(%id, "Update of unknown item");
                }
                self.persist();
                self.edit_buffer.clear();
                updated
            }
            Err(e) => {
                debug!(%id, error = %e, "Ignoring update");
                false
            }
        }
    }

    /// Commits the edit buffer to `id`
    pub fn save_edit(&mut self, id: TodoId) -> bool {
        let text = self.edit_buffer.clone();
        self.update(id, &text)
    }

    /// Flips edit mode on `id`, closes it on every other item and seeds the
    /// edit buffer with `current_text`
    ///
    /// Returns the new edit flag of `id`, or `None` if it is not on the list.
    pub fn toggle_edit(&mut self, id: TodoId, current_text: &str) -> Option<bool> {
        let editing = self.list.toggle_editing(id);
        self.edit_buffer = current_text.to_string();
        self.in_sync = false;
        editing
    }

    /// Writes the whole list to the store
    ///
    /// Failures are logged, never retried. Returns true if the write landed.
    pub fn persist(&mut self) -> bool {
        let encoded = match serde_json::to_string(&self.list) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to encode list");
                self.in_sync = false;
                return false;
            }
        };

        match self.store.set(&self.key, &encoded) {
            Ok(()) => {
                debug!(key = %self.key, count = self.list.len(), "Saved list");
                self.in_sync = true;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to save list");
                self.in_sync = false;
            }
        }

        self.in_sync
    }
}
