//! Ordered todo list
//!
//! Insertion order is display order. The list enforces unique IDs and the
//! single-edit rule: at most one item has `is_editing` set.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::TodoId;
use super::item::{ItemError, TodoItem};

#[derive(Debug, Error, PartialEq)]
pub enum ListError {
    #[error("Duplicate item ID: {0}")]
    DuplicateId(TodoId),

    #[error(transparent)]
    Item(#[from] ItemError),
}

/// What [`TodoList::normalize`] had to repair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repairs {
    /// Items dropped because their text was blank
    pub blank: Vec<TodoId>,
    /// Later items dropped because an earlier item had the same ID
    pub duplicate: Vec<TodoId>,
    /// Items whose edit flag was cleared because another item was editing
    pub editing_cleared: Vec<TodoId>,
    /// Items whose text had surrounding whitespace removed
    pub trimmed: Vec<TodoId>,
}

impl Repairs {
    pub fn is_empty(&self) -> bool {
        self.blank.is_empty()
            && self.duplicate.is_empty()
            && self.editing_cleared.is_empty()
            && self.trimmed.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList(Vec<TodoItem>);

impl TodoList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TodoItem> {
        self.0.iter()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.0
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.0.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Position of `id` in display order
    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.0.iter().position(|item| item.id == id)
    }

    /// The item currently open for editing, if any
    pub fn editing(&self) -> Option<&TodoItem> {
        self.0.iter().find(|item| item.is_editing)
    }

    /// Largest ID on the list
    pub fn max_id(&self) -> Option<TodoId> {
        self.0.iter().map(|item| item.id).max()
    }

    /// Appends an item to the end of the list
    pub fn push(&mut self, item: TodoItem) -> Result<(), ListError> {
        if self.contains(item.id) {
            return Err(ListError::DuplicateId(item.id));
        }
        if item.is_blank() {
            return Err(ItemError::EmptyText.into());
        }
        if item.is_editing {
            self.clear_editing();
        }
        self.0.push(item);
        Ok(())
    }

    /// Removes the item with `id`, returning it if present
    pub fn remove(&mut self, id: TodoId) -> Option<TodoItem> {
        let index = self.position(id)?;
        Some(self.0.remove(index))
    }

    /// Replaces the text of `id` in place and closes its edit mode
    ///
    /// Returns `Ok(false)` when no item has that ID.
    pub fn update_text(&mut self, id: TodoId, text: &str) -> Result<bool, ItemError> {
        match self.0.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.set_text(text)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Flips edit mode on `id` and closes it everywhere else
    ///
    /// Returns the new flag of the target, or `None` if it is not on the
    /// list (in which case every item ends up closed).
    pub fn toggle_editing(&mut self, id: TodoId) -> Option<bool> {
        let mut result = None;
        for item in &mut self.0 {
            if item.id == id {
                item.is_editing = !item.is_editing;
                result = Some(item.is_editing);
            } else {
                item.is_editing = false;
            }
        }
        result
    }

    /// Closes edit mode on every item
    pub fn clear_editing(&mut self) {
        for item in &mut self.0 {
            item.is_editing = false;
        }
    }

    /// Repairs a list that was read from storage
    ///
    /// Drops blank items and later duplicates, trims text, and keeps only
    /// the first edit flag.
    pub fn normalize(&mut self) -> Repairs {
        let mut repairs = Repairs::default();
        let mut seen = HashSet::new();
        let mut editing_seen = false;

        self.0.retain_mut(|item| {
            if item.is_blank() {
                repairs.blank.push(item.id);
                return false;
            }
            if !seen.insert(item.id) {
                repairs.duplicate.push(item.id);
                return false;
            }
            let trimmed = item.text.trim();
            if trimmed.len() != item.text.len() {
                item.text = trimmed.to_string();
                repairs.trimmed.push(item.id);
            }
            if item.is_editing {
                if editing_seen {
                    item.is_editing = false;
                    repairs.editing_cleared.push(item.id);
                }
                editing_seen = true;
            }
            true
        });

        repairs
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a TodoItem;
    type IntoIter = std::slice::Iter<'a, TodoItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
