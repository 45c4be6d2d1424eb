//! Todo item domain model

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::id::TodoId;

#[derive(Debug, Error, PartialEq)]
pub enum ItemError {
    #[error("Item text cannot be empty")]
    EmptyText,
}

/// Trims `text` and rejects it if nothing is left
pub fn normalize_text(text: &str) -> Result<String, ItemError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ItemError::EmptyText);
    }
    Ok(trimmed.to_string())
}

/// A single task on the list
///
/// Serialized with camelCase keys so stored lists read as
/// `{"id": 1, "text": "Buy milk", "isEditing": false}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Unique identifier, never changes after creation
    pub id: TodoId,

    /// Task description (trimmed, never empty)
    pub text: String,

    /// Whether the item is currently open for editing
    #[serde(default)]
    pub is_editing: bool,
}

impl TodoItem {
    /// Creates a new item, trimming `text`
    pub fn new(id: TodoId, text: &str) -> Result<Self, ItemError> {
        Ok(Self {
            id,
            text: normalize_text(text)?,
            is_editing: false,
        })
    }

    /// Replaces the text and leaves edit mode
    pub fn set_text(&mut self, text: &str) -> Result<(), ItemError> {
        self.text = normalize_text(text)?;
        self.is_editing = false;
        Ok(())
    }

    /// Returns true if the stored text would be rejected by [`TodoItem::new`]
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
