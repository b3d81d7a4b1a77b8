//! Ordered list fields (social links, photo gallery)
//!
//! Storage order is display order. Removal shifts later entries down by one
//! and never reorders the rest.

use serde::{Deserialize, Serialize};

use crate::editor::error::EditError;

/// Ordered sequence with positional edits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListField<T> {
    items: Vec<T>,
}

impl<T> Default for ListField<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> ListField<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    pub fn append(&mut self, item: T) {
        self.items.push(item);
    }

    /// Replace the entry at `index`; out-of-bounds leaves the list untouched
    pub fn update_at(&mut self, index: usize, item: T) -> Result<(), EditError> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or(EditError::IndexOutOfBounds { index, len })?;
        *slot = item;
        Ok(())
    }

    /// Remove and return the entry at `index`
    pub fn remove_at(&mut self, index: usize) -> Result<T, EditError> {
        if index >= self.items.len() {
            return Err(EditError::IndexOutOfBounds {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> From<Vec<T>> for ListField<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

/// Text box used to add a new entry to a string list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryBuffer {
    text: String,
}

impl EntryBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append the trimmed buffer to `list` and clear it.
    /// A blank buffer appends nothing and is kept as typed.
    pub fn commit(&mut self, list: &mut ListField<String>) -> bool {
        let candidate = self.text.trim();
        if candidate.is_empty() {
            return false;
        }
        list.append(candidate.to_string());
        self.text.clear();
        true
    }
}
