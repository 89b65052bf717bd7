//! Typed widget collections over the shared [`Store`].
//!
//! Each widget owns one key and keeps its whole collection in memory. A
//! mutation is validated first, applied, then written back in one `set`; a
//! rejected mutation leaves both the in-memory list and the store alone.

mod bookmarks;
mod contacts;
mod notes;
mod planner;
mod shopping;
mod shortener;
mod text_editor;
mod todos;

pub use bookmarks::{Bookmark, BookmarkInput};
pub use contacts::{Contact, ContactInput};
pub use notes::Note;
pub use planner::{DailyPlanner, PlannerInput, PlannerItem};
pub use shopping::{ShoppingInput, ShoppingItem};
pub use shortener::{ShortenedUrl, SHORT_CODE_LEN};
pub use text_editor::{SavedDocument, TextEditor};
pub use todos::{Todo, TodoFilter};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::storage::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl std::str::FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(ValidationError::InvalidValue {
                field: "priority".into(),
                message: format!("expected low, medium or high, got '{other}'"),
            }),
        }
    }
}

/// An element of a list-shaped widget collection.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Store key holding the list.
    const KEY: &'static str;
    /// Human name used in not-found errors.
    const NAME: &'static str;

    fn id(&self) -> &str;
}

pub struct Collection<'s, T: Record> {
    store: &'s Store,
    items: Vec<T>,
}

impl<'s, T: Record> Collection<'s, T> {
    /// Read the collection once, defaulting to empty.
    pub fn load(store: &'s Store) -> Self {
        Self {
            store,
            items: store.get(T::KEY, Vec::new()),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn remove(&mut self, id: &str) -> Result<T, ValidationError> {
        let index = self.position(id)?;
        let removed = self.items.remove(index);
        self.commit();
        Ok(removed)
    }

    /// Apply `edit` to the record with `id` and persist.
    pub fn modify(&mut self, id: &str, edit: impl FnOnce(&mut T)) -> Result<&T, ValidationError> {
        let index = self.position(id)?;
        edit(&mut self.items[index]);
        self.commit();
        Ok(&self.items[index])
    }

    fn position(&self, id: &str) -> Result<usize, ValidationError> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| ValidationError::NotFound {
                collection: T::NAME,
                id: id.to_string(),
            })
    }

    fn push_front(&mut self, item: T) -> &T {
        self.items.insert(0, item);
        self.commit();
        &self.items[0]
    }

    fn retain(&mut self, keep: impl FnMut(&T) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(keep);
        let dropped = before - self.items.len();
        if dropped > 0 {
            self.commit();
        }
        dropped
    }

    fn commit(&self) {
        self.store.set(T::KEY, &self.items);
    }
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Trimmed `value`, or `EmptyField(field)` when nothing is left.
pub(crate) fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyField(field));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
