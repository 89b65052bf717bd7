//! Dashboard counts and the recent-activity feed across the widget
//! collections.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::storage::{keys, Store};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub notes: usize,
    pub todos: usize,
    pub completed_todos: usize,
    pub bookmarks: usize,
    pub contacts: usize,
    pub shopping_items: usize,
}

impl Overview {
    /// Count entries without committing to any record schema, so legacy or
    /// partially written items still show up.
    pub fn collect(store: &Store) -> Self {
        let todos = array(store, keys::TODOS);
        Self {
            notes: array(store, keys::NOTES).len(),
            completed_todos: todos
                .iter()
                .filter(|t| t.get("completed").and_then(Value::as_bool) == Some(true))
                .count(),
            todos: todos.len(),
            bookmarks: array(store, keys::BOOKMARKS).len(),
            contacts: array(store, keys::CONTACTS).len(),
            shopping_items: array(store, keys::SHOPPING_LIST).len(),
        }
    }

    /// Newest-first mix of the latest notes, todos, bookmarks and contacts.
    ///
    /// Takes the head of each list (3 notes, 3 todos, 2 bookmarks,
    /// 2 contacts), orders them by timestamp and keeps [`RECENT_LIMIT`].
    /// Entries without a readable timestamp are left out.
    pub fn recent_activity(store: &Store) -> Vec<ActivityItem> {
        let mut feed = Vec::new();
        for (kind, take) in [
            (ActivityKind::Note, 3),
            (ActivityKind::Todo, 3),
            (ActivityKind::Bookmark, 2),
            (ActivityKind::Contact, 2),
        ] {
            feed.extend(
                array(store, kind.key())
                    .iter()
                    .take(take)
                    .filter_map(|value| ActivityItem::from_value(kind, value)),
            );
        }
        feed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        feed.truncate(RECENT_LIMIT);
        feed
    }
}

pub const RECENT_LIMIT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Note,
    Todo,
    Bookmark,
    Contact,
}

impl ActivityKind {
    pub fn name(self) -> &'static str {
        match self {
            ActivityKind::Note => "note",
            ActivityKind::Todo => "todo",
            ActivityKind::Bookmark => "bookmark",
            ActivityKind::Contact => "contact",
        }
    }

    fn key(self) -> &'static str {
        match self {
            ActivityKind::Note => keys::NOTES,
            ActivityKind::Todo => keys::TODOS,
            ActivityKind::Bookmark => keys::BOOKMARKS,
            ActivityKind::Contact => keys::CONTACTS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityItem {
    /// `<kind>-<record id>`
    pub id: String,
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}

impl ActivityItem {
    fn from_value(kind: ActivityKind, value: &Value) -> Option<Self> {
        let text = |field| text_field(value, field);
        let stamp_field = match kind {
            ActivityKind::Note => "updatedAt",
            _ => "createdAt",
        };
        let timestamp = DateTime::parse_from_rfc3339(text(stamp_field))
            .ok()?
            .with_timezone(&Utc);
        let day = timestamp.format("%Y-%m-%d");
        let (title, description) = match kind {
            ActivityKind::Note => {
                let title = match text("title") {
                    "" => "Untitled Note",
                    t => t,
                };
                (title.to_string(), format!("Updated {day}"))
            }
            ActivityKind::Todo => {
                let done = value.get("completed").and_then(Value::as_bool) == Some(true);
                let status = if done { "Completed" } else { "Pending" };
                (text("text").to_string(), status.to_string())
            }
            ActivityKind::Bookmark => (text("title").to_string(), format!("Added {day}")),
            ActivityKind::Contact => (text("name").to_string(), format!("Added {day}")),
        };
        let id = match value.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };
        Some(Self {
            id: format!("{}-{id}", kind.name()),
            kind,
            title,
            description,
            timestamp,
        })
    }
}

fn text_field<'v>(value: &'v Value, field: &str) -> &'v str {
    value.get(field).and_then(Value::as_str).unwrap_or_default()
}

fn array(store: &Store, key: &str) -> Vec<Value> {
    store.get(key, Vec::new())
}
