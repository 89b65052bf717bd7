use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_id, Collection, Record};
use crate::error::ValidationError;
use crate::storage::keys;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Record for Note {
    const KEY: &'static str = keys::NOTES;
    const NAME: &'static str = "note";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Collection<'_, Note> {
    pub fn create(&mut self) -> &Note {
        let now = Utc::now();
        self.push_front(Note {
            id: new_id(),
            title: "New Note".to_string(),
            content: String::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace title and content. A blank title becomes "Untitled".
    pub fn update(&mut self, id: &str, title: &str, content: &str) -> Result<&Note, ValidationError> {
        let title = match title.trim() {
            "" => "Untitled".to_string(),
            t => t.to_string(),
        };
        self.modify(id, |note| {
            note.title = title;
            note.content = content.to_string();
            note.updated_at = Utc::now();
        })
    }
}
