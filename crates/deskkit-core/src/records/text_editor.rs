use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::storage::{keys, Store};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedDocument {
    pub title: String,
    pub content: String,
    pub saved_at: DateTime<Utc>,
}

/// The scratch document plus its saved history.
pub struct TextEditor<'s> {
    store: &'s Store,
    title: String,
    content: String,
}

impl<'s> TextEditor<'s> {
    pub fn load(store: &'s Store) -> Self {
        Self {
            store,
            title: store.get(keys::TEXT_EDITOR_TITLE, String::new()),
            content: store.get(keys::TEXT_EDITOR_CONTENT, String::new()),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
        self.store.set(keys::TEXT_EDITOR_TITLE, &self.title);
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.store.set(keys::TEXT_EDITOR_CONTENT, &self.content);
    }

    pub fn documents(&self) -> Vec<SavedDocument> {
        self.store.get(keys::TEXT_EDITOR_DOCUMENTS, Vec::new())
    }

    /// Store the current draft and prepend it to the documents list.
    pub fn save_document(&mut self, title: &str, content: &str) -> SavedDocument {
        self.set_title(title);
        self.set_content(content);

        let title = match title.trim() {
            "" => "Untitled Document",
            t => t,
        };
        let doc = SavedDocument {
            title: title.to_string(),
            content: content.to_string(),
            saved_at: Utc::now(),
        };
        let mut docs = self.documents();
        docs.insert(0, doc.clone());
        self.store.set(keys::TEXT_EDITOR_DOCUMENTS, &docs);
        tracing::debug!(title = %doc.title, total = docs.len(), "document saved");
        doc
    }
}
