use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{contains_ci, new_id, required, Collection, Record};
use crate::error::ValidationError;
use crate::storage::keys;

pub const DEFAULT_CATEGORY: &str = "general";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_category")]
    pub category: String,
    pub created_at: DateTime<Utc>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Record for Bookmark {
    const KEY: &'static str = keys::BOOKMARKS;
    const NAME: &'static str = "bookmark";

    fn id(&self) -> &str {
        &self.id
    }
}

/// Form fields for adding or editing a bookmark. `tags` is comma separated.
#[derive(Debug, Clone, Default)]
pub struct BookmarkInput {
    pub title: String,
    pub url: String,
    pub description: String,
    pub tags: String,
    pub category: Option<String>,
}

impl BookmarkInput {
    fn split_tags(&self) -> Vec<String> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }

    fn category(&self) -> String {
        match self.category.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => default_category(),
        }
    }
}

impl Collection<'_, Bookmark> {
    pub fn add(&mut self, input: BookmarkInput) -> Result<&Bookmark, ValidationError> {
        let title = required("title", &input.title)?;
        let url = required("url", &input.url)?;
        Ok(self.push_front(Bookmark {
            id: new_id(),
            tags: input.split_tags(),
            category: input.category(),
            description: input.description.trim().to_string(),
            title,
            url,
            created_at: Utc::now(),
        }))
    }

    pub fn update(&mut self, id: &str, input: BookmarkInput) -> Result<&Bookmark, ValidationError> {
        let title = required("title", &input.title)?;
        let url = required("url", &input.url)?;
        let tags = input.split_tags();
        let category = input.category();
        self.modify(id, |bm| {
            bm.title = title;
            bm.url = url;
            bm.description = input.description.trim().to_string();
            bm.tags = tags;
            bm.category = category;
        })
    }

    /// Case-insensitive match over title, description and tags, narrowed to
    /// `category` unless it is `None` or `"all"`.
    pub fn search<'a>(&'a self, query: &str, category: Option<&'a str>) -> Vec<&'a Bookmark> {
        let needle = query.trim().to_lowercase();
        self.items()
            .iter()
            .filter(|bm| match category {
                None | Some("all") => true,
                Some(c) => bm.category == c,
            })
            .filter(|bm| {
                needle.is_empty()
                    || contains_ci(&bm.title, &needle)
                    || contains_ci(&bm.description, &needle)
                    || bm.tags.iter().any(|t| contains_ci(t, &needle))
            })
            .collect()
    }
}
