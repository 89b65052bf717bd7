use clap::{Args, Subcommand};
use deskkit_core::records::{Bookmark, BookmarkInput, Collection};
use deskkit_core::Config;

use super::{open_store, print_json, CmdResult};

#[derive(Args)]
pub struct BookmarkFields {
    title: String,
    url: String,
    #[arg(long, default_value = "")]
    description: String,
    /// Comma separated
    #[arg(long, default_value = "")]
    tags: String,
    /// Defaults to "general"
    #[arg(long)]
    category: Option<String>,
}

impl From<BookmarkFields> for BookmarkInput {
    fn from(f: BookmarkFields) -> Self {
        BookmarkInput {
            title: f.title,
            url: f.url,
            description: f.description,
            tags: f.tags,
            category: f.category,
        }
    }
}

#[derive(Subcommand)]
pub enum BookmarkAction {
    /// Save a bookmark at the top of the list
    Add {
        #[command(flatten)]
        fields: BookmarkFields,
    },
    /// List bookmarks matching a query over title, description and tags
    List {
        #[arg(long, default_value = "")]
        query: String,
        /// Category name, or "all"
        #[arg(long)]
        category: Option<String>,
    },
    /// Rewrite a bookmark
    Update {
        id: String,
        #[command(flatten)]
        fields: BookmarkFields,
    },
    /// Delete a bookmark
    Remove { id: String },
}

pub fn run(action: BookmarkAction, config: &Config) -> CmdResult {
    let store = open_store(config)?;
    let mut bookmarks = Collection::<Bookmark>::load(&store);

    match action {
        BookmarkAction::Add { fields } => print_json(bookmarks.add(fields.into())?)?,
        BookmarkAction::List { query, category } => {
            print_json(&bookmarks.search(&query, category.as_deref()))?;
        }
        BookmarkAction::Update { id, fields } => print_json(bookmarks.update(&id, fields.into())?)?,
        BookmarkAction::Remove { id } => print_json(&bookmarks.remove(&id)?)?,
    }
    Ok(())
}
