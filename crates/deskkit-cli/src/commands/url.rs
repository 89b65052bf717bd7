use clap::Subcommand;
use deskkit_core::records::{Collection, ShortenedUrl};
use deskkit_core::Config;
use serde_json::json;

use super::{open_store, print_json, CmdResult};

#[derive(Subcommand)]
pub enum UrlAction {
    /// Create a short link
    Shorten {
        url: String,
        /// Custom short code; a random 6-character code otherwise
        #[arg(long)]
        code: Option<String>,
    },
    /// List short links, newest first
    List,
    /// Count a visit to a short link
    Click { id: String },
    /// Delete a short link
    Remove { id: String },
}

fn with_short_url(url: &ShortenedUrl) -> serde_json::Value {
    let mut value = json!(url);
    value["shortUrl"] = json!(url.short_url());
    value
}

pub fn run(action: UrlAction, config: &Config) -> CmdResult {
    let store = open_store(config)?;
    let mut urls = Collection::<ShortenedUrl>::load(&store);

    match action {
        UrlAction::Shorten { url, code } => {
            let created = urls.shorten(&url, code.as_deref())?;
            print_json(&with_short_url(created))?;
        }
        UrlAction::List => {
            let listed: Vec<_> = urls.items().iter().map(with_short_url).collect();
            print_json(&listed)?;
        }
        UrlAction::Click { id } => print_json(&with_short_url(urls.click(&id)?))?,
        UrlAction::Remove { id } => print_json(&urls.remove(&id)?)?,
    }
    Ok(())
}
