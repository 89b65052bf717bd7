use clap::Subcommand;
use deskkit_core::tools::{ideas, Difficulty};

use super::{print_json, CmdResult};

#[derive(Subcommand)]
pub enum IdeasAction {
    /// Ideas matching a query over title, description and tags
    Search {
        #[arg(default_value = "")]
        query: String,
        /// Category name, or "all"
        #[arg(long)]
        category: Option<String>,
        /// beginner, intermediate or advanced
        #[arg(long)]
        difficulty: Option<Difficulty>,
    },
    /// A random handful of ideas
    Random {
        #[arg(long, default_value_t = ideas::SHUFFLE_COUNT)]
        count: usize,
    },
    /// Known categories
    Categories,
}

pub fn run(action: IdeasAction) -> CmdResult {
    match action {
        IdeasAction::Search {
            query,
            category,
            difficulty,
        } => print_json(&ideas::search(&query, category.as_deref(), difficulty))?,
        IdeasAction::Random { count } => print_json(&ideas::random(count))?,
        IdeasAction::Categories => print_json(&ideas::categories())?,
    }
    Ok(())
}
