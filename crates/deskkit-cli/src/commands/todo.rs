use clap::{Subcommand, ValueEnum};
use deskkit_core::records::{Collection, Priority, Todo, TodoFilter};
use deskkit_core::Config;

use super::{open_store, print_json, CmdResult};

#[derive(Clone, Copy, ValueEnum)]
pub enum FilterArg {
    All,
    Active,
    Completed,
}

impl From<FilterArg> for TodoFilter {
    fn from(arg: FilterArg) -> Self {
        match arg {
            FilterArg::All => TodoFilter::All,
            FilterArg::Active => TodoFilter::Active,
            FilterArg::Completed => TodoFilter::Completed,
        }
    }
}

#[derive(Subcommand)]
pub enum TodoAction {
    /// Add a todo to the top of the list
    Add {
        text: String,
        /// low, medium or high
        #[arg(long, default_value = "medium")]
        priority: Priority,
    },
    /// List todos as JSON
    List {
        #[arg(long, value_enum, default_value = "all")]
        filter: FilterArg,
    },
    /// Flip a todo between active and completed
    Toggle { id: String },
    /// Delete a todo
    Remove { id: String },
}

pub fn run(action: TodoAction, config: &Config) -> CmdResult {
    let store = open_store(config)?;
    let mut todos = Collection::<Todo>::load(&store);

    match action {
        TodoAction::Add { text, priority } => print_json(todos.add(&text, priority)?)?,
        TodoAction::List { filter } => {
            let listed: Vec<&Todo> = todos.filtered(filter.into()).collect();
            print_json(&listed)?;
        }
        TodoAction::Toggle { id } => print_json(todos.toggle(&id)?)?,
        TodoAction::Remove { id } => print_json(&todos.remove(&id)?)?,
    }
    Ok(())
}
