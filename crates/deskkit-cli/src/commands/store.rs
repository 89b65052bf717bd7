use clap::Subcommand;
use deskkit_core::Config;
use serde_json::Value;

use super::{open_store, print_json, CmdResult};

#[derive(Subcommand)]
pub enum StoreAction {
    /// Print the stored JSON text for a key
    Get { key: String },
    /// Store a value. Input that is not valid JSON is stored as a string.
    Set { key: String, value: String },
    /// Remove a key
    Remove { key: String },
    /// List stored keys
    List,
}

pub fn run(action: StoreAction, config: &Config) -> CmdResult {
    let store = open_store(config)?;
    match action {
        StoreAction::Get { key } => {
            let raw = store.try_get::<Value>(&key)?.ok_or_else(|| format!("no value for key: {key}"))?;
            print_json(&raw)?;
        }
        StoreAction::Set { key, value } => {
            let parsed = serde_json::from_str::<Value>(&value).unwrap_or(Value::String(value));
            store.try_set(&key, &parsed)?;
            println!("ok");
        }
        StoreAction::Remove { key } => {
            store.try_remove(&key)?;
            println!("ok");
        }
        StoreAction::List => print_json(&store.keys())?,
    }
    Ok(())
}
