pub mod bookmark;
pub mod calc;
pub mod config;
pub mod contact;
pub mod convert;
pub mod doc;
pub mod ideas;
pub mod notes;
pub mod overview;
pub mod plan;
pub mod pomodoro;
pub mod shop;
pub mod stopwatch;
pub mod store;
pub mod text;
pub mod todo;
pub mod url;

use std::io::Read;

use deskkit_core::{Config, Store};
use serde::Serialize;

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Open the store described by the `[storage]` config section.
pub fn open_store(config: &Config) -> deskkit_core::error::Result<Store> {
    let store = Store::open(&config.storage)?;
    tracing::debug!(backend = ?config.storage.backend, "store opened");
    Ok(store)
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> CmdResult {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Words joined with spaces, or all of stdin when there are none.
pub fn read_text(words: Vec<String>) -> std::io::Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut buf = String::new();
    std::io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}
