use deskkit_core::{Config, Overview};

use super::{open_store, print_json, CmdResult};

pub fn run(recent: bool, config: &Config) -> CmdResult {
    let store = open_store(config)?;
    if recent {
        print_json(&Overview::recent_activity(&store))
    } else {
        print_json(&Overview::collect(&store))
    }
}
