use clap::Subcommand;
use deskkit_core::tools::{CaseStyle, TextStats};

use super::{print_json, read_text, CmdResult};

#[derive(Subcommand)]
pub enum TextAction {
    /// Convert text to a case style (upper, lower, title, sentence, camel,
    /// pascal, snake, kebab, screaming-snake, reverse, alternating, random)
    Case {
        style: CaseStyle,
        /// Text to convert; read from stdin when omitted
        text: Vec<String>,
    },
    /// Character, word, sentence and paragraph counts
    Stats {
        /// Text to analyze; read from stdin when omitted
        text: Vec<String>,
    },
}

pub fn run(action: TextAction) -> CmdResult {
    match action {
        TextAction::Case { style, text } => println!("{}", style.apply(&read_text(text)?)),
        TextAction::Stats { text } => print_json(&TextStats::analyze(&read_text(text)?))?,
    }
    Ok(())
}
