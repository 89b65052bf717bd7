use clap::Subcommand;
use deskkit_core::records::TextEditor;
use deskkit_core::Config;
use serde_json::json;

use super::{open_store, print_json, read_text, CmdResult};

#[derive(Subcommand)]
pub enum DocAction {
    /// Print the current draft
    Show,
    /// Rename the draft
    SetTitle { title: String },
    /// Replace the draft body; read from stdin when omitted
    SetContent { content: Vec<String> },
    /// Save the draft to the documents list
    Save {
        /// Title to save under; the draft title otherwise
        #[arg(long)]
        title: Option<String>,
    },
    /// Saved documents, newest first
    List,
}

pub fn run(action: DocAction, config: &Config) -> CmdResult {
    let store = open_store(config)?;
    let mut editor = TextEditor::load(&store);

    match action {
        DocAction::Show => {
            print_json(&json!({ "title": editor.title(), "content": editor.content() }))?;
        }
        DocAction::SetTitle { title } => {
            editor.set_title(&title);
            println!("ok");
        }
        DocAction::SetContent { content } => {
            editor.set_content(&read_text(content)?);
            println!("ok");
        }
        DocAction::Save { title } => {
            let title = title.unwrap_or_else(|| editor.title().to_string());
            let content = editor.content().to_string();
            print_json(&editor.save_document(&title, &content))?;
        }
        DocAction::List => print_json(&editor.documents())?,
    }
    Ok(())
}
