use clap::Subcommand;
use deskkit_core::records::{Collection, Note};
use deskkit_core::Config;

use super::{open_store, print_json, CmdResult};

#[derive(Subcommand)]
pub enum NotesAction {
    /// Start a new note at the top of the list
    Create {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// List notes, newest first
    List,
    /// Print one note
    Show { id: String },
    /// Edit a note; fields left out keep their value
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a note
    Remove { id: String },
}

fn edit(
    notes: &mut Collection<'_, Note>,
    id: &str,
    title: Option<String>,
    content: Option<String>,
) -> CmdResult {
    let current = notes
        .get(id)
        .cloned()
        .ok_or_else(|| format!("No note entry with id '{id}'"))?;
    let title = title.unwrap_or(current.title);
    let content = content.unwrap_or(current.content);
    print_json(notes.update(id, &title, &content)?)
}

pub fn run(action: NotesAction, config: &Config) -> CmdResult {
    let store = open_store(config)?;
    let mut notes = Collection::<Note>::load(&store);

    match action {
        NotesAction::Create { title, content } => {
            let id = notes.create().id.clone();
            if title.is_none() && content.is_none() {
                print_json(&notes.get(&id))?;
            } else {
                edit(&mut notes, &id, title, content)?;
            }
        }
        NotesAction::List => print_json(notes.items())?,
        NotesAction::Show { id } => {
            let note = notes.get(&id).ok_or_else(|| format!("No note entry with id '{id}'"))?;
            print_json(note)?;
        }
        NotesAction::Update { id, title, content } => edit(&mut notes, &id, title, content)?,
        NotesAction::Remove { id } => print_json(&notes.remove(&id)?)?,
    }
    Ok(())
}
