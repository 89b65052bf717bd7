use clap::{Args, Subcommand};
use deskkit_core::records::{Collection, Contact, ContactInput};
use deskkit_core::Config;

use super::{open_store, print_json, CmdResult};

#[derive(Args)]
pub struct ContactFields {
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    company: String,
    #[arg(long, default_value = "")]
    notes: String,
}

impl From<ContactFields> for ContactInput {
    fn from(f: ContactFields) -> Self {
        ContactInput {
            name: f.name,
            email: f.email,
            phone: f.phone,
            company: f.company,
            notes: f.notes,
        }
    }
}

#[derive(Subcommand)]
pub enum ContactAction {
    /// Add a contact at the top of the list
    Add {
        #[command(flatten)]
        fields: ContactFields,
    },
    /// List contacts, optionally filtered by name, email or phone
    List {
        #[arg(long)]
        query: Option<String>,
        /// Only favorites
        #[arg(long)]
        favorites: bool,
    },
    /// Flip a contact's favorite mark
    Favorite { id: String },
    /// Rewrite a contact
    Update {
        id: String,
        #[command(flatten)]
        fields: ContactFields,
    },
    /// Delete a contact
    Remove { id: String },
}

pub fn run(action: ContactAction, config: &Config) -> CmdResult {
    let store = open_store(config)?;
    let mut contacts = Collection::<Contact>::load(&store);

    match action {
        ContactAction::Add { fields } => print_json(contacts.add(fields.into())?)?,
        ContactAction::List { query, favorites } => {
            let mut listed = match query {
                Some(q) => contacts.search(&q),
                None => contacts.items().iter().collect(),
            };
            if favorites {
                listed.retain(|c| c.favorite);
            }
            print_json(&listed)?;
        }
        ContactAction::Favorite { id } => print_json(contacts.toggle_favorite(&id)?)?,
        ContactAction::Update { id, fields } => print_json(contacts.update(&id, fields.into())?)?,
        ContactAction::Remove { id } => print_json(&contacts.remove(&id)?)?,
    }
    Ok(())
}
