use clap::{Args, Subcommand};
use deskkit_core::records::{Collection, ShoppingInput, ShoppingItem};
use deskkit_core::Config;
use serde_json::json;

use super::{open_store, print_json, CmdResult};

#[derive(Args)]
pub struct ItemFields {
    name: String,
    /// Defaults to 1
    #[arg(long)]
    quantity: Option<f64>,
    /// Defaults to "pcs"
    #[arg(long)]
    unit: Option<String>,
    /// Defaults to "grocery"
    #[arg(long)]
    category: Option<String>,
    /// Unit price
    #[arg(long)]
    price: Option<f64>,
    #[arg(long, default_value = "")]
    notes: String,
}

impl From<ItemFields> for ShoppingInput {
    fn from(f: ItemFields) -> Self {
        ShoppingInput {
            name: f.name,
            quantity: f.quantity,
            unit: f.unit,
            category: f.category,
            price: f.price,
            notes: f.notes,
        }
    }
}

#[derive(Subcommand)]
pub enum ShopAction {
    /// Add an item at the top of the list
    Add {
        #[command(flatten)]
        fields: ItemFields,
    },
    /// List items, newest first
    List,
    /// Flip an item between to-buy and purchased
    Toggle { id: String },
    /// Rewrite an item; purchase state is kept
    Update {
        id: String,
        #[command(flatten)]
        fields: ItemFields,
    },
    /// Drop every purchased item
    Clear,
    /// Money spent on purchased items
    Total,
    /// Delete an item
    Remove { id: String },
}

pub fn run(action: ShopAction, config: &Config) -> CmdResult {
    let store = open_store(config)?;
    let mut list = Collection::<ShoppingItem>::load(&store);

    match action {
        ShopAction::Add { fields } => print_json(list.add(fields.into())?)?,
        ShopAction::List => print_json(list.items())?,
        ShopAction::Toggle { id } => print_json(list.toggle_purchased(&id)?)?,
        ShopAction::Update { id, fields } => print_json(list.update(&id, fields.into())?)?,
        ShopAction::Clear => print_json(&json!({ "removed": list.clear_purchased() }))?,
        ShopAction::Total => print_json(&json!({ "totalSpent": list.total_spent() }))?,
        ShopAction::Remove { id } => print_json(&list.remove(&id)?)?,
    }
    Ok(())
}
