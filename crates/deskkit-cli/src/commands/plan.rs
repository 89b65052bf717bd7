use chrono::NaiveDate;
use clap::{Args, Subcommand};
use deskkit_core::records::{DailyPlanner, PlannerInput, Priority};
use deskkit_core::Config;

use super::{open_store, print_json, CmdResult};

#[derive(Args)]
pub struct DayArg {
    /// Day as YYYY-MM-DD; today when omitted
    #[arg(long)]
    date: Option<NaiveDate>,
}

impl DayArg {
    fn day(&self) -> NaiveDate {
        self.date.unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

#[derive(Args)]
pub struct EntryFields {
    /// HH:MM
    time: String,
    title: String,
    #[arg(long, default_value = "")]
    description: String,
    /// low, medium or high
    #[arg(long, default_value = "medium")]
    priority: Priority,
    /// Defaults to "work"
    #[arg(long)]
    category: Option<String>,
}

impl From<EntryFields> for PlannerInput {
    fn from(f: EntryFields) -> Self {
        PlannerInput {
            time: f.time,
            title: f.title,
            description: f.description,
            priority: f.priority,
            category: f.category,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanAction {
    /// Schedule an item on a day
    Add {
        #[command(flatten)]
        day: DayArg,
        #[command(flatten)]
        fields: EntryFields,
    },
    /// Items for a day, in time order
    List {
        #[command(flatten)]
        day: DayArg,
    },
    /// Days that have items
    Dates,
    /// Flip an item between open and done
    Toggle {
        id: String,
        #[command(flatten)]
        day: DayArg,
    },
    /// Rewrite an item; completion is kept
    Update {
        id: String,
        #[command(flatten)]
        day: DayArg,
        #[command(flatten)]
        fields: EntryFields,
    },
    /// Delete an item
    Remove {
        id: String,
        #[command(flatten)]
        day: DayArg,
    },
}

pub fn run(action: PlanAction, config: &Config) -> CmdResult {
    let store = open_store(config)?;
    let mut planner = DailyPlanner::load(&store);

    match action {
        PlanAction::Add { day, fields } => print_json(planner.add(day.day(), fields.into())?)?,
        PlanAction::List { day } => print_json(&planner.items_for(day.day()))?,
        PlanAction::Dates => print_json(&planner.dates().collect::<Vec<_>>())?,
        PlanAction::Toggle { id, day } => print_json(planner.toggle(day.day(), &id)?)?,
        PlanAction::Update { id, day, fields } => {
            print_json(planner.update(day.day(), &id, fields.into())?)?;
        }
        PlanAction::Remove { id, day } => print_json(&planner.delete(day.day(), &id)?)?,
    }
    Ok(())
}
