//! Day planner: items keyed by ISO date, each day kept in insertion order.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_id, required, Priority};
use crate::error::ValidationError;
use crate::storage::{keys, Store};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerItem {
    pub id: String,
    /// `HH:MM`, compared as text.
    pub time: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "default_category")]
    pub category: String,
    pub created_at: DateTime<Utc>,
}

fn default_category() -> String {
    "work".to_string()
}

#[derive(Debug, Clone, Default)]
pub struct PlannerInput {
    pub time: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: Option<String>,
}

pub struct DailyPlanner<'s> {
    store: &'s Store,
    days: BTreeMap<String, Vec<PlannerItem>>,
}

impl<'s> DailyPlanner<'s> {
    pub fn load(store: &'s Store) -> Self {
        Self {
            store,
            days: store.get(keys::DAILY_PLANNER, BTreeMap::new()),
        }
    }

    /// Items for `date` sorted by time. Unknown dates are empty.
    pub fn items_for(&self, date: NaiveDate) -> Vec<&PlannerItem> {
        let mut items: Vec<&PlannerItem> = self
            .days
            .get(&date_key(date))
            .map(|day| day.iter().collect())
            .unwrap_or_default();
        items.sort_by(|a, b| a.time.cmp(&b.time));
        items
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.days.keys().map(String::as_str)
    }

    pub fn add(&mut self, date: NaiveDate, input: PlannerInput) -> Result<&PlannerItem, ValidationError> {
        let time = parse_time(&input.time)?;
        let title = required("title", &input.title)?;
        let day = self.days.entry(date_key(date)).or_default();
        day.push(PlannerItem {
            id: new_id(),
            time,
            title,
            description: input.description.trim().to_string(),
            completed: false,
            priority: input.priority,
            category: category_or_default(input.category),
            created_at: Utc::now(),
        });
        let index = day.len() - 1;
        self.commit();
        Ok(&self.days[&date_key(date)][index])
    }

    /// Rewrite an item's editable fields in place. The id, completion flag
    /// and creation time are kept.
    pub fn update(
        &mut self,
        date: NaiveDate,
        id: &str,
        input: PlannerInput,
    ) -> Result<&PlannerItem, ValidationError> {
        let time = parse_time(&input.time)?;
        let title = required("title", &input.title)?;
        let (key, index) = self.locate(date, id)?;
        if let Some(item) = self.days.get_mut(&key).and_then(|day| day.get_mut(index)) {
            item.time = time;
            item.title = title;
            item.description = input.description.trim().to_string();
            item.priority = input.priority;
            item.category = category_or_default(input.category);
        }
        self.commit();
        Ok(&self.days[&key][index])
    }

    pub fn toggle(&mut self, date: NaiveDate, id: &str) -> Result<&PlannerItem, ValidationError> {
        let (key, index) = self.locate(date, id)?;
        if let Some(item) = self.days.get_mut(&key).and_then(|day| day.get_mut(index)) {
            item.completed = !item.completed;
        }
        self.commit();
        Ok(&self.days[&key][index])
    }

    pub fn delete(&mut self, date: NaiveDate, id: &str) -> Result<PlannerItem, ValidationError> {
        let (key, index) = self.locate(date, id)?;
        let day = self.days.entry(key).or_default();
        let removed = day.remove(index);
        self.commit();
        Ok(removed)
    }

    fn locate(&self, date: NaiveDate, id: &str) -> Result<(String, usize), ValidationError> {
        let key = date_key(date);
        self.days
            .get(&key)
            .and_then(|day| day.iter().position(|item| item.id == id))
            .map(|index| (key, index))
            .ok_or_else(|| ValidationError::NotFound {
                collection: "planner item",
                id: id.to_string(),
            })
    }

    fn commit(&self) {
        self.store.set(keys::DAILY_PLANNER, &self.days);
    }
}

fn category_or_default(category: Option<String>) -> String {
    category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .unwrap_or_else(default_category)
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Accepts `H:MM` or `HH:MM` and normalizes to zero-padded `HH:MM` so that
/// text order is time order.
fn parse_time(raw: &str) -> Result<String, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::EmptyField("time"));
    }
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map(|t| t.format("%H:%M").to_string())
        .map_err(|e| ValidationError::InvalidValue {
            field: "time".into(),
            message: format!("'{raw}' is not HH:MM ({e})"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 18).unwrap()
    }

    fn entry(time: &str, title: &str) -> PlannerInput {
        PlannerInput {
            time: time.into(),
            title: title.into(),
            ..PlannerInput::default()
        }
    }

    #[test]
    fn items_come_back_sorted_by_time() {
        let store = Store::in_memory();
        let mut planner = DailyPlanner::load(&store);
        planner.add(day(), entry("14:00", "review")).unwrap();
        planner.add(day(), entry("9:30", "standup")).unwrap();

        let titles: Vec<_> = planner.items_for(day()).iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["standup", "review"]);
        assert_eq!(planner.items_for(day())[0].time, "09:30");
    }

    #[test]
    fn persists_under_iso_date() {
        let store = Store::in_memory();
        let mut planner = DailyPlanner::load(&store);
        planner.add(day(), entry("08:00", "gym")).unwrap();

        let raw: serde_json::Value = store.get(keys::DAILY_PLANNER, serde_json::Value::Null);
        assert_eq!(raw["2024-03-18"][0]["title"], "gym");
        assert_eq!(DailyPlanner::load(&store).dates().collect::<Vec<_>>(), vec!["2024-03-18"]);
    }

    #[test]
    fn time_and_title_are_required() {
        let store = Store::in_memory();
        let mut planner = DailyPlanner::load(&store);
        assert_eq!(planner.add(day(), entry("", "x")).unwrap_err(), ValidationError::EmptyField("time"));
        assert_eq!(planner.add(day(), entry("10:00", " ")).unwrap_err(), ValidationError::EmptyField("title"));
        assert!(matches!(
            planner.add(day(), entry("25:00", "x")),
            Err(ValidationError::InvalidValue { .. })
        ));
        assert!(store.raw(keys::DAILY_PLANNER).is_none());
    }

    #[test]
    fn toggle_and_delete_within_a_day() {
        let store = Store::in_memory();
        let mut planner = DailyPlanner::load(&store);
        let id = planner.add(day(), entry("10:00", "write")).unwrap().id.clone();

        assert!(planner.toggle(day(), &id).unwrap().completed);
        let other_day = day().succ_opt().unwrap();
        assert!(planner.delete(other_day, &id).is_err());
        planner.delete(day(), &id).unwrap();
        assert!(planner.items_for(day()).is_empty());
    }

    #[test]
    fn update_keeps_identity_and_completion() {
        let store = Store::in_memory();
        let mut planner = DailyPlanner::load(&store);
        let added = planner.add(day(), entry("10:00", "write")).unwrap().clone();
        planner.toggle(day(), &added.id).unwrap();

        let updated = planner
            .update(
                day(),
                &added.id,
                PlannerInput {
                    time: "7:45".into(),
                    title: "write draft".into(),
                    priority: Priority::High,
                    category: Some("personal".into()),
                    ..PlannerInput::default()
                },
            )
            .unwrap()
            .clone();
        assert_eq!(updated.id, added.id);
        assert_eq!(updated.created_at, added.created_at);
        assert!(updated.completed);
        assert_eq!(updated.time, "07:45");
        assert_eq!(updated.category, "personal");
        assert_eq!(DailyPlanner::load(&store).items_for(day())[0].title, "write draft");
    }

    #[test]
    fn rejected_update_leaves_item_alone() {
        let store = Store::in_memory();
        let mut planner = DailyPlanner::load(&store);
        let id = planner.add(day(), entry("10:00", "write")).unwrap().id.clone();
        let before = store.raw(keys::DAILY_PLANNER);

        assert_eq!(
            planner.update(day(), &id, entry("", "write")).unwrap_err(),
            ValidationError::EmptyField("time")
        );
        assert_eq!(
            planner.update(day(), &id, entry("11:00", "  ")).unwrap_err(),
            ValidationError::EmptyField("title")
        );
        assert!(matches!(
            planner.update(day(), &id, entry("9:75", "write")),
            Err(ValidationError::InvalidValue { .. })
        ));
        assert!(matches!(
            planner.update(day().succ_opt().unwrap(), &id, entry("11:00", "write")),
            Err(ValidationError::NotFound { .. })
        ));
        assert_eq!(store.raw(keys::DAILY_PLANNER), before);
        assert_eq!(planner.items_for(day())[0].time, "10:00");
    }
}
