use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{new_id, required, Collection, Record};
use crate::error::ValidationError;
use crate::storage::keys;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub purchased: bool,
    pub created_at: DateTime<Utc>,
}

impl Record for ShoppingItem {
    const KEY: &'static str = keys::SHOPPING_LIST;
    const NAME: &'static str = "shopping item";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShoppingInput {
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub notes: String,
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn checked_quantity(raw: Option<f64>) -> Result<f64, ValidationError> {
    match raw {
        Some(q) if q > 0.0 && q.is_finite() => Ok(q),
        Some(q) => Err(ValidationError::InvalidValue {
            field: "quantity".into(),
            message: format!("must be a positive number, got {q}"),
        }),
        None => Ok(1.0),
    }
}

impl Collection<'_, ShoppingItem> {
    pub fn add(&mut self, input: ShoppingInput) -> Result<&ShoppingItem, ValidationError> {
        let name = required("name", &input.name)?;
        let quantity = checked_quantity(input.quantity)?;
        Ok(self.push_front(ShoppingItem {
            id: new_id(),
            name,
            quantity,
            unit: or_default(input.unit, "pcs"),
            category: or_default(input.category, "grocery"),
            price: input.price,
            notes: input.notes,
            purchased: false,
            created_at: Utc::now(),
        }))
    }

    /// Rewrite the editable fields of an item. Purchase state and creation
    /// time stay as they were.
    pub fn update(&mut self, id: &str, input: ShoppingInput) -> Result<&ShoppingItem, ValidationError> {
        let name = required("name", &input.name)?;
        let quantity = checked_quantity(input.quantity)?;
        self.modify(id, |item| {
            item.name = name;
            item.quantity = quantity;
            item.unit = or_default(input.unit, "pcs");
            item.category = or_default(input.category, "grocery");
            item.price = input.price;
            item.notes = input.notes;
        })
    }

    pub fn toggle_purchased(&mut self, id: &str) -> Result<&ShoppingItem, ValidationError> {
        self.modify(id, |item| item.purchased = !item.purchased)
    }

    /// Drop every purchased item; returns how many went.
    pub fn clear_purchased(&mut self) -> usize {
        self.retain(|item| !item.purchased)
    }

    /// Sum of price times quantity over purchased items that carry a price.
    pub fn total_spent(&self) -> f64 {
        self.items()
            .iter()
            .filter(|item| item.purchased)
            .filter_map(|item| item.price.map(|p| p * item.quantity))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Store;

    fn item(name: &str, quantity: f64, price: Option<f64>) -> ShoppingInput {
        ShoppingInput {
            name: name.into(),
            quantity: Some(quantity),
            price,
            ..ShoppingInput::default()
        }
    }

    #[test]
    fn defaults_fill_in() {
        let store = Store::in_memory();
        let mut list = Collection::<ShoppingItem>::load(&store);
        let added = list
            .add(ShoppingInput {
                name: "eggs".into(),
                ..ShoppingInput::default()
            })
            .unwrap();
        assert_eq!(added.quantity, 1.0);
        assert_eq!(added.unit, "pcs");
        assert_eq!(added.category, "grocery");
    }

    #[test]
    fn total_counts_purchased_priced_items() {
        let store = Store::in_memory();
        let mut list = Collection::<ShoppingItem>::load(&store);
        let milk = list.add(item("milk", 2.0, Some(1.5))).unwrap().id.clone();
        let bread = list.add(item("bread", 1.0, None)).unwrap().id.clone();
        list.add(item("cheese", 1.0, Some(7.0))).unwrap();

        list.toggle_purchased(&milk).unwrap();
        list.toggle_purchased(&bread).unwrap();
        assert!((list.total_spent() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn clear_purchased_keeps_the_rest() {
        let store = Store::in_memory();
        let mut list = Collection::<ShoppingItem>::load(&store);
        let milk = list.add(item("milk", 1.0, None)).unwrap().id.clone();
        list.add(item("tea", 1.0, None)).unwrap();
        list.toggle_purchased(&milk).unwrap();

        assert_eq!(list.clear_purchased(), 1);
        assert_eq!(Collection::<ShoppingItem>::load(&store).items()[0].name, "tea");
    }

    #[test]
    fn rejects_non_positive_quantity() {
        let store = Store::in_memory();
        let mut list = Collection::<ShoppingItem>::load(&store);
        assert!(matches!(
            list.add(item("milk", 0.0, None)),
            Err(ValidationError::InvalidValue { .. })
        ));
        assert!(list.is_empty());
    }

    #[test]
    fn newest_item_first() {
        let store = Store::in_memory();
        let mut list = Collection::<ShoppingItem>::load(&store);
        list.add(item("milk", 1.0, None)).unwrap();
        list.add(item("eggs", 12.0, None)).unwrap();

        let names: Vec<_> = Collection::<ShoppingItem>::load(&store)
            .items()
            .iter()
            .map(|i| i.name.clone())
            .collect();
        assert_eq!(names, vec!["eggs", "milk"]);
    }

    #[test]
    fn update_keeps_purchase_state() {
        let store = Store::in_memory();
        let mut list = Collection::<ShoppingItem>::load(&store);
        let id = list.add(item("milk", 1.0, None)).unwrap().id.clone();
        list.toggle_purchased(&id).unwrap();

        let updated = list
            .update(
                &id,
                ShoppingInput {
                    name: "oat milk".into(),
                    quantity: Some(2.0),
                    unit: Some("l".into()),
                    price: Some(1.8),
                    ..ShoppingInput::default()
                },
            )
            .unwrap();
        assert_eq!(updated.name, "oat milk");
        assert_eq!(updated.unit, "l");
        assert_eq!(updated.category, "grocery");
        assert!(updated.purchased);
        assert!((list.total_spent() - 3.6).abs() < 1e-9);
    }

    #[test]
    fn rejected_update_leaves_item_alone() {
        let store = Store::in_memory();
        let mut list = Collection::<ShoppingItem>::load(&store);
        let id = list.add(item("milk", 1.0, None)).unwrap().id.clone();
        let before = store.raw(keys::SHOPPING_LIST);

        assert_eq!(
            list.update(&id, item("  ", 2.0, None)).unwrap_err(),
            ValidationError::EmptyField("name")
        );
        assert!(matches!(
            list.update(&id, item("milk", -1.0, None)),
            Err(ValidationError::InvalidValue { .. })
        ));
        assert!(matches!(
            list.update("missing", item("milk", 1.0, None)),
            Err(ValidationError::NotFound { .. })
        ));
        assert_eq!(store.raw(keys::SHOPPING_LIST), before);
        assert_eq!(list.items()[0].quantity, 1.0);
    }
}
