use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{contains_ci, new_id, required, Collection, Record};
use crate::error::ValidationError;
use crate::storage::keys;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub favorite: bool,
    pub created_at: DateTime<Utc>,
}

impl Record for Contact {
    const KEY: &'static str = keys::CONTACTS;
    const NAME: &'static str = "contact";

    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub notes: String,
}

impl Collection<'_, Contact> {
    pub fn add(&mut self, input: ContactInput) -> Result<&Contact, ValidationError> {
        let name = required("name", &input.name)?;
        Ok(self.push_front(Contact {
            id: new_id(),
            name,
            email: input.email.trim().to_string(),
            phone: input.phone.trim().to_string(),
            company: input.company.trim().to_string(),
            notes: input.notes,
            favorite: false,
            created_at: Utc::now(),
        }))
    }

    pub fn update(&mut self, id: &str, input: ContactInput) -> Result<&Contact, ValidationError> {
        let name = required("name", &input.name)?;
        self.modify(id, |c| {
            c.name = name;
            c.email = input.email.trim().to_string();
            c.phone = input.phone.trim().to_string();
            c.company = input.company.trim().to_string();
            c.notes = input.notes;
        })
    }

    pub fn toggle_favorite(&mut self, id: &str) -> Result<&Contact, ValidationError> {
        self.modify(id, |c| c.favorite = !c.favorite)
    }

    pub fn favorites(&self) -> impl Iterator<Item = &Contact> {
        self.items().iter().filter(|c| c.favorite)
    }

    /// Name and email match case-insensitively, phone as typed.
    pub fn search(&self, query: &str) -> Vec<&Contact> {
        let query = query.trim();
        let needle = query.to_lowercase();
        self.items()
            .iter()
            .filter(|c| {
                contains_ci(&c.name, &needle) || contains_ci(&c.email, &needle) || c.phone.contains(query)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Store;

    fn person(name: &str, email: &str, phone: &str) -> ContactInput {
        ContactInput {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            ..ContactInput::default()
        }
    }

    #[test]
    fn name_is_required() {
        let store = Store::in_memory();
        let mut contacts = Collection::<Contact>::load(&store);
        assert_eq!(
            contacts.add(person(" ", "a@b.c", "")).unwrap_err(),
            ValidationError::EmptyField("name")
        );
    }

    #[test]
    fn search_by_name_email_and_phone() {
        let store = Store::in_memory();
        let mut contacts = Collection::<Contact>::load(&store);
        contacts.add(person("Ada Lovelace", "ada@engine.org", "555-0101")).unwrap();
        contacts.add(person("Grace Hopper", "GRACE@navy.mil", "555-0202")).unwrap();

        assert_eq!(contacts.search("ada").len(), 1);
        assert_eq!(contacts.search("navy").len(), 1);
        assert_eq!(contacts.search("0202")[0].name, "Grace Hopper");
        assert_eq!(contacts.search("555").len(), 2);
    }

    #[test]
    fn newest_contact_first() {
        let store = Store::in_memory();
        let mut contacts = Collection::<Contact>::load(&store);
        contacts.add(person("Ada", "", "")).unwrap();
        contacts.add(person("Grace", "", "")).unwrap();

        let names: Vec<_> = Collection::<Contact>::load(&store)
            .items()
            .iter()
            .map(|c| c.name.clone())
            .collect();
        assert_eq!(names, vec!["Grace", "Ada"]);
    }

    #[test]
    fn favorites_toggle() {
        let store = Store::in_memory();
        let mut contacts = Collection::<Contact>::load(&store);
        let id = contacts.add(person("Ada", "", "")).unwrap().id.clone();
        contacts.add(person("Grace", "", "")).unwrap();

        contacts.toggle_favorite(&id).unwrap();
        assert_eq!(contacts.favorites().count(), 1);
        contacts.toggle_favorite(&id).unwrap();
        assert_eq!(contacts.favorites().count(), 0);
    }
}
