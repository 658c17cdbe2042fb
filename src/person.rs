use serde::{Deserialize, Serialize};

use crate::id::PersonId;
use crate::util::appended;
use crate::Store;

// People are linked to teams and organizations only through membership
// records, never by fields on the person itself.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Person {
    pub id: PersonId,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PersonPatch {
    pub name: Option<String>,
}

impl Store {
    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.persons.iter().find(|person| person.id == *id)
    }

    pub fn add_person(&mut self, name: String) -> &Person {
        appended(
            &mut self.persons,
            Person {
                id: PersonId::new(),
                name,
            },
        )
    }

    pub fn update_person(&mut self, id: &PersonId, patch: PersonPatch) -> Option<&Person> {
        let person = self.persons.iter_mut().find(|person| person.id == *id)?;
        if let Some(name) = patch.name {
            person.name = name;
        }
        Some(person)
    }

    pub fn delete_person(&mut self, id: &PersonId) -> Option<Person> {
        let index = self.persons.iter().position(|person| person.id == *id)?;
        let person = self.persons.remove(index);
        // Team tenures go with the person, open and closed alike.
        // Organization memberships stay behind and are filtered by the joins.
        self.team_memberships
            .retain(|membership| membership.person_id != person.id);
        Some(person)
    }
}

#[cfg(test)]
mod tests {
    use super::PersonPatch;
    use crate::Store;

    #[test]
    fn rename_keeps_the_id() {
        let mut store = Store::new();
        let id = store.add_person("Sam Cole".to_owned()).id.clone();

        let renamed = store
            .update_person(
                &id,
                PersonPatch {
                    name: Some("Sam Vale".to_owned()),
                },
            )
            .unwrap();
        assert_eq!(renamed.name, "Sam Vale");
        assert_eq!(renamed.id, id);
    }

    #[test]
    fn deleting_a_person_removes_their_team_tenures() {
        let mut store = Store::new();
        let person = store.add_person("Alex Reed".to_owned()).id.clone();
        let closed = store
            .add_team_member(person.clone(), "team-1".into(), "role-player".into())
            .id
            .clone();
        store.remove_team_member(&closed);
        store.add_team_member(person.clone(), "team-2".into(), "role-coach".into());
        store.add_organization_member(person.clone(), "org-1".into(), "orgrole-admin".into());

        assert!(store.delete_person(&person).is_some());

        assert!(store.person(&person).is_none());
        // Closed history is purged along with the open records.
        assert!(store
            .team_memberships()
            .iter()
            .all(|membership| membership.person_id != person));
        assert!(store.team_members(&"team-2".into()).is_empty());
        // The organization membership dangles; the join hides it.
        assert!(store
            .organization_memberships()
            .iter()
            .any(|membership| membership.person_id == person));
        assert!(store
            .organization_members(&"org-1".into())
            .iter()
            .all(|member| member.id != person));

        assert!(store.delete_person(&person).is_none());
    }
}
