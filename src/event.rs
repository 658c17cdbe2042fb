use serde::{Deserialize, Serialize};

use crate::id::{EventId, OrganizationId, VenueId};
use crate::util::appended;
use crate::Store;

// Schedule dates are caller-formatted strings; the store never parses or
// orders them.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub date: String,
    #[serde(alias = "venueId")]
    pub venue_id: VenueId,
    #[serde(alias = "organizationId")]
    pub organization_id: OrganizationId,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewEvent {
    pub name: String,
    pub date: String,
    pub venue_id: VenueId,
    pub organization_id: OrganizationId,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EventPatch {
    pub name: Option<String>,
    pub date: Option<String>,
    pub venue_id: Option<VenueId>,
    pub organization_id: Option<OrganizationId>,
}

impl Store {
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn events_in(&self, organization: &OrganizationId) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.organization_id == *organization)
            .collect()
    }

    pub fn event(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id == *id)
    }

    pub fn add_event(&mut self, new: NewEvent) -> &Event {
        appended(
            &mut self.events,
            Event {
                id: EventId::new(),
                name: new.name,
                date: new.date,
                venue_id: new.venue_id,
                organization_id: new.organization_id,
            },
        )
    }

    pub fn update_event(&mut self, id: &EventId, patch: EventPatch) -> Option<&Event> {
        let event = self.events.iter_mut().find(|event| event.id == *id)?;
        if let Some(name) = patch.name {
            event.name = name;
        }
        if let Some(date) = patch.date {
            event.date = date;
        }
        if let Some(venue_id) = patch.venue_id {
            event.venue_id = venue_id;
        }
        if let Some(organization_id) = patch.organization_id {
            event.organization_id = organization_id;
        }
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::{EventPatch, NewEvent};
    use crate::Store;

    #[test]
    fn events_keep_insertion_order_within_an_organization() {
        let mut store = Store::new();
        store.add_event(NewEvent {
            name: "Season Opener".to_owned(),
            date: "2024-03-02".to_owned(),
            venue_id: "venue-1".into(),
            organization_id: "org-1".into(),
        });
        store.add_event(NewEvent {
            name: "Invitational".to_owned(),
            date: "2024-01-15".to_owned(),
            venue_id: "venue-9".into(),
            organization_id: "org-other".into(),
        });
        store.add_event(NewEvent {
            name: "Derby Day".to_owned(),
            date: "2024-02-01".to_owned(),
            venue_id: "venue-1".into(),
            organization_id: "org-1".into(),
        });

        let names: Vec<&str> = store
            .events_in(&"org-1".into())
            .iter()
            .map(|event| event.name.as_str())
            .collect();
        // Insertion order, not date order.
        assert_eq!(names, ["Season Opener", "Derby Day"]);
        assert_eq!(store.events().len(), 3);
    }

    #[test]
    fn a_reschedule_patches_only_the_supplied_fields() {
        let mut store = Store::new();
        let id = store
            .add_event(NewEvent {
                name: "Cup Final".to_owned(),
                date: "2024-05-04".to_owned(),
                venue_id: "venue-1".into(),
                organization_id: "org-1".into(),
            })
            .id
            .clone();

        let updated = store
            .update_event(
                &id,
                EventPatch {
                    date: Some("2024-05-11".to_owned()),
                    venue_id: Some("venue-2".into()),
                    ..EventPatch::default()
                },
            )
            .unwrap();

        assert_eq!(updated.date, "2024-05-11");
        assert_eq!(updated.venue_id.as_str(), "venue-2");
        // Fields without a patch value keep their previous contents.
        assert_eq!(updated.name, "Cup Final");
        assert_eq!(updated.organization_id.as_str(), "org-1");
        assert_eq!(updated.id, id);
    }

    #[test]
    fn update_of_an_unknown_event_is_a_silent_none() {
        let mut store = Store::new();
        let before = store.events().len();
        let result = store.update_event(
            &"event-missing".into(),
            EventPatch {
                name: Some("Ghost Fixture".to_owned()),
                ..EventPatch::default()
            },
        );
        assert!(result.is_none());
        assert_eq!(store.events().len(), before);
    }
}
