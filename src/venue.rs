use serde::{Deserialize, Serialize};

use crate::id::{OrganizationId, VenueId};
use crate::util::appended;
use crate::Store;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub address: String,
    #[serde(alias = "organizationId")]
    pub organization_id: OrganizationId,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VenuePatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub organization_id: Option<OrganizationId>,
}

impl Store {
    pub fn venues(&self) -> &[Venue] {
        &self.venues
    }

    pub fn venues_in(&self, organization: &OrganizationId) -> Vec<&Venue> {
        self.venues
            .iter()
            .filter(|venue| venue.organization_id == *organization)
            .collect()
    }

    pub fn venue(&self, id: &VenueId) -> Option<&Venue> {
        self.venues.iter().find(|venue| venue.id == *id)
    }

    pub fn add_venue(
        &mut self,
        name: String,
        address: String,
        organization_id: OrganizationId,
    ) -> &Venue {
        appended(
            &mut self.venues,
            Venue {
                id: VenueId::new(),
                name,
                address,
                organization_id,
            },
        )
    }

    pub fn update_venue(&mut self, id: &VenueId, patch: VenuePatch) -> Option<&Venue> {
        let venue = self.venues.iter_mut().find(|venue| venue.id == *id)?;
        if let Some(name) = patch.name {
            venue.name = name;
        }
        if let Some(address) = patch.address {
            venue.address = address;
        }
        if let Some(organization_id) = patch.organization_id {
            venue.organization_id = organization_id;
        }
        Some(venue)
    }
}
