use serde::{Deserialize, Serialize};

use crate::id::{OrganizationId, SportId};
use crate::util::appended;
use crate::Store;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    pub logo: Option<String>,
    #[serde(alias = "primaryColor")]
    pub primary_color: Option<String>,
    #[serde(alias = "secondaryColor")]
    pub secondary_color: Option<String>,
    // Soft references into the sport catalog; never validated on write.
    #[serde(alias = "supportedSportIds")]
    pub supported_sport_ids: Vec<SportId>,
    #[serde(alias = "shortName")]
    pub short_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewOrganization {
    pub name: String,
    pub logo: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub supported_sport_ids: Vec<SportId>,
    pub short_name: Option<String>,
}

// `None` fields are left untouched by an update; the id is not patchable.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OrganizationPatch {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub primary_color: Option<String>,
    pub secondary_color: Option<String>,
    pub supported_sport_ids: Option<Vec<SportId>>,
    pub short_name: Option<String>,
}

impl Store {
    pub fn organizations(&self) -> &[Organization] {
        &self.organizations
    }

    pub fn organization(&self, id: &OrganizationId) -> Option<&Organization> {
        self.organizations.iter().find(|org| org.id == *id)
    }

    pub fn add_organization(&mut self, new: NewOrganization) -> &Organization {
        appended(
            &mut self.organizations,
            Organization {
                id: OrganizationId::new(),
                name: new.name,
                logo: new.logo,
                primary_color: new.primary_color,
                secondary_color: new.secondary_color,
                supported_sport_ids: new.supported_sport_ids,
                short_name: new.short_name,
            },
        )
    }

    pub fn update_organization(
        &mut self,
        id: &OrganizationId,
        patch: OrganizationPatch,
    ) -> Option<&Organization> {
        let organization = self.organizations.iter_mut().find(|org| org.id == *id)?;
        if let Some(name) = patch.name {
            organization.name = name;
        }
        if let Some(logo) = patch.logo {
            organization.logo = Some(logo);
        }
        if let Some(primary_color) = patch.primary_color {
            organization.primary_color = Some(primary_color);
        }
        if let Some(secondary_color) = patch.secondary_color {
            organization.secondary_color = Some(secondary_color);
        }
        if let Some(supported_sport_ids) = patch.supported_sport_ids {
            organization.supported_sport_ids = supported_sport_ids;
        }
        if let Some(short_name) = patch.short_name {
            organization.short_name = Some(short_name);
        }
        Some(organization)
    }
}
