use serde::{Deserialize, Serialize};

use crate::id::{OrganizationId, SportId, TeamId};
use crate::util::appended;
use crate::Store;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(alias = "ageGroup")]
    pub age_group: String,
    #[serde(alias = "sportId")]
    pub sport_id: SportId,
    #[serde(alias = "organizationId")]
    pub organization_id: OrganizationId,
    #[serde(alias = "isActive")]
    pub is_active: bool,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NewTeam {
    pub name: String,
    pub age_group: String,
    pub sport_id: SportId,
    pub organization_id: OrganizationId,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TeamPatch {
    pub name: Option<String>,
    pub age_group: Option<String>,
    pub sport_id: Option<SportId>,
    pub organization_id: Option<OrganizationId>,
    pub is_active: Option<bool>,
}

impl Store {
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn teams_in(&self, organization: &OrganizationId) -> Vec<&Team> {
        self.teams
            .iter()
            .filter(|team| team.organization_id == *organization)
            .collect()
    }

    pub fn team(&self, id: &TeamId) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == *id)
    }

    pub fn add_team(&mut self, new: NewTeam) -> &Team {
        appended(
            &mut self.teams,
            Team {
                id: TeamId::new(),
                name: new.name,
                age_group: new.age_group,
                sport_id: new.sport_id,
                organization_id: new.organization_id,
                // New teams always start active; deactivation is an update.
                is_active: true,
            },
        )
    }

    pub fn update_team(&mut self, id: &TeamId, patch: TeamPatch) -> Option<&Team> {
        let team = self.teams.iter_mut().find(|team| team.id == *id)?;
        if let Some(name) = patch.name {
            team.name = name;
        }
        if let Some(age_group) = patch.age_group {
            team.age_group = age_group;
        }
        if let Some(sport_id) = patch.sport_id {
            team.sport_id = sport_id;
        }
        if let Some(organization_id) = patch.organization_id {
            team.organization_id = organization_id;
        }
        if let Some(is_active) = patch.is_active {
            team.is_active = is_active;
        }
        Some(team)
    }

    // Memberships referring to the removed team are left in place; the
    // roster joins skip records whose referent is gone.
    pub fn delete_team(&mut self, id: &TeamId) -> Option<Team> {
        let index = self.teams.iter().position(|team| team.id == *id)?;
        Some(self.teams.remove(index))
    }
}
