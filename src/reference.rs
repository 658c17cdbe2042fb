use serde::{Deserialize, Serialize};

use crate::id::{OrganizationRoleId, SportId, TeamRoleId};
use crate::Store;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Sport {
    pub id: SportId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[non_exhaustive]
pub struct TeamRole {
    pub id: TeamRoleId,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[non_exhaustive]
pub struct OrganizationRole {
    pub id: OrganizationRoleId,
    pub name: String,
}

// Reference catalogs are seeded once per store and never written afterwards.
// Their ids are well-known literals, not generated, because teams and
// memberships refer to them by name-like ids ("sport-soccer", "role-coach").

pub(crate) fn seed_sports() -> Vec<Sport> {
    [
        ("sport-rugby", "Rugby"),
        ("sport-netball", "Netball"),
        ("sport-hockey", "Hockey"),
        ("sport-cricket", "Cricket"),
        ("sport-tennis", "Tennis"),
        ("sport-chess", "Chess"),
        ("sport-soccer", "Soccer"),
    ]
    .into_iter()
    .map(|(id, name)| Sport {
        id: id.into(),
        name: name.to_owned(),
    })
    .collect()
}

pub(crate) fn seed_team_roles() -> Vec<TeamRole> {
    [
        ("role-player", "Player"),
        ("role-coach", "Coach"),
        ("role-staff", "Staff"),
        ("role-medic", "Medic"),
    ]
    .into_iter()
    .map(|(id, name)| TeamRole {
        id: id.into(),
        name: name.to_owned(),
    })
    .collect()
}

pub(crate) fn seed_organization_roles() -> Vec<OrganizationRole> {
    [("orgrole-admin", "Admin"), ("orgrole-manager", "Manager")]
        .into_iter()
        .map(|(id, name)| OrganizationRole {
            id: id.into(),
            name: name.to_owned(),
        })
        .collect()
}

impl Store {
    pub fn sports(&self) -> &[Sport] {
        &self.sports
    }

    pub fn sport(&self, id: &SportId) -> Option<&Sport> {
        self.sports.iter().find(|sport| sport.id == *id)
    }

    pub fn team_roles(&self) -> &[TeamRole] {
        &self.team_roles
    }

    pub fn team_role(&self, id: &TeamRoleId) -> Option<&TeamRole> {
        self.team_roles.iter().find(|role| role.id == *id)
    }

    pub fn organization_roles(&self) -> &[OrganizationRole] {
        &self.organization_roles
    }

    pub fn organization_role(&self, id: &OrganizationRoleId) -> Option<&OrganizationRole> {
        self.organization_roles.iter().find(|role| role.id == *id)
    }
}
