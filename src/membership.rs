use chrono::{DateTime, Utc};
use derive_more::Deref;
use serde::{Deserialize, Serialize};

use crate::id::{
    OrganizationId, OrganizationMembershipId, OrganizationRoleId, PersonId, TeamId,
    TeamMembershipId, TeamRoleId,
};
use crate::util::appended;
use crate::{Person, Store};

// A membership is a tenure, not a link: closing one keeps the record as
// history, and the same person can hold several open tenures at once as
// long as the (person, target, role) triples differ.

#[derive(Debug, Clone, Deserialize, Serialize)]
#[non_exhaustive]
pub struct TeamMembership {
    pub id: TeamMembershipId,
    #[serde(alias = "personId")]
    pub person_id: PersonId,
    #[serde(alias = "teamId")]
    pub team_id: TeamId,
    #[serde(alias = "roleId")]
    pub role_id: TeamRoleId,
    #[serde(alias = "startDate")]
    pub start_date: DateTime<Utc>,
    #[serde(alias = "endDate")]
    pub end_date: Option<DateTime<Utc>>,
}

impl TeamMembership {
    pub fn is_open(&self) -> bool {
        self.end_date.is_none()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[non_exhaustive]
pub struct OrganizationMembership {
    pub id: OrganizationMembershipId,
    #[serde(alias = "personId")]
    pub person_id: PersonId,
    #[serde(alias = "organizationId")]
    pub organization_id: OrganizationId,
    #[serde(alias = "roleId")]
    pub role_id: OrganizationRoleId,
    #[serde(alias = "startDate")]
    pub start_date: DateTime<Utc>,
    #[serde(alias = "endDate")]
    pub end_date: Option<DateTime<Utc>>,
}

impl OrganizationMembership {
    pub fn is_open(&self) -> bool {
        self.end_date.is_none()
    }
}

// Roster rows as the UI wants them: the person's own fields plus the role
// they hold there. Computed per call, never stored.
#[derive(Debug, Clone, Deref, Deserialize, Serialize)]
pub struct TeamMember {
    #[deref]
    #[serde(flatten)]
    pub person: Person,
    #[serde(alias = "roleId")]
    pub role_id: TeamRoleId,
    #[serde(alias = "roleName")]
    pub role_name: Option<String>,
    #[serde(alias = "membershipId")]
    pub membership_id: TeamMembershipId,
}

#[derive(Debug, Clone, Deref, Deserialize, Serialize)]
pub struct OrganizationMember {
    #[deref]
    #[serde(flatten)]
    pub person: Person,
    #[serde(alias = "roleId")]
    pub role_id: OrganizationRoleId,
    #[serde(alias = "roleName")]
    pub role_name: Option<String>,
    #[serde(alias = "membershipId")]
    pub membership_id: OrganizationMembershipId,
}

impl Store {
    pub fn team_memberships(&self) -> &[TeamMembership] {
        &self.team_memberships
    }

    pub fn team_membership(&self, id: &TeamMembershipId) -> Option<&TeamMembership> {
        self.team_memberships
            .iter()
            .find(|membership| membership.id == *id)
    }

    pub fn add_team_member(
        &mut self,
        person_id: PersonId,
        team_id: TeamId,
        role_id: TeamRoleId,
    ) -> &TeamMembership {
        // An open tenure for the identical triple is handed back as-is
        // instead of stacking a duplicate.
        if let Some(index) = self.team_memberships.iter().position(|membership| {
            membership.is_open()
                && membership.person_id == person_id
                && membership.team_id == team_id
                && membership.role_id == role_id
        }) {
            return &self.team_memberships[index];
        }
        appended(
            &mut self.team_memberships,
            TeamMembership {
                id: TeamMembershipId::new(),
                person_id,
                team_id,
                role_id,
                start_date: Utc::now(),
                end_date: None,
            },
        )
    }

    pub fn remove_team_member(&mut self, id: &TeamMembershipId) -> Option<&TeamMembership> {
        let membership = self
            .team_memberships
            .iter_mut()
            .find(|membership| membership.id == *id)?;
        // Soft close: the record stays put as history.
        membership.end_date = Some(Utc::now());
        Some(membership)
    }

    pub fn team_members(&self, team: &TeamId) -> Vec<TeamMember> {
        self.team_memberships
            .iter()
            .filter(|membership| membership.is_open() && membership.team_id == *team)
            .filter_map(|membership| {
                // Tenures whose person no longer exists are skipped, not
                // reported.
                let person = self.person(&membership.person_id)?;
                Some(TeamMember {
                    person: person.clone(),
                    role_id: membership.role_id.clone(),
                    role_name: self
                        .team_role(&membership.role_id)
                        .map(|role| role.name.clone()),
                    membership_id: membership.id.clone(),
                })
            })
            .collect()
    }

    pub fn organization_memberships(&self) -> &[OrganizationMembership] {
        &self.organization_memberships
    }

    pub fn organization_membership(
        &self,
        id: &OrganizationMembershipId,
    ) -> Option<&OrganizationMembership> {
        self.organization_memberships
            .iter()
            .find(|membership| membership.id == *id)
    }

    pub fn add_organization_member(
        &mut self,
        person_id: PersonId,
        organization_id: OrganizationId,
        role_id: OrganizationRoleId,
    ) -> &OrganizationMembership {
        if let Some(index) = self.organization_memberships.iter().position(|membership| {
            membership.is_open()
                && membership.person_id == person_id
                && membership.organization_id == organization_id
                && membership.role_id == role_id
        }) {
            return &self.organization_memberships[index];
        }
        appended(
            &mut self.organization_memberships,
            OrganizationMembership {
                id: OrganizationMembershipId::new(),
                person_id,
                organization_id,
                role_id,
                start_date: Utc::now(),
                end_date: None,
            },
        )
    }

    pub fn remove_organization_member(
        &mut self,
        id: &OrganizationMembershipId,
    ) -> Option<&OrganizationMembership> {
        let membership = self
            .organization_memberships
            .iter_mut()
            .find(|membership| membership.id == *id)?;
        membership.end_date = Some(Utc::now());
        Some(membership)
    }

    pub fn organization_members(&self, organization: &OrganizationId) -> Vec<OrganizationMember> {
        self.organization_memberships
            .iter()
            .filter(|membership| {
                membership.is_open() && membership.organization_id == *organization
            })
            .filter_map(|membership| {
                let person = self.person(&membership.person_id)?;
                Some(OrganizationMember {
                    person: person.clone(),
                    role_id: membership.role_id.clone(),
                    role_name: self
                        .organization_role(&membership.role_id)
                        .map(|role| role.name.clone()),
                    membership_id: membership.id.clone(),
                })
            })
            .collect()
    }
}
