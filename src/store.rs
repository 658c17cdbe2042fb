use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::reference::{seed_organization_roles, seed_sports, seed_team_roles};
use crate::{
    Event, Game, Organization, OrganizationMembership, OrganizationRole, Person, ScoreLog, Sport,
    Team, TeamMembership, TeamRole, Venue,
};

// One instance per embedder, passed around by reference. Collections are
// plain Vecs so reads come back in insertion order; every lookup is a scan,
// which is fine at club scale.
#[derive(Debug, Deserialize, Serialize)]
pub struct Store {
    pub(crate) organizations: Vec<Organization>,
    pub(crate) sports: Vec<Sport>,
    pub(crate) team_roles: Vec<TeamRole>,
    pub(crate) organization_roles: Vec<OrganizationRole>,
    pub(crate) venues: Vec<Venue>,
    pub(crate) teams: Vec<Team>,
    pub(crate) persons: Vec<Person>,
    pub(crate) team_memberships: Vec<TeamMembership>,
    pub(crate) organization_memberships: Vec<OrganizationMembership>,
    pub(crate) events: Vec<Event>,
    pub(crate) games: Vec<Game>,
    pub(crate) score_logs: Vec<ScoreLog>,
}

impl Store {
    pub fn new() -> Store {
        let mut store = Store {
            organizations: Vec::new(),
            sports: seed_sports(),
            team_roles: seed_team_roles(),
            organization_roles: seed_organization_roles(),
            venues: Vec::new(),
            teams: Vec::new(),
            persons: Vec::new(),
            team_memberships: Vec::new(),
            organization_memberships: Vec::new(),
            events: Vec::new(),
            games: Vec::new(),
            score_logs: Vec::new(),
        };

        // The demo club every fresh store starts with.
        store.organizations.push(Organization {
            id: "org-1".into(),
            name: "Springfield High School".to_owned(),
            logo: Some(
                "https://api.dicebear.com/7.x/initials/svg?seed=SHS&backgroundColor=00ff00&textColor=000000"
                    .to_owned(),
            ),
            primary_color: Some("#00ff00".to_owned()),
            secondary_color: Some("#000000".to_owned()),
            supported_sport_ids: vec![
                "sport-soccer".into(),
                "sport-rugby".into(),
                "sport-netball".into(),
            ],
            short_name: Some("SHS".to_owned()),
        });
        store.venues.push(Venue {
            id: "venue-1".into(),
            name: "Main Field".to_owned(),
            address: "123 School Lane".to_owned(),
            organization_id: "org-1".into(),
        });
        store.teams.push(Team {
            id: "team-1".into(),
            name: "First XI".to_owned(),
            age_group: "U19".to_owned(),
            sport_id: "sport-soccer".into(),
            organization_id: "org-1".into(),
            is_active: true,
        });
        store.teams.push(Team {
            id: "team-2".into(),
            name: "U16 A".to_owned(),
            age_group: "U16".to_owned(),
            sport_id: "sport-rugby".into(),
            organization_id: "org-1".into(),
            is_active: true,
        });

        store
    }

    // The write paths uphold these invariants by construction, but a
    // snapshot edited or produced elsewhere can hand us junk, so
    // `deserialize_store` re-checks them. Dangling cross-references are
    // deliberately not flagged: every join filters missing referents.
    pub fn check_consistency(&self) -> Result<(), ConsistencyError> {
        let mut problems = Vec::new();

        macro_rules! id_check {
            ($collection:expr, $kind:expr) => {
                let mut seen = BTreeSet::new();
                for obj in $collection {
                    if obj.id.as_str().is_empty() {
                        problems.push(format!("- blank {} id: {:?}", $kind, obj));
                    }
                    if !seen.insert(obj.id.as_str()) {
                        problems.push(format!("- duplicate {} id {}", $kind, obj.id));
                    }
                }
            };
        }
        id_check!(&self.organizations, "organization");
        id_check!(&self.sports, "sport");
        id_check!(&self.team_roles, "team role");
        id_check!(&self.organization_roles, "organization role");
        id_check!(&self.venues, "venue");
        id_check!(&self.teams, "team");
        id_check!(&self.persons, "person");
        id_check!(&self.team_memberships, "team membership");
        id_check!(&self.organization_memberships, "organization membership");
        id_check!(&self.events, "event");
        id_check!(&self.games, "game");
        id_check!(&self.score_logs, "score log");

        for membership in &self.team_memberships {
            if membership
                .end_date
                .is_some_and(|end| end < membership.start_date)
            {
                problems.push(format!(
                    "- team membership {} ends before it starts",
                    membership.id
                ));
            }
        }
        for membership in &self.organization_memberships {
            if membership
                .end_date
                .is_some_and(|end| end < membership.start_date)
            {
                problems.push(format!(
                    "- organization membership {} ends before it starts",
                    membership.id
                ));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConsistencyError(problems.join("\n")))
        }
    }
}

impl Default for Store {
    fn default() -> Store {
        Store::new()
    }
}

#[derive(Debug, Error)]
#[error("store consistency check failed:\n{0}")]
pub struct ConsistencyError(String);

pub fn deserialize_store<'de, D>(deserializer: D) -> Result<Store, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let store = Store::deserialize(deserializer)?;
    store
        .check_consistency()
        .map_err(serde::de::Error::custom)?;
    Ok(store)
}
