#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::uninlined_format_args
)]

mod event;
mod game;
pub mod id;
mod membership;
mod organization;
mod person;
mod reference;
mod store;
mod team;
mod util;
mod venue;

pub use crate::event::{Event, EventPatch, NewEvent};
pub use crate::game::{Game, GameStatus, NewGame, NewScoreLog, ScoreKind, ScoreLog, StatusError};
pub use crate::membership::{
    OrganizationMember, OrganizationMembership, TeamMember, TeamMembership,
};
pub use crate::organization::{NewOrganization, Organization, OrganizationPatch};
pub use crate::person::{Person, PersonPatch};
pub use crate::reference::{OrganizationRole, Sport, TeamRole};
pub use crate::store::{deserialize_store, ConsistencyError, Store};
pub use crate::team::{NewTeam, Team, TeamPatch};
pub use crate::venue::{Venue, VenuePatch};
