macro_rules! id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Clone,
            Default,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Deserialize,
            ::serde::Serialize,
        )]
        #[repr(transparent)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            // A readable prefix plus a v4 UUID, so ids stay distinguishable in
            // snapshots and collision-free across rapid successive creates.
            pub fn new() -> $name {
                $name(format!(concat!($prefix, "-{}"), ::uuid::Uuid::new_v4()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.0, f)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> Result<$name, Self::Err> {
                Ok($name(s.to_owned()))
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> $name {
                $name(s.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> $name {
                $name(s)
            }
        }
    };
}

id!(EventId, "event");
id!(GameId, "game");
id!(OrganizationId, "org");
id!(OrganizationMembershipId, "orgmembership");
id!(OrganizationRoleId, "orgrole");
id!(PersonId, "person");
id!(ScoreLogId, "scorelog");
id!(SportId, "sport");
id!(TeamId, "team");
id!(TeamMembershipId, "membership");
id!(TeamRoleId, "role");
id!(VenueId, "venue");
