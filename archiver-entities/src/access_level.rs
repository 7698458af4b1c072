use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::*;
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

pub type AccessLevelPrimitive = u8;

/// Role of a member on a GitLab project.
///
/// The discriminants are the numeric values used by the GitLab API.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, FromPrimitive, ToPrimitive, EnumIter, EnumString, Display)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum AccessLevel {
    NoAccess      =  0,
    MinimalAccess =  5,
    Guest         = 10,
    Planner       = 15,
    Reporter      = 20,
    #[default]
    Developer     = 30,
    Maintainer    = 40,
    Owner         = 50,
}

impl AccessLevel {
    pub fn satisfies(self, required: Self) -> bool {
        self >= required
    }

    pub fn to_primitive(self) -> AccessLevelPrimitive {
        self.into()
    }
}

#[derive(Debug, Error)]
#[error("Invalid access level: {0}")]
pub struct InvalidAccessLevelPrimitive(pub AccessLevelPrimitive);

impl TryFrom<AccessLevelPrimitive> for AccessLevel {
    type Error = InvalidAccessLevelPrimitive;
    fn try_from(from: AccessLevelPrimitive) -> Result<Self, Self::Error> {
        Self::from_u8(from).ok_or(InvalidAccessLevelPrimitive(from))
    }
}

impl From<AccessLevel> for AccessLevelPrimitive {
    fn from(from: AccessLevel) -> Self {
        from.to_u8().expect("Access level primitive")
    }
}
