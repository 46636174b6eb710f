//! User Records

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use smallvec::SmallVec;
use thiserror::Error;

use crate::{domain::baskets::records::BasketUuid, uuids::TypedUuid};

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// Authority UUID
pub type AuthorityUuid = TypedUuid<AuthorityRecord>;

/// Permission grouping used to gate URL access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Employee,
    User,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "ROLE_EMPLOYEE",
            Self::User => "ROLE_USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRoleError(pub String);

impl FromStr for Role {
    type Err = UnknownRoleError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "ROLE_EMPLOYEE" => Ok(Self::Employee),
            "ROLE_USER" => Ok(Self::User),
            _ => Err(UnknownRoleError(value.to_string())),
        }
    }
}

/// Authority Record
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorityRecord {
    pub uuid: AuthorityUuid,
    pub role: Role,
}

/// User Record
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub uuid: UserUuid,
    pub username: String,
    pub password_hash: String,
    pub basket_uuid: BasketUuid,
    pub authorities: SmallVec<[AuthorityRecord; 2]>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl UserRecord {
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.authorities.iter().any(|authority| authority.role == role)
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.authorities.iter().map(|authority| authority.role)
    }
}
