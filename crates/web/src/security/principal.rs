//! Principal

use serde_json::{Value, json};
use smallvec::SmallVec;

use eshop_app::domain::users::records::{Role, UserRecord, UserUuid};

/// The signed-in user attached to a request.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Principal {
    pub(crate) uuid: UserUuid,
    pub(crate) username: String,
    pub(crate) roles: SmallVec<[Role; 2]>,
}

impl Principal {
    pub(crate) fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Template-facing representation, without the user's UUID.
    pub(crate) fn to_model(&self) -> Value {
        json!({
            "username": self.username,
            "employee": self.has_role(Role::Employee),
            "customer": self.has_role(Role::User),
        })
    }
}

impl From<UserRecord> for Principal {
    fn from(user: UserRecord) -> Self {
        Self {
            uuid: user.uuid,
            roles: user.roles().collect(),
            username: user.username,
        }
    }
}
