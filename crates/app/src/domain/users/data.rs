//! User Data

use smallvec::SmallVec;

use crate::domain::{
    baskets::records::BasketUuid,
    users::records::{Role, UserUuid},
};

/// New User Data
///
/// The password must already be hashed; see [`crate::auth::hash_password`].
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub uuid: UserUuid,
    pub username: String,
    pub password_hash: String,
    pub basket_uuid: BasketUuid,
    pub roles: SmallVec<[Role; 2]>,
}
