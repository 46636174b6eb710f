//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::{AuthServiceError, verify_password},
    domain::users::{UsersService, records::UserRecord},
};

#[derive(Clone)]
pub struct PgAuthService {
    users: Arc<dyn UsersService>,
}

impl PgAuthService {
    #[must_use]
    pub fn new(users: Arc<dyn UsersService>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserRecord, AuthServiceError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            return Err(AuthServiceError::InvalidCredentials);
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthServiceError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn load_user(&self, username: &str) -> Result<Option<UserRecord>, AuthServiceError> {
        Ok(self.users.find_by_username(username).await?)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check a username and password, returning the matching user.
    async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserRecord, AuthServiceError>;

    /// Load the user behind an established session.
    async fn load_user(&self, username: &str) -> Result<Option<UserRecord>, AuthServiceError>;
}
