//! Auth service errors.

use thiserror::Error;

use crate::domain::users::UsersServiceError;

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("failed to hash password")]
    Hash(#[source] argon2::password_hash::Error),

    #[error("stored password hash is malformed")]
    MalformedHash(#[source] argon2::password_hash::Error),
}

#[derive(Debug, Error)]
pub enum AuthServiceError {
    /// Unknown username or wrong password.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("user lookup failed")]
    Users(#[from] UsersServiceError),

    #[error("password verification failed")]
    Password(#[from] PasswordError),
}
