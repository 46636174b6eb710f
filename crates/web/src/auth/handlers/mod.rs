//! Session Handlers

pub(crate) mod login;
pub(crate) mod logout;

/// Where a successful sign in or sign out lands.
pub(crate) const HOME_PATH: &str = "/products";
