//! Sessions, principals and role-gated routes.

mod middleware;
mod principal;
mod rules;

pub(crate) use middleware::{SESSION_USERNAME_KEY, load_principal, require_role};
pub(crate) use principal::Principal;
pub(crate) use rules::{Access, check_access};
