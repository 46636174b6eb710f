//! Role checks

use eshop_app::domain::users::records::Role;

use crate::security::Principal;

/// Outcome of checking a principal against a route's required role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    Granted,
    LoginRequired,
    Forbidden,
}

pub(crate) fn check_access(principal: Option<&Principal>, role: Role) -> Access {
    match principal {
        None => Access::LoginRequired,
        Some(principal) if principal.has_role(role) => Access::Granted,
        Some(_) => Access::Forbidden,
    }
}
