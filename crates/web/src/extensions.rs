//! Depot and result helpers shared by the storefront handlers.

use std::{fmt::Display, sync::Arc};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

use crate::{security::Principal, state::State};

/// Typed access to what the middleware stack leaves on the depot.
pub(crate) trait DepotExt {
    /// Services and renderer injected at the router root.
    fn state(&self) -> Result<&Arc<State>, StatusError>;

    fn insert_principal(&mut self, principal: Principal);

    fn principal(&self) -> Option<&Principal>;

    /// The signed-in user, or 401 when the request is anonymous.
    fn principal_or_401(&self) -> Result<&Principal, StatusError>;
}

impl DepotExt for Depot {
    fn state(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain::<Arc<State>>().map_err(|_missing| {
            error!("storefront state was not injected");

            StatusError::internal_server_error()
        })
    }

    fn insert_principal(&mut self, principal: Principal) {
        self.inject(principal);
    }

    fn principal(&self) -> Option<&Principal> {
        self.obtain::<Principal>().ok()
    }

    fn principal_or_401(&self) -> Result<&Principal, StatusError> {
        self.principal().ok_or_else(StatusError::unauthorized)
    }
}

pub(crate) trait ResultExt<T> {
    /// Logs which `action` failed, then answers 500 without leaking the cause.
    fn or_500(self, action: &str) -> Result<T, StatusError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Display,
{
    fn or_500(self, action: &str) -> Result<T, StatusError> {
        self.map_err(|source| {
            error!(action, %source, "request failed");

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use eshop_app::domain::users::records::Role;

    use crate::test_helpers::{TestApp, make_principal};

    use super::*;

    #[test]
    fn missing_state_is_a_server_error() {
        let depot = Depot::new();

        let status = depot.state().err().map(|error| error.code);

        assert_eq!(status, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[test]
    fn injected_state_is_found() {
        let mut depot = Depot::new();
        depot.inject(TestApp::new().state());

        assert!(depot.state().is_ok());
    }

    #[test]
    fn anonymous_depot_has_no_principal() {
        let depot = Depot::new();

        let status = depot.principal_or_401().err().map(|error| error.code);

        assert!(depot.principal().is_none());
        assert_eq!(status, Some(StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn inserted_principal_is_returned() {
        let mut depot = Depot::new();
        depot.insert_principal(make_principal(&[Role::Employee]));

        let username = depot.principal().map(|principal| principal.username.clone());

        assert_eq!(username.as_deref(), Some("alice"));
    }

    #[test]
    fn failures_become_internal_server_errors() {
        let result: Result<(), &str> = Err("disk full");

        let status = result.or_500("save upload").err().map(|error| error.code);

        assert_eq!(status, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
