//! Security middleware.

use salvo::{prelude::*, session::SessionDepotExt};
use tracing::{debug, error};

use eshop_app::domain::users::records::Role;

use crate::{
    extensions::*,
    security::{Access, Principal, check_access},
};

/// Session key holding the signed-in username.
pub(crate) const SESSION_USERNAME_KEY: &str = "username";

pub(crate) const LOGIN_PATH: &str = "/login";

/// Resolve the session's username to a [`Principal`] on the depot.
///
/// Sessions naming a user that no longer exists are cleared and the request
/// continues anonymously.
#[handler]
pub(crate) async fn load_principal(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let username = depot
        .session()
        .and_then(|session| session.get::<String>(SESSION_USERNAME_KEY));

    if let Some(username) = username {
        let state = match depot.state() {
            Ok(state) => state.clone(),
            Err(status) => {
                res.render(status);
                ctrl.skip_rest();

                return;
            }
        };

        match state.app.auth.load_user(&username).await {
            Ok(Some(user)) => depot.insert_principal(Principal::from(user)),
            Ok(None) => {
                debug!(username, "session user no longer exists");

                if let Some(session) = depot.session_mut() {
                    session.remove(SESSION_USERNAME_KEY);
                }
            }
            Err(source) => {
                error!("failed to load session user: {source}");

                res.render(StatusError::internal_server_error());
                ctrl.skip_rest();

                return;
            }
        }
    }

    ctrl.call_next(req, depot, res).await;
}

/// Gate a route subtree on one role.
///
/// Attached as a hoop on the router that owns the protected paths, so it runs
/// for whatever request path salvo resolves onto that subtree.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequireRole(Role);

pub(crate) fn require_role(role: Role) -> RequireRole {
    RequireRole(role)
}

#[handler]
impl RequireRole {
    async fn handle(
        &self,
        req: &mut Request,
        depot: &mut Depot,
        res: &mut Response,
        ctrl: &mut FlowCtrl,
    ) {
        match check_access(depot.principal(), self.0) {
            Access::Granted => {
                ctrl.call_next(req, depot, res).await;
            }
            Access::LoginRequired => {
                res.render(Redirect::found(LOGIN_PATH));
                ctrl.skip_rest();
            }
            Access::Forbidden => {
                debug!(role = ?self.0, "principal lacks required role");

                res.render(StatusError::forbidden());
                ctrl.skip_rest();
            }
        }
    }
}
