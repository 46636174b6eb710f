//! Login Handlers

use salvo::{
    prelude::*,
    session::{Session, SessionDepotExt},
};
use serde_json::Value;
use tracing::{error, info};
use zeroize::Zeroizing;

use eshop_app::auth::AuthServiceError;

use crate::{
    auth::handlers::HOME_PATH,
    extensions::*,
    observability::{SignInOutcome, record_sign_in},
    security::SESSION_USERNAME_KEY,
    views::{self, View},
};

const VIEW: &str = "login";

pub(crate) const INVALID_CREDENTIALS: &str = "Invalid username or password.";

fn login_view(username: &str, error: Option<&str>) -> Result<View, StatusError> {
    View::new(VIEW)
        .with("username", &username)
        .and_then(|view| view.with("error", &error.map_or(Value::Null, Value::from)))
        .or_500("failed to build login view")
}

/// Shows the sign in form.
#[handler]
pub(crate) async fn form(depot: &mut Depot, res: &mut Response) -> Result<(), StatusError> {
    views::render(depot, res, login_view("", None)?)
}

/// Verifies the submitted credentials and starts a session.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let username = req
        .form::<String>("username")
        .await
        .map(|username| username.trim().to_string())
        .unwrap_or_default();
    let password = Zeroizing::new(req.form::<String>("password").await.unwrap_or_default());

    if username.is_empty() || password.is_empty() {
        record_sign_in(SignInOutcome::Rejected);

        return views::render(depot, res, login_view(&username, Some(INVALID_CREDENTIALS))?);
    }

    let state = depot.state()?;

    let user = match state.app.auth.authenticate(&username, &password).await {
        Ok(user) => user,
        Err(AuthServiceError::InvalidCredentials) => {
            info!(username, "rejected sign in");
            record_sign_in(SignInOutcome::Rejected);

            return views::render(depot, res, login_view(&username, Some(INVALID_CREDENTIALS))?);
        }
        Err(source) => {
            error!("failed to authenticate {username}: {source}");

            return Err(StatusError::internal_server_error());
        }
    };

    let mut session = Session::new();

    session
        .insert(SESSION_USERNAME_KEY, &user.username)
        .or_500("failed to start session")?;

    depot.set_session(session);

    info!(username = user.username, "signed in");
    record_sign_in(SignInOutcome::Accepted);

    res.render(Redirect::other(HOME_PATH));

    Ok(())
}
