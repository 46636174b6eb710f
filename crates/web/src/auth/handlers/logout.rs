//! Logout Handler

use salvo::{prelude::*, session::SessionDepotExt};
use tracing::info;

use crate::auth::handlers::HOME_PATH;

/// Ends the current session.
#[handler]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) {
    if let Some(session) = depot.session_mut() {
        session.destroy();

        info!("signed out");
    }

    res.render(Redirect::other(HOME_PATH));
}
