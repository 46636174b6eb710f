//! Route tree and middleware stack.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};
use serde_json::json;

use eshop_app::domain::users::records::Role;

use crate::{
    auth, baskets, observability, products,
    security::{self, require_role},
    state::State,
};

/// The full server: panics and request logging wrap every request, matched
/// or not. Healthcheck and metrics sit outside the session, the storefront
/// behind `session` and `csrf`.
pub(crate) fn build(state: Arc<State>, session: impl Handler, csrf: impl Handler) -> Service {
    let router = Router::new()
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(Router::new().hoop(session).hoop(csrf).push(app_router()));

    Service::new(router)
        .hoop(CatchPanic::new())
        .hoop(observability::request_logging)
}

/// Liveness for load balancers. Answers before any session or database work.
#[handler]
async fn healthcheck(res: &mut Response) {
    res.render(Json(json!({ "status": "ok" })));
}

/// Storefront routes. Role requirements sit on the subtrees they protect.
pub(crate) fn app_router() -> Router {
    Router::new()
        .hoop(security::load_principal)
        .push(Router::with_path("products").get(products::index::handler))
        .push(
            Router::with_path("product")
                .push(
                    Router::with_path("create")
                        .hoop(require_role(Role::Employee))
                        .get(products::create::form)
                        .post(products::create::handler),
                )
                .push(
                    Router::with_path("{uuid}")
                        .get(products::get::handler)
                        .push(Router::with_path("image").get(products::image::handler)),
                ),
        )
        .push(
            Router::with_path("basket")
                .hoop(require_role(Role::User))
                .get(baskets::get::handler)
                .push(
                    Router::with_path("items")
                        .post(baskets::add::handler)
                        .push(
                            Router::with_path("{item}/delete").post(baskets::remove::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("login")
                .get(auth::login::form)
                .post(auth::login::handler),
        )
        .push(Router::with_path("logout").post(auth::logout::handler))
}
