//! Remove Basket Item Handler

use salvo::prelude::*;
use uuid::Uuid;

use eshop_app::domain::baskets::records::BasketItemUuid;

use crate::{
    baskets::{errors::into_status_error, handlers::BASKET_PATH},
    extensions::*,
};

/// Removes one item from the user's basket.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let item = req
        .param::<Uuid>("item")
        .map(BasketItemUuid::from_uuid)
        .ok_or_else(StatusError::not_found)?;

    let state = depot.state()?;
    let user = depot.principal_or_401()?.uuid;

    state
        .app
        .baskets
        .remove_item(user, item)
        .await
        .map_err(into_status_error)?;

    res.render(Redirect::other(BASKET_PATH));

    Ok(())
}

#[cfg(test)]
mod tests {
    use salvo::{http::header::LOCATION, test::TestClient};

    use eshop_app::domain::{
        baskets::{BasketsServiceError, MockBasketsService},
        users::records::Role,
    };

    use crate::test_helpers::{TestApp, make_principal};

    use super::*;

    fn make_service(baskets: MockBasketsService, principal: crate::security::Principal) -> Service {
        TestApp {
            baskets,
            ..TestApp::new()
        }
        .service(
            Some(principal),
            Router::with_path("basket/items/{item}/delete").post(handler),
        )
    }

    #[tokio::test]
    async fn remove_item_redirects_to_basket() {
        let principal = make_principal(&[Role::User]);
        let user = principal.uuid;
        let item = BasketItemUuid::new();

        let mut baskets = MockBasketsService::new();

        baskets
            .expect_remove_item()
            .once()
            .withf(move |owner, requested| *owner == user && *requested == item)
            .return_once(|_, _| Ok(()));
        baskets.expect_get_basket().never();
        baskets.expect_add_item().never();

        let res = TestClient::post(format!("http://example.com/basket/items/{item}/delete"))
            .send(&make_service(baskets, principal))
            .await;

        let location = res.headers().get(LOCATION).and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::SEE_OTHER));
        assert_eq!(location, Some(BASKET_PATH));
    }

    #[tokio::test]
    async fn remove_someone_elses_item_returns_404() {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_remove_item()
            .once()
            .return_once(|_, _| Err(BasketsServiceError::NotFound));
        baskets.expect_get_basket().never();
        baskets.expect_add_item().never();

        let res = TestClient::post(format!(
            "http://example.com/basket/items/{}/delete",
            BasketItemUuid::new()
        ))
        .send(&make_service(baskets, make_principal(&[Role::User])))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }
}
