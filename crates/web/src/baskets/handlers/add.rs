//! Add Basket Item Handler

use salvo::prelude::*;
use uuid::Uuid;

use eshop_app::domain::{
    baskets::{data::NewBasketItem, records::BasketItemUuid},
    products::records::ProductUuid,
};

use crate::{
    baskets::{errors::into_status_error, handlers::BASKET_PATH},
    extensions::*,
};

/// Adds the product named by the `product` form field to the user's basket.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let product_uuid = req
        .form::<String>("product")
        .await
        .and_then(|value| Uuid::parse_str(value.trim()).ok())
        .map(ProductUuid::from_uuid)
        .ok_or_else(|| StatusError::bad_request().brief("Missing or invalid product"))?;

    let state = depot.state()?;
    let user = depot.principal_or_401()?.uuid;

    state
        .app
        .baskets
        .add_item(
            user,
            NewBasketItem {
                uuid: BasketItemUuid::new(),
                product_uuid,
            },
        )
        .await
        .map_err(into_status_error)?;

    res.render(Redirect::other(BASKET_PATH));

    Ok(())
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::{http::header::LOCATION, test::TestClient};

    use eshop_app::domain::{
        baskets::{BasketsServiceError, MockBasketsService, records::BasketItemRecord},
        users::records::Role,
    };

    use crate::test_helpers::{TestApp, make_principal, strict_baskets_mock};

    use super::*;

    fn make_service(baskets: MockBasketsService) -> Service {
        TestApp {
            baskets,
            ..TestApp::new()
        }
        .service(
            Some(make_principal(&[Role::User])),
            Router::with_path("basket/items").post(handler),
        )
    }

    #[tokio::test]
    async fn add_item_redirects_to_basket() {
        let product = ProductUuid::new();

        let mut baskets = MockBasketsService::new();

        baskets
            .expect_add_item()
            .once()
            .withf(move |_, item| item.product_uuid == product)
            .return_once(move |_, item| {
                Ok(BasketItemRecord {
                    uuid: item.uuid,
                    product_uuid: item.product_uuid,
                    name: "Teapot".to_string(),
                    price: 1_299,
                    created_at: Timestamp::UNIX_EPOCH,
                })
            });
        baskets.expect_get_basket().never();
        baskets.expect_remove_item().never();

        let res = TestClient::post("http://example.com/basket/items")
            .raw_form(format!("product={product}"))
            .send(&make_service(baskets))
            .await;

        let location = res.headers().get(LOCATION).and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::SEE_OTHER));
        assert_eq!(location, Some(BASKET_PATH));
    }

    #[tokio::test]
    async fn add_unknown_product_returns_404() {
        let mut baskets = MockBasketsService::new();

        baskets
            .expect_add_item()
            .once()
            .return_once(|_, _| Err(BasketsServiceError::InvalidReference));
        baskets.expect_get_basket().never();
        baskets.expect_remove_item().never();

        let res = TestClient::post("http://example.com/basket/items")
            .raw_form(format!("product={}", Uuid::now_v7()))
            .send(&make_service(baskets))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn add_without_product_returns_400() {
        let res = TestClient::post("http://example.com/basket/items")
            .raw_form("product=not-a-uuid".to_string())
            .send(&make_service(strict_baskets_mock()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
