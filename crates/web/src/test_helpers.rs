//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*, test::ResponseExt};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use smallvec::SmallVec;
use testresult::TestResult;

use eshop_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        baskets::{
            MockBasketsService,
            records::{BasketItemRecord, BasketItemUuid, BasketRecord, BasketUuid},
        },
        products::{
            MockProductsService,
            records::{ProductRecord, ProductUuid},
        },
        users::{
            MockUsersService,
            records::{AuthorityRecord, AuthorityUuid, Role, UserRecord, UserUuid},
        },
    },
};

use crate::{
    security::Principal,
    state::State,
    views::{View, ViewError, ViewRenderer},
};

/// Renders views as `{"view": name, "model": {...}}` so tests can assert on
/// the view name and model attributes directly.
#[derive(Debug)]
pub(crate) struct JsonViews;

impl ViewRenderer for JsonViews {
    fn render(&self, view: &View) -> Result<String, ViewError> {
        Ok(serde_json::to_string(
            &json!({ "view": view.name, "model": view.model }),
        )?)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RenderedView {
    pub view: String,
    pub model: Map<String, Value>,
}

pub(crate) async fn take_view(res: &mut Response) -> TestResult<RenderedView> {
    let body = res.take_string().await?;

    Ok(serde_json::from_str(&body)?)
}

/// Service mocks behind a test router. Every mock starts out rejecting all
/// calls; tests replace the ones they exercise.
pub(crate) struct TestApp {
    pub products: MockProductsService,
    pub users: MockUsersService,
    pub baskets: MockBasketsService,
    pub auth: MockAuthService,
}

impl TestApp {
    pub(crate) fn new() -> Self {
        Self {
            products: strict_products_mock(),
            users: strict_users_mock(),
            baskets: strict_baskets_mock(),
            auth: strict_auth_mock(),
        }
    }

    pub(crate) fn state(self) -> Arc<State> {
        State::shared(
            AppContext {
                products: Arc::new(self.products),
                users: Arc::new(self.users),
                baskets: Arc::new(self.baskets),
                auth: Arc::new(self.auth),
            },
            Arc::new(JsonViews),
        )
    }

    /// Wrap `route` with injected state and, when given, a signed-in principal.
    pub(crate) fn service(self, principal: Option<Principal>, route: Router) -> Service {
        let mut router = Router::new().hoop(inject(self.state()));

        if let Some(principal) = principal {
            router = router.hoop(inject(principal));
        }

        Service::new(router.push(route))
    }
}

pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();

    products
}

pub(crate) fn strict_users_mock() -> MockUsersService {
    let mut users = MockUsersService::new();

    users.expect_find_by_username().never();
    users.expect_create_user().never();

    users
}

pub(crate) fn strict_baskets_mock() -> MockBasketsService {
    let mut baskets = MockBasketsService::new();

    baskets.expect_get_basket().never();
    baskets.expect_add_item().never();
    baskets.expect_remove_item().never();

    baskets
}

pub(crate) fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate().never();
    auth.expect_load_user().never();

    auth
}

pub(crate) fn make_user(username: &str, roles: &[Role]) -> UserRecord {
    UserRecord {
        uuid: UserUuid::new(),
        username: username.to_string(),
        password_hash: "$argon2id$not-checked-here".to_string(),
        basket_uuid: BasketUuid::new(),
        authorities: roles
            .iter()
            .map(|role| AuthorityRecord {
                uuid: AuthorityUuid::new(),
                role: *role,
            })
            .collect(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_principal(roles: &[Role]) -> Principal {
    Principal {
        uuid: UserUuid::new(),
        username: "alice".to_string(),
        roles: roles.iter().copied().collect::<SmallVec<_>>(),
    }
}

pub(crate) fn make_product(uuid: ProductUuid, name: &str, price: u64) -> ProductRecord {
    ProductRecord {
        uuid,
        name: name.to_string(),
        description: format!("A product called {name}"),
        category: "kitchen".to_string(),
        price,
        image: b"\x89PNG".to_vec(),
        image_content_type: "image/png".to_string(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

/// A basket for `user` holding one item per price.
pub(crate) fn make_basket(user: UserUuid, prices: &[u64]) -> BasketRecord {
    BasketRecord {
        uuid: BasketUuid::new(),
        user_uuid: user,
        items: prices
            .iter()
            .map(|price| BasketItemRecord {
                uuid: BasketItemUuid::new(),
                product_uuid: ProductUuid::new(),
                name: format!("Item at {price}"),
                price: *price,
                created_at: Timestamp::UNIX_EPOCH,
            })
            .collect(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
