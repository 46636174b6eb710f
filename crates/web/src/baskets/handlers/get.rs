//! Basket Handler

use salvo::prelude::*;

use crate::{
    baskets::{errors::into_status_error, models::BasketView},
    extensions::*,
    views::{self, View},
};

/// Shows the signed-in user's basket in the `basket` view.
#[handler]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) -> Result<(), StatusError> {
    let state = depot.state()?;
    let user = depot.principal_or_401()?.uuid;

    let basket = state
        .app
        .baskets
        .get_basket(user)
        .await
        .map_err(into_status_error)?;

    let view = View::new("basket")
        .with("basket", &BasketView::from(&basket))
        .or_500("failed to build basket view")?;

    views::render(depot, res, view)
}
