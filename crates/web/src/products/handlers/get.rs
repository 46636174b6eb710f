//! Product Detail Handler

use salvo::prelude::*;
use uuid::Uuid;

use eshop_app::domain::products::records::ProductUuid;

use crate::{
    extensions::*,
    products::{errors::into_status_error, models::ProductView},
    views::{self, View},
};

/// Shows one product in the `product` view.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let uuid = req
        .param::<Uuid>("uuid")
        .map(ProductUuid::from_uuid)
        .ok_or_else(StatusError::not_found)?;

    let state = depot.state()?;

    let product = state
        .app
        .products
        .get_product(uuid)
        .await
        .map_err(into_status_error)?
        .ok_or_else(|| StatusError::not_found().brief("Product not found"))?;

    let view = View::new("product")
        .with("product", &ProductView::from(&product))
        .or_500("failed to build product view")?;

    views::render(depot, res, view)
}
