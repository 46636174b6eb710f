//! Product Index Handler

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::models::ProductView,
    views::{self, View},
};

/// Lists every product in the `index` view.
#[handler]
pub(crate) async fn handler(depot: &mut Depot, res: &mut Response) -> Result<(), StatusError> {
    let state = depot.state()?;

    let products = state
        .app
        .products
        .list_products()
        .await
        .or_500("failed to fetch products")?;

    let products: Vec<ProductView> = products.iter().map(ProductView::from).collect();

    let view = View::new("index")
        .with("products", &products)
        .or_500("failed to build index view")?;

    views::render(depot, res, view)
}
