//! Create Product Handlers

use salvo::prelude::*;

use eshop_app::domain::products::records::ProductUuid;

use crate::{
    extensions::*,
    products::{
        errors::into_status_error,
        forms::{FieldErrors, ProductForm, read_product_form},
    },
    views::{self, View},
};

const VIEW: &str = "createProduct";

fn form_view(product_form: &ProductForm, errors: &FieldErrors) -> Result<View, StatusError> {
    View::new(VIEW)
        .with("productForm", product_form)
        .and_then(|view| view.with("errors", errors))
        .or_500("failed to build product form view")
}

/// Shows an empty product form.
#[handler]
pub(crate) async fn form(depot: &mut Depot, res: &mut Response) -> Result<(), StatusError> {
    let view = form_view(&ProductForm::default(), &FieldErrors::new())?;

    views::render(depot, res, view)
}

/// Creates a product from a submitted form, or re-renders the form with
/// field errors.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<(), StatusError> {
    let (product_form, image) = read_product_form(req)
        .await
        .or_500("failed to read uploaded image")?;

    let product = match product_form.validate(ProductUuid::new(), image) {
        Ok(product) => product,
        Err(errors) => {
            let view = form_view(&product_form, &errors)?;

            return views::render(depot, res, view);
        }
    };

    let state = depot.state()?;

    state
        .app
        .products
        .create_product(product)
        .await
        .map_err(into_status_error)?;

    res.render(Redirect::other("/products"));

    Ok(())
}
