//! Product Image Handler

use salvo::{
    http::header::{CONTENT_TYPE, HeaderValue, X_CONTENT_TYPE_OPTIONS},
    prelude::*,
};
use uuid::Uuid;

use eshop_app::domain::products::records::ProductUuid;

use crate::{
    extensions::*,
    products::{errors::into_status_error, forms::raster_image_type},
};

/// Streams the stored image bytes. Only raster types are served as images;
/// anything else goes out as opaque bytes the browser will not sniff.
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

    let content_type = raster_image_type(&product.image_content_type)
        .unwrap_or("application/octet-stream");

    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    res.headers_mut()
        .insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    res.write_body(product.image)
        .or_500("failed to write product image")?;

    Ok(())
}
