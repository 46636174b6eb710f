//! Basket Errors

use salvo::http::StatusError;
use tracing::error;

use eshop_app::domain::baskets::BasketsServiceError;

pub(crate) fn into_status_error(error: BasketsServiceError) -> StatusError {
    match error {
        BasketsServiceError::NotFound => StatusError::not_found().brief("Basket item not found"),
        BasketsServiceError::InvalidReference => {
            StatusError::not_found().brief("Product not found")
        }
        BasketsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Basket item already exists")
        }
        BasketsServiceError::Sql(source) => {
            error!("basket storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
