//! Basket Data

use crate::domain::{baskets::records::BasketItemUuid, products::records::ProductUuid};

/// New Basket Item Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewBasketItem {
    pub uuid: BasketItemUuid,
    pub product_uuid: ProductUuid,
}
