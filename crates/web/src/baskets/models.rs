//! Basket view models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use eshop_app::domain::baskets::records::{BasketItemRecord, BasketRecord};

use crate::products::format_price;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BasketView {
    pub uuid: Uuid,
    pub items: Vec<BasketItemView>,
    pub subtotal: String,
    pub subtotal_minor: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct BasketItemView {
    pub uuid: Uuid,
    pub product_uuid: Uuid,
    pub name: String,
    pub price: String,
}

impl From<&BasketRecord> for BasketView {
    fn from(basket: &BasketRecord) -> Self {
        let subtotal_minor = basket.subtotal();

        Self {
            uuid: basket.uuid.into_uuid(),
            items: basket.items.iter().map(BasketItemView::from).collect(),
            subtotal: format_price(subtotal_minor),
            subtotal_minor,
        }
    }
}

impl From<&BasketItemRecord> for BasketItemView {
    fn from(item: &BasketItemRecord) -> Self {
        Self {
            uuid: item.uuid.into_uuid(),
            product_uuid: item.product_uuid.into_uuid(),
            name: item.name.clone(),
            price: format_price(item.price),
        }
    }
}
