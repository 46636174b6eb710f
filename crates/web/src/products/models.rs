//! Product view models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use eshop_app::domain::products::records::ProductRecord;

/// Product attributes exposed to templates. Image bytes are served separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ProductView {
    pub uuid: Uuid,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Major units with two decimal places, e.g. `"12.50"`.
    pub price: String,
    pub price_minor: u64,
}

impl From<&ProductRecord> for ProductView {
    fn from(product: &ProductRecord) -> Self {
        Self {
            uuid: product.uuid.into_uuid(),
            name: product.name.clone(),
            description: product.description.clone(),
            category: product.category.clone(),
            price: format_price(product.price),
            price_minor: product.price,
        }
    }
}

/// Format an amount in minor units as a two-decimal string.
pub(crate) fn format_price(minor: u64) -> String {
    let mut amount = Decimal::from(minor);

    match amount.set_scale(2) {
        Ok(()) => amount.to_string(),
        Err(_) => minor.to_string(),
    }
}
