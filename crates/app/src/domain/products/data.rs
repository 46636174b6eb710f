//! Products Data

use crate::domain::products::records::ProductUuid;

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    pub category: String,

    /// Price in pence/cents.
    pub price: u64,

    pub image: Vec<u8>,
    pub image_content_type: String,
}
