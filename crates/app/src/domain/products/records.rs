//! Product Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: String,
    pub category: String,

    /// Price in pence/cents.
    pub price: u64,

    pub image: Vec<u8>,
    pub image_content_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
