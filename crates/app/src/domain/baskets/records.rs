//! Basket Records

use jiff::Timestamp;

use crate::{
    domain::{products::records::ProductUuid, users::records::UserUuid},
    uuids::TypedUuid,
};

/// Basket UUID
pub type BasketUuid = TypedUuid<BasketRecord>;

/// Basket Record
#[derive(Debug, Clone, PartialEq)]
pub struct BasketRecord {
    pub uuid: BasketUuid,
    pub user_uuid: UserUuid,
    pub items: Vec<BasketItemRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BasketRecord {
    /// Sum of item prices in pence/cents.
    #[must_use]
    pub fn subtotal(&self) -> u64 {
        self.items
            .iter()
            .fold(0_u64, |total, item| total.saturating_add(item.price))
    }
}

/// Basket Item UUID
pub type BasketItemUuid = TypedUuid<BasketItemRecord>;

/// Basket Item Record
///
/// `name` and `price` are read from the product when the basket is loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketItemRecord {
    pub uuid: BasketItemUuid,
    pub product_uuid: ProductUuid,
    pub name: String,
    pub price: u64,
    pub created_at: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: u64) -> BasketItemRecord {
        BasketItemRecord {
            uuid: BasketItemUuid::new(),
            product_uuid: ProductUuid::new(),
            name: "item".to_string(),
            price,
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn basket(items: Vec<BasketItemRecord>) -> BasketRecord {
        BasketRecord {
            uuid: BasketUuid::new(),
            user_uuid: UserUuid::new(),
            items,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn empty_basket_subtotal_is_zero() {
        assert_eq!(basket(vec![]).subtotal(), 0);
    }

    #[test]
    fn subtotal_sums_item_prices() {
        assert_eq!(basket(vec![item(250), item(1_000), item(5)]).subtotal(), 1_255);
    }

    #[test]
    fn subtotal_saturates_instead_of_overflowing() {
        assert_eq!(basket(vec![item(u64::MAX), item(1)]).subtotal(), u64::MAX);
    }
}
