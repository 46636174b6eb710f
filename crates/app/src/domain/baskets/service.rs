//! Baskets service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        baskets::{
            data::NewBasketItem,
            errors::BasketsServiceError,
            records::{BasketItemRecord, BasketItemUuid, BasketRecord},
            repositories::{PgBasketItemsRepository, PgBasketsRepository},
        },
        users::records::UserUuid,
    },
};

#[derive(Debug, Clone)]
pub struct PgBasketsService {
    db: Db,
    baskets_repository: PgBasketsRepository,
    items_repository: PgBasketItemsRepository,
}

impl PgBasketsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            baskets_repository: PgBasketsRepository::new(),
            items_repository: PgBasketItemsRepository::new(),
        }
    }
}

#[async_trait]
impl BasketsService for PgBasketsService {
    async fn get_basket(&self, user: UserUuid) -> Result<BasketRecord, BasketsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let mut basket = self
            .baskets_repository
            .get_basket_by_user(&mut tx, user)
            .await?;

        let items = self
            .items_repository
            .get_basket_items(&mut tx, basket.uuid)
            .await?;

        tx.commit().await?;

        basket.items.extend(items);

        Ok(basket)
    }

    async fn add_item(
        &self,
        user: UserUuid,
        item: NewBasketItem,
    ) -> Result<BasketItemRecord, BasketsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let basket = self
            .baskets_repository
            .get_basket_by_user(&mut tx, user)
            .await?;

        let item = self
            .items_repository
            .create_basket_item(&mut tx, basket.uuid, item)
            .await?;

        self.baskets_repository
            .touch_basket(&mut tx, basket.uuid)
            .await?;

        tx.commit().await?;

        Ok(item)
    }

    async fn remove_item(
        &self,
        user: UserUuid,
        item: BasketItemUuid,
    ) -> Result<(), BasketsServiceError> {
        let mut tx = self.db.begin_transaction().await?;

        let basket = self
            .baskets_repository
            .get_basket_by_user(&mut tx, user)
            .await?;

        let rows_affected = self
            .items_repository
            .delete_basket_item(&mut tx, basket.uuid, item)
            .await?;

        if rows_affected == 0 {
            return Err(BasketsServiceError::NotFound);
        }

        self.baskets_repository
            .touch_basket(&mut tx, basket.uuid)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait BasketsService: Send + Sync {
    /// Retrieve the user's basket with its items.
    async fn get_basket(&self, user: UserUuid) -> Result<BasketRecord, BasketsServiceError>;

    /// Add a product to the user's basket.
    async fn add_item(
        &self,
        user: UserUuid,
        item: NewBasketItem,
    ) -> Result<BasketItemRecord, BasketsServiceError>;

    /// Remove an item from the user's basket. Items in other baskets are
    /// reported as not found.
    async fn remove_item(
        &self,
        user: UserUuid,
        item: BasketItemUuid,
    ) -> Result<(), BasketsServiceError>;
}
