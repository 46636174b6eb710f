//! Basket Items Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    baskets::{
        data::NewBasketItem,
        records::{BasketItemRecord, BasketItemUuid, BasketUuid},
    },
    products::records::ProductUuid,
};

const GET_BASKET_ITEMS_SQL: &str = include_str!("../sql/get_basket_items.sql");
const CREATE_BASKET_ITEM_SQL: &str = include_str!("../sql/create_basket_item.sql");
const DELETE_BASKET_ITEM_SQL: &str = include_str!("../sql/delete_basket_item.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBasketItemsRepository;

impl PgBasketItemsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_basket_items(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        basket: BasketUuid,
    ) -> Result<Vec<BasketItemRecord>, sqlx::Error> {
        query_as::<Postgres, BasketItemRecord>(GET_BASKET_ITEMS_SQL)
            .bind(basket.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn create_basket_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        basket: BasketUuid,
        item: NewBasketItem,
    ) -> Result<BasketItemRecord, sqlx::Error> {
        query_as::<Postgres, BasketItemRecord>(CREATE_BASKET_ITEM_SQL)
            .bind(item.uuid.into_uuid())
            .bind(basket.into_uuid())
            .bind(item.product_uuid.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn delete_basket_item(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        basket: BasketUuid,
        item: BasketItemUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_BASKET_ITEM_SQL)
            .bind(item.into_uuid())
            .bind(basket.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for BasketItemRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let price_i64: i64 = row.try_get("price")?;

        let price = u64::try_from(price_i64).map_err(|e| sqlx::Error::ColumnDecode {
            index: "price".to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            uuid: BasketItemUuid::from_uuid(row.try_get("uuid")?),
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            name: row.try_get("name")?,
            price,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
