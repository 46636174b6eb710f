//! Baskets Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::domain::{
    baskets::records::{BasketRecord, BasketUuid},
    users::records::UserUuid,
};

const GET_BASKET_BY_USER_SQL: &str = include_str!("../sql/get_basket_by_user.sql");
const TOUCH_BASKET_SQL: &str = include_str!("../sql/touch_basket.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBasketsRepository;

impl PgBasketsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn get_basket_by_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<BasketRecord, sqlx::Error> {
        query_as::<Postgres, BasketRecord>(GET_BASKET_BY_USER_SQL)
            .bind(user.into_uuid())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn touch_basket(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        basket: BasketUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(TOUCH_BASKET_SQL)
            .bind(basket.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for BasketRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: BasketUuid::from_uuid(row.try_get("uuid")?),
            user_uuid: UserUuid::from_uuid(row.try_get("user_uuid")?),
            items: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
