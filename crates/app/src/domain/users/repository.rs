//! Users Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use smallvec::SmallVec;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as, query_scalar};
use uuid::Uuid;

use crate::domain::{
    baskets::records::BasketUuid,
    users::{
        data::NewUser,
        records::{AuthorityRecord, AuthorityUuid, Role, UserRecord, UserUuid},
    },
};

const FIND_USER_BY_USERNAME_SQL: &str = include_str!("sql/find_user_by_username.sql");
const LIST_AUTHORITIES_SQL: &str = include_str!("sql/list_authorities.sql");
const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");
const CREATE_BASKET_SQL: &str = include_str!("sql/create_basket.sql");
const CREATE_AUTHORITY_SQL: &str = include_str!("sql/create_authority.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgUsersRepository;

impl PgUsersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_by_username(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        username: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        let Some(mut user) = query_as::<Postgres, UserRecord>(FIND_USER_BY_USERNAME_SQL)
            .bind(username)
            .fetch_optional(&mut **tx)
            .await?
        else {
            return Ok(None);
        };

        user.authorities = self.list_authorities(tx, user.uuid).await?;

        Ok(Some(user))
    }

    pub(crate) async fn create_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: NewUser,
    ) -> Result<UserRecord, sqlx::Error> {
        let (uuid, username, password_hash, created_at, updated_at): (
            Uuid,
            String,
            String,
            SqlxTimestamp,
            SqlxTimestamp,
        ) = query_as(CREATE_USER_SQL)
            .bind(user.uuid.into_uuid())
            .bind(user.username)
            .bind(user.password_hash)
            .fetch_one(&mut **tx)
            .await?;

        let basket_uuid: Uuid = query_scalar(CREATE_BASKET_SQL)
            .bind(user.basket_uuid.into_uuid())
            .bind(uuid)
            .fetch_one(&mut **tx)
            .await?;

        let mut authorities = SmallVec::with_capacity(user.roles.len());

        for role in user.roles {
            let authority = query_as::<Postgres, AuthorityRecord>(CREATE_AUTHORITY_SQL)
                .bind(AuthorityUuid::new().into_uuid())
                .bind(uuid)
                .bind(role.as_str())
                .fetch_one(&mut **tx)
                .await?;

            authorities.push(authority);
        }

        Ok(UserRecord {
            uuid: UserUuid::from_uuid(uuid),
            username,
            password_hash,
            basket_uuid: BasketUuid::from_uuid(basket_uuid),
            authorities,
            created_at: created_at.to_jiff(),
            updated_at: updated_at.to_jiff(),
        })
    }

    async fn list_authorities(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        user: UserUuid,
    ) -> Result<SmallVec<[AuthorityRecord; 2]>, sqlx::Error> {
        let authorities = query_as::<Postgres, AuthorityRecord>(LIST_AUTHORITIES_SQL)
            .bind(user.into_uuid())
            .fetch_all(&mut **tx)
            .await?;

        Ok(authorities.into_iter().collect())
    }
}

impl<'r> FromRow<'r, PgRow> for UserRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: UserUuid::from_uuid(row.try_get("uuid")?),
            username: row.try_get("username")?,
            password_hash: row.try_get("password_hash")?,
            basket_uuid: BasketUuid::from_uuid(row.try_get("basket_uuid")?),
            authorities: SmallVec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for AuthorityRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let role: String = row.try_get("role")?;

        let role = role
            .parse::<Role>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "role".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: AuthorityUuid::from_uuid(row.try_get("uuid")?),
            role,
        })
    }
}
