use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, types::Json, Executor, Pool, Postgres, Row};
use uuid::Uuid;

use crate::{entities::Business, error::Error};

pub struct PgPool(pub Pool<Postgres>);

impl PgPool {
    pub async fn new(db_uri: &str, max_connections: u32) -> Result<Self, Error> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(db_uri)
            .await?;

        Ok(Self(pool))
    }
}

/// Upstream store of business records.
#[async_trait]
pub trait BusinessDirectory {
    async fn insert_business(&self, business: &Business) -> Result<(), Error>;
    async fn fetch_business(&self, id: Uuid) -> Result<Option<Business>, Error>;
}

pub type DynBusinessDirectory = std::sync::Arc<dyn BusinessDirectory + Send + Sync>;

#[derive(Debug)]
pub struct PgBusinessDirectory {
    pool: Pool<Postgres>,
}

impl PgBusinessDirectory {
    #[tracing::instrument(name = "PgBusinessDirectory::new", skip_all)]
    pub async fn new(pool: Pool<Postgres>) -> Result<Self, Error> {
        // business records (KV store)
        pool.execute(
            "CREATE TABLE IF NOT EXISTS businesses (id UUID PRIMARY KEY, data JSONB NOT NULL)",
        )
        .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl BusinessDirectory for PgBusinessDirectory {
    #[tracing::instrument(skip(self, business), fields(id = %business.id))]
    async fn insert_business(&self, business: &Business) -> Result<(), Error> {
        let mut conn = self.pool.acquire().await?;

        conn.execute(
            sqlx::query("INSERT INTO businesses (id, data) VALUES ($1, $2)")
                .bind(&business.id)
                .bind(Json(business)),
        )
        .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_business(&self, id: Uuid) -> Result<Option<Business>, Error> {
        let mut conn = self.pool.acquire().await?;

        let maybe_result = conn
            .fetch_optional(sqlx::query("SELECT data FROM businesses WHERE id = $1").bind(&id))
            .await?;

        match maybe_result {
            Some(result) => {
                let Json(business) = result.try_get("data")?;
                Ok(Some(business))
            }
            None => Ok(None),
        }
    }
}
