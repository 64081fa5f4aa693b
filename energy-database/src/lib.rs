mod error;
pub use error::{DatabaseError, Error};
pub mod dao;
pub mod entities;
mod init;
pub mod pagination;
pub mod repositories;

// database pool
pub type DbPool = std::sync::Arc<sqlx::PgPool>;

#[derive(Debug, Clone)]
pub struct PgContext {
    pool: DbPool,
}

impl PgContext {
    pub async fn new(database_url: &str) -> Result<Self, crate::Error> {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(|e| crate::Error::Database(e.into()))?;

        init::create_tables(&pool).await?;

        Ok(Self {
            pool: std::sync::Arc::new(pool),
        })
    }

    pub fn get_pool(&self) -> DbPool {
        self.pool.clone()
    }
}
