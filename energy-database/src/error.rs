#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("migration failed: {0}")]
    Migration(String),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
    #[error("Utils error: {0}")]
    Utils(#[from] energy_utils::error::Error),
    #[error("data not found: {0}")]
    NotFound(String),
    #[error("{0}")]
    Other(String),
}

impl From<sqlx::Error> for Error {
    fn from(value: sqlx::Error) -> Self {
        Error::Database(DatabaseError::Sqlx(value))
    }
}
