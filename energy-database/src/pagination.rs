use serde::Serialize;
use sqlx::{postgres::PgRow, FromRow};

#[derive(Debug, Serialize)]
pub struct Pagination<T: Serialize> {
    pub page: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub data: Vec<T>,
}

impl<T> Pagination<T>
where
    T: for<'r> FromRow<'r, PgRow> + Unpin + Send + 'static + std::fmt::Debug + Serialize,
{
    pub fn init(page: i64, page_size: i64) -> Self {
        Self {
            page,
            page_size,
            total_count: 0,
            data: Vec::new(),
        }
    }

    pub async fn page(
        mut self,
        exec: &crate::DbPool,
        sql: &str,
    ) -> Result<Self, crate::DatabaseError> {
        self.total_count = self.total_count(exec, sql).await?;

        let sql = format!(
            "{} LIMIT {} OFFSET {}",
            sql,
            self.page_size,
            self.page * self.page_size
        );

        let data = sqlx::query_as::<_, T>(&sql).fetch_all(&**exec).await?;
        self.data = data;

        Ok(self)
    }

    async fn total_count(
        &self,
        exec: &crate::DbPool,
        sql: &str,
    ) -> Result<i64, crate::DatabaseError> {
        let start = sql.find("FROM").unwrap_or(0) + 4;
        let sql = format!("SELECT count(*) FROM {}", &sql[start..]);

        let count = sqlx::query_scalar::<_, i64>(&sql).fetch_one(&**exec).await;

        match count {
            Ok(count) => Ok(count),
            Err(_e) => Ok(0),
        }
    }
}
