use chrono::{DateTime, Utc};

use super::ResourcesRepo;
use crate::{
    dao::notification,
    entities::notification::{
        NewNotificationConfigEntity, NotificationConfigEntity, NotificationLogEntity,
        SendProgressEntity,
    },
};

// delivery bookkeeping behind a trait so senders can run against a fake store
#[async_trait::async_trait]
pub trait NotificationStore: Send + Sync {
    async fn add_log(
        &self,
        chat_id: &str,
        content: &str,
        status: i16,
        error: Option<&str>,
    ) -> Result<NotificationLogEntity, crate::Error>;

    async fn sent_count_since(
        &self,
        chat_id: &str,
        since: DateTime<Utc>,
    ) -> Result<i64, crate::Error>;

    async fn add_progress(
        &self,
        job_id: &str,
        batch_no: i64,
        sent: i64,
        failed: i64,
        total: i64,
    ) -> Result<(), crate::Error>;
}

pub struct NotificationRepo {
    repo: ResourcesRepo,
}

impl NotificationRepo {
    pub fn new(db_pool: crate::DbPool) -> Self {
        Self {
            repo: ResourcesRepo::new(db_pool),
        }
    }

    pub async fn upsert_config(
        &self,
        config: NewNotificationConfigEntity,
    ) -> Result<NotificationConfigEntity, crate::Error> {
        let pool = self.repo.pool();
        Ok(notification::upsert_config(config, &*pool).await?)
    }

    pub async fn find_config_by_name(
        &self,
        name: &str,
    ) -> Result<NotificationConfigEntity, crate::Error> {
        let pool = self.repo.pool();
        notification::find_config_by_name(name, &*pool)
            .await?
            .ok_or(crate::Error::NotFound(format!("notification config {name}")))
    }

    pub async fn enabled_configs(&self) -> Result<Vec<NotificationConfigEntity>, crate::Error> {
        let pool = self.repo.pool();
        Ok(notification::enabled_configs(&*pool).await?)
    }

    pub async fn progress_for_job(&self, job_id: &str) -> Result<Vec<SendProgressEntity>, crate::Error> {
        let pool = self.repo.pool();
        Ok(notification::progress_for_job(job_id, &*pool).await?)
    }
}

#[async_trait::async_trait]
impl NotificationStore for NotificationRepo {
    async fn add_log(
        &self,
        chat_id: &str,
        content: &str,
        status: i16,
        error: Option<&str>,
    ) -> Result<NotificationLogEntity, crate::Error> {
        let pool = self.repo.pool();
        Ok(notification::add_log(chat_id, content, status, error, &*pool).await?)
    }

    async fn sent_count_since(
        &self,
        chat_id: &str,
        since: DateTime<Utc>,
    ) -> Result<i64, crate::Error> {
        let pool = self.repo.pool();
        Ok(notification::sent_count_since(chat_id, since, &*pool).await?)
    }

    async fn add_progress(
        &self,
        job_id: &str,
        batch_no: i64,
        sent: i64,
        failed: i64,
        total: i64,
    ) -> Result<(), crate::Error> {
        let pool = self.repo.pool();
        Ok(notification::add_progress(job_id, batch_no, sent, failed, total, &*pool).await?)
    }
}
