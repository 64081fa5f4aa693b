use sqlx::{Executor, Postgres};

use crate::entities::notification::{
    NewNotificationConfigEntity, NotificationConfigEntity, NotificationLogEntity,
    SendProgressEntity,
};

pub async fn upsert_config<'a, E>(
    config: NewNotificationConfigEntity,
    exec: E,
) -> Result<NotificationConfigEntity, crate::DatabaseError>
where
    E: Executor<'a, Database = Postgres>,
{
    let sql = r#"insert into notification_config (name, template, actions)
        values ($1, $2, $3)
        on conflict (name) do update set template = excluded.template,
            actions = excluded.actions, updated_at = now()
        returning *"#;

    let res = sqlx::query_as::<_, NotificationConfigEntity>(sql)
        .bind(config.name)
        .bind(config.template)
        .bind(sqlx::types::Json(config.actions))
        .fetch_one(exec)
        .await?;
    Ok(res)
}

pub async fn find_config_by_name<'a, E>(
    name: &str,
    exec: E,
) -> Result<Option<NotificationConfigEntity>, crate::DatabaseError>
where
    E: Executor<'a, Database = Postgres>,
{
    let sql = "select * from notification_config where name = $1";
    let res = sqlx::query_as::<_, NotificationConfigEntity>(sql)
        .bind(name)
        .fetch_optional(exec)
        .await?;
    Ok(res)
}

pub async fn enabled_configs<'a, E>(
    exec: E,
) -> Result<Vec<NotificationConfigEntity>, crate::DatabaseError>
where
    E: Executor<'a, Database = Postgres>,
{
    let sql = "select * from notification_config where enabled order by id";
    let res = sqlx::query_as::<_, NotificationConfigEntity>(sql)
        .fetch_all(exec)
        .await?;
    Ok(res)
}

pub async fn add_log<'a, E>(
    chat_id: &str,
    content: &str,
    status: i16,
    error: Option<&str>,
    exec: E,
) -> Result<NotificationLogEntity, crate::DatabaseError>
where
    E: Executor<'a, Database = Postgres>,
{
    let sql = r#"insert into notification_log (chat_id, content, status, error)
        values ($1, $2, $3, $4) returning *"#;

    let res = sqlx::query_as::<_, NotificationLogEntity>(sql)
        .bind(chat_id)
        .bind(content)
        .bind(status)
        .bind(error)
        .fetch_one(exec)
        .await?;
    Ok(res)
}

// messages delivered to a chat since the given instant
pub async fn sent_count_since<'a, E>(
    chat_id: &str,
    since: chrono::DateTime<chrono::Utc>,
    exec: E,
) -> Result<i64, crate::DatabaseError>
where
    E: Executor<'a, Database = Postgres>,
{
    let sql =
        "select count(*) from notification_log where chat_id = $1 and status = 1 and created_at >= $2";
    let count = sqlx::query_scalar::<_, i64>(sql)
        .bind(chat_id)
        .bind(since)
        .fetch_one(exec)
        .await?;
    Ok(count)
}

pub async fn add_progress<'a, E>(
    job_id: &str,
    batch_no: i64,
    sent: i64,
    failed: i64,
    total: i64,
    exec: E,
) -> Result<(), crate::DatabaseError>
where
    E: Executor<'a, Database = Postgres>,
{
    let sql = r#"insert into send_progress (job_id, batch_no, sent, failed, total)
        values ($1, $2, $3, $4, $5)"#;

    let _res = sqlx::query(sql)
        .bind(job_id)
        .bind(batch_no)
        .bind(sent)
        .bind(failed)
        .bind(total)
        .execute(exec)
        .await?;
    Ok(())
}

pub async fn progress_for_job<'a, E>(
    job_id: &str,
    exec: E,
) -> Result<Vec<SendProgressEntity>, crate::DatabaseError>
where
    E: Executor<'a, Database = Postgres>,
{
    let sql = "select * from send_progress where job_id = $1 order by batch_no";
    let res = sqlx::query_as::<_, SendProgressEntity>(sql)
        .bind(job_id)
        .fetch_all(exec)
        .await?;
    Ok(res)
}
