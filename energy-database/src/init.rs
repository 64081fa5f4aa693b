const TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS delegate_record (
    id BIGSERIAL PRIMARY KEY,
    tx_hash TEXT NOT NULL,
    owner_address TEXT NOT NULL,
    receiver_address TEXT NOT NULL,
    resource_type TEXT NOT NULL,
    amount TEXT NOT NULL,
    status SMALLINT NOT NULL DEFAULT 0,
    locked BOOLEAN NOT NULL DEFAULT FALSE,
    lock_period BIGINT NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ
);
CREATE INDEX IF NOT EXISTS idx_delegate_record_owner ON delegate_record (owner_address);
CREATE INDEX IF NOT EXISTS idx_delegate_record_receiver ON delegate_record (receiver_address);

CREATE TABLE IF NOT EXISTS unfreeze_record (
    id BIGSERIAL PRIMARY KEY,
    tx_hash TEXT NOT NULL,
    owner_address TEXT NOT NULL,
    resource_type TEXT NOT NULL,
    amount TEXT NOT NULL,
    available_at BIGINT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX IF NOT EXISTS idx_unfreeze_record_owner ON unfreeze_record (owner_address);

CREATE TABLE IF NOT EXISTS notification_config (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    template TEXT NOT NULL,
    actions JSONB NOT NULL DEFAULT '[]',
    enabled BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ
);

CREATE TABLE IF NOT EXISTS notification_log (
    id BIGSERIAL PRIMARY KEY,
    chat_id TEXT NOT NULL,
    content TEXT NOT NULL,
    status SMALLINT NOT NULL DEFAULT 0,
    error TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX IF NOT EXISTS idx_notification_log_chat ON notification_log (chat_id, created_at);

CREATE TABLE IF NOT EXISTS send_progress (
    id BIGSERIAL PRIMARY KEY,
    job_id TEXT NOT NULL,
    batch_no BIGINT NOT NULL,
    sent BIGINT NOT NULL,
    failed BIGINT NOT NULL,
    total BIGINT NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX IF NOT EXISTS idx_send_progress_job ON send_progress (job_id);
"#;

pub(crate) async fn create_tables(pool: &sqlx::PgPool) -> Result<(), crate::Error> {
    for statement in TABLES.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| crate::DatabaseError::Migration(format!("{statement}: {e}")))?;
    }
    Ok(())
}
