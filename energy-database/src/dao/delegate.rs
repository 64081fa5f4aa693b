use sqlx::{Executor, Postgres};

use crate::{
    entities::delegate::{
        DelegateRecordEntity, NewDelegateRecordEntity, NewUnfreezeRecordEntity,
        UnfreezeRecordEntity,
    },
    pagination::Pagination,
};

pub async fn add_delegate<'a, E>(
    delegate: NewDelegateRecordEntity,
    exec: E,
) -> Result<i64, crate::DatabaseError>
where
    E: Executor<'a, Database = Postgres>,
{
    let sql = r#"insert into delegate_record
        (tx_hash,owner_address,receiver_address,resource_type,amount,status,locked,lock_period)
     values ($1,$2,$3,$4,$5,0,$6,$7) returning id"#;

    let id = sqlx::query_scalar::<_, i64>(sql)
        .bind(delegate.tx_hash)
        .bind(delegate.owner_address)
        .bind(delegate.receiver_address)
        .bind(delegate.resource_type)
        .bind(delegate.amount)
        .bind(delegate.locked)
        .bind(delegate.lock_period)
        .fetch_one(exec)
        .await?;

    Ok(id)
}

pub async fn update_delegate_status<'a, E>(
    id: i64,
    status: i16,
    exec: E,
) -> Result<(), crate::DatabaseError>
where
    E: Executor<'a, Database = Postgres>,
{
    let sql = "update delegate_record set status = $1, updated_at = now() where id = $2";
    let _res = sqlx::query(sql).bind(status).bind(id).execute(exec).await?;
    Ok(())
}

pub async fn find_delegate_by_id<'a, E>(
    id: i64,
    exec: E,
) -> Result<Option<DelegateRecordEntity>, crate::DatabaseError>
where
    E: Executor<'a, Database = Postgres>,
{
    let sql = "select * from delegate_record where id = $1";
    let res = sqlx::query_as::<_, DelegateRecordEntity>(sql)
        .bind(id)
        .fetch_optional(exec)
        .await?;
    Ok(res)
}

pub async fn delegate_list(
    owner: &str,
    resource_type: &str,
    page: i64,
    page_size: i64,
    exec: &crate::DbPool,
) -> Result<Pagination<DelegateRecordEntity>, crate::DatabaseError> {
    let sql = format!(
        "select * FROM delegate_record where owner_address = '{}' and resource_type = '{}' order by created_at desc",
        owner, resource_type
    );

    let pagination = Pagination::init(page, page_size);
    let res = pagination.page(exec, &sql).await?;

    Ok(res)
}

pub async fn add_unfreeze<'a, E>(
    stake: NewUnfreezeRecordEntity,
    exec: E,
) -> Result<(), crate::DatabaseError>
where
    E: Executor<'a, Database = Postgres>,
{
    let sql = r#"insert into unfreeze_record
        (tx_hash,owner_address,resource_type,amount,available_at)
     values ($1,$2,$3,$4,$5)"#;

    let _res = sqlx::query(sql)
        .bind(stake.tx_hash)
        .bind(stake.owner_address)
        .bind(stake.resource_type)
        .bind(stake.amount)
        .bind(stake.available_at)
        .execute(exec)
        .await?;

    Ok(())
}

// rows whose funds are still locked up
pub async fn unfreeze_list(
    owner: &str,
    resource_type: &str,
    page: i64,
    page_size: i64,
    exec: &crate::DbPool,
) -> Result<Pagination<UnfreezeRecordEntity>, crate::DatabaseError> {
    let time = energy_utils::time::now().timestamp();
    let sql = format!(
        "select * FROM unfreeze_record where owner_address = '{}' and resource_type = '{}' and available_at > {} order by created_at desc",
        owner, resource_type, time
    );

    let pagination = Pagination::init(page, page_size);
    let res = pagination.page(exec, &sql).await?;

    Ok(res)
}
