use sqlx::types::chrono;

// status: 0 pending, 1 confirmed, 2 reclaimed, 3 failed
#[derive(Debug, Clone, Default, serde::Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct DelegateRecordEntity {
    pub id: i64,
    pub tx_hash: String,
    pub owner_address: String,
    pub receiver_address: String,
    pub resource_type: String,
    pub amount: String,
    pub status: i16,
    pub locked: bool,
    pub lock_period: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

pub struct NewDelegateRecordEntity {
    pub tx_hash: String,
    pub owner_address: String,
    pub receiver_address: String,
    pub resource_type: String,
    pub amount: String,
    pub locked: bool,
    pub lock_period: i64,
}

#[derive(Debug, Clone, Default, serde::Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UnfreezeRecordEntity {
    pub id: i64,
    pub tx_hash: String,
    pub owner_address: String,
    pub resource_type: String,
    pub amount: String,
    // unix seconds when the funds become withdrawable
    pub available_at: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

pub struct NewUnfreezeRecordEntity {
    pub tx_hash: String,
    pub owner_address: String,
    pub resource_type: String,
    pub amount: String,
    pub available_at: i64,
}
