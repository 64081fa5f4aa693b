use energy_chain_interact::tron::{
    consts,
    params::{DelegateArgs, FreezeBalanceArgs, UnFreezeBalanceArgs},
};
use energy_database::entities::delegate::{NewDelegateRecordEntity, NewUnfreezeRecordEntity};

#[derive(serde::Deserialize, Debug)]
pub struct FreezeBalanceReq {
    pub owner_address: String,
    pub resource: String,
    // trx
    pub amount: String,
}

impl TryFrom<&FreezeBalanceReq> for FreezeBalanceArgs {
    type Error = crate::error::ServiceError;
    fn try_from(value: &FreezeBalanceReq) -> Result<Self, Self::Error> {
        let args = FreezeBalanceArgs::new(&value.owner_address, &value.resource, &value.amount)?;
        Ok(args)
    }
}

#[derive(serde::Deserialize, Debug)]
pub struct UnFreezeBalanceReq {
    pub owner_address: String,
    pub resource: String,
    pub amount: String,
}

impl From<&UnFreezeBalanceReq> for NewUnfreezeRecordEntity {
    fn from(value: &UnFreezeBalanceReq) -> Self {
        Self {
            tx_hash: "".to_string(),
            owner_address: value.owner_address.clone(),
            resource_type: value.resource.clone(),
            amount: value.amount.clone(),
            available_at: 0,
        }
    }
}

impl TryFrom<&UnFreezeBalanceReq> for UnFreezeBalanceArgs {
    type Error = crate::error::ServiceError;
    fn try_from(value: &UnFreezeBalanceReq) -> Result<Self, Self::Error> {
        let args = UnFreezeBalanceArgs::new(&value.owner_address, &value.resource, &value.amount)?;
        Ok(args)
    }
}

#[derive(serde::Deserialize, Debug)]
pub struct DelegateReq {
    pub owner_address: String,
    pub receiver_address: String,
    pub amount: String,
    pub resource: String,
    // optional lock, in days
    pub lock_period_days: Option<f64>,
}

impl DelegateReq {
    pub fn lock_period_blocks(&self) -> i64 {
        self.lock_period_days
            .map(|days| (days * consts::BLOCKS_PER_DAY as f64) as i64)
            .unwrap_or(0)
    }
}

impl From<&DelegateReq> for NewDelegateRecordEntity {
    fn from(value: &DelegateReq) -> Self {
        Self {
            tx_hash: "".to_string(),
            owner_address: value.owner_address.clone(),
            receiver_address: value.receiver_address.clone(),
            amount: value.amount.clone(),
            resource_type: value.resource.clone(),
            locked: value.lock_period_days.is_some(),
            lock_period: value.lock_period_blocks(),
        }
    }
}

impl TryFrom<&DelegateReq> for DelegateArgs {
    type Error = crate::error::ServiceError;
    fn try_from(value: &DelegateReq) -> Result<Self, Self::Error> {
        let args = DelegateArgs::new(
            &value.owner_address,
            &value.receiver_address,
            &value.amount,
            &value.resource,
        )?;
        let args = if value.lock_period_days.is_some() {
            args.with_lock_period(value.lock_period_blocks())
        } else {
            args
        };
        Ok(args)
    }
}
