use std::sync::Arc;
use std::time::Duration;

use energy_chain_interact::tron::params as tron_params;
use energy_chain_interact::tron::{consts, StakeOperation, TronChain, TronProvider};
use energy_chain_interact::types::{ChainPrivateKey, QueryTransactionResult};
use energy_database::entities::delegate::{
    DelegateRecordEntity, NewDelegateRecordEntity, NewUnfreezeRecordEntity, UnfreezeRecordEntity,
};
use energy_database::pagination::Pagination;
use energy_database::repositories::delegate::DelegateRepo;

use crate::domain::stake::record::{self, Direction, RecordAddresses};
use crate::domain::task::ScheduledTasks;
use crate::error::business::stake::StakeError;
use crate::request::stake as stake_req;
use crate::response_vo::stake::{
    AccountBalance, DelegateRecordResp, NetworkParameters, WithdrawUnfreezeResp,
};

// delegate record status values
const STATUS_CONFIRMED: i16 = 1;
const STATUS_RECLAIMED: i16 = 2;
const STATUS_FAILED: i16 = 3;

// network minimum for delegate/undelegate, in sun
const MIN_DELEGATE_SUN: i64 = consts::MIN_STAKE_TRX * consts::TRX_TO_SUN;

pub struct StakeService {
    chain: Arc<TronChain>,
    repo: DelegateRepo,
    tasks: ScheduledTasks,
    // reference account for record classification
    pool_address: String,
}

impl StakeService {
    pub fn new(
        rpc_url: &str,
        pool_address: &str,
        db_pool: energy_database::DbPool,
    ) -> Result<Self, crate::ServiceError> {
        let provider = TronProvider::new(rpc_url)?;
        Ok(Self {
            chain: Arc::new(TronChain::new(provider)?),
            repo: DelegateRepo::new(db_pool),
            tasks: ScheduledTasks::new(),
            pool_address: pool_address.to_string(),
        })
    }

    /// Chain-side effect handler for a [`crate::domain::stake::submit::SubmitFlow`].
    pub fn submit_ops(&self, key: ChainPrivateKey) -> Arc<ChainStakeOps> {
        Arc::new(ChainStakeOps {
            chain: Arc::clone(&self.chain),
            account: self.pool_address.clone(),
            key,
        })
    }

    pub async fn account_balance(&self, address: &str) -> Result<AccountBalance, crate::ServiceError> {
        let account = self.chain.account_info(address).await?;
        let withdrawable = self.chain.can_withdraw_unfreeze_amount(address).await?;

        Ok(AccountBalance::new(&account, withdrawable))
    }

    pub async fn network_parameters(&self) -> Result<NetworkParameters, crate::ServiceError> {
        let params = self.chain.chain_parameter().await?;
        let resource = self.chain.account_resource(&self.pool_address).await?;

        Ok(NetworkParameters::new(&params, &resource))
    }

    pub async fn freeze_balance(
        &self,
        req: stake_req::FreezeBalanceReq,
        key: ChainPrivateKey,
    ) -> Result<String, crate::ServiceError> {
        let args = tron_params::FreezeBalanceArgs::try_from(&req)?;
        let res = self.chain.freeze_balance(args, key).await?;

        Ok(res)
    }

    pub async fn unfreeze_balance(
        &self,
        req: stake_req::UnFreezeBalanceReq,
        key: ChainPrivateKey,
    ) -> Result<String, crate::ServiceError> {
        let mut new_unfreeze = NewUnfreezeRecordEntity::from(&req);
        let args = tron_params::UnFreezeBalanceArgs::try_from(&req)?;

        let res = self.chain.unfreeze_balance(args, key).await?;

        let params = self.chain.chain_parameter().await?;
        new_unfreeze.tx_hash = res.clone();
        new_unfreeze.available_at = energy_utils::time::now_plus_days(params.get_unfreeze_delay_days())
            .timestamp();
        self.repo.add_unfreeze(new_unfreeze).await?;

        Ok(res)
    }

    pub async fn withdraw_unfreeze(
        &self,
        owner_address: &str,
        key: ChainPrivateKey,
    ) -> Result<WithdrawUnfreezeResp, crate::ServiceError> {
        let withdrawable = self.chain.can_withdraw_unfreeze_amount(owner_address).await?;
        if withdrawable <= 0 {
            return Err(crate::BusinessError::Stake(StakeError::NoWithdrawableAmount).into());
        }

        let tx_hash = self.chain.withdraw_unfreeze_amount(owner_address, key).await?;

        Ok(WithdrawUnfreezeResp {
            amount: withdrawable as f64 / consts::TRX_TO_SUN as f64,
            tx_hash,
        })
    }

    pub async fn delegate_resource(
        &self,
        req: stake_req::DelegateReq,
        key: ChainPrivateKey,
    ) -> Result<String, crate::ServiceError> {
        let mut new_delegate = NewDelegateRecordEntity::from(&req);

        let args = tron_params::DelegateArgs::try_from(&req)?;
        if args.balance < MIN_DELEGATE_SUN {
            return Err(crate::BusinessError::Stake(StakeError::DelegateLessThanMin).into());
        }

        let res = self.chain.delegate_resource(args, key).await?;

        new_delegate.tx_hash = res.clone();
        self.repo.add_delegate(new_delegate).await?;

        Ok(res)
    }

    // reclaim a delegated resource by record id
    pub async fn un_delegate_resource(
        &self,
        id: i64,
        key: ChainPrivateKey,
    ) -> Result<String, crate::ServiceError> {
        let delegate = self.repo.find_delegate_by_id(id).await?;
        if delegate.status == STATUS_RECLAIMED {
            return Err(crate::BusinessError::Stake(StakeError::RecordReclaimed).into());
        }
        if delegate.status != STATUS_CONFIRMED {
            return Err(crate::BusinessError::Stake(StakeError::RecordNotConfirmed).into());
        }

        let args = tron_params::UnDelegateArgs::new(
            &delegate.owner_address,
            &delegate.receiver_address,
            &delegate.amount,
            &delegate.resource_type,
        )?;
        if args.balance < MIN_DELEGATE_SUN {
            return Err(crate::BusinessError::Stake(StakeError::UnDelegateLessThanMin).into());
        }

        let res = self.chain.un_delegate_resource(args, key).await?;

        self.repo.update_delegate_status(id, STATUS_RECLAIMED).await?;

        Ok(res)
    }

    // unit is sun
    pub async fn can_delegate_amount(&self, resource: &str) -> Result<i64, crate::ServiceError> {
        let resource = tron_params::ResourceType::try_from(resource)?;
        let max = self
            .chain
            .can_delegate_resource(&self.pool_address, resource)
            .await?;
        Ok(max)
    }

    pub async fn delegate_record_history(
        &self,
        owner_address: &str,
        resource_type: &str,
        page: i64,
        page_size: i64,
    ) -> Result<Pagination<DelegateRecordEntity>, crate::ServiceError> {
        Ok(self
            .repo
            .delegate_list(owner_address, resource_type, page, page_size)
            .await?)
    }

    pub async fn unfreeze_record_history(
        &self,
        owner_address: &str,
        resource_type: &str,
        page: i64,
        page_size: i64,
    ) -> Result<Pagination<UnfreezeRecordEntity>, crate::ServiceError> {
        Ok(self
            .repo
            .unfreeze_list(owner_address, resource_type, page, page_size)
            .await?)
    }

    /// Polls a submitted transaction once and moves a pending record to
    /// confirmed or failed when the node has a receipt.
    pub async fn sync_record_status(&self, id: i64) -> Result<Option<QueryTransactionResult>, crate::ServiceError> {
        let delegate = self.repo.find_delegate_by_id(id).await?;

        let Some(result) = self.chain.query_tx_res(&delegate.tx_hash).await? else {
            return Ok(None);
        };

        let status = if result.is_success() {
            STATUS_CONFIRMED
        } else {
            STATUS_FAILED
        };
        self.repo.update_delegate_status(id, status).await?;
        Ok(Some(result))
    }

    /// Keeps polling a record in the background until the node reports a
    /// receipt. Rescheduling the same record replaces the previous poller.
    pub async fn schedule_record_sync(self: &Arc<Self>, id: i64, interval: Duration) {
        let service = Arc::clone(self);
        self.tasks
            .schedule(&format!("record-sync-{id}"), async move {
                loop {
                    tokio::time::sleep(interval).await;
                    match service.sync_record_status(id).await {
                        Ok(Some(result)) => {
                            tracing::info!(id, status = result.status, "record status settled");
                            break;
                        }
                        Ok(None) => {}
                        Err(err) => {
                            tracing::warn!(id, ?err, "record status sync failed");
                        }
                    }
                }
            })
            .await;
    }

    pub async fn cancel_record_sync(&self, id: i64) {
        self.tasks.cancel(&format!("record-sync-{id}")).await;
    }

    /// Live delegations from the chain indexer, classified relative to
    /// the pool account.
    pub async fn delegate_records(
        &self,
        counterparty: &str,
        resource_type: &str,
        direction: Direction,
    ) -> Result<Vec<DelegateRecordResp>, crate::ServiceError> {
        let list = self
            .chain
            .delegated_resource(&self.pool_address, counterparty)
            .await?;

        // getdelegatedresourcev2 echoes hex addresses, so the reference
        // must be hex as well or the exact tier can never anchor
        let reference = classification_reference(&self.pool_address)?;
        let records = record::filter_by_direction(
            &list.delegated_resource,
            &reference,
            direction,
            |item| RecordAddresses::new("", &item.from, &item.to),
        );

        Ok(records
            .into_iter()
            .map(|item| DelegateRecordResp::new(item, resource_type, direction))
            .collect())
    }
}

fn classification_reference(pool_address: &str) -> Result<String, crate::ServiceError> {
    if energy_utils::address::is_hex_shaped(pool_address) {
        Ok(pool_address.to_string())
    } else {
        Ok(energy_utils::address::bs58_addr_to_hex(pool_address)?)
    }
}

/// Signs and broadcasts on behalf of one account, for the submit flow.
pub struct ChainStakeOps {
    chain: Arc<TronChain>,
    account: String,
    key: ChainPrivateKey,
}

#[async_trait::async_trait]
impl crate::domain::stake::submit::StakeOps for ChainStakeOps {
    async fn execute(&self, operation: &StakeOperation) -> Result<String, crate::ServiceError> {
        let tx_hash = self
            .chain
            .exec_stake_operation(operation.clone(), self.key.clone())
            .await?;
        Ok(tx_hash)
    }

    async fn estimate_fee(&self, operation: &StakeOperation) -> Result<f64, crate::ServiceError> {
        let consumer = self
            .chain
            .estimate_stake_fee(&self.account, operation)
            .await?;
        Ok(consumer.transaction_fee())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stake::record::determine_record_type;

    const POOL: &str = "TZ92GD6UbW8MMk6XD6pxKTGzUGs42No6vn";
    const OTHER: &str = "TGyw6wH5UT5GVY5v6MTWedabScAwF4gffQ";

    #[test]
    fn test_hex_records_classify_against_base58_pool() {
        let reference = classification_reference(POOL).unwrap();
        assert!(reference.starts_with("41"));

        // the node echoes hex on this endpoint, both sides anchor exactly
        let other_hex = energy_utils::address::bs58_addr_to_hex(OTHER).unwrap();
        let inbound = RecordAddresses::new("", &other_hex, &reference);
        assert_eq!(determine_record_type(&inbound, &reference), Direction::In);

        let outbound = RecordAddresses::new("", &reference, &other_hex);
        assert_eq!(determine_record_type(&outbound, &reference), Direction::Out);
    }

    #[test]
    fn test_hex_pool_address_passes_through() {
        let hex = energy_utils::address::bs58_addr_to_hex(POOL).unwrap();
        assert_eq!(classification_reference(&hex).unwrap(), hex);
    }
}
