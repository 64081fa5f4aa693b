use serde::Serialize;

use super::params::{self, Resource, ResourceConsumer, ResourceType};
use super::protocol::account::{AccountResourceDetail, TronAccount};
use super::protocol::chain_parameter::ChainParameter;
use super::protocol::delegated::DelegatedResourceList;
use super::protocol::transaction::CreateTransactionResp;
use super::provider::TronProvider;
use super::tx_build::TransactionBuilder;
use crate::types::{ChainPrivateKey, QueryTransactionResult};

// every stake operation the node can build a transaction for
#[derive(Debug, Clone)]
pub enum StakeOperation {
    Freeze(params::FreezeBalanceArgs),
    UnFreeze(params::UnFreezeBalanceArgs),
    Delegate(params::DelegateArgs),
    UnDelegate(params::UnDelegateArgs),
}

pub struct TronChain {
    pub provider: TronProvider,
}

impl TronChain {
    pub fn new(provider: TronProvider) -> crate::Result<Self> {
        Ok(Self { provider })
    }

    pub async fn chain_parameter(&self) -> crate::Result<ChainParameter> {
        self.provider.chain_params().await
    }

    pub async fn account_info(&self, account: &str) -> crate::Result<TronAccount> {
        self.provider.account_info(account).await
    }

    pub async fn account_resource(&self, account: &str) -> crate::Result<AccountResourceDetail> {
        self.provider.account_resource(account).await
    }

    pub async fn delegated_resource(
        &self,
        from: &str,
        to: &str,
    ) -> crate::Result<DelegatedResourceList> {
        self.provider.delegated_resource(from, to).await
    }

    // unit is sun
    pub async fn can_withdraw_unfreeze_amount(&self, owner_address: &str) -> crate::Result<i64> {
        let res = self
            .provider
            .can_withdraw_unfreeze_amount(owner_address)
            .await?;
        Ok(res.amount)
    }

    // unit is sun
    pub async fn can_delegate_resource(
        &self,
        owner_address: &str,
        resource: ResourceType,
    ) -> crate::Result<i64> {
        let res = self
            .provider
            .can_delegated_max_size(owner_address, resource)
            .await?;
        Ok(res.max_size)
    }

    pub async fn query_tx_res(&self, hash: &str) -> crate::Result<Option<QueryTransactionResult>> {
        let transaction = match self.provider.query_tx_info(hash).await {
            Ok(transaction) => transaction,
            Err(err) => {
                tracing::warn!(hash, ?err, "transaction not found yet");
                return Ok(None);
            }
        };

        // timestamp unit ms to s
        let time = transaction.block_timestamp / 1000;
        let fee = transaction.fee / super::consts::TRX_TO_SUN as f64;
        let status = if transaction.is_success() { 2 } else { 3 };

        Ok(Some(QueryTransactionResult::new(
            transaction.id,
            fee,
            transaction.receipt.energy_usage_total.unwrap_or_default(),
            transaction.receipt.net_usage.unwrap_or_default(),
            time,
            status,
            transaction.block_number,
        )))
    }

    fn sign_raw<T: Serialize>(
        resp: CreateTransactionResp<T>,
        key: &ChainPrivateKey,
    ) -> crate::Result<super::protocol::transaction::SendRawTransactionParams> {
        let mut raw_transaction = TransactionBuilder::build_raw_transaction(resp)?;

        let sign_str = energy_utils::sign::sign_tron(&raw_transaction.tx_id, key, None)?;
        raw_transaction.signature.push(sign_str);

        Ok(raw_transaction)
    }

    async fn broadcast(
        &self,
        raw_transaction: super::protocol::transaction::SendRawTransactionParams,
    ) -> crate::Result<String> {
        let res = self.provider.send_raw_transaction(raw_transaction).await?;
        if !res.result {
            return Err(crate::Error::RpcNode(format!(
                "broadcast rejected: {}",
                res.tx_id
            )));
        }
        Ok(res.tx_id)
    }

    pub async fn freeze_balance(
        &self,
        args: params::FreezeBalanceArgs,
        key: ChainPrivateKey,
    ) -> crate::Result<String> {
        let resp = self.provider.freeze_balance(args).await?;
        let raw_transaction = Self::sign_raw(resp, &key)?;

        self.broadcast(raw_transaction).await
    }

    pub async fn unfreeze_balance(
        &self,
        args: params::UnFreezeBalanceArgs,
        key: ChainPrivateKey,
    ) -> crate::Result<String> {
        let resp = self.provider.unfreeze_balance(args).await?;
        let raw_transaction = Self::sign_raw(resp, &key)?;

        self.broadcast(raw_transaction).await
    }

    pub async fn delegate_resource(
        &self,
        args: params::DelegateArgs,
        key: ChainPrivateKey,
    ) -> crate::Result<String> {
        let resp = self.provider.delegate_resource(args).await?;
        let raw_transaction = Self::sign_raw(resp, &key)?;

        self.broadcast(raw_transaction).await
    }

    pub async fn un_delegate_resource(
        &self,
        args: params::UnDelegateArgs,
        key: ChainPrivateKey,
    ) -> crate::Result<String> {
        let resp = self.provider.un_delegate_resource(args).await?;
        let raw_transaction = Self::sign_raw(resp, &key)?;

        self.broadcast(raw_transaction).await
    }

    pub async fn withdraw_unfreeze_amount(
        &self,
        owner_address: &str,
        key: ChainPrivateKey,
    ) -> crate::Result<String> {
        let resp = self.provider.withdraw_expire_unfreeze(owner_address).await?;
        let raw_transaction = Self::sign_raw(resp, &key)?;

        self.broadcast(raw_transaction).await
    }

    pub async fn exec_stake_operation(
        &self,
        operation: StakeOperation,
        key: ChainPrivateKey,
    ) -> crate::Result<String> {
        match operation {
            StakeOperation::Freeze(args) => self.freeze_balance(args, key).await,
            StakeOperation::UnFreeze(args) => self.unfreeze_balance(args, key).await,
            StakeOperation::Delegate(args) => self.delegate_resource(args, key).await,
            StakeOperation::UnDelegate(args) => self.un_delegate_resource(args, key).await,
        }
    }

    // fee estimate by building the unsigned transaction on the node
    pub async fn estimate_stake_fee(
        &self,
        account: &str,
        operation: &StakeOperation,
    ) -> crate::Result<ResourceConsumer> {
        let raw_data_hex = match operation {
            StakeOperation::Freeze(args) => {
                self.provider.freeze_balance(args.clone()).await?.raw_data_hex
            }
            StakeOperation::UnFreeze(args) => {
                self.provider.unfreeze_balance(args.clone()).await?.raw_data_hex
            }
            StakeOperation::Delegate(args) => {
                self.provider
                    .delegate_resource(args.clone())
                    .await?
                    .raw_data_hex
            }
            StakeOperation::UnDelegate(args) => {
                self.provider
                    .un_delegate_resource(args.clone())
                    .await?
                    .raw_data_hex
            }
        };

        let chain_params = self.provider.chain_params().await?;
        let resource = self.provider.account_resource(account).await?;

        let consumer = self.provider.calc_bandwidth(&raw_data_hex, 1);
        let bandwidth = Resource::new(
            resource.available_bandwidth(),
            consumer,
            chain_params.get_transaction_fee(),
            "bandwidth",
        );

        Ok(ResourceConsumer::new(bandwidth, None))
    }
}
