use std::collections::HashMap;

use energy_transport::client::HttpClient;

use super::params::{self, ResourceType};
use super::protocol::{
    account::{
        AccountResourceDetail, CanDelegatedMaxSize, CanWithdrawUnfreezeAmount, DelegateResp,
        FreezeBalanceResp, TronAccount, UnDelegateResp, UnFreezeBalanceResp, WithdrawExpireResp,
    },
    chain_parameter::ChainParameter,
    delegated::DelegatedResourceList,
    transaction::{CreateTransactionResp, SendRawTransactionParams, SendRawTransactionResp, TransactionInfo},
};

pub struct TronProvider {
    client: HttpClient,
}

impl TronProvider {
    pub fn new(rpc_url: &str) -> crate::Result<Self> {
        let client = HttpClient::new(rpc_url, None)?;
        Ok(Self { client })
    }

    pub async fn chain_params(&self) -> crate::Result<ChainParameter> {
        Ok(self.client.get("wallet/getchainparameters").send().await?)
    }

    pub async fn account_info(&self, account: &str) -> crate::Result<TronAccount> {
        let mut params = HashMap::new();
        params.insert("address", account);
        if account.starts_with("T") {
            params.insert("visible", "true");
        }

        let res = self.client.post_request("wallet/getaccount", params).await?;
        Ok(res)
    }

    pub async fn account_resource(&self, account: &str) -> crate::Result<AccountResourceDetail> {
        let mut params = HashMap::new();
        params.insert("address", account);
        if account.starts_with("T") {
            params.insert("visible", "true");
        }

        let res = self
            .client
            .post_request("wallet/getaccountresource", params)
            .await?;
        Ok(res)
    }

    pub async fn query_tx_info(&self, tx_hash: &str) -> crate::Result<TransactionInfo> {
        let mut params = HashMap::new();
        params.insert("value", tx_hash);

        let result = self
            .client
            .post("wallet/gettransactioninfobyid")
            .json(params)
            .send::<TransactionInfo>()
            .await?;
        Ok(result)
    }

    pub async fn send_raw_transaction(
        &self,
        params: SendRawTransactionParams,
    ) -> crate::Result<SendRawTransactionResp> {
        let result = self
            .client
            .post_request("wallet/broadcasttransaction", params)
            .await?;
        Ok(result)
    }

    pub async fn freeze_balance(
        &self,
        args: params::FreezeBalanceArgs,
    ) -> crate::Result<CreateTransactionResp<FreezeBalanceResp>> {
        let res = self
            .client
            .post_request("wallet/freezebalancev2", args)
            .await?;
        Ok(res)
    }

    pub async fn unfreeze_balance(
        &self,
        args: params::UnFreezeBalanceArgs,
    ) -> crate::Result<CreateTransactionResp<UnFreezeBalanceResp>> {
        let res = self
            .client
            .post_request("wallet/unfreezebalancev2", args)
            .await?;
        Ok(res)
    }

    pub async fn delegate_resource(
        &self,
        args: params::DelegateArgs,
    ) -> crate::Result<CreateTransactionResp<DelegateResp>> {
        let res = self
            .client
            .post_request("wallet/delegateresource", args)
            .await?;
        Ok(res)
    }

    pub async fn un_delegate_resource(
        &self,
        args: params::UnDelegateArgs,
    ) -> crate::Result<CreateTransactionResp<UnDelegateResp>> {
        let res = self
            .client
            .post_request("wallet/undelegateresource", args)
            .await?;
        Ok(res)
    }

    pub async fn withdraw_expire_unfreeze(
        &self,
        owner_address: &str,
    ) -> crate::Result<CreateTransactionResp<WithdrawExpireResp>> {
        let owner_address = energy_utils::address::bs58_addr_to_hex(owner_address)?;
        let mut args = HashMap::new();
        args.insert("owner_address", owner_address);

        let res = self
            .client
            .post_request("wallet/withdrawexpireunfreeze", args)
            .await?;
        Ok(res)
    }

    pub async fn can_withdraw_unfreeze_amount(
        &self,
        owner_address: &str,
    ) -> crate::Result<CanWithdrawUnfreezeAmount> {
        let owner_address = energy_utils::address::bs58_addr_to_hex(owner_address)?;
        let mut args = HashMap::new();
        args.insert("owner_address", owner_address);

        let res = self
            .client
            .post_request("wallet/getcanwithdrawunfreezeamount", args)
            .await?;
        Ok(res)
    }

    pub async fn can_delegated_max_size(
        &self,
        owner_address: &str,
        resource: ResourceType,
    ) -> crate::Result<CanDelegatedMaxSize> {
        let owner_address = energy_utils::address::bs58_addr_to_hex(owner_address)?;
        let mut args = HashMap::new();
        args.insert("owner_address", serde_json::json!(owner_address));
        let types = match resource {
            ResourceType::BANDWIDTH => 0,
            ResourceType::ENERGY => 1,
        };
        args.insert("type", serde_json::json!(types));

        let res = self
            .client
            .post_request("wallet/getcandelegatedmaxsize", args)
            .await?;
        Ok(res)
    }

    pub async fn delegated_resource(
        &self,
        from: &str,
        to: &str,
    ) -> crate::Result<DelegatedResourceList> {
        let from = energy_utils::address::bs58_addr_to_hex(from)?;
        let to = energy_utils::address::bs58_addr_to_hex(to)?;
        let mut args = HashMap::new();
        args.insert("fromAddress", from);
        args.insert("toAddress", to);

        let res = self
            .client
            .post_request("wallet/getdelegatedresourcev2", args)
            .await?;
        Ok(res)
    }

    // bandwidth cost of a signed transaction, in bytes
    pub fn calc_bandwidth(&self, raw_data_hex: &str, signature_num: u8) -> i64 {
        let data_hex_pro = 3_i64;
        let result_hex = 64_i64;
        let sign_len = 67_i64 * signature_num as i64;

        let raw_data_len = (raw_data_hex.len() / 2) as i64;
        raw_data_len + data_hex_pro + result_hex + sign_len
    }
}
