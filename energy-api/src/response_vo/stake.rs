use chrono::{DateTime, Utc};
use energy_chain_interact::tron::consts;
use energy_chain_interact::tron::protocol::account::{AccountResourceDetail, TronAccount};
use energy_chain_interact::tron::protocol::chain_parameter::ChainParameter;
use energy_chain_interact::tron::protocol::delegated::DelegatedResource;

use crate::domain::stake::record::Direction;

const SUN: f64 = consts::TRX_TO_SUN as f64;

// all amounts in trx, derived per request from live chain queries
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountBalance {
    pub available: f64,
    pub staked: f64,
    pub delegated: f64,
    pub withdrawable: f64,
    pub energy_direct_staked: f64,
    pub bandwidth_direct_staked: f64,
    pub energy_delegated_out: f64,
    pub bandwidth_delegated_out: f64,
}

impl AccountBalance {
    // withdrawable parameter unit is sun; bandwidth stake has an empty
    // type tag on the wire
    pub fn new(account: &TronAccount, withdrawable: i64) -> Self {
        let energy_direct = account.frozen_v2_owner("ENERGY");
        let bandwidth_direct = account.frozen_v2_owner("");
        let energy_out = account.account_resource.delegated_energy;
        let bandwidth_out = account.delegated_bandwidth;

        Self {
            available: account.balance_to_f64(),
            staked: (energy_direct + bandwidth_direct) as f64 / SUN,
            delegated: (energy_out + bandwidth_out) as f64 / SUN,
            withdrawable: withdrawable as f64 / SUN,
            energy_direct_staked: energy_direct as f64 / SUN,
            bandwidth_direct_staked: bandwidth_direct as f64 / SUN,
            energy_delegated_out: energy_out as f64 / SUN,
            bandwidth_delegated_out: bandwidth_out as f64 / SUN,
        }
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkParameters {
    // resource units obtained per staked trx
    pub energy_ratio: f64,
    pub bandwidth_ratio: f64,
    pub max_delegate_lock_period_days: f64,
    pub unlock_period_text: String,
}

impl NetworkParameters {
    pub fn new(params: &ChainParameter, resource: &AccountResourceDetail) -> Self {
        Self {
            energy_ratio: resource.energy_price(),
            bandwidth_ratio: resource.net_price(),
            max_delegate_lock_period_days: params.get_max_delegate_lock_period() as f64
                / consts::BLOCKS_PER_DAY as f64,
            unlock_period_text: format!("{} 天", params.get_unfreeze_delay_days()),
        }
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegateRecordResp {
    pub from: String,
    pub to: String,
    // trx
    pub amount: f64,
    pub resource_type: String,
    pub direction: Direction,
    pub expire_time: Option<DateTime<Utc>>,
}

impl DelegateRecordResp {
    pub fn new(delegate: &DelegatedResource, resource_type: &str, direction: Direction) -> Self {
        let (amount, expire_time) = match resource_type {
            "ENERGY" => (
                delegate.frozen_balance_for_energy,
                delegate.expire_time_for_energy,
            ),
            _ => (
                delegate.frozen_balance_for_bandwidth,
                delegate.expire_time_for_bandwidth,
            ),
        };

        let expire_time = if expire_time > 0 {
            DateTime::from_timestamp_millis(expire_time)
        } else {
            None
        };

        Self {
            from: delegate.from.clone(),
            to: delegate.to.clone(),
            amount: amount as f64 / SUN,
            resource_type: resource_type.to_string(),
            direction,
            expire_time,
        }
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawUnfreezeResp {
    pub amount: f64,
    pub tx_hash: String,
}
