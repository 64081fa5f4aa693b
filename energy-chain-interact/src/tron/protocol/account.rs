use serde::{Deserialize, Serialize};

use crate::tron::consts;

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct TronAccount {
    pub address: String,
    // unit is sun
    pub balance: i64,
    pub account_resource: AccountResource,
    #[serde(rename = "delegated_frozenV2_balance_for_bandwidth")]
    pub delegated_bandwidth: i64,
    #[serde(rename = "acquired_delegated_frozenV2_balance_for_bandwidth")]
    pub acquired_bandwidth: i64,
    #[serde(rename = "frozenV2")]
    pub frozen_v2: Vec<FrozenV2>,
    #[serde(rename = "unfrozenV2")]
    pub unfrozen_v2: Vec<UnfrozenV2>,
    #[serde(flatten)]
    extra_fields: std::collections::HashMap<String, serde_json::Value>,
}

impl TronAccount {
    // direct stake of the owner, resource_type is "" for bandwidth
    pub fn frozen_v2_owner(&self, resource_type: &str) -> i64 {
        self.frozen_v2
            .iter()
            .filter(|item| item.types == resource_type)
            .map(|item| item.amount)
            .sum::<i64>()
    }

    pub fn unfreezing_amount(&self, resource_type: &str) -> i64 {
        let now_ms = energy_utils::time::now().timestamp_millis();
        self.unfrozen_v2
            .iter()
            .filter(|item| item.types == resource_type && item.unfreeze_expire_time > now_ms)
            .map(|item| item.unfreeze_amount)
            .sum::<i64>()
    }

    pub fn can_withdraw_unfreeze_amount(&self, resource_type: &str) -> i64 {
        let now_ms = energy_utils::time::now().timestamp_millis();
        self.unfrozen_v2
            .iter()
            .filter(|item| item.types == resource_type && item.unfreeze_expire_time <= now_ms)
            .map(|item| item.unfreeze_amount)
            .sum::<i64>()
    }

    pub fn balance_to_f64(&self) -> f64 {
        self.balance as f64 / consts::TRX_TO_SUN as f64
    }
}

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct FrozenV2 {
    pub amount: i64,
    #[serde(rename = "type")]
    pub types: String,
    #[serde(flatten)]
    extra_fields: std::collections::HashMap<String, serde_json::Value>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct UnfrozenV2 {
    #[serde(rename = "type")]
    pub types: String,
    pub unfreeze_amount: i64,
    pub unfreeze_expire_time: i64,
    #[serde(flatten)]
    extra_fields: std::collections::HashMap<String, serde_json::Value>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct AccountResource {
    pub energy_window_size: u64,
    #[serde(rename = "delegated_frozenV2_balance_for_energy")]
    pub delegated_energy: i64,
    #[serde(rename = "acquired_delegated_frozenV2_balance_for_energy")]
    pub acquired_energy: i64,
    #[serde(flatten)]
    extra_fields: std::collections::HashMap<String, serde_json::Value>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default, rename_all = "PascalCase")]
pub struct AccountResourceDetail {
    #[serde(rename = "freeNetUsed")]
    pub free_net_used: i64,
    #[serde(rename = "freeNetLimit")]
    pub free_net_limit: i64,
    pub net_used: i64,
    pub net_limit: i64,
    pub total_net_limit: i64,
    pub total_net_weight: i64,
    pub energy_used: i64,
    pub energy_limit: i64,
    pub total_energy_limit: i64,
    pub total_energy_weight: i64,
}

impl AccountResourceDetail {
    // resource units obtained per staked trx
    pub fn energy_price(&self) -> f64 {
        if self.total_energy_weight == 0 {
            return 0.0;
        }
        self.total_energy_limit as f64 / self.total_energy_weight as f64
    }

    pub fn net_price(&self) -> f64 {
        if self.total_net_weight == 0 {
            return 0.0;
        }
        self.total_net_limit as f64 / self.total_net_weight as f64
    }

    pub fn available_bandwidth(&self) -> i64 {
        ((self.net_limit + self.free_net_limit) - (self.net_used + self.free_net_used)).max(0)
    }

    pub fn available_energy(&self) -> i64 {
        (self.energy_limit - self.energy_used).max(0)
    }
}

#[derive(serde::Deserialize, serde::Serialize)]
pub struct FreezeBalanceResp {
    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<String>,
    frozen_balance: i64,
    owner_address: String,
}

#[derive(serde::Deserialize, serde::Serialize)]
pub struct UnFreezeBalanceResp {
    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<String>,
    unfreeze_balance: i64,
    owner_address: String,
}

#[derive(serde::Deserialize, serde::Serialize)]
pub struct DelegateResp {
    owner_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<String>,
    receiver_address: String,
    balance: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    lock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    lock_period: Option<i64>,
}

#[derive(serde::Deserialize, serde::Serialize)]
pub struct UnDelegateResp {
    owner_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    resource: Option<String>,
    receiver_address: String,
    balance: i64,
}

#[derive(serde::Deserialize, serde::Serialize)]
pub struct WithdrawExpireResp {
    owner_address: String,
}

#[derive(serde::Deserialize)]
pub struct CanWithdrawUnfreezeAmount {
    #[serde(default)]
    pub amount: i64,
}

#[derive(serde::Deserialize)]
pub struct CanDelegatedMaxSize {
    #[serde(default)]
    pub max_size: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_deserialize() {
        let s = r#"{
            "address": "TZ92GD6UbW8MMk6XD6pxKTGzUGs42No6vn",
            "balance": 25000000,
            "frozenV2": [
                {"amount": 5000000},
                {"type": "ENERGY", "amount": 30000000},
                {"type": "TRON_POWER"}
            ],
            "unfrozenV2": [
                {"type": "ENERGY", "unfreeze_amount": 2000000, "unfreeze_expire_time": 1}
            ],
            "account_resource": {
                "energy_window_size": 600,
                "delegated_frozenV2_balance_for_energy": 10000000
            },
            "delegated_frozenV2_balance_for_bandwidth": 7000000
        }"#;

        let account: TronAccount = serde_json::from_str(s).unwrap();
        assert_eq!(account.balance_to_f64(), 25.0);
        // bandwidth stake carries an empty type on the wire
        assert_eq!(account.frozen_v2_owner(""), 5_000_000);
        assert_eq!(account.frozen_v2_owner("ENERGY"), 30_000_000);
        assert_eq!(account.account_resource.delegated_energy, 10_000_000);
        assert_eq!(account.delegated_bandwidth, 7_000_000);
        // expire time in the past is withdrawable
        assert_eq!(account.can_withdraw_unfreeze_amount("ENERGY"), 2_000_000);
        assert_eq!(account.unfreezing_amount("ENERGY"), 0);
    }

    #[test]
    fn test_resource_detail() {
        let s = r#"{
            "freeNetUsed": 100,
            "freeNetLimit": 600,
            "NetUsed": 200,
            "NetLimit": 1000,
            "TotalNetLimit": 43200000000,
            "TotalNetWeight": 20000000000,
            "EnergyUsed": 500,
            "EnergyLimit": 2000,
            "TotalEnergyLimit": 180000000000,
            "TotalEnergyWeight": 18000000000
        }"#;

        let detail: AccountResourceDetail = serde_json::from_str(s).unwrap();
        assert_eq!(detail.available_bandwidth(), 1300);
        assert_eq!(detail.available_energy(), 1500);
        assert!((detail.energy_price() - 10.0).abs() < 1e-9);
        assert!((detail.net_price() - 2.16).abs() < 1e-9);
    }
}
