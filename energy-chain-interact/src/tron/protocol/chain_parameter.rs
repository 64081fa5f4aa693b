use serde::{Deserialize, Serialize};

use crate::tron::consts::BLOCKS_PER_DAY;

#[derive(Deserialize, Serialize, Debug)]
pub struct ParameterValue {
    pub key: String,
    pub value: Option<i64>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ChainParameter {
    #[serde(rename = "chainParameter")]
    pub chain_parameter: Vec<ParameterValue>,
}

impl ChainParameter {
    pub fn get_value(&self, key: &str) -> Option<i64> {
        for item in self.chain_parameter.iter() {
            if item.key == key {
                return item.value;
            }
        }
        None
    }

    // bandwidth price, unit is sun
    pub fn get_transaction_fee(&self) -> i64 {
        self.get_value("getTransactionFee").unwrap_or(0)
    }

    // energy price, unit is sun
    pub fn get_energy_fee(&self) -> i64 {
        self.get_value("getEnergyFee").unwrap_or(0)
    }

    // unit is blocks
    pub fn get_max_delegate_lock_period(&self) -> i64 {
        self.get_value("getMaxDelegateLockPeriod")
            .unwrap_or(BLOCKS_PER_DAY)
    }

    pub fn get_unfreeze_delay_days(&self) -> i64 {
        self.get_value("getUnfreezeDelayDays").unwrap_or(14)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_parameter_lookup() {
        let s = r#"{
            "chainParameter": [
                {"key": "getTransactionFee", "value": 1000},
                {"key": "getEnergyFee", "value": 210},
                {"key": "getAllowTvmTransferTrc10"}
            ]
        }"#;
        let params: ChainParameter = serde_json::from_str(s).unwrap();

        assert_eq!(params.get_transaction_fee(), 1000);
        assert_eq!(params.get_energy_fee(), 210);
        // key present with null value falls through to the default
        assert_eq!(params.get_value("getAllowTvmTransferTrc10"), None);
        assert_eq!(params.get_max_delegate_lock_period(), BLOCKS_PER_DAY);
        assert_eq!(params.get_unfreeze_delay_days(), 14);
    }
}
