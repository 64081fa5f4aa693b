use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct CreateTransactionResp<T> {
    #[serde(default)]
    pub visible: bool,
    #[serde(rename = "txID")]
    pub tx_id: String,
    pub raw_data: RawData<T>,
    pub raw_data_hex: String,
    #[serde(flatten)]
    ext: Option<serde_json::Value>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct RawData<T> {
    pub contract: Vec<Contract<T>>,
    pub ref_block_bytes: String,
    pub ref_block_hash: String,
    pub expiration: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_limit: Option<u128>,
    pub timestamp: u64,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Contract<T> {
    pub parameter: Parameter<T>,
    #[serde(rename = "type")]
    pub types: String,
    #[serde(rename = "Permission_id")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_id: Option<u8>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct Parameter<T> {
    pub value: T,
    pub type_url: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct SendRawTransactionParams {
    #[serde(rename = "txID")]
    pub tx_id: String,
    pub raw_data: String,
    pub raw_data_hex: String,
    pub signature: Vec<String>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct SendRawTransactionResp {
    pub result: bool,
    #[serde(rename = "txid")]
    pub tx_id: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct TransactionInfo {
    pub id: String,
    #[serde(default)]
    pub fee: f64,
    #[serde(rename = "blockNumber")]
    pub block_number: u128,
    #[serde(rename = "blockTimeStamp")]
    pub block_timestamp: u128,
    pub receipt: TronReceipt,
    pub result: Option<String>,
    // filled when the transaction failed
    #[serde(rename = "resMessage")]
    pub res_message: Option<String>,
}

impl TransactionInfo {
    pub fn is_success(&self) -> bool {
        self.result.is_none()
    }
}

#[derive(Deserialize, Serialize, Debug)]
pub struct TronReceipt {
    pub net_usage: Option<u64>,
    pub energy_usage: Option<u64>,
    pub energy_usage_total: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tron::params::DelegateArgs;

    #[test]
    fn test_create_transaction_resp() {
        let s = r#"{
            "visible": false,
            "txID": "77ddfa7093cc5f745c0d3a54abb89ef070f983559ac67ea17d6d218101aa2c4f",
            "raw_data": {
                "contract": [{
                    "parameter": {
                        "value": {
                            "owner_address": "41fd49eda0f23ff7ec1d03b52c3a45991c24cd440e",
                            "receiver_address": "414bc2a098ac4e5309e424fec1d762936c306dee92",
                            "balance": 50000000,
                            "resource": "ENERGY",
                            "lock": false,
                            "lock_period": 0
                        },
                        "type_url": "type.googleapis.com/protocol.DelegateResourceContract"
                    },
                    "type": "DelegateResourceContract"
                }],
                "ref_block_bytes": "cc46",
                "ref_block_hash": "86013f30ec6d034b",
                "expiration": 1719569763000,
                "timestamp": 1719569703563
            },
            "raw_data_hex": "0a02cc46220886013f30ec6d034b"
        }"#;

        let resp: CreateTransactionResp<DelegateArgs> = serde_json::from_str(s).unwrap();
        assert_eq!(resp.raw_data.contract.len(), 1);
        assert_eq!(resp.raw_data.contract[0].types, "DelegateResourceContract");
        assert_eq!(resp.raw_data.contract[0].parameter.value.balance, 50_000_000);
    }

    #[test]
    fn test_transaction_info_status() {
        let s = r#"{
            "id": "abc",
            "fee": 1100000,
            "blockNumber": 62913003,
            "blockTimeStamp": 1719569709000,
            "receipt": {"net_usage": 268}
        }"#;
        let info: TransactionInfo = serde_json::from_str(s).unwrap();
        assert!(info.is_success());
        assert_eq!(info.receipt.net_usage, Some(268));

        let failed = r#"{
            "id": "abc",
            "blockNumber": 62913003,
            "blockTimeStamp": 1719569709000,
            "receipt": {},
            "result": "FAILED",
            "resMessage": "4f7574206f6620456e65726779"
        }"#;
        let info: TransactionInfo = serde_json::from_str(failed).unwrap();
        assert!(!info.is_success());
    }
}
