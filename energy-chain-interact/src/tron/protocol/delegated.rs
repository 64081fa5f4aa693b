use serde::{Deserialize, Serialize};

// response of wallet/getdelegatedresourcev2
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct DelegatedResourceList {
    #[serde(rename = "delegatedResource")]
    pub delegated_resource: Vec<DelegatedResource>,
}

#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct DelegatedResource {
    pub from: String,
    pub to: String,
    // unit is sun
    pub frozen_balance_for_energy: i64,
    pub frozen_balance_for_bandwidth: i64,
    pub expire_time_for_energy: i64,
    pub expire_time_for_bandwidth: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delegated_resource_deserialize() {
        let s = r#"{
            "delegatedResource": [{
                "from": "41fd49eda0f23ff7ec1d03b52c3a45991c24cd440e",
                "to": "414bc2a098ac4e5309e424fec1d762936c306dee92",
                "frozen_balance_for_energy": 50000000,
                "expire_time_for_energy": 1719656109000
            }]
        }"#;
        let list: DelegatedResourceList = serde_json::from_str(s).unwrap();
        assert_eq!(list.delegated_resource.len(), 1);
        assert_eq!(list.delegated_resource[0].frozen_balance_for_energy, 50_000_000);
        assert_eq!(list.delegated_resource[0].frozen_balance_for_bandwidth, 0);
    }

    #[test]
    fn test_empty_body() {
        let list: DelegatedResourceList = serde_json::from_str("{}").unwrap();
        assert!(list.delegated_resource.is_empty());
    }
}
