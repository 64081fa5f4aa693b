use serde::Serialize;

use super::protocol::transaction::{CreateTransactionResp, SendRawTransactionParams};

pub(super) struct TransactionBuilder;

impl TransactionBuilder {
    // the node already fixed tx_id and raw_data_hex, only the json raw_data
    // needs to be carried alongside for broadcast
    pub fn build_raw_transaction<T: Serialize>(
        resp: CreateTransactionResp<T>,
    ) -> crate::Result<SendRawTransactionParams> {
        let raw_data = energy_utils::serde_func::serde_to_string(&resp.raw_data)?;

        Ok(SendRawTransactionParams {
            tx_id: resp.tx_id,
            raw_data,
            raw_data_hex: resp.raw_data_hex,
            signature: vec![],
        })
    }
}
