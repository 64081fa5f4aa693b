#[derive(Clone)]
pub struct ChainPrivateKey(String);

impl std::ops::Deref for ChainPrivateKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&str> for ChainPrivateKey {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ChainPrivateKey {
    fn from(value: String) -> Self {
        Self(value)
    }
}

// key material never goes through Debug output
impl std::fmt::Debug for ChainPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ChainPrivateKey(..)")
    }
}

#[derive(Default, Debug)]
pub struct QueryTransactionResult {
    pub hash: String,
    // unit is trx
    pub transaction_fee: f64,
    pub energy_used: u64,
    pub bandwidth_used: u64,
    pub transaction_time: u128,
    // 2 success 3 fail
    pub status: i8,
    pub block_height: u128,
}

impl QueryTransactionResult {
    pub fn new(
        hash: String,
        transaction_fee: f64,
        energy_used: u64,
        bandwidth_used: u64,
        transaction_time: u128,
        status: i8,
        block_height: u128,
    ) -> Self {
        Self {
            hash,
            transaction_fee,
            energy_used,
            bandwidth_used,
            transaction_time,
            status,
            block_height,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 2
    }
}
