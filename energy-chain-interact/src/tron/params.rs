use super::consts::TRX_TO_SUN;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct FreezeBalanceArgs {
    pub owner_address: String,
    pub resource: ResourceType,
    pub frozen_balance: i64,
}

impl FreezeBalanceArgs {
    pub fn new(owner_address: &str, resource: &str, frozen_balance: &str) -> crate::Result<Self> {
        Ok(Self {
            owner_address: energy_utils::address::bs58_addr_to_hex(owner_address)?,
            resource: ResourceType::try_from(resource)?,
            frozen_balance: energy_utils::unit::trx_to_sun(frozen_balance)?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct UnFreezeBalanceArgs {
    pub owner_address: String,
    pub resource: ResourceType,
    pub unfreeze_balance: i64,
}

impl UnFreezeBalanceArgs {
    pub fn new(owner_address: &str, resource: &str, unfreeze_balance: &str) -> crate::Result<Self> {
        Ok(Self {
            owner_address: energy_utils::address::bs58_addr_to_hex(owner_address)?,
            resource: ResourceType::try_from(resource)?,
            unfreeze_balance: energy_utils::unit::trx_to_sun(unfreeze_balance)?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct DelegateArgs {
    pub owner_address: String,
    pub receiver_address: String,
    pub balance: i64,
    pub resource: ResourceType,
    pub lock: bool,
    pub lock_period: i64,
}

impl DelegateArgs {
    pub fn new(
        owner_address: &str,
        receiver_address: &str,
        balance: &str,
        resource: &str,
    ) -> crate::Result<Self> {
        Ok(Self {
            owner_address: energy_utils::address::bs58_addr_to_hex(owner_address)?,
            receiver_address: energy_utils::address::bs58_addr_to_hex(receiver_address)?,
            balance: energy_utils::unit::trx_to_sun(balance)?,
            resource: ResourceType::try_from(resource)?,
            lock: false,
            lock_period: 0,
        })
    }

    // lock_period unit is blocks (3s each)
    pub fn with_lock_period(mut self, lock_period: i64) -> Self {
        self.lock = true;
        self.lock_period = lock_period;
        self
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct UnDelegateArgs {
    pub owner_address: String,
    pub receiver_address: String,
    pub balance: i64,
    pub resource: ResourceType,
}

impl UnDelegateArgs {
    pub fn new(
        owner_address: &str,
        receiver_address: &str,
        balance: &str,
        resource: &str,
    ) -> crate::Result<Self> {
        Ok(Self {
            owner_address: energy_utils::address::bs58_addr_to_hex(owner_address)?,
            receiver_address: energy_utils::address::bs58_addr_to_hex(receiver_address)?,
            balance: energy_utils::unit::trx_to_sun(balance)?,
            resource: ResourceType::try_from(resource)?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    ENERGY,
    BANDWIDTH,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceType::ENERGY => write!(f, "ENERGY"),
            ResourceType::BANDWIDTH => write!(f, "BANDWIDTH"),
        }
    }
}

impl TryFrom<&str> for ResourceType {
    type Error = crate::Error;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_ref() {
            "energy" => Ok(ResourceType::ENERGY),
            "bandwidth" => Ok(ResourceType::BANDWIDTH),
            _ => Err(crate::Error::InvalidResourceType(value.to_string())),
        }
    }
}

#[derive(Debug)]
pub struct Resource {
    // user resource
    pub limit: i64,
    // tx consumer resource
    pub consumer: i64,
    // unit is sun
    pub price: i64,
    // energy or bandwidth
    pub types: String,
}

impl Resource {
    pub fn new(limit: i64, consumer: i64, price: i64, types: &str) -> Self {
        Self {
            limit,
            consumer,
            price,
            types: types.to_string(),
        }
    }

    // free bandwidth cannot be partially consumed, the whole tx burns if it does not fit
    pub fn need_extra_resource(&self) -> i64 {
        if self.types == "bandwidth" {
            if self.consumer > self.limit {
                self.consumer
            } else {
                0
            }
        } else if self.consumer > self.limit {
            self.consumer - self.limit
        } else {
            0
        }
    }

    pub fn fee(&self) -> i64 {
        self.price * self.need_extra_resource()
    }
}

#[derive(Debug)]
pub struct ResourceConsumer {
    pub energy: Option<Resource>,
    pub bandwidth: Resource,
    // unit is sun
    pub extra_fee: i64,
}

impl ResourceConsumer {
    pub fn new(bandwidth: Resource, energy: Option<Resource>) -> Self {
        Self {
            energy,
            bandwidth,
            extra_fee: 0,
        }
    }

    // unit is sun
    pub fn set_extra_fee(&mut self, extra_fee: i64) {
        self.extra_fee += extra_fee;
    }

    // unit is trx
    pub fn transaction_fee(&self) -> f64 {
        self.transaction_fee_sun() as f64 / TRX_TO_SUN as f64
    }

    // unit is sun
    pub fn transaction_fee_sun(&self) -> i64 {
        let bandwidth_fee = self.bandwidth.fee();
        let energy_fee = self.energy.as_ref().map(|e| e.fee()).unwrap_or(0);

        bandwidth_fee + energy_fee + self.extra_fee
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type_parse() {
        assert_eq!(ResourceType::try_from("energy").unwrap(), ResourceType::ENERGY);
        assert_eq!(ResourceType::try_from("BANDWIDTH").unwrap(), ResourceType::BANDWIDTH);
        assert!(ResourceType::try_from("power").is_err());
    }

    #[test]
    fn test_bandwidth_burns_whole_tx() {
        // free bandwidth smaller than tx size burns the full size
        let r = Resource::new(200, 268, 1000, "bandwidth");
        assert_eq!(r.need_extra_resource(), 268);
        assert_eq!(r.fee(), 268_000);

        let r = Resource::new(300, 268, 1000, "bandwidth");
        assert_eq!(r.need_extra_resource(), 0);
    }

    #[test]
    fn test_energy_burns_delta() {
        let r = Resource::new(1000, 1500, 420, "energy");
        assert_eq!(r.need_extra_resource(), 500);
    }

    #[test]
    fn test_consumer_total_fee() {
        let bandwidth = Resource::new(0, 268, 1000, "bandwidth");
        let mut consumer = ResourceConsumer::new(bandwidth, None);
        consumer.set_extra_fee(1_000_000);

        assert_eq!(consumer.transaction_fee_sun(), 1_268_000);
        assert!((consumer.transaction_fee() - 1.268).abs() < 1e-9);
    }

    #[test]
    fn test_delegate_args() {
        let args = DelegateArgs::new(
            "TZ92GD6UbW8MMk6XD6pxKTGzUGs42No6vn",
            "TGyw6wH5UT5GVY5v6MTWedabScAwF4gffQ",
            "50",
            "energy",
        )
        .unwrap();

        assert_eq!(args.balance, 50_000_000);
        assert!(!args.lock);
        assert!(args.owner_address.starts_with("41"));

        let locked = args.with_lock_period(86_400);
        assert!(locked.lock);
        assert_eq!(locked.lock_period, 86_400);
    }
}
