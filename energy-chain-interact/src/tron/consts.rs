pub const TRX_TO_SUN: i64 = 1_000_000;

// network minimum for delegate/undelegate, unit is trx
pub const MIN_STAKE_TRX: i64 = 1;

// one lock-period block is 3 seconds
pub const BLOCKS_PER_DAY: i64 = 28_800;
