use energy_utils::address::{is_base58_shaped, is_hex_shaped, similarity_score};

/// Direction of a delegate record relative to a reference account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Out,
    In,
    Unknown,
}

/// Address pair of one delegate record, empty string means the chain
/// indexer did not return that side.
#[derive(Debug, Clone, Default)]
pub struct RecordAddresses {
    pub txid: String,
    pub from: String,
    pub to: String,
}

impl RecordAddresses {
    pub fn new(txid: &str, from: &str, to: &str) -> Self {
        Self {
            txid: txid.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}

/// Strict address equality. Chain APIs return the same address in
/// base58 or hex depending on the endpoint, so anything short of exact
/// equality is left to the classifier tiers instead of being guessed here.
pub fn is_address_match(addr1: &str, addr2: &str) -> bool {
    let a = addr1.trim();
    let b = addr2.trim();
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a.eq_ignore_ascii_case(b) {
        return true;
    }

    let both_valid = (is_base58_shaped(a) || is_hex_shaped(a))
        && (is_base58_shaped(b) || is_hex_shaped(b));
    if both_valid {
        tracing::debug!(addr1 = a, addr2 = b, "valid addresses differ, no match");
    }
    false
}

type Tier = fn(&RecordAddresses, &str) -> Option<Direction>;

// 精确匹配
fn tier_exact(record: &RecordAddresses, current: &str) -> Option<Direction> {
    let from = is_address_match(&record.from, current);
    let to = is_address_match(&record.to, current);
    match (from, to) {
        // self-delegation counts as outbound
        (true, _) => Some(Direction::Out),
        (false, true) => Some(Direction::In),
        (false, false) => None,
    }
}

// 只有单边地址时直接按该边归类
fn tier_single_side(record: &RecordAddresses, _current: &str) -> Option<Direction> {
    let from = !record.from.trim().is_empty();
    let to = !record.to.trim().is_empty();
    match (from, to) {
        (true, false) => Some(Direction::Out),
        (false, true) => Some(Direction::In),
        _ => None,
    }
}

fn tier_similarity(record: &RecordAddresses, current: &str) -> Option<Direction> {
    let from_score = similarity_score(&record.from, current);
    let to_score = similarity_score(&record.to, current);

    if (from_score - to_score).abs() > 0.1 {
        if from_score > to_score {
            Some(Direction::Out)
        } else {
            Some(Direction::In)
        }
    } else {
        None
    }
}

fn tier_length(record: &RecordAddresses, current: &str) -> Option<Direction> {
    let within = |addr: &str| {
        let diff = addr.trim().len() as i64 - current.len() as i64;
        diff.abs() <= 2
    };
    match (within(&record.from), within(&record.to)) {
        (true, false) => Some(Direction::Out),
        (false, true) => Some(Direction::In),
        _ => None,
    }
}

// 最后一层兜底:txid 长度奇偶。没有语义依据,只保证每条记录
// 落在唯一一个方向里,不会在两个列表里重复或消失。
fn tier_txid_parity(record: &RecordAddresses, _current: &str) -> Option<Direction> {
    if record.txid.len() % 2 == 0 {
        Some(Direction::Out)
    } else {
        Some(Direction::In)
    }
}

// evaluated in priority order, first Some wins
const TIERS: [(&str, Tier); 5] = [
    ("exact", tier_exact),
    ("single_side", tier_single_side),
    ("similarity", tier_similarity),
    ("length", tier_length),
    ("parity", tier_txid_parity),
];

/// Assigns a record to exactly one direction relative to `current_address`.
pub fn determine_record_type(record: &RecordAddresses, current_address: &str) -> Direction {
    if record.from.trim().is_empty() && record.to.trim().is_empty() {
        return Direction::Unknown;
    }

    for (name, tier) in TIERS {
        if let Some(direction) = tier(record, current_address) {
            tracing::trace!(txid = %record.txid, tier = name, ?direction, "record classified");
            return direction;
        }
    }
    Direction::Unknown
}

/// Keeps the records classified to `direction`. Empty reference address
/// cannot anchor any classification, so the result is empty.
pub fn filter_by_direction<'a, T, F>(
    records: &'a [T],
    current_address: &str,
    direction: Direction,
    addresses: F,
) -> Vec<&'a T>
where
    F: Fn(&T) -> RecordAddresses,
{
    if current_address.trim().is_empty() {
        tracing::warn!("empty reference address, no records classified");
        return Vec::new();
    }

    records
        .iter()
        .filter(|record| determine_record_type(&addresses(record), current_address) == direction)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SELF_ADDR: &str = "TZ92GD6UbW8MMk6XD6pxKTGzUGs42No6vn";
    const OTHER_ADDR: &str = "TGyw6wH5UT5GVY5v6MTWedabScAwF4gffQ";

    #[test]
    fn test_match_reflexive_and_symmetric() {
        assert!(is_address_match(SELF_ADDR, SELF_ADDR));
        assert!(is_address_match(&SELF_ADDR.to_lowercase(), SELF_ADDR));
        assert!(is_address_match(&format!("  {SELF_ADDR} "), SELF_ADDR));

        assert_eq!(
            is_address_match(SELF_ADDR, OTHER_ADDR),
            is_address_match(OTHER_ADDR, SELF_ADDR)
        );
        assert!(!is_address_match(SELF_ADDR, OTHER_ADDR));
        assert!(!is_address_match("", SELF_ADDR));

        // well-shaped but checksum-broken addresses still never match
        assert!(!is_address_match(
            "TZ92GD6UbW8MMk6XD6pxKTGzUGs42No6vm",
            SELF_ADDR
        ));
    }

    #[test]
    fn test_exact_tier() {
        let record = RecordAddresses::new("abc123", SELF_ADDR, OTHER_ADDR);
        assert_eq!(determine_record_type(&record, SELF_ADDR), Direction::Out);

        let record = RecordAddresses::new("abc123", OTHER_ADDR, SELF_ADDR);
        assert_eq!(determine_record_type(&record, SELF_ADDR), Direction::In);

        // self-delegation is outbound
        let record = RecordAddresses::new("abc123", SELF_ADDR, SELF_ADDR);
        assert_eq!(determine_record_type(&record, SELF_ADDR), Direction::Out);
    }

    #[test]
    fn test_single_side() {
        let record = RecordAddresses::new("abc123", OTHER_ADDR, "");
        assert_eq!(determine_record_type(&record, SELF_ADDR), Direction::Out);

        let record = RecordAddresses::new("abc123", "", OTHER_ADDR);
        assert_eq!(determine_record_type(&record, SELF_ADDR), Direction::In);

        let record = RecordAddresses::new("abc123", "", "");
        assert_eq!(determine_record_type(&record, SELF_ADDR), Direction::Unknown);
    }

    #[test]
    fn test_similarity_tier() {
        // hex-encoded own address is far closer to itself than to an
        // unrelated base58 string of a different shape
        let near = format!("{}x", &SELF_ADDR[..33]);
        let far = "41fd49eda0f23ff7ec1d03b52c3a45991c24cd440e";
        let record = RecordAddresses::new("abc1", &near, far);
        assert_eq!(determine_record_type(&record, SELF_ADDR), Direction::Out);

        let record = RecordAddresses::new("abc1", far, &near);
        assert_eq!(determine_record_type(&record, SELF_ADDR), Direction::In);
    }

    #[test]
    fn test_parity_fallback_is_deterministic() {
        // two equally-dissimilar same-length addresses force the fallback
        let a = "1111111111111111111111111111111111";
        let b = "2222222222222222222222222222222222";

        let even = RecordAddresses::new("ab", a, b);
        assert_eq!(determine_record_type(&even, SELF_ADDR), Direction::Out);

        let odd = RecordAddresses::new("abc", a, b);
        assert_eq!(determine_record_type(&odd, SELF_ADDR), Direction::In);
    }

    #[test]
    fn test_partition_is_exclusive_and_exhaustive() {
        let records = vec![
            RecordAddresses::new("abc123", SELF_ADDR, OTHER_ADDR),
            RecordAddresses::new("abc1234", OTHER_ADDR, SELF_ADDR),
            RecordAddresses::new("ff", OTHER_ADDR, ""),
            RecordAddresses::new("ab", "1111111111111111111111111111111111", "2222222222222222222222222222222222"),
            RecordAddresses::new("abc", "1111111111111111111111111111111111", "2222222222222222222222222222222222"),
        ];

        let out = filter_by_direction(&records, SELF_ADDR, Direction::Out, Clone::clone);
        let inn = filter_by_direction(&records, SELF_ADDR, Direction::In, Clone::clone);

        assert_eq!(out.len() + inn.len(), records.len());
        for record in &records {
            let d = determine_record_type(record, SELF_ADDR);
            assert!(d == Direction::Out || d == Direction::In);
        }
    }

    #[test]
    fn test_empty_reference_address() {
        let records = vec![RecordAddresses::new("abc123", SELF_ADDR, OTHER_ADDR)];
        let out = filter_by_direction(&records, "  ", Direction::Out, Clone::clone);
        assert!(out.is_empty());
    }
}
