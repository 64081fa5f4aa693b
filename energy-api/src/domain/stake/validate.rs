use std::sync::atomic::{AtomicU64, Ordering};

use energy_utils::address::{is_hex_shaped, is_tron_address};

/// Outcome of a successful amount check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidAmount {
    pub amount: f64,
    // balance left after the operation
    pub remaining: f64,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AmountError {
    #[error("请输入数量")]
    Empty,
    #[error("请输入有效的数字")]
    NotANumber,
    #[error("数量必须大于 0")]
    NotPositive,
    #[error("数量最多支持 2 位小数")]
    Precision,
    #[error("数量不能小于 1 TRX")]
    LessThanMin,
    #[error("超过可用资源 {available} TRX")]
    Insufficient { available: f64 },
}

fn decimal_places(value: &str) -> usize {
    match value.split_once('.') {
        Some((_, frac)) => frac.trim_end_matches('0').len(),
        None => 0,
    }
}

/// Checks a user-entered TRX amount against the currently available balance.
pub fn validate_amount(amount: &str, available: f64) -> Result<ValidAmount, AmountError> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }

    let value: f64 = trimmed.parse().map_err(|_| AmountError::NotANumber)?;
    if !value.is_finite() {
        return Err(AmountError::NotANumber);
    }
    if value <= 0.0 {
        return Err(AmountError::NotPositive);
    }
    if decimal_places(trimmed) > 2 {
        return Err(AmountError::Precision);
    }
    // network refuses stake operations below one TRX
    if value < 1.0 {
        return Err(AmountError::LessThanMin);
    }
    if value > available {
        return Err(AmountError::Insufficient { available });
    }

    Ok(ValidAmount {
        amount: value,
        remaining: available - value,
    })
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LockPeriodError {
    #[error("请输入有效的锁定期")]
    NotANumber,
    #[error("锁定期最少 0.01 天")]
    TooShort,
    #[error("锁定期不能超过 {max_days} 天")]
    TooLong { max_days: f64 },
    #[error("锁定期最多支持 2 位小数")]
    Precision,
}

/// Lock period is an optional feature: a disabled toggle always passes.
pub fn validate_lock_period(
    enabled: bool,
    period_days: &str,
    max_days: f64,
) -> Result<(), LockPeriodError> {
    if !enabled {
        return Ok(());
    }

    let value: f64 = period_days
        .trim()
        .parse()
        .map_err(|_| LockPeriodError::NotANumber)?;
    // bounds reasons take priority over the precision reason
    if value < 0.01 {
        return Err(LockPeriodError::TooShort);
    }
    if value > max_days {
        return Err(LockPeriodError::TooLong { max_days });
    }
    if decimal_places(period_days.trim()) > 2 {
        return Err(LockPeriodError::Precision);
    }
    Ok(())
}

#[derive(Debug, Clone, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressCheck {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub confidence: f64,
}

/// Syntactic and checksum validation of a receiver address.
pub fn validate_tron_address(address: &str) -> AddressCheck {
    let trimmed = address.trim();
    if trimmed.is_empty() {
        return AddressCheck {
            is_valid: false,
            errors: vec!["地址不能为空".to_string()],
            confidence: 0.0,
        };
    }

    if is_tron_address(trimmed) {
        return AddressCheck {
            is_valid: true,
            errors: Vec::new(),
            confidence: 1.0,
        };
    }

    if trimmed.starts_with('T') && trimmed.len() == 34 {
        return AddressCheck {
            is_valid: false,
            errors: vec!["地址校验和不正确".to_string()],
            confidence: 0.5,
        };
    }

    // hex form cannot be checksum-verified, accept with lower confidence
    if is_hex_shaped(trimmed) {
        return AddressCheck {
            is_valid: true,
            errors: Vec::new(),
            confidence: 0.9,
        };
    }

    AddressCheck {
        is_valid: false,
        errors: vec!["不是有效的 TRON 地址".to_string()],
        confidence: 0.0,
    }
}

/// Monotonic sequence for debounced validation runs. A run records the
/// token it was issued and only applies its result while that token is
/// still the newest one, so a slow stale run can never overwrite a
/// fresher result.
#[derive(Debug, Default)]
pub struct ValidationSeq {
    issued: AtomicU64,
}

impl ValidationSeq {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.issued.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_rules() {
        assert_eq!(validate_amount("", 100.0), Err(AmountError::Empty));
        assert_eq!(validate_amount("abc", 100.0), Err(AmountError::NotANumber));
        assert_eq!(validate_amount("0", 100.0), Err(AmountError::NotPositive));
        assert_eq!(
            validate_amount("100.123", 200.0),
            Err(AmountError::Precision)
        );
        assert_eq!(validate_amount("0.5", 100.0), Err(AmountError::LessThanMin));
    }

    #[test]
    fn test_amount_against_available() {
        let err = validate_amount("50", 30.0).unwrap_err();
        assert!(err.to_string().contains("超过可用资源"));

        let ok = validate_amount("20", 30.0).unwrap();
        assert_eq!(ok.amount, 20.0);
        assert_eq!(ok.remaining, 10.0);

        // exactly the available balance passes
        let ok = validate_amount("30", 30.0).unwrap();
        assert_eq!(ok.remaining, 0.0);
    }

    #[test]
    fn test_lock_period() {
        // disabled toggle ignores the value entirely
        assert!(validate_lock_period(false, "not a number", 3.0).is_ok());

        assert!(validate_lock_period(true, "1.5", 3.0).is_ok());
        assert_eq!(
            validate_lock_period(true, "5", 3.0),
            Err(LockPeriodError::TooLong { max_days: 3.0 })
        );
        assert_eq!(
            validate_lock_period(true, "0.001", 3.0),
            Err(LockPeriodError::TooShort)
        );
        assert_eq!(
            validate_lock_period(true, "1.123", 3.0),
            Err(LockPeriodError::Precision)
        );
    }

    #[test]
    fn test_address_check() {
        let check = validate_tron_address("TZ92GD6UbW8MMk6XD6pxKTGzUGs42No6vn");
        assert!(check.is_valid);
        assert_eq!(check.confidence, 1.0);

        let check = validate_tron_address("TZ92GD6UbW8MMk6XD6pxKTGzUGs42No6vm");
        assert!(!check.is_valid);
        assert!(!check.errors.is_empty());

        let check = validate_tron_address("41fd49eda0f23ff7ec1d03b52c3a45991c24cd440e");
        assert!(check.is_valid);
        assert!(check.confidence < 1.0);

        assert!(!validate_tron_address("").is_valid);
        assert!(!validate_tron_address("hello").is_valid);
    }

    #[test]
    fn test_validation_seq_discards_stale() {
        let seq = ValidationSeq::new();
        let first = seq.begin();
        let second = seq.begin();

        // the slow first run resolves after the second began
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
