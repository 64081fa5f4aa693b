use crate::error::parse::ParseError;

pub const TRX_TO_SUN: i64 = 1_000_000;

/// parse a decimal TRX amount into sun (6 decimals max)
pub fn trx_to_sun(amount: &str) -> Result<i64, crate::Error> {
    let amount = amount.trim();
    let err = || crate::Error::Parse(ParseError::AmountConvertFailed(amount.to_string()));

    let (int_part, frac_part) = match amount.split_once('.') {
        Some((i, f)) => (i, f),
        None => (amount, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(err());
    }
    if frac_part.len() > 6 {
        return Err(err());
    }

    let int: i64 = if int_part.is_empty() {
        0
    } else {
        int_part.parse().map_err(|_| err())?
    };
    let frac: i64 = if frac_part.is_empty() {
        0
    } else {
        let padded = format!("{:0<6}", frac_part);
        padded.parse().map_err(|_| err())?
    };

    int.checked_mul(TRX_TO_SUN)
        .and_then(|v| v.checked_add(frac))
        .ok_or_else(err)
}

pub fn sun_to_trx(amount: i64) -> f64 {
    amount as f64 / TRX_TO_SUN as f64
}
