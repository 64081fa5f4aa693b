use chrono::{DateTime, Duration, Utc};

// utc now datetime
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn now_plus_days(n: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(n)
}

pub fn now_minus_hours(n: i64) -> DateTime<Utc> {
    Utc::now() - Duration::hours(n)
}
