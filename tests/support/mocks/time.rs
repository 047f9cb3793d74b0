// tests/support/mocks/time.rs
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-03-15T09:30:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

/// Deterministic timestamp every fixed clock starts from.
pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

pub fn days_after_fixed(days: i64) -> DateTime<Utc> {
    *FIXED_NOW + Duration::days(days)
}
