//! Deterministic test fixtures

use chrono::{DateTime, TimeZone, Utc};

/// Stable identifier strings for factory inputs.
pub struct IdFixtures;

impl IdFixtures {
    /// A well-formed UUID string.
    pub fn uuid() -> &'static str {
        "0191d1a0-5b3c-7a1e-9f00-3f6a1c2b4d5e"
    }

    /// A second, distinct well-formed UUID string.
    pub fn other_uuid() -> &'static str {
        "7b7e6f3a-2e45-4d8b-9f1c-0a9b8c7d6e5f"
    }

    /// Text that is not a UUID in any format.
    pub fn malformed() -> &'static str {
        "not-a-uuid"
    }
}

/// Stable instants for validity and creation timestamps.
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// A document issue instant: 2024-01-10T10:00:00Z.
    pub fn issued() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 10, 10, 0, 0).unwrap()
    }

    /// An expiry one year after [`issued`](Self::issued).
    pub fn expiry() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 10, 10, 0, 0).unwrap()
    }

    /// A fixed creation timestamp.
    pub fn created_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap()
    }

    /// A birth date safely in the past.
    pub fn birth_date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1995, 4, 3, 0, 0, 0).unwrap()
    }
}
