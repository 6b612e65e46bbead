//! Document validity period

use chrono::{DateTime, Utc};
use core_kernel::DomainError;

/// The validity period of a document: an issue instant and an optional
/// expiry instant.
///
/// `None` expiry means the document never expires. Expiration happens
/// strictly after the expiry instant: a document queried exactly at its
/// expiry is still valid. Time zone handling is the caller's concern; pass
/// `Utc::now()` explicitly for current-time checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidityPeriod {
    issued_date: DateTime<Utc>,
    expiry_date: Option<DateTime<Utc>>,
}

impl ValidityPeriod {
    /// Constructs a `ValidityPeriod`, rejecting an expiry before the issue
    /// instant. Expiry equal to the issue instant is allowed.
    pub fn new(
        issued_date: DateTime<Utc>,
        expiry_date: Option<DateTime<Utc>>,
    ) -> Result<Self, DomainError> {
        if let Some(expiry) = expiry_date {
            if expiry < issued_date {
                return Err(DomainError::rule("expiry date cannot be before issued date"));
            }
        }
        Ok(Self {
            issued_date,
            expiry_date,
        })
    }

    pub fn issued_date(&self) -> DateTime<Utc> {
        self.issued_date
    }

    /// The expiry instant, if any; `None` means no expiration.
    pub fn expiry_date(&self) -> Option<DateTime<Utc>> {
        self.expiry_date
    }

    pub fn has_expiry(&self) -> bool {
        self.expiry_date.is_some()
    }

    /// Whether the period is expired at `at`.
    ///
    /// Always false without an expiry date; otherwise true iff `at` is
    /// strictly after the expiry instant.
    pub fn is_expired(&self, at: DateTime<Utc>) -> bool {
        match self.expiry_date {
            Some(expiry) => at > expiry,
            None => false,
        }
    }
}
