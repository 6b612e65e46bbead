//! Salary band value object

use core_kernel::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Currencies a salary band may be denominated in.
///
/// Deliberately restricted: payroll only settles in these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Currency {
    Idr,
    Usd,
}

impl Currency {
    /// Returns the ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Idr => "IDR",
            Currency::Usd => "USD",
        }
    }

    /// Parses a currency code, trimming and uppercasing first.
    ///
    /// Unknown codes report the normalized form, not the raw input.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let code = raw.trim().to_uppercase();
        match code.as_str() {
            "" => Err(DomainError::empty("currency")),
            "IDR" => Ok(Currency::Idr),
            "USD" => Ok(Currency::Usd),
            _ => Err(DomainError::UnsupportedCurrency(code)),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Currency::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// A salary band for a role or grade, in integer minor units.
///
/// `min` is non-negative and `max >= min`. The wire shape is
/// `{"min": n, "max": n, "currency": "IDR"}`; deserializing normalizes the
/// currency casing before validating, so `"usd"` is accepted and stored as
/// `USD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SalaryRange {
    min: i64,
    max: i64,
    currency: Currency,
}

impl SalaryRange {
    /// Constructs a `SalaryRange` with ordered checks: non-negative `min`,
    /// `max >= min`, then currency normalization and the allow-list.
    pub fn new(min: i64, max: i64, currency: &str) -> Result<Self, DomainError> {
        if min < 0 {
            return Err(DomainError::rule("min must be >= 0"));
        }
        if max < min {
            return Err(DomainError::rule("max must be >= min"));
        }
        let currency = Currency::parse(currency)?;
        Ok(Self { min, max, currency })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Whether `amount` falls inside the band, bounds included.
    pub fn contains(&self, amount: i64) -> bool {
        amount >= self.min && amount <= self.max
    }
}

impl<'de> Deserialize<'de> for SalaryRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wire {
            min: i64,
            max: i64,
            currency: String,
        }

        let wire = Wire::deserialize(deserializer)?;
        SalaryRange::new(wire.min, wire.max, &wire.currency).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_currency_casing() {
        assert_eq!(SalaryRange::new(0, 10, "usd").unwrap().currency(), Currency::Usd);
        assert_eq!(
            SalaryRange::new(0, 10, " IDR ").unwrap().currency(),
            Currency::Idr
        );
    }

    #[test]
    fn ordered_checks() {
        let err = SalaryRange::new(-1, 10, "bad").unwrap_err();
        assert_eq!(err.to_string(), "min must be >= 0");

        let err = SalaryRange::new(10, 9, "bad").unwrap_err();
        assert_eq!(err.to_string(), "max must be >= min");

        let err = SalaryRange::new(0, 10, "  ").unwrap_err();
        assert_eq!(err.to_string(), "currency cannot be empty");

        let err = SalaryRange::new(0, 10, "eur").unwrap_err();
        assert_eq!(err.to_string(), "unsupported currency: EUR");
    }

    #[test]
    fn equal_bounds_are_allowed() {
        let band = SalaryRange::new(5, 5, "IDR").unwrap();
        assert!(band.contains(5));
        assert!(!band.contains(4));
    }

    #[test]
    fn wire_shape_round_trip() {
        let band = SalaryRange::new(1_000, 2_000, "usd").unwrap();
        let json = serde_json::to_string(&band).unwrap();
        assert_eq!(json, r#"{"min":1000,"max":2000,"currency":"USD"}"#);
        let back: SalaryRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, band);
    }

    #[test]
    fn deserialize_normalizes_then_validates() {
        let band: SalaryRange =
            serde_json::from_str(r#"{"min":1,"max":2,"currency":" idr "}"#).unwrap();
        assert_eq!(band.currency(), Currency::Idr);

        let err = serde_json::from_str::<SalaryRange>(r#"{"min":5,"max":2,"currency":"IDR"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("max must be >= min"));

        let err = serde_json::from_str::<SalaryRange>(r#"{"min":1,"max":2,"currency":"SGD"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("unsupported currency: SGD"));
    }
}
