//! Phone number value object

use core_kernel::DomainError;

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// A phone number split into country code and local number.
///
/// Both parts are digits-only after trimming; a single leading `+` is
/// stripped from the country code. The local number is stored exactly as
/// supplied, leading zeros included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    country_code: String,
    number: String,
}

impl PhoneNumber {
    /// Constructs a `PhoneNumber` with normalization and ordered checks.
    pub fn new(country_code: &str, number: &str) -> Result<Self, DomainError> {
        let country_code = country_code.trim();
        let country_code = country_code.strip_prefix('+').unwrap_or(country_code);
        let number = number.trim();

        if country_code.is_empty() {
            return Err(DomainError::empty("country code"));
        }
        if number.is_empty() {
            return Err(DomainError::empty("number"));
        }
        if !is_digits(country_code) {
            return Err(DomainError::rule("country code must contain digits only"));
        }
        if !is_digits(number) {
            return Err(DomainError::rule("number must contain digits only"));
        }

        Ok(Self {
            country_code: country_code.to_owned(),
            number: number.to_owned(),
        })
    }

    /// The country code, without `+`.
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// The local/national number exactly as supplied.
    pub fn number(&self) -> &str {
        &self.number
    }

    /// E.164-like concatenation of country code and number, without `+`.
    pub fn full(&self) -> String {
        format!("{}{}", self.country_code, self.number)
    }
}
