//! Postal address value object

use core_kernel::DomainError;

/// A postal address broken down into common components.
///
/// All fields are stored trimmed and must be non-empty; no locale-specific
/// validation is performed beyond that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    street: String,
    city: String,
    state: String,
    postal_code: String,
    country: String,
}

impl Address {
    /// Constructs an `Address`, trimming every field and requiring each to
    /// be non-empty. Checks run in field order and stop at the first
    /// failure.
    pub fn new(
        street: &str,
        city: &str,
        state: &str,
        postal_code: &str,
        country: &str,
    ) -> Result<Self, DomainError> {
        let street = street.trim();
        let city = city.trim();
        let state = state.trim();
        let postal_code = postal_code.trim();
        let country = country.trim();

        if street.is_empty() {
            return Err(DomainError::empty("street"));
        }
        if city.is_empty() {
            return Err(DomainError::empty("city"));
        }
        if state.is_empty() {
            return Err(DomainError::empty("state"));
        }
        if postal_code.is_empty() {
            return Err(DomainError::empty("postal code"));
        }
        if country.is_empty() {
            return Err(DomainError::empty("country"));
        }

        Ok(Self {
            street: street.to_owned(),
            city: city.to_owned(),
            state: state.to_owned(),
            postal_code: postal_code.to_owned(),
            country: country.to_owned(),
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> Result<Address, DomainError> {
        Address::new("Jl. Sudirman 1", "Jakarta", "DKI Jakarta", "12190", "Indonesia")
    }

    #[test]
    fn accepts_complete_address_and_trims() {
        let addr = Address::new(
            " Jl. Sudirman 1 ",
            " Jakarta ",
            "DKI Jakarta",
            " 12190",
            "Indonesia ",
        )
        .unwrap();
        assert_eq!(addr.street(), "Jl. Sudirman 1");
        assert_eq!(addr.postal_code(), "12190");
        assert_eq!(addr.country(), "Indonesia");
    }

    #[test]
    fn rejects_first_empty_field_in_order() {
        let err = Address::new("", "Jakarta", "DKI", "12190", "ID").unwrap_err();
        assert_eq!(err.to_string(), "street cannot be empty");

        // city fails before the later empty fields are even looked at
        let err = Address::new("Jl. Sudirman 1", " ", "", "", "").unwrap_err();
        assert_eq!(err.to_string(), "city cannot be empty");

        let err = Address::new("Jl. Sudirman 1", "Jakarta", "DKI", "\t", "ID").unwrap_err();
        assert_eq!(err.to_string(), "postal code cannot be empty");
    }

    #[test]
    fn valid_address_is_ok() {
        assert!(valid().is_ok());
    }
}
