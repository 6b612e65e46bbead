//! Personal info entity and factory

use chrono::{DateTime, Utc};
use core_kernel::DomainError;

use crate::enums::{Gender, MaritalStatus, Nationality, Religion};
use crate::name::EmployeeName;

/// Personal information of an employee.
///
/// Holds only already-validated value objects and enumerations; there is no
/// way to mutate a field after construction. Built exclusively through
/// [`PersonalInfoFactory`].
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalInfo {
    name: EmployeeName,
    birth_date: DateTime<Utc>,
    place_of_birth: String,
    gender: Gender,
    nationality: Nationality,
    marital_status: MaritalStatus,
    religion: Religion,
}

impl PersonalInfo {
    pub fn name(&self) -> &EmployeeName {
        &self.name
    }

    pub fn birth_date(&self) -> DateTime<Utc> {
        self.birth_date
    }

    pub fn place_of_birth(&self) -> &str {
        &self.place_of_birth
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn nationality(&self) -> Nationality {
        self.nationality
    }

    pub fn marital_status(&self) -> MaritalStatus {
        self.marital_status
    }

    pub fn religion(&self) -> Religion {
        self.religion
    }
}

/// Raw input for constructing a [`PersonalInfo`].
///
/// Same field names as the entity, primitive types throughout. Validation
/// runs in a fixed order and stops at the first failure: name construction,
/// birth date defaulting, place of birth, then nationality, gender, marital
/// status, and religion parsing. Enumeration parse failures surface
/// verbatim.
#[derive(Debug, Clone, Default)]
pub struct PersonalInfoFactory {
    pub first_name: String,
    pub middle_name: String,
    pub nick_name: String,
    pub last_name: String,
    /// Unset defaults to now.
    pub birth_date: Option<DateTime<Utc>>,
    pub place_of_birth: String,
    pub gender: String,
    pub nationality: String,
    pub marital_status: String,
    pub religion: String,
}

impl PersonalInfoFactory {
    /// Validates the raw input and assembles an immutable [`PersonalInfo`].
    pub fn create(self) -> Result<PersonalInfo, DomainError> {
        let name = EmployeeName::new(
            &self.first_name,
            &self.middle_name,
            &self.last_name,
            &self.nick_name,
        )?;

        let birth_date = self.birth_date.unwrap_or_else(Utc::now);

        if self.place_of_birth.is_empty() {
            return Err(DomainError::empty("place of birth"));
        }

        let nationality = Nationality::parse(&self.nationality)?;
        let gender = Gender::parse(&self.gender)?;
        let marital_status = MaritalStatus::parse(&self.marital_status)?;
        let religion = Religion::parse(&self.religion)?;

        Ok(PersonalInfo {
            name,
            birth_date,
            place_of_birth: self.place_of_birth,
            gender,
            nationality,
            marital_status,
            religion,
        })
    }
}
