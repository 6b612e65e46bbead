//! Prefilled valid factories
//!
//! Each function returns a factory whose every field already passes
//! validation, so a test overrides only the field it is probing.

use domain_employee::PersonalInfoFactory;
use domain_org::{JobPositionFactory, OrganizationUnitFactory};

use crate::fixtures::{IdFixtures, TemporalFixtures};
use crate::generators::long_description;

/// A personal-info factory that passes every check.
pub fn personal_info_factory() -> PersonalInfoFactory {
    PersonalInfoFactory {
        first_name: "Jane".into(),
        middle_name: "".into(),
        nick_name: "Janey".into(),
        last_name: "Doe".into(),
        birth_date: Some(TemporalFixtures::birth_date()),
        place_of_birth: "Jakarta".into(),
        gender: "F".into(),
        nationality: "wni".into(),
        marital_status: "single".into(),
        religion: "Islam".into(),
    }
}

/// A job-position factory that passes every check.
pub fn job_position_factory() -> JobPositionFactory {
    JobPositionFactory {
        id: IdFixtures::uuid().into(),
        title: "Backend Engineer".into(),
        description: long_description(),
        grade_level: "senior".into(),
        salary_min: 20_000_000,
        salary_max: 35_000_000,
        salary_currency: "IDR".into(),
        created_at: Some(TemporalFixtures::created_at()),
    }
}

/// An organization-unit factory for a root department.
pub fn organization_unit_factory() -> OrganizationUnitFactory {
    OrganizationUnitFactory {
        id: IdFixtures::uuid().into(),
        name: "Platform Engineering".into(),
        parent_unit_id: None,
        kind: "department".into(),
        created_at: Some(TemporalFixtures::created_at()),
    }
}
