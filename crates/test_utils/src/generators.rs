//! Property-based test generators and fake text
//!
//! Proptest strategies for the domain enumerations and salary bands, plus
//! fake-backed text generation for the length-constrained factory fields.

use domain_document::DocumentType;
use domain_employee::{Gender, MaritalStatus, Nationality, Religion};
use domain_org::{GradeLevel, OrganizationUnitKind, SalaryRange};
use fake::faker::lorem::en::Sentence;
use fake::Fake;
use proptest::prelude::*;
use proptest::sample::select;

/// Strategy for generating valid Gender values
pub fn gender_strategy() -> impl Strategy<Value = Gender> {
    select(Gender::VARIANTS)
}

/// Strategy for generating valid MaritalStatus values
pub fn marital_status_strategy() -> impl Strategy<Value = MaritalStatus> {
    select(MaritalStatus::VARIANTS)
}

/// Strategy for generating valid Nationality values
pub fn nationality_strategy() -> impl Strategy<Value = Nationality> {
    select(Nationality::VARIANTS)
}

/// Strategy for generating valid Religion values
pub fn religion_strategy() -> impl Strategy<Value = Religion> {
    select(Religion::VARIANTS)
}

/// Strategy for generating valid DocumentType values
pub fn document_type_strategy() -> impl Strategy<Value = DocumentType> {
    select(DocumentType::VARIANTS)
}

/// Strategy for generating valid GradeLevel values
pub fn grade_level_strategy() -> impl Strategy<Value = GradeLevel> {
    select(GradeLevel::VARIANTS)
}

/// Strategy for generating valid OrganizationUnitKind values
pub fn organization_unit_kind_strategy() -> impl Strategy<Value = OrganizationUnitKind> {
    select(OrganizationUnitKind::VARIANTS)
}

/// Strategy for generating well-formed salary bands
pub fn salary_range_strategy() -> impl Strategy<Value = SalaryRange> {
    (0i64..1_000_000_000, 0i64..1_000_000_000, proptest::bool::ANY).prop_map(
        |(min, span, usd)| {
            let code = if usd { "USD" } else { "IDR" };
            SalaryRange::new(min, min + span, code).expect("bounds are ordered")
        },
    )
}

/// Generated prose long enough for the 50-character description minimum.
pub fn long_description() -> String {
    let mut text: String = Sentence(8..14).fake();
    while text.chars().count() < 50 {
        text.push(' ');
        text.push_str(&Sentence(8..14).fake::<String>());
    }
    text
}
