//! Scenario tests for job position construction

use domain_org::{GradeLevel, JobPositionFactory};
use test_utils::builders::job_position_factory;
use test_utils::fixtures::{IdFixtures, TemporalFixtures};
use test_utils::generators::long_description;

#[test]
fn builder_defaults_produce_a_complete_position() {
    let position = job_position_factory().create().unwrap();

    assert_eq!(position.id().to_string(), IdFixtures::uuid());
    assert_eq!(position.grade_level(), GradeLevel::Senior);
    assert_eq!(position.created_at(), TemporalFixtures::created_at());
    assert!(position.salary_range().contains(25_000_000));
}

#[test]
fn validation_order_is_contractual() {
    // id first, even when everything else is broken too
    let err = JobPositionFactory::default().create().unwrap_err();
    assert_eq!(err.to_string(), "invalid format uuid");

    // title: empty check before length check
    let mut f = job_position_factory();
    f.title = "di".into();
    assert_eq!(
        f.create().unwrap_err().to_string(),
        "title must be at least 3 characters long"
    );

    // description: the empty check fires before the length check
    let mut f = job_position_factory();
    f.description = "".into();
    f.grade_level = "boss".into();
    assert_eq!(
        f.create().unwrap_err().to_string(),
        "description cannot be empty"
    );

    // grade level is parsed before the salary band is looked at
    let mut f = job_position_factory();
    f.grade_level = "boss".into();
    f.salary_max = -1;
    assert_eq!(
        f.create().unwrap_err().to_string(),
        "invalid GradeLevel: \"boss\""
    );
}

#[test]
fn salary_band_errors_surface_verbatim() {
    let mut f = job_position_factory();
    f.salary_min = 10;
    f.salary_max = 9;
    assert_eq!(f.create().unwrap_err().to_string(), "max must be >= min");

    let mut f = job_position_factory();
    f.salary_currency = "sgd".into();
    assert_eq!(
        f.create().unwrap_err().to_string(),
        "unsupported currency: SGD"
    );
}

#[test]
fn generated_descriptions_satisfy_the_length_rule() {
    let mut f = job_position_factory();
    f.description = long_description();
    assert!(f.create().is_ok());
}
