//! Organization Domain
//!
//! Organizational building blocks of the HR data model: the grade-level and
//! unit-kind enumerations, the `SalaryRange` value object with its
//! `{min, max, currency}` wire shape, and the `JobPosition` and
//! `OrganizationUnit` entities with their factories.
//!
//! # Examples
//!
//! ```rust
//! use domain_org::JobPositionFactory;
//! use uuid::Uuid;
//!
//! let position = JobPositionFactory {
//!     id: Uuid::new_v4().to_string(),
//!     title: "Backend Engineer".into(),
//!     description: "Designs, builds, and operates the services behind \
//!                   the employee self-service portal."
//!         .into(),
//!     grade_level: "senior".into(),
//!     salary_min: 20_000_000,
//!     salary_max: 35_000_000,
//!     salary_currency: "idr".into(),
//!     created_at: None,
//! }
//! .create()
//! .unwrap();
//!
//! assert_eq!(position.salary_range().currency().code(), "IDR");
//! ```

pub mod enums;
pub mod job_position;
pub mod organization_unit;
pub mod salary;

pub use enums::{GradeLevel, OrganizationUnitKind};
pub use job_position::{JobPosition, JobPositionFactory};
pub use organization_unit::{OrganizationUnit, OrganizationUnitFactory};
pub use salary::{Currency, SalaryRange};
