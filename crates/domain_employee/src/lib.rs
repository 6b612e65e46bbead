//! Employee Domain
//!
//! Person-facing building blocks of the HR data model: closed-set
//! enumerations (gender, marital status, nationality, religion, employment
//! status, relationship and contact types), self-validating contact value
//! objects, and the `PersonalInfo` entity with its factory.
//!
//! Everything here is immutable once constructed; the only way to obtain an
//! instance is through a constructor or factory that has already enforced
//! every invariant.
//!
//! # Examples
//!
//! ```rust
//! use domain_employee::PersonalInfoFactory;
//!
//! let info = PersonalInfoFactory {
//!     first_name: "Jane".into(),
//!     middle_name: "".into(),
//!     nick_name: "Janey".into(),
//!     last_name: "Doe".into(),
//!     birth_date: None,
//!     place_of_birth: "Jakarta".into(),
//!     gender: "f".into(),
//!     nationality: "WNI".into(),
//!     marital_status: "single".into(),
//!     religion: "islam".into(),
//! }
//! .create()
//! .unwrap();
//!
//! assert_eq!(info.name().full_name(), "Jane Doe");
//! ```

pub mod address;
pub mod email;
pub mod enums;
pub mod name;
pub mod personal_info;
pub mod phone;

pub use address::Address;
pub use email::EmailAddress;
pub use enums::{
    ContactType, EmploymentStatus, Gender, MaritalStatus, Nationality, RelationshipType, Religion,
};
pub use name::EmployeeName;
pub use personal_info::{PersonalInfo, PersonalInfoFactory};
pub use phone::PhoneNumber;
