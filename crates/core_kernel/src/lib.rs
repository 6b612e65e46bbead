//! Core Kernel - Foundational types for the HR domain model
//!
//! This crate provides the building blocks used across all domain modules:
//! - A generic closed-set enumeration abstraction with a uniform
//!   parse/serialize/scan contract
//! - Strongly-typed UUID identifiers
//! - The shared validation error taxonomy

pub mod closed_set;
pub mod error;
pub mod identifiers;

pub use closed_set::{EnumError, Fold, SqlValue};
pub use error::DomainError;
pub use identifiers::{JobPositionId, OrganizationUnitId};
