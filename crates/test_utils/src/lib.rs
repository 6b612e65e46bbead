//! Shared test utilities for the HR domain workspace
//!
//! - [`fixtures`]: stable identifiers and instants for deterministic tests
//! - [`builders`]: prefilled valid factories so tests only override the
//!   field under test
//! - [`generators`]: proptest strategies and fake-backed text generation

pub mod builders;
pub mod fixtures;
pub mod generators;
