//! Document Domain
//!
//! Employee document handling: the closed-set document and contract
//! enumerations, the `FileReference` and `ValidityPeriod` value objects,
//! and the `Document` composite that bundles them.
//!
//! Expiry is never a stored flag; it is a pure computation over the
//! immutable validity period (`at` strictly after the expiry instant).

pub mod document;
pub mod enums;
pub mod file_reference;
pub mod validity;

pub use document::Document;
pub use enums::{ContractStatus, ContractType, DocumentType};
pub use file_reference::FileReference;
pub use validity::ValidityPeriod;
