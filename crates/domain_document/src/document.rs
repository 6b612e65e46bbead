//! Document composite value object

use chrono::{DateTime, Utc};

use crate::enums::DocumentType;
use crate::file_reference::FileReference;
use crate::validity::ValidityPeriod;

/// An employee document: its kind, the stored file, and the validity
/// period.
///
/// Every part is valid by construction, so assembly cannot fail; the
/// composite simply bundles them and delegates the expiry queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    kind: DocumentType,
    file: FileReference,
    validity: ValidityPeriod,
}

impl Document {
    pub fn new(kind: DocumentType, file: FileReference, validity: ValidityPeriod) -> Self {
        Self {
            kind,
            file,
            validity,
        }
    }

    pub fn kind(&self) -> DocumentType {
        self.kind
    }

    pub fn file(&self) -> &FileReference {
        &self.file
    }

    pub fn validity(&self) -> ValidityPeriod {
        self.validity
    }

    /// Delegates to the validity period.
    pub fn issued_date(&self) -> DateTime<Utc> {
        self.validity.issued_date()
    }

    /// Delegates to the validity period.
    pub fn expiry_date(&self) -> Option<DateTime<Utc>> {
        self.validity.expiry_date()
    }

    pub fn has_expiry(&self) -> bool {
        self.validity.has_expiry()
    }

    pub fn is_expired(&self, at: DateTime<Utc>) -> bool {
        self.validity.is_expired(at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn sample() -> Document {
        let file = FileReference::new(
            "https://storage.example.com/docs/nda.pdf",
            "nda.pdf",
            "application/pdf",
        )
        .unwrap();
        let issued = Utc.with_ymd_and_hms(2024, 1, 10, 10, 0, 0).unwrap();
        let validity = ValidityPeriod::new(issued, Some(issued + Duration::days(365))).unwrap();
        Document::new(DocumentType::Nda, file, validity)
    }

    #[test]
    fn exposes_parts_and_delegated_queries() {
        let doc = sample();
        assert_eq!(doc.kind(), DocumentType::Nda);
        assert_eq!(doc.file().filename(), "nda.pdf");
        assert!(doc.has_expiry());
        assert_eq!(doc.issued_date(), doc.validity().issued_date());
    }

    #[test]
    fn expiry_delegation_is_strictly_after() {
        let doc = sample();
        let expiry = doc.expiry_date().unwrap();
        assert!(!doc.is_expired(expiry));
        assert!(doc.is_expired(expiry + Duration::nanoseconds(1)));
    }
}
