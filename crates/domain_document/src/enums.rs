//! Document and contract closed-set enumerations

use core_kernel::closed_set;

closed_set! {
    /// Kind of an employee document.
    ///
    /// Covers Indonesian statutory identifiers (`ktp`, `npwp`), employment
    /// paperwork, and contract attachments.
    pub enum DocumentType("DocumentType", Lower) {
        Ktp => "ktp",
        Npwp => "npwp",
        OfferingLetter => "offering_letter",
        Nda => "nda",
        Pkwt => "pkwt",
        Other => "other",
        ContractOfService => "contract_of_service",
        ScopeOfWork => "scope_of_work",
        Tnc => "tnc",
        EntireAgreement => "entire_agreement",
        Outsourcing => "outsourcing",
    }
}

closed_set! {
    /// Kind of an employment contract.
    pub enum ContractType("ContractType", Lower) {
        Pkwt => "pkwt",
        Pkwtt => "pkwtt",
        Freelance => "freelance",
        Internship => "internship",
        Permanent => "permanent",
    }
}

closed_set! {
    /// Lifecycle status of an employment contract.
    pub enum ContractStatus("ContractStatus", Lower) {
        Active => "active",
        Expired => "expired",
        Terminated => "terminated",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::SqlValue;

    #[test]
    fn document_type_parses_with_separators() {
        assert_eq!(
            DocumentType::parse(" Offering_Letter "),
            Ok(DocumentType::OfferingLetter)
        );
        assert!(DocumentType::parse("offering letter").is_err());
    }

    #[test]
    fn contract_type_and_status_round_trip_json() {
        for v in ContractType::VARIANTS {
            let back: ContractType =
                serde_json::from_str(&serde_json::to_string(v).unwrap()).unwrap();
            assert_eq!(back, *v);
        }
        for v in ContractStatus::VARIANTS {
            let back: ContractStatus =
                serde_json::from_str(&serde_json::to_string(v).unwrap()).unwrap();
            assert_eq!(back, *v);
        }
    }

    #[test]
    fn scan_contract_names_the_enum() {
        let err = DocumentType::from_sql(&SqlValue::Bool(true)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported scan type for DocumentType: bool"
        );
    }
}
