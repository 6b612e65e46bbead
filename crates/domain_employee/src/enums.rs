//! Person-facing closed-set enumerations
//!
//! Each set declares its canonical tokens and fold rule once; the
//! parse/serialize/scan contract comes from `core_kernel::closed_set!`.
//! Fold rules are deliberately not uniform: most sets lowercase, `Gender`
//! canonicalizes to upper-case single-letter codes, and `Religion` keeps
//! title-cased multi-word tokens and matches case-insensitively against
//! each of them.

use core_kernel::closed_set;

closed_set! {
    /// A person's gender code: `M`, `F`, or `U` for unknown.
    pub enum Gender("Gender", Upper) {
        Male => "M",
        Female => "F",
        Unknown => "U",
    }
}

closed_set! {
    /// A person's marital status.
    pub enum MaritalStatus("MaritalStatus", Lower) {
        Single => "single",
        Married => "married",
        Divorced => "divorced",
        Widowed => "widowed",
        Separated => "separated",
        RegisteredPartnership => "registered_partnership",
    }
}

closed_set! {
    /// Citizenship status: Indonesian national (`wni`) or foreign
    /// national (`wna`).
    pub enum Nationality("Nationality", Lower) {
        Wni => "wni",
        Wna => "wna",
    }
}

closed_set! {
    /// A person's religion/belief.
    ///
    /// The canonical tokens are the title-cased spellings; parsing matches
    /// the whole input case-insensitively so `"kristen protestan"` resolves
    /// to the canonical `"Kristen Protestan"`.
    pub enum Religion("Religion", CaseInsensitive) {
        Islam => "Islam",
        Protestant => "Kristen Protestan",
        Catholic => "Katolik",
        Hindu => "Hindu",
        Buddha => "Buddha",
        Konghucu => "Konghucu",
        Other => "Lainnya",
        None => "Tidak Ada",
    }
}

closed_set! {
    /// Current standing of an employee with the company.
    pub enum EmploymentStatus("EmploymentStatus", Lower) {
        Active => "active",
        Resigned => "resigned",
        OnLeave => "on_leave",
    }
}

closed_set! {
    /// Family relationship of a dependent or emergency contact.
    pub enum RelationshipType("RelationshipType", Lower) {
        Wife => "wife",
        Husband => "husband",
        Son => "son",
        Daughter => "daughter",
        Brother => "brother",
        Sister => "sister",
        Father => "father",
        Mother => "mother",
        FatherInLaw => "father_in_law",
        MotherInLaw => "mother_in_law",
        Grandfather => "grandfather",
        Grandmother => "grandmother",
        Uncle => "uncle",
        Aunt => "aunt",
        Cousin => "cousin",
        Nephew => "nephew",
    }
}

closed_set! {
    /// Role of a contact method for a person.
    pub enum ContactType("ContactType", Lower) {
        Primary => "primary",
        Emergency => "emergency",
        Secondary => "secondary",
        Work => "work",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::SqlValue;

    #[test]
    fn gender_folds_to_upper_single_letter() {
        assert_eq!(Gender::parse(" m "), Ok(Gender::Male));
        assert_eq!(Gender::parse("f"), Ok(Gender::Female));
        assert_eq!(Gender::parse(" M "), Gender::parse("m"));
        assert_eq!(Gender::Male.as_str(), "M");
    }

    #[test]
    fn gender_rejects_words() {
        let err = Gender::parse("male").unwrap_err();
        assert_eq!(err.to_string(), "invalid Gender: \"male\"");
    }

    #[test]
    fn marital_status_is_separator_sensitive() {
        assert!(MaritalStatus::parse("Registered_Partnership").is_ok());
        assert!(MaritalStatus::parse("registered partnership").is_err());
    }

    #[test]
    fn employment_status_on_leave_needs_underscore() {
        assert_eq!(
            EmploymentStatus::parse("ON_LEAVE"),
            Ok(EmploymentStatus::OnLeave)
        );
        assert!(EmploymentStatus::parse("on leave").is_err());
    }

    #[test]
    fn religion_preserves_title_cased_canonical_form() {
        let parsed = Religion::parse("KRISTEN PROTESTAN").unwrap();
        assert_eq!(parsed, Religion::Protestant);
        assert_eq!(parsed.as_str(), "Kristen Protestan");

        assert_eq!(Religion::parse(" tidak ada "), Ok(Religion::None));
        assert_eq!(Religion::None.as_str(), "Tidak Ada");
    }

    #[test]
    fn religion_error_carries_raw_input() {
        let err = Religion::parse("agnostic").unwrap_err();
        assert_eq!(err.to_string(), "invalid Religion: \"agnostic\"");
    }

    #[test]
    fn nationality_round_trips_through_sql() {
        for v in Nationality::VARIANTS {
            assert_eq!(Nationality::from_sql(&v.to_sql()), Ok(*v));
        }
        let err = Nationality::from_sql(&SqlValue::Float(1.0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported scan type for Nationality: float64"
        );
    }

    #[test]
    fn contact_type_json_round_trip() {
        for v in ContactType::VARIANTS {
            let json = serde_json::to_string(v).unwrap();
            let back: ContactType = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *v);
        }
    }

    #[test]
    fn relationship_type_covers_in_laws() {
        assert_eq!(
            RelationshipType::parse("Father_In_Law"),
            Ok(RelationshipType::FatherInLaw)
        );
        assert!(RelationshipType::parse("father-in-law").is_err());
    }
}
