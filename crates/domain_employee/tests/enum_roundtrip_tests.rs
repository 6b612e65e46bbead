//! Round-trip laws for the person-facing enumerations
//!
//! For every member of every set: the JSON form and the storage-scalar
//! form both decode back to the same member, and re-parsing the canonical
//! token is the identity.

use proptest::prelude::*;
use test_utils::generators::{
    gender_strategy, marital_status_strategy, nationality_strategy, religion_strategy,
};

macro_rules! round_trip_laws {
    ($name:ident, $ty:ty, $strategy:expr) => {
        mod $name {
            use super::*;

            proptest! {
                #[test]
                fn json_round_trip(v in $strategy) {
                    let json = serde_json::to_string(&v).unwrap();
                    let back: $ty = serde_json::from_str(&json).unwrap();
                    prop_assert_eq!(back, v);
                }

                #[test]
                fn sql_round_trip(v in $strategy) {
                    prop_assert_eq!(<$ty>::from_sql(&v.to_sql()), Ok(v));
                }

                #[test]
                fn parse_of_canonical_token_is_identity(v in $strategy) {
                    prop_assert_eq!(<$ty>::parse(v.as_str()), Ok(v));
                    prop_assert!(<$ty>::is_member(v.as_str()));
                }
            }
        }
    };
}

round_trip_laws!(gender, domain_employee::Gender, gender_strategy());
round_trip_laws!(
    marital_status,
    domain_employee::MaritalStatus,
    marital_status_strategy()
);
round_trip_laws!(
    nationality,
    domain_employee::Nationality,
    nationality_strategy()
);
round_trip_laws!(religion, domain_employee::Religion, religion_strategy());
