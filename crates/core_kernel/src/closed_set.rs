//! Generic closed-set string enumerations
//!
//! Every domain enumeration (gender, marital status, document type, ...) is
//! a finite set of canonical string tokens with the same contract: parse raw
//! text into a member, serialize back to the canonical token, and cross the
//! storage boundary as a scalar. The [`closed_set!`] macro stamps out one
//! enum per concept so the contract is written exactly once; each
//! instantiation supplies its token set, its fold rule, and the type name
//! used in error messages.

use thiserror::Error;

/// How raw input is folded to canonical form before membership matching.
///
/// Folding is case-insensitive but separator-sensitive in every mode:
/// `"on_leave"` matches a canonical `on_leave`, `"on leave"` does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fold {
    /// Trim and lowercase, then match tokens byte for byte. The default.
    Lower,
    /// Trim and uppercase. Used for single-letter code sets.
    Upper,
    /// Trim, then compare case-insensitively against each canonical token.
    ///
    /// For sets whose canonical tokens carry internal spacing and mixed
    /// case that must be preserved in the stored form.
    CaseInsensitive,
}

/// Resolves trimmed, folded input to a token index, or `None` on no match.
pub fn lookup(tokens: &[&'static str], fold: Fold, raw: &str) -> Option<usize> {
    let trimmed = raw.trim();
    match fold {
        Fold::Lower => {
            let folded = trimmed.to_lowercase();
            tokens.iter().position(|t| *t == folded)
        }
        Fold::Upper => {
            let folded = trimmed.to_uppercase();
            tokens.iter().position(|t| *t == folded)
        }
        Fold::CaseInsensitive => tokens.iter().position(|t| t.eq_ignore_ascii_case(trimmed)),
    }
}

/// Errors produced by the closed-set enumeration contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EnumError {
    /// Input was not a member of the set. Carries the original raw input.
    #[error("invalid {name}: {raw:?}")]
    Invalid { name: &'static str, raw: String },

    /// A storage scalar of a kind the decoder does not accept.
    #[error("unsupported scan type for {name}: {kind}")]
    UnsupportedScan { name: &'static str, kind: &'static str },
}

impl EnumError {
    pub fn invalid(name: &'static str, raw: impl Into<String>) -> Self {
        EnumError::Invalid { name, raw: raw.into() }
    }

    pub fn unsupported(name: &'static str, kind: &'static str) -> Self {
        EnumError::UnsupportedScan { name, kind }
    }
}

/// A scalar crossing the storage boundary.
///
/// The persistence layer is an external collaborator; this type is the
/// explicit seam it reads and writes through. Enumeration decode accepts
/// `Text` and `Bytes` (treated as text); every other kind is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Bytes(Vec<u8>),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl SqlValue {
    /// A short name for the scalar kind, used in scan error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            SqlValue::Text(_) => "text",
            SqlValue::Bytes(_) => "bytes",
            SqlValue::Int(_) => "int64",
            SqlValue::Float(_) => "float64",
            SqlValue::Bool(_) => "bool",
            SqlValue::Null => "null",
        }
    }
}

/// Defines a closed-set string enumeration.
///
/// ```
/// core_kernel::closed_set! {
///     /// Example set.
///     pub enum Status("Status", Lower) {
///         Active => "active",
///         Retired => "retired",
///     }
/// }
///
/// assert_eq!(Status::parse(" ACTIVE ").unwrap(), Status::Active);
/// assert_eq!(Status::Retired.as_str(), "retired");
/// ```
///
/// The generated type parses via the named fold rule, displays and
/// serializes as its canonical token, and converts to and from [`SqlValue`]
/// at the storage boundary.
#[macro_export]
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident($label:literal, $fold:ident) {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Type name used in error and scan diagnostics.
            pub const NAME: &'static str = $label;

            /// Canonical tokens, index-aligned with [`Self::VARIANTS`].
            pub const TOKENS: &'static [&'static str] = &[ $( $token ),+ ];

            /// Every member of the set.
            pub const VARIANTS: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Returns the canonical token for this value.
            pub fn as_str(&self) -> &'static str {
                Self::TOKENS[*self as usize]
            }

            /// Reports whether `token` is, byte for byte, a canonical token.
            pub fn is_member(token: &str) -> bool {
                Self::TOKENS.contains(&token)
            }

            /// Parses raw text into a member of the set.
            ///
            /// Surrounding whitespace is trimmed and the input folded per
            /// the set's rule before matching; failure carries the original
            /// raw input.
            pub fn parse(raw: &str) -> Result<Self, $crate::closed_set::EnumError> {
                $crate::closed_set::lookup(
                    Self::TOKENS,
                    $crate::closed_set::Fold::$fold,
                    raw,
                )
                .map(|i| Self::VARIANTS[i])
                .ok_or_else(|| $crate::closed_set::EnumError::invalid(Self::NAME, raw))
            }

            /// Encodes the value as a storage scalar.
            ///
            /// Infallible: a constructed value is a member by construction.
            pub fn to_sql(&self) -> $crate::closed_set::SqlValue {
                $crate::closed_set::SqlValue::Text(self.as_str().to_owned())
            }

            /// Decodes a storage scalar, accepting text or byte payloads.
            pub fn from_sql(
                value: &$crate::closed_set::SqlValue,
            ) -> Result<Self, $crate::closed_set::EnumError> {
                match value {
                    $crate::closed_set::SqlValue::Text(s) => Self::parse(s),
                    $crate::closed_set::SqlValue::Bytes(b) => {
                        Self::parse(&String::from_utf8_lossy(b))
                    }
                    other => Err($crate::closed_set::EnumError::unsupported(
                        Self::NAME,
                        other.kind(),
                    )),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::closed_set::EnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let s = <::std::string::String as ::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                Self::parse(&s).map_err(::serde::de::Error::custom)
            }
        }
    };
}
