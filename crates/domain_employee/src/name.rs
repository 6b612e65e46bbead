//! Employee name value object

use core_kernel::DomainError;

/// A person's name broken into common parts.
///
/// All parts are stored trimmed; only the first and last names are
/// required. The nickname is an extra label and is never part of
/// [`full_name`](EmployeeName::full_name).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeName {
    first: String,
    middle: Option<String>,
    last: String,
    nick: Option<String>,
}

impl EmployeeName {
    /// Constructs an `EmployeeName`, trimming every part.
    ///
    /// Optional parts that trim to nothing are stored as absent.
    pub fn new(
        first: &str,
        middle: &str,
        last: &str,
        nick: &str,
    ) -> Result<Self, DomainError> {
        let first = first.trim();
        let middle = middle.trim();
        let last = last.trim();
        let nick = nick.trim();

        if first.is_empty() {
            return Err(DomainError::empty("first name"));
        }
        if last.is_empty() {
            return Err(DomainError::empty("last name"));
        }

        Ok(Self {
            first: first.to_owned(),
            middle: (!middle.is_empty()).then(|| middle.to_owned()),
            last: last.to_owned(),
            nick: (!nick.is_empty()).then(|| nick.to_owned()),
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.middle.as_deref()
    }

    pub fn last_name(&self) -> &str {
        &self.last
    }

    pub fn nick_name(&self) -> Option<&str> {
        self.nick.as_deref()
    }

    /// First, middle (when present), and last name joined by single spaces.
    pub fn full_name(&self) -> String {
        let mut parts = Vec::with_capacity(3);
        parts.push(self.first.as_str());
        if let Some(middle) = self.middle.as_deref() {
            parts.push(middle);
        }
        parts.push(self.last.as_str());
        parts.join(" ")
    }
}
