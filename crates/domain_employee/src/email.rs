//! Email address value object

use core_kernel::DomainError;

fn has_whitespace_or_at(s: &str) -> bool {
    s.chars().any(|c| c.is_whitespace() || c == '@')
}

/// An email address split into username and domain parts.
///
/// Light normalization and validation suitable for most use-cases without
/// attempting full RFC compliance: both parts are trimmed, the domain is
/// lowercased (the username is kept as-is), neither part may contain
/// whitespace or `@`, and the domain must contain a dot without starting
/// or ending with one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    username: String,
    domain: String,
}

impl EmailAddress {
    /// Constructs an `EmailAddress` with normalization and ordered checks.
    pub fn new(username: &str, domain: &str) -> Result<Self, DomainError> {
        let username = username.trim();
        // domain is commonly case-insensitive
        let domain = domain.trim().to_lowercase();

        if username.is_empty() {
            return Err(DomainError::empty("username"));
        }
        if domain.is_empty() {
            return Err(DomainError::empty("domain"));
        }
        if has_whitespace_or_at(username) {
            return Err(DomainError::rule("username must not contain spaces or '@'"));
        }
        if has_whitespace_or_at(&domain) {
            return Err(DomainError::rule("domain must not contain spaces or '@'"));
        }
        if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
            return Err(DomainError::rule(
                "domain must contain a dot and not start/end with a dot",
            ));
        }

        Ok(Self {
            username: username.to_owned(),
            domain,
        })
    }

    /// The local part, before `@`.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The domain part, after `@`, lowercased.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The complete address in the form `username@domain`.
    pub fn full(&self) -> String {
        format!("{}@{}", self.username, self.domain)
    }
}
