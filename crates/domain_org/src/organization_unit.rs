//! Organization unit entity and factory

use chrono::{DateTime, Utc};
use core_kernel::{DomainError, OrganizationUnitId};

use crate::enums::OrganizationUnitKind;

/// A unit within the organization tree: a division, department, or team.
///
/// A unit without a parent is a root; absence of the parent id is
/// meaningful, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizationUnit {
    id: OrganizationUnitId,
    name: String,
    parent_unit_id: Option<OrganizationUnitId>,
    kind: OrganizationUnitKind,
    created_at: DateTime<Utc>,
}

impl OrganizationUnit {
    pub fn id(&self) -> OrganizationUnitId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent_unit_id(&self) -> Option<OrganizationUnitId> {
        self.parent_unit_id
    }

    pub fn kind(&self) -> OrganizationUnitKind {
        self.kind
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Raw input for constructing an [`OrganizationUnit`].
///
/// Validation order is contractual: id, parent id (when supplied), name
/// (empty before length), created-at defaulting, kind (empty before
/// membership).
#[derive(Debug, Clone, Default)]
pub struct OrganizationUnitFactory {
    pub id: String,
    pub name: String,
    /// Root units leave this unset.
    pub parent_unit_id: Option<String>,
    pub kind: String,
    /// Unset defaults to now.
    pub created_at: Option<DateTime<Utc>>,
}

impl OrganizationUnitFactory {
    /// Validates the raw input and assembles an immutable
    /// [`OrganizationUnit`].
    pub fn create(self) -> Result<OrganizationUnit, DomainError> {
        let id = OrganizationUnitId::parse(&self.id)?;

        // An empty parent string means "root", same as leaving it unset.
        let parent_unit_id = match self.parent_unit_id.as_deref() {
            Some(raw) if !raw.is_empty() => Some(
                OrganizationUnitId::parse(raw)
                    .map_err(|_| DomainError::rule("invalid parent unit id"))?,
            ),
            _ => None,
        };

        if self.name.is_empty() {
            return Err(DomainError::empty("name"));
        }
        if self.name.chars().count() < 3 {
            return Err(DomainError::too_short("name", 3));
        }

        let created_at = self.created_at.unwrap_or_else(Utc::now);

        if self.kind.is_empty() {
            return Err(DomainError::empty("type"));
        }
        let kind = OrganizationUnitKind::parse(&self.kind)?;

        Ok(OrganizationUnit {
            id,
            name: self.name,
            parent_unit_id,
            kind,
            created_at,
        })
    }
}
