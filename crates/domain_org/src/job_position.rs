//! Job position entity and factory

use chrono::{DateTime, Utc};
use core_kernel::{DomainError, JobPositionId};

use crate::enums::GradeLevel;
use crate::salary::SalaryRange;

/// A job role within the organization.
///
/// Immutable once built; construction goes through [`JobPositionFactory`]
/// only.
#[derive(Debug, Clone, PartialEq)]
pub struct JobPosition {
    id: JobPositionId,
    title: String,
    description: String,
    grade_level: GradeLevel,
    salary_range: SalaryRange,
    created_at: DateTime<Utc>,
}

impl JobPosition {
    pub fn id(&self) -> JobPositionId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn grade_level(&self) -> GradeLevel {
        self.grade_level
    }

    pub fn salary_range(&self) -> SalaryRange {
        self.salary_range
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Raw input for constructing a [`JobPosition`].
///
/// Validation order is contractual: id, title (empty before length),
/// description (empty before length), created-at defaulting, grade level,
/// salary range. The first failure is returned and later checks never run.
#[derive(Debug, Clone, Default)]
pub struct JobPositionFactory {
    pub id: String,
    pub title: String,
    pub description: String,
    pub grade_level: String,
    pub salary_min: i64,
    pub salary_max: i64,
    pub salary_currency: String,
    /// Unset defaults to now.
    pub created_at: Option<DateTime<Utc>>,
}

impl JobPositionFactory {
    /// Validates the raw input and assembles an immutable [`JobPosition`].
    pub fn create(self) -> Result<JobPosition, DomainError> {
        let id = JobPositionId::parse(&self.id)?;

        if self.title.is_empty() {
            return Err(DomainError::empty("title"));
        }
        if self.title.chars().count() < 3 {
            return Err(DomainError::too_short("title", 3));
        }

        if self.description.is_empty() {
            return Err(DomainError::empty("description"));
        }
        if self.description.chars().count() < 50 {
            return Err(DomainError::too_short("description", 50));
        }

        let created_at = self.created_at.unwrap_or_else(Utc::now);

        let grade_level = GradeLevel::parse(&self.grade_level)?;
        let salary_range =
            SalaryRange::new(self.salary_min, self.salary_max, &self.salary_currency)?;

        Ok(JobPosition {
            id,
            title: self.title,
            description: self.description,
            grade_level,
            salary_range,
            created_at,
        })
    }
}
