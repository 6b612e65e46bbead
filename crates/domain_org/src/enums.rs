//! Organization closed-set enumerations

use core_kernel::closed_set;

closed_set! {
    /// Seniority grade of a job position, intern through director.
    pub enum GradeLevel("GradeLevel", Lower) {
        Intern => "intern",
        Junior => "junior",
        Mid => "mid",
        Senior => "senior",
        Lead => "lead",
        Manager => "manager",
        Director => "director",
    }
}

closed_set! {
    /// Kind of a unit in the organization tree.
    pub enum OrganizationUnitKind("OrganizationUnitKind", Lower) {
        Division => "division",
        Department => "department",
        Team => "team",
    }
}
