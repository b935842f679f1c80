//! Seeded generators for the Workforce Synth dataset.
//!
//! Two stages live here:
//!
//! - **profiles**: `ProfileGenerator` draws the employee table, one
//!   psychometric profile per employee, then assigns recruiters from HR
//! - **performance**: `PerformanceGenerator` derives yearly evaluations per
//!   department from a finished employee table
//!
//! Both are pure functions of their config (seed included) and the catalog.
//! `audit` re-checks a finished dataset against the same rules.

pub mod audit;
pub mod config;
pub mod identity;
pub mod performance;
pub mod profile;
pub mod recruiter;
pub mod sampling;

pub use audit::{run_audit, AuditFinding, AuditInput, AuditReport, AuditSummary, Level};
pub use config::{PerformanceConfig, ProfileConfig};
pub use identity::{index_uuid, CatalogIdentity, DateSource, IdentitySource};
pub use performance::{PerformanceGenerator, RecruitLedger, RecruitSummary};
pub use profile::{generate_population, Population, ProfileGenerator};
pub use recruiter::{assign_recruiters, HireDateIndex, RecruiterStats};
pub use sampling::SeededRng;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;
    use workforce_model::{
        AcademicBackground, Department, Employee, Gender, MaritalStatus, Recruiter,
    };

    /// Still-employed employee with a fixed name derived from `index`.
    pub fn employee(index: u64, department: Department, hire_date: NaiveDate) -> Employee {
        Employee {
            id: crate::index_uuid(index),
            first_name: format!("First{index}"),
            last_name: format!("Last{index}"),
            gender: Gender::Female,
            marital_status: MaritalStatus::Single,
            time_left: 0,
            works_here: true,
            birthday: NaiveDate::from_ymd_opt(1970, 6, 15).unwrap(),
            children: 1,
            academic_background: AcademicBackground::Bachelor,
            hire_date,
            working_experience: 10,
            previous_employers: 2,
            salary: 40_000,
            department,
            job_title: "Analyst".to_string(),
            recruiter: Recruiter::None,
        }
    }
}
