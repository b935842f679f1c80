//! Workforce Synth record types
//!
//! This crate defines the typed records produced by the generation pipeline
//! and the immutable company catalog the generators draw from:
//!
//! - `Employee` + `Recruiter` (professional profile sheet)
//! - `PsychometricProfile` (five composite traits, each bounded by two facets)
//! - `PerformanceRecord` + `DepartmentMetrics` (one sheet per department)
//! - `Catalog` (age brackets, academic background mixes, department titles)
//!
//! Nothing in here draws random numbers; generation lives in `workforce-gen`.

pub mod catalog;
pub mod employee;
pub mod error;
pub mod performance;
pub mod psychometrics;

pub use catalog::{AgeBracket, BackgroundMix, Catalog, DepartmentSpec};
pub use employee::{AcademicBackground, Department, Employee, Gender, MaritalStatus, Recruiter};
pub use error::ConfigError;
pub use performance::{DepartmentMetrics, MetricValue, PercentileBand, PerformanceLevel, PerformanceRecord};
pub use psychometrics::{PsychometricProfile, Trait, TraitScore};

/// Calendar year every temporal field is measured against.
pub const REFERENCE_YEAR: i32 = 2020;

/// Nobody is hired before this age (plus their years of study).
pub const ADULT_AGE: i32 = 18;

/// Marker written where no eligible value exists (e.g. no recruiter).
pub const SENTINEL_NONE: &str = "none";

/// Sheet names of the generated workbook.
pub mod sheets {
    pub const PROFESSIONAL_PROFILE: &str = "Professional_Profile";
    pub const PSYCHOMETRIC_INDICATORS: &str = "Psychometric_Indicators";
}
