use crate::Department;
use thiserror::Error;

/// Invalid generation configuration. Raised before any random draw happens.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("catalog defines no departments")]
    EmptyDepartments,

    #[error("department {0} has no job titles")]
    EmptyTitles(Department),

    #[error("department {0} is defined more than once")]
    DuplicateDepartment(Department),

    #[error("department {0} is evaluated but not defined in the catalog")]
    UndefinedDepartment(Department),

    #[error("{table} weights must be non-negative and sum to 1.0, got {total}")]
    BadWeights { table: String, total: f64 },

    #[error("age bracket {min}-{max} is invalid (expected {adult} <= min <= max)")]
    BadAgeBracket { min: u32, max: u32, adult: u32 },

    #[error("catalog defines no age brackets")]
    EmptyAgeBrackets,

    #[error("{name} must be a probability in [0, 1], got {value}")]
    BadProbability { name: String, value: f64 },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: String, value: f64 },
}
