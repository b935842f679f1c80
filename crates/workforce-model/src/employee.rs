//! Professional profile records.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::SENTINEL_NONE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" => Ok(Gender::Male),
            "F" => Ok(Gender::Female),
            other => Err(format!("unknown gender `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaritalStatus {
    Married,
    Single,
}

impl MaritalStatus {
    pub fn label(self) -> &'static str {
        match self {
            MaritalStatus::Married => "Married",
            MaritalStatus::Single => "Single",
        }
    }
}

impl FromStr for MaritalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Married" => Ok(MaritalStatus::Married),
            "Single" => Ok(MaritalStatus::Single),
            other => Err(format!("unknown marital status `{other}`")),
        }
    }
}

/// Highest completed education level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AcademicBackground {
    HighSchool,
    Bachelor,
    Msc,
    Phd,
}

impl AcademicBackground {
    /// Order matches the weight columns of `BackgroundMix`.
    pub const ALL: [AcademicBackground; 4] = [
        AcademicBackground::HighSchool,
        AcademicBackground::Bachelor,
        AcademicBackground::Msc,
        AcademicBackground::Phd,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AcademicBackground::HighSchool => "High School",
            AcademicBackground::Bachelor => "Bachelor",
            AcademicBackground::Msc => "MSc",
            AcademicBackground::Phd => "PhD",
        }
    }

    /// Years spent studying after turning adult.
    pub fn study_years(self) -> i32 {
        match self {
            AcademicBackground::HighSchool => 0,
            AcademicBackground::Bachelor => 3,
            AcademicBackground::Msc => 5,
            AcademicBackground::Phd => 9,
        }
    }
}

impl FromStr for AcademicBackground {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AcademicBackground::ALL
            .into_iter()
            .find(|b| b.label() == s)
            .ok_or_else(|| format!("unknown academic background `{s}`"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Department {
    Sales,
    Product,
    Finance,
    Hr,
    Legal,
    Strategy,
    Technology,
}

impl Department {
    pub const ALL: [Department; 7] = [
        Department::Sales,
        Department::Product,
        Department::Finance,
        Department::Hr,
        Department::Legal,
        Department::Strategy,
        Department::Technology,
    ];

    /// Label as written in the profile sheet; also the department sheet name.
    pub fn label(self) -> &'static str {
        match self {
            Department::Sales => "Sales",
            Department::Product => "Product",
            Department::Finance => "Finance",
            Department::Hr => "HR",
            Department::Legal => "Legal",
            Department::Strategy => "Strategy",
            Department::Technology => "Technology",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| format!("unknown department `{s}`"))
    }
}

/// Who hired an employee.
///
/// `None` is the explicit "no eligible recruiter" sentinel, not a missing value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Recruiter {
    #[default]
    None,
    Assigned { id: Uuid, name: String },
}

impl Recruiter {
    pub fn id(&self) -> Option<Uuid> {
        match self {
            Recruiter::None => None,
            Recruiter::Assigned { id, .. } => Some(*id),
        }
    }

    pub fn name_label(&self) -> &str {
        match self {
            Recruiter::None => SENTINEL_NONE,
            Recruiter::Assigned { name, .. } => name,
        }
    }

    pub fn id_label(&self) -> String {
        match self {
            Recruiter::None => SENTINEL_NONE.to_string(),
            Recruiter::Assigned { id, .. } => id.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub marital_status: MaritalStatus,
    /// Years since the employee left; 0 while still employed.
    pub time_left: u32,
    pub works_here: bool,
    pub birthday: NaiveDate,
    pub children: u32,
    pub academic_background: AcademicBackground,
    pub hire_date: NaiveDate,
    pub working_experience: u32,
    pub previous_employers: u32,
    pub salary: u64,
    pub department: Department,
    pub job_title: String,
    pub recruiter: Recruiter,
}

impl Employee {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn birth_year(&self) -> i32 {
        self.birthday.year()
    }

    pub fn hire_year(&self) -> i32 {
        self.hire_date.year()
    }

    /// Earliest year this employee could have been hired.
    pub fn earliest_hire_year(&self) -> i32 {
        self.birth_year() + crate::ADULT_AGE + self.academic_background.study_years()
    }

    /// Last calendar year spent at the company.
    pub fn last_active_year(&self, reference_year: i32) -> i32 {
        reference_year - self.time_left as i32
    }

    /// Whole years between hiring and leaving (or `reference_year`).
    pub fn tenure_years(&self, reference_year: i32) -> i32 {
        self.last_active_year(reference_year) - self.hire_year()
    }
}
