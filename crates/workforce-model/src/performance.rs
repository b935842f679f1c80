//! Annual performance evaluations.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use crate::Department;

/// Hours in a working year; overtime is a share of this baseline.
pub const ANNUAL_HOURS: u32 = 1816;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PercentileBand {
    Bottom15,
    Mid70,
    Top15,
}

impl PercentileBand {
    /// `< 15` is the bottom band, `> 85` the top band, everything else the middle.
    pub fn from_percentile(p: f64) -> Self {
        if p < 15.0 {
            PercentileBand::Bottom15
        } else if p > 85.0 {
            PercentileBand::Top15
        } else {
            PercentileBand::Mid70
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PercentileBand::Bottom15 => "Bottom 15%",
            PercentileBand::Mid70 => "Mid 70%",
            PercentileBand::Top15 => "Top 15%",
        }
    }

    /// The label forced by the extreme bands.
    pub fn forced_level(self) -> Option<PerformanceLevel> {
        match self {
            PercentileBand::Bottom15 => Some(PerformanceLevel::Low),
            PercentileBand::Top15 => Some(PerformanceLevel::High),
            PercentileBand::Mid70 => None,
        }
    }
}

impl FromStr for PercentileBand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Bottom 15%" => Ok(PercentileBand::Bottom15),
            "Mid 70%" => Ok(PercentileBand::Mid70),
            "Top 15%" => Ok(PercentileBand::Top15),
            other => Err(format!("unknown percentile band `{other}`")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PerformanceLevel {
    Low,
    Medium,
    High,
}

impl PerformanceLevel {
    pub const ALL: [PerformanceLevel; 3] =
        [PerformanceLevel::Low, PerformanceLevel::Medium, PerformanceLevel::High];

    pub fn label(self) -> &'static str {
        match self {
            PerformanceLevel::Low => "Low",
            PerformanceLevel::Medium => "Medium",
            PerformanceLevel::High => "High",
        }
    }
}

impl FromStr for PerformanceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PerformanceLevel::ALL
            .into_iter()
            .find(|l| l.label() == s)
            .ok_or_else(|| format!("unknown performance level `{s}`"))
    }
}

/// A department-specific metric value as written to a sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Int(i64),
    /// Two-decimal quantity.
    Decimal(f64),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DepartmentMetrics {
    Hr {
        recruit_tenure_years: u64,
        avg_recruitment_months: f64,
        employees_fired: u32,
    },
    Sales {
        total_sales: u32,
        clients_asking: u32,
    },
    Product {
        total_defects: u32,
        complaining_customers: u32,
    },
    Finance {
        non_servicing_obligations: u32,
    },
    Legal {
        successful_lawsuits: u32,
        disputes_resolved: u32,
    },
    Strategy {
        total_sales: u32,
        teams: u32,
        projects: u32,
    },
    Technology {
        problematic_commits: u32,
    },
}

impl DepartmentMetrics {
    pub fn department(&self) -> Department {
        match self {
            DepartmentMetrics::Hr { .. } => Department::Hr,
            DepartmentMetrics::Sales { .. } => Department::Sales,
            DepartmentMetrics::Product { .. } => Department::Product,
            DepartmentMetrics::Finance { .. } => Department::Finance,
            DepartmentMetrics::Legal { .. } => Department::Legal,
            DepartmentMetrics::Strategy { .. } => Department::Strategy,
            DepartmentMetrics::Technology { .. } => Department::Technology,
        }
    }

    /// Column names of the department-specific metrics, in sheet order.
    pub fn columns(dept: Department) -> &'static [&'static str] {
        match dept {
            Department::Hr => &[
                "Total Time of hired employees(years)",
                "Average Recruitment Time(months)",
                "Employees Fired",
            ],
            Department::Sales => &["Total Sales", "Clients Asking"],
            Department::Product => &["Total Defects", "Number of Complaining Customers"],
            Department::Finance => &["Non-Servicing Obligations"],
            Department::Legal => &["Successful Lawsuits", "Disputes amicably resolved"],
            Department::Strategy => &["Total Sales", "Number of Teams", "Number of Projects"],
            Department::Technology => &["Problematic Code Commits"],
        }
    }

    /// Metric columns exposed to numeric typo injection. HR only exposes
    /// its fired count.
    pub fn typo_columns(dept: Department) -> &'static [&'static str] {
        match dept {
            Department::Hr => &["Employees Fired"],
            other => Self::columns(other),
        }
    }

    /// Values in the same order as `columns`.
    pub fn values(&self) -> Vec<MetricValue> {
        use MetricValue::Int;
        match *self {
            DepartmentMetrics::Hr {
                recruit_tenure_years,
                avg_recruitment_months,
                employees_fired,
            } => vec![
                Int(recruit_tenure_years as i64),
                MetricValue::Decimal(avg_recruitment_months),
                Int(employees_fired as i64),
            ],
            DepartmentMetrics::Sales {
                total_sales,
                clients_asking,
            } => vec![Int(total_sales as i64), Int(clients_asking as i64)],
            DepartmentMetrics::Product {
                total_defects,
                complaining_customers,
            } => vec![Int(total_defects as i64), Int(complaining_customers as i64)],
            DepartmentMetrics::Finance {
                non_servicing_obligations,
            } => vec![Int(non_servicing_obligations as i64)],
            DepartmentMetrics::Legal {
                successful_lawsuits,
                disputes_resolved,
            } => vec![Int(successful_lawsuits as i64), Int(disputes_resolved as i64)],
            DepartmentMetrics::Strategy {
                total_sales,
                teams,
                projects,
            } => vec![Int(total_sales as i64), Int(teams as i64), Int(projects as i64)],
            DepartmentMetrics::Technology {
                problematic_commits,
            } => vec![Int(problematic_commits as i64)],
        }
    }
}

/// One evaluation, keyed by (`employee_id`, `year`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub employee_id: Uuid,
    pub year: i32,
    /// Years since hire as of `year`.
    pub loyalty: u32,
    pub promotions: u32,
    pub bonus: u64,
    pub overtime: u32,
    pub chargeability: u32,
    pub band: PercentileBand,
    pub performance: PerformanceLevel,
    pub metrics: DepartmentMetrics,
}

impl PerformanceRecord {
    pub fn promotions_for(loyalty: u32) -> u32 {
        loyalty / 4
    }

    /// Column names shared by every department sheet.
    pub const SHARED_COLUMNS: [&'static str; 9] = [
        "ID",
        "Year",
        "Loyalty",
        "Number of Promotions",
        "Bonus",
        "Overtime",
        "Chargeability",
        "Department Percentile",
        "Performance",
    ];

    /// Shared numeric columns exposed to typo injection.
    pub const SHARED_TYPO_COLUMNS: [&'static str; 6] = [
        "Year",
        "Loyalty",
        "Number of Promotions",
        "Bonus",
        "Overtime",
        "Chargeability",
    ];
}
