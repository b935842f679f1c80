//! Company catalog: the fixed distribution tables the generators draw from.
//!
//! The catalog is plain data. Generators borrow it; nothing mutates it after
//! `validate()` succeeds, so alternate catalogs (fewer departments, skewed age
//! mixes) can be swapped in for tests without touching generation code.

use crate::{AcademicBackground, ConfigError, Department, ADULT_AGE};

/// Weight tolerance when checking that a categorical table sums to 1.
const WEIGHT_EPSILON: f64 = 1e-6;

/// Academic background weights, ordered like `AcademicBackground::ALL`.
#[derive(Debug, Clone, PartialEq)]
pub enum BackgroundMix {
    Uniform([f64; 4]),
    /// Ages below `pivot` use `younger`, the rest use `older`.
    SplitAtAge {
        pivot: u32,
        younger: [f64; 4],
        older: [f64; 4],
    },
}

impl BackgroundMix {
    pub fn weights_for(&self, age: u32) -> &[f64; 4] {
        match self {
            BackgroundMix::Uniform(w) => w,
            BackgroundMix::SplitAtAge {
                pivot,
                younger,
                older,
            } => {
                if age < *pivot {
                    younger
                } else {
                    older
                }
            }
        }
    }

    fn tables(&self) -> Vec<&[f64; 4]> {
        match self {
            BackgroundMix::Uniform(w) => vec![w],
            BackgroundMix::SplitAtAge { younger, older, .. } => vec![younger, older],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AgeBracket {
    /// Inclusive lower bound.
    pub min_age: u32,
    /// Upper bound of the uniform age draw.
    pub max_age: u32,
    pub weight: f64,
    pub backgrounds: BackgroundMix,
}

impl AgeBracket {
    pub fn label(&self) -> String {
        format!("{}-{}", self.min_age, self.max_age)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DepartmentSpec {
    pub department: Department,
    pub titles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub age_brackets: Vec<AgeBracket>,
    /// Order matters: department draws index into this list.
    pub departments: Vec<DepartmentSpec>,
    /// Order in which department sheets are generated and corrupted.
    pub evaluation_order: Vec<Department>,
}

impl Default for Catalog {
    fn default() -> Self {
        let settled = [0.1, 0.45, 0.4, 0.05];
        let age_brackets = vec![
            AgeBracket {
                min_age: 18,
                max_age: 23,
                weight: 0.05,
                backgrounds: BackgroundMix::Uniform([0.7, 0.3, 0.0, 0.0]),
            },
            AgeBracket {
                min_age: 24,
                max_age: 29,
                weight: 0.75,
                backgrounds: BackgroundMix::SplitAtAge {
                    pivot: 27,
                    younger: [0.2, 0.6, 0.2, 0.0],
                    older: settled,
                },
            },
            AgeBracket {
                min_age: 30,
                max_age: 44,
                weight: 0.15,
                backgrounds: BackgroundMix::Uniform(settled),
            },
            AgeBracket {
                min_age: 45,
                max_age: 54,
                weight: 0.04,
                backgrounds: BackgroundMix::Uniform(settled),
            },
            AgeBracket {
                min_age: 55,
                max_age: 65,
                weight: 0.01,
                backgrounds: BackgroundMix::Uniform(settled),
            },
        ];

        let dept = |department: Department, titles: &[&str]| DepartmentSpec {
            department,
            titles: titles.iter().map(|t| t.to_string()).collect(),
        };
        let departments = vec![
            dept(
                Department::Sales,
                &[
                    "Director of Sales",
                    "Sales Manager",
                    "Area Sales Manager",
                    "Sales Executive",
                    "Sales Representative",
                    "Brand Ambassador",
                    "Sales Associate",
                ],
            ),
            dept(
                Department::Product,
                &[
                    "Production Manager",
                    "Production Technician",
                    "Product Integration Assistant",
                    "Product Communications Planner",
                    "Product Brand Associate",
                    "Product Implementation Manager",
                    "Product Creative Analyst",
                ],
            ),
            dept(
                Department::Finance,
                &[
                    "Pricing Analyst",
                    "Financial Analyst",
                    "Credit Risk Analyst",
                    "Portfolio Analyst",
                    "Investment Manager",
                    "Credit Risk Manager",
                    "Finance Manager",
                ],
            ),
            dept(
                Department::Hr,
                &[
                    "Recruiting Manager",
                    "Recruiting Assistant",
                    "Talent Consultant",
                    "Benefits Counselor",
                    "Retention Specialist",
                    "Workforce Analyst",
                    "HR Coordinator",
                ],
            ),
            dept(
                Department::Legal,
                &[
                    "Resolution Specialist",
                    "Legal Analyst",
                    "Legal Research Analyst",
                    "Manager Legal",
                    "Defense Attorney",
                    "Patent Attorney",
                    "Attorney General",
                ],
            ),
            dept(
                Department::Strategy,
                &[
                    "CIO",
                    "CEO",
                    "Strategy Director",
                    "Strategic Planner",
                    "Business Strategy Manager",
                    "Strategy Analyst",
                    "Business Planner",
                ],
            ),
            dept(
                Department::Technology,
                &[
                    "Information Security Manager",
                    "IT Support",
                    "IT Director",
                    "Software Engineer",
                    "Database Administrator",
                    "Network Engineer",
                    "Software Engineering Manager",
                ],
            ),
        ];

        Self {
            age_brackets,
            departments,
            evaluation_order: vec![
                Department::Hr,
                Department::Sales,
                Department::Product,
                Department::Finance,
                Department::Legal,
                Department::Strategy,
                Department::Technology,
            ],
        }
    }
}

impl Catalog {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.age_brackets.is_empty() {
            return Err(ConfigError::EmptyAgeBrackets);
        }
        check_weights(
            "age bracket",
            self.age_brackets.iter().map(|b| b.weight),
        )?;
        for bracket in &self.age_brackets {
            if bracket.min_age < ADULT_AGE as u32 || bracket.min_age > bracket.max_age {
                return Err(ConfigError::BadAgeBracket {
                    min: bracket.min_age,
                    max: bracket.max_age,
                    adult: ADULT_AGE as u32,
                });
            }
            for table in bracket.backgrounds.tables() {
                check_weights(
                    &format!("academic background ({})", bracket.label()),
                    table.iter().copied(),
                )?;
            }
        }

        if self.departments.is_empty() {
            return Err(ConfigError::EmptyDepartments);
        }
        let mut seen = Vec::with_capacity(self.departments.len());
        for spec in &self.departments {
            if seen.contains(&spec.department) {
                return Err(ConfigError::DuplicateDepartment(spec.department));
            }
            seen.push(spec.department);
            if spec.titles.is_empty() {
                return Err(ConfigError::EmptyTitles(spec.department));
            }
        }
        for dept in &self.evaluation_order {
            if !seen.contains(dept) {
                return Err(ConfigError::UndefinedDepartment(*dept));
            }
        }
        Ok(())
    }

    pub fn department(&self, dept: Department) -> Option<&DepartmentSpec> {
        self.departments.iter().find(|d| d.department == dept)
    }

    pub fn department_labels(&self) -> Vec<&'static str> {
        self.departments.iter().map(|d| d.department.label()).collect()
    }

    pub fn background_at(index: usize) -> AcademicBackground {
        AcademicBackground::ALL[index.min(AcademicBackground::ALL.len() - 1)]
    }
}

fn check_weights(table: &str, weights: impl Iterator<Item = f64>) -> Result<(), ConfigError> {
    let mut total = 0.0;
    for w in weights {
        if !w.is_finite() || w < 0.0 {
            return Err(ConfigError::BadWeights {
                table: table.to_string(),
                total: w,
            });
        }
        total += w;
    }
    if (total - 1.0).abs() > WEIGHT_EPSILON {
        return Err(ConfigError::BadWeights {
            table: table.to_string(),
            total,
        });
    }
    Ok(())
}
