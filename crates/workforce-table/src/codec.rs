//! Typed records ↔ sheets.
//!
//! Column names are the contract with downstream consumers; they are looked
//! up by name on decode, so column order in an input sheet does not matter.

use chrono::NaiveDate;
use uuid::Uuid;
use workforce_model::{
    sheets, Department, DepartmentMetrics, Employee, MetricValue, PerformanceRecord,
    PsychometricProfile, Recruiter, Trait, TraitScore, SENTINEL_NONE,
};

use crate::{Cell, RowView, Table, TableError};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub mod profile_columns {
    pub const ID: &str = "ID";
    pub const FIRST_NAME: &str = "First Name";
    pub const LAST_NAME: &str = "Last Name";
    pub const GENDER: &str = "Gender";
    pub const MARITAL_STATUS: &str = "Marital Status";
    pub const TIME_LEFT: &str = "Time Left";
    pub const WORKS_HERE: &str = "Works Here";
    pub const BIRTHDAY: &str = "Birthday";
    pub const CHILDREN: &str = "Children";
    pub const ACADEMIC_BACKGROUND: &str = "Academic Background";
    pub const DATE_HIRED: &str = "Date Hired";
    pub const WORKING_EXPERIENCE: &str = "Working Experience";
    pub const PREVIOUS_EMPLOYERS: &str = "Number of prev. Employers";
    pub const SALARY: &str = "Salary";
    pub const DEPARTMENT: &str = "Department";
    pub const JOB_TITLE: &str = "Job Title";
    pub const RECRUITER: &str = "Recruiter";
    pub const RECRUITER_ID: &str = "Recruiter ID";

    pub const ALL: [&str; 18] = [
        ID,
        FIRST_NAME,
        LAST_NAME,
        GENDER,
        MARITAL_STATUS,
        TIME_LEFT,
        WORKS_HERE,
        BIRTHDAY,
        CHILDREN,
        ACADEMIC_BACKGROUND,
        DATE_HIRED,
        WORKING_EXPERIENCE,
        PREVIOUS_EMPLOYERS,
        SALARY,
        DEPARTMENT,
        JOB_TITLE,
        RECRUITER,
        RECRUITER_ID,
    ];
}

fn date_text(d: NaiveDate) -> Cell {
    Cell::Text(d.format(DATE_FORMAT).to_string())
}

fn parse_date(row: &RowView<'_>, col: usize) -> Result<NaiveDate, TableError> {
    let raw = row.text(col)?;
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|e| row.bad(col, e.to_string()))
}

fn parse_uuid(row: &RowView<'_>, col: usize) -> Result<Uuid, TableError> {
    let raw = row.text(col)?;
    Uuid::parse_str(raw).map_err(|e| row.bad(col, e.to_string()))
}

// =============================================================================
// Professional profile
// =============================================================================

pub fn encode_employees(employees: &[Employee]) -> Table {
    let mut table = Table::new(sheets::PROFESSIONAL_PROFILE, &profile_columns::ALL);
    for e in employees {
        table.push_row(vec![
            Cell::text(e.id.to_string()),
            Cell::text(&e.first_name),
            Cell::text(&e.last_name),
            Cell::text(e.gender.label()),
            Cell::text(e.marital_status.label()),
            Cell::Int(e.time_left as i64),
            Cell::Bool(e.works_here),
            date_text(e.birthday),
            Cell::Int(e.children as i64),
            Cell::text(e.academic_background.label()),
            date_text(e.hire_date),
            Cell::Int(e.working_experience as i64),
            Cell::Int(e.previous_employers as i64),
            Cell::Int(e.salary as i64),
            Cell::text(e.department.label()),
            Cell::text(&e.job_title),
            Cell::text(e.recruiter.name_label()),
            Cell::text(e.recruiter.id_label()),
        ]);
    }
    table
}

pub fn decode_employees(table: &Table) -> Result<Vec<Employee>, TableError> {
    let c = table.require_columns(&profile_columns::ALL)?;
    let mut out = Vec::with_capacity(table.len());
    for row in table.row_views() {
        let recruiter_id = row.text(c[17])?;
        let recruiter = if recruiter_id == SENTINEL_NONE {
            Recruiter::None
        } else {
            Recruiter::Assigned {
                id: parse_uuid(&row, c[17])?,
                name: row.text(c[16])?.to_string(),
            }
        };
        out.push(Employee {
            id: parse_uuid(&row, c[0])?,
            first_name: row.text(c[1])?.to_string(),
            last_name: row.text(c[2])?.to_string(),
            gender: row.parsed(c[3])?,
            marital_status: row.parsed(c[4])?,
            time_left: row.count(c[5])?,
            works_here: row.boolean(c[6])?,
            birthday: parse_date(&row, c[7])?,
            children: row.count(c[8])?,
            academic_background: row.parsed(c[9])?,
            hire_date: parse_date(&row, c[10])?,
            working_experience: row.count(c[11])?,
            previous_employers: row.count(c[12])?,
            salary: row.count(c[13])?,
            department: row.parsed(c[14])?,
            job_title: row.text(c[15])?.to_string(),
            recruiter,
        });
    }
    Ok(out)
}

// =============================================================================
// Psychometric indicators
// =============================================================================

/// `ID`, then per trait: facet a, facet b, composite.
pub fn psychometric_columns() -> Vec<&'static str> {
    let mut cols = vec![profile_columns::ID];
    for t in Trait::ALL {
        let (a, b) = t.facet_labels();
        cols.extend([a, b, t.label()]);
    }
    cols
}

pub fn encode_psychometrics(profiles: &[PsychometricProfile]) -> Table {
    let mut table = Table::new(sheets::PSYCHOMETRIC_INDICATORS, &psychometric_columns());
    for p in profiles {
        let mut row = vec![Cell::text(p.id.to_string())];
        for s in &p.scores {
            row.extend([
                Cell::Int(s.facet_a as i64),
                Cell::Int(s.facet_b as i64),
                Cell::Int(s.composite as i64),
            ]);
        }
        table.push_row(row);
    }
    table
}

pub fn decode_psychometrics(table: &Table) -> Result<Vec<PsychometricProfile>, TableError> {
    let c = table.require_columns(&psychometric_columns())?;
    let mut out = Vec::with_capacity(table.len());
    for row in table.row_views() {
        let mut scores = [TraitScore {
            facet_a: 0,
            facet_b: 0,
            composite: 0,
        }; 5];
        for (i, score) in scores.iter_mut().enumerate() {
            let base = 1 + i * 3;
            *score = TraitScore {
                facet_a: row.count(c[base])?,
                facet_b: row.count(c[base + 1])?,
                composite: row.count(c[base + 2])?,
            };
        }
        out.push(PsychometricProfile {
            id: parse_uuid(&row, c[0])?,
            scores,
        });
    }
    Ok(out)
}

// =============================================================================
// Department evaluations
// =============================================================================

pub fn performance_columns(dept: Department) -> Vec<&'static str> {
    let mut cols = PerformanceRecord::SHARED_COLUMNS.to_vec();
    cols.extend_from_slice(DepartmentMetrics::columns(dept));
    cols
}

/// One sheet per department, named after the department label.
pub fn encode_performance(dept: Department, records: &[PerformanceRecord]) -> Table {
    let mut table = Table::new(dept.label(), &performance_columns(dept));
    for r in records {
        let mut row = vec![
            Cell::text(r.employee_id.to_string()),
            Cell::Int(r.year as i64),
            Cell::Int(r.loyalty as i64),
            Cell::Int(r.promotions as i64),
            Cell::Int(r.bonus as i64),
            Cell::Int(r.overtime as i64),
            Cell::Int(r.chargeability as i64),
            Cell::text(r.band.label()),
            Cell::text(r.performance.label()),
        ];
        row.extend(r.metrics.values().into_iter().map(|v| match v {
            MetricValue::Int(i) => Cell::Int(i),
            MetricValue::Decimal(f) => Cell::Float(f),
        }));
        table.push_row(row);
    }
    table
}

pub fn decode_performance(
    dept: Department,
    table: &Table,
) -> Result<Vec<PerformanceRecord>, TableError> {
    let c = table.require_columns(&performance_columns(dept))?;
    let m = &c[PerformanceRecord::SHARED_COLUMNS.len()..];
    let mut out = Vec::with_capacity(table.len());
    for row in table.row_views() {
        let metrics = match dept {
            Department::Hr => DepartmentMetrics::Hr {
                recruit_tenure_years: row.count(m[0])?,
                avg_recruitment_months: row.float(m[1])?,
                employees_fired: row.count(m[2])?,
            },
            Department::Sales => DepartmentMetrics::Sales {
                total_sales: row.count(m[0])?,
                clients_asking: row.count(m[1])?,
            },
            Department::Product => DepartmentMetrics::Product {
                total_defects: row.count(m[0])?,
                complaining_customers: row.count(m[1])?,
            },
            Department::Finance => DepartmentMetrics::Finance {
                non_servicing_obligations: row.count(m[0])?,
            },
            Department::Legal => DepartmentMetrics::Legal {
                successful_lawsuits: row.count(m[0])?,
                disputes_resolved: row.count(m[1])?,
            },
            Department::Strategy => DepartmentMetrics::Strategy {
                total_sales: row.count(m[0])?,
                teams: row.count(m[1])?,
                projects: row.count(m[2])?,
            },
            Department::Technology => DepartmentMetrics::Technology {
                problematic_commits: row.count(m[0])?,
            },
        };
        out.push(PerformanceRecord {
            employee_id: parse_uuid(&row, c[0])?,
            year: row.count(c[1])?,
            loyalty: row.count(c[2])?,
            promotions: row.count(c[3])?,
            bonus: row.count(c[4])?,
            overtime: row.count(c[5])?,
            chargeability: row.count(c[6])?,
            band: row.parsed(c[7])?,
            performance: row.parsed(c[8])?,
            metrics,
        });
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use workforce_model::{
        AcademicBackground, Gender, MaritalStatus, PercentileBand, PerformanceLevel,
    };

    fn employee(n: u128, recruiter: Recruiter) -> Employee {
        Employee {
            id: Uuid::from_u128(n),
            first_name: "Ada".into(),
            last_name: "Byron".into(),
            gender: Gender::Female,
            marital_status: MaritalStatus::Single,
            time_left: 3,
            works_here: false,
            birthday: NaiveDate::from_ymd_opt(1990, 4, 2).unwrap(),
            children: 1,
            academic_background: AcademicBackground::Msc,
            hire_date: NaiveDate::from_ymd_opt(2014, 9, 30).unwrap(),
            working_experience: 6,
            previous_employers: 1,
            salary: 24_310,
            department: Department::Technology,
            job_title: "Software Engineer".into(),
            recruiter,
        }
    }

    #[test]
    fn profile_sheet_keeps_recruiter_sentinel() {
        let rows = vec![
            employee(1, Recruiter::None),
            employee(
                2,
                Recruiter::Assigned {
                    id: Uuid::from_u128(1),
                    name: "Ada Byron".into(),
                },
            ),
        ];
        let table = encode_employees(&rows);
        assert_eq!(table.name, "Professional_Profile");
        let rec = table.require_column("Recruiter ID").unwrap();
        assert_eq!(table.rows[0][rec], Cell::text("none"));
        assert_eq!(decode_employees(&table).unwrap(), rows);
    }

    #[test]
    fn decode_ignores_column_order() {
        let table = encode_employees(&[employee(9, Recruiter::None)]);
        let mut reordered = Table::new(table.name.clone(), &table.columns.iter().rev().collect::<Vec<_>>());
        reordered.push_row(table.rows[0].iter().rev().cloned().collect());
        assert_eq!(decode_employees(&reordered).unwrap(), decode_employees(&table).unwrap());
    }

    #[test]
    fn missing_cell_fails_decode() {
        let mut table = encode_employees(&[employee(3, Recruiter::None)]);
        let salary = table.require_column("Salary").unwrap();
        table.rows[0][salary] = Cell::Missing;
        let err = decode_employees(&table).unwrap_err();
        assert!(err.to_string().contains("column `Salary`"));
    }

    #[test]
    fn psychometric_header_is_grouped_by_trait() {
        let cols = psychometric_columns();
        assert_eq!(cols.len(), 16);
        assert_eq!(&cols[1..4], &["Orderliness", "Industriousness", "Conscientiousness"]);
        assert_eq!(cols[15], "Agreeableness");
    }

    #[test]
    fn hr_sheet_carries_decimal_recruitment_time() {
        let record = PerformanceRecord {
            employee_id: Uuid::from_u128(5),
            year: 2019,
            loyalty: 5,
            promotions: 1,
            bonus: 900,
            overtime: 120,
            chargeability: 77,
            band: PercentileBand::Mid70,
            performance: PerformanceLevel::Medium,
            metrics: DepartmentMetrics::Hr {
                recruit_tenure_years: 14,
                avg_recruitment_months: 7.42,
                employees_fired: 0,
            },
        };
        let table = encode_performance(Department::Hr, &[record.clone()]);
        assert_eq!(table.name, "HR");
        assert_eq!(table.columns.len(), 12);
        assert_eq!(table.rows[0][10], Cell::Float(7.42));
        assert_eq!(decode_performance(Department::Hr, &table).unwrap(), vec![record]);
    }
}
