//! Performance record generator.
//!
//! One stream per run: departments are processed in the catalog's evaluation
//! order, employees in table order, evaluation years most recent first.

use chrono::NaiveDate;
use std::collections::HashMap;
use uuid::Uuid;
use workforce_model::{
    Catalog, Department, DepartmentMetrics, Employee, PercentileBand, PerformanceLevel,
    PerformanceRecord,
};

use crate::{PerformanceConfig, SeededRng};

/// Share of departed recruits counted as fired.
const FIRED_SHARE: f64 = 0.2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecruitSummary {
    /// Recruits hired on or before the cutoff.
    pub recruits: u32,
    /// Of those, the ones still employed.
    pub active: u32,
    /// Sum of the recruits' full tenures.
    pub tenure_years: u64,
}

impl RecruitSummary {
    pub fn fired(&self) -> u32 {
        (FIRED_SHARE * (self.recruits - self.active) as f64).floor() as u32
    }
}

#[derive(Debug, Default)]
struct Recruits {
    hire_dates: Vec<NaiveDate>,
    /// Prefix sums, one longer than `hire_dates`.
    tenure: Vec<u64>,
    active: Vec<u32>,
}

/// Recruits grouped by recruiter and sorted by hire date.
#[derive(Debug, Default)]
pub struct RecruitLedger {
    by_recruiter: HashMap<Uuid, Recruits>,
}

impl RecruitLedger {
    pub fn new(employees: &[Employee], reference_year: i32) -> Self {
        let mut grouped: HashMap<Uuid, Vec<&Employee>> = HashMap::new();
        for employee in employees {
            if let Some(recruiter) = employee.recruiter.id() {
                grouped.entry(recruiter).or_default().push(employee);
            }
        }

        let by_recruiter = grouped
            .into_iter()
            .map(|(recruiter, mut recruits)| {
                recruits.sort_by_key(|e| e.hire_date);
                let mut ledger = Recruits {
                    hire_dates: Vec::with_capacity(recruits.len()),
                    tenure: vec![0],
                    active: vec![0],
                };
                for e in recruits {
                    let tenure = e.tenure_years(reference_year).max(0) as u64;
                    let active = u32::from(e.works_here);
                    ledger.hire_dates.push(e.hire_date);
                    ledger.tenure.push(ledger.tenure[ledger.tenure.len() - 1] + tenure);
                    ledger.active.push(ledger.active[ledger.active.len() - 1] + active);
                }
                (recruiter, ledger)
            })
            .collect();
        Self { by_recruiter }
    }

    /// Recruits of `recruiter` hired on or before January 1st of `year`.
    pub fn as_of(&self, recruiter: Uuid, year: i32) -> RecruitSummary {
        let (Some(ledger), Some(cutoff)) = (
            self.by_recruiter.get(&recruiter),
            NaiveDate::from_ymd_opt(year, 1, 1),
        ) else {
            return RecruitSummary::default();
        };
        let n = ledger.hire_dates.partition_point(|d| *d <= cutoff);
        RecruitSummary {
            recruits: n as u32,
            active: ledger.active[n],
            tenure_years: ledger.tenure[n],
        }
    }
}

pub struct PerformanceGenerator<'a> {
    employees: &'a [Employee],
    config: PerformanceConfig,
    rng: SeededRng,
    ledger: RecruitLedger,
}

impl<'a> PerformanceGenerator<'a> {
    pub fn new(employees: &'a [Employee], config: PerformanceConfig) -> Self {
        let ledger = RecruitLedger::new(employees, config.reference_year);
        let rng = SeededRng::new(config.seed);
        Self {
            employees,
            config,
            rng,
            ledger,
        }
    }

    /// Every department sheet, in `catalog.evaluation_order`.
    pub fn all(&mut self, catalog: &Catalog) -> Vec<(Department, Vec<PerformanceRecord>)> {
        let sheets: Vec<_> = catalog
            .evaluation_order
            .iter()
            .map(|&dept| (dept, self.department(dept)))
            .collect();
        tracing::info!(
            departments = sheets.len(),
            records = sheets.iter().map(|(_, r)| r.len()).sum::<usize>(),
            "generated performance records"
        );
        sheets
    }

    /// Records for every employee currently in `dept`; empty when nobody is.
    pub fn department(&mut self, dept: Department) -> Vec<PerformanceRecord> {
        let employees = self.employees;
        let mut records = Vec::new();
        let mut members = 0usize;
        for employee in employees.iter().filter(|e| e.department == dept) {
            members += 1;
            self.evaluate(employee, &mut records);
        }
        if members == 0 {
            tracing::warn!(department = %dept, "department has no employees");
        } else {
            tracing::debug!(department = %dept, employees = members, records = records.len(), "evaluated department");
        }
        records
    }

    fn evaluate(&mut self, employee: &Employee, out: &mut Vec<PerformanceRecord>) {
        let last_active = employee.last_active_year(self.config.reference_year);
        let hire_year = employee.hire_year();
        let tenure = (last_active - hire_year).max(0) as u32;

        for offset in 0..tenure.min(self.config.max_evaluations) {
            let year = last_active - offset as i32;
            let loyalty = (year - hire_year) as u32;

            let bonus = (self.rng.uniform(0.0, 30.0) / 100.0 * employee.salary as f64).floor() as u64;
            let overtime =
                (self.rng.uniform(0.0, 20.0) / 100.0 * self.config.annual_hours as f64).floor() as u32;
            let chargeability = self.rng.uniform_int(0.0, 100.0) as u32;

            let band = PercentileBand::from_percentile(self.rng.uniform(0.0, 100.0));
            let performance = match band.forced_level() {
                Some(level) => level,
                None => PerformanceLevel::ALL[self.rng.index(PerformanceLevel::ALL.len())],
            };

            let metrics = self.metrics(employee, year);
            out.push(PerformanceRecord {
                employee_id: employee.id,
                year,
                loyalty,
                promotions: PerformanceRecord::promotions_for(loyalty),
                bonus,
                overtime,
                chargeability,
                band,
                performance,
                metrics,
            });
        }
    }

    fn metrics(&mut self, employee: &Employee, year: i32) -> DepartmentMetrics {
        let rng = &mut self.rng;
        let draw = |rng: &mut SeededRng, lo: f64, hi: f64| rng.uniform_int(lo, hi) as u32;
        match employee.department {
            Department::Hr => {
                let recruits = self.ledger.as_of(employee.id, year);
                let months = rng.uniform(1.0, 12.0);
                DepartmentMetrics::Hr {
                    recruit_tenure_years: recruits.tenure_years,
                    avg_recruitment_months: (months * 100.0).round() / 100.0,
                    employees_fired: recruits.fired(),
                }
            }
            Department::Sales => DepartmentMetrics::Sales {
                total_sales: draw(rng, 1000.0, 100_000.0),
                clients_asking: draw(rng, 0.0, 5.0),
            },
            Department::Product => DepartmentMetrics::Product {
                total_defects: draw(rng, 10.0, 50.0),
                complaining_customers: draw(rng, 0.0, 20.0),
            },
            Department::Finance => DepartmentMetrics::Finance {
                non_servicing_obligations: draw(rng, 0.0, 10_000.0),
            },
            Department::Legal => DepartmentMetrics::Legal {
                successful_lawsuits: draw(rng, 0.0, 3.0),
                disputes_resolved: draw(rng, 0.0, 6.0),
            },
            Department::Strategy => DepartmentMetrics::Strategy {
                total_sales: draw(rng, 1000.0, 10_000.0),
                teams: draw(rng, 1.0, 10.0),
                projects: draw(rng, 1.0, 20.0),
            },
            Department::Technology => DepartmentMetrics::Technology {
                problematic_commits: draw(rng, 0.0, 20.0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::employee;
    use workforce_model::Recruiter;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn recruited_by(mut e: Employee, recruiter: &Employee) -> Employee {
        e.recruiter = Recruiter::Assigned {
            id: recruiter.id,
            name: recruiter.display_name(),
        };
        e
    }

    #[test]
    fn ledger_counts_recruits_hired_by_new_year() {
        let boss = employee(0, Department::Hr, date(2000, 1, 1));
        let mut gone = recruited_by(employee(1, Department::Sales, date(2005, 1, 1)), &boss);
        gone.time_left = 3;
        gone.works_here = false;
        let late = recruited_by(employee(2, Department::Legal, date(2012, 6, 1)), &boss);
        let staff = vec![boss.clone(), gone, late];

        let ledger = RecruitLedger::new(&staff, 2020);
        assert_eq!(ledger.as_of(boss.id, 2004), RecruitSummary::default());

        let by_2005 = ledger.as_of(boss.id, 2005);
        assert_eq!(by_2005.recruits, 1);
        assert_eq!(by_2005.active, 0);
        assert_eq!(by_2005.tenure_years, 12);

        let by_2020 = ledger.as_of(boss.id, 2020);
        assert_eq!(by_2020.recruits, 2);
        assert_eq!(by_2020.active, 1);
        assert_eq!(by_2020.tenure_years, 12 + 8);
        assert_eq!(by_2020.fired(), 0);
    }

    #[test]
    fn evaluations_cover_most_recent_tenure_years() {
        let mut e = employee(0, Department::Sales, date(2010, 3, 1));
        e.time_left = 4;
        e.works_here = false;
        let staff = vec![e];
        let records =
            PerformanceGenerator::new(&staff, PerformanceConfig::default()).department(Department::Sales);
        let years: Vec<i32> = records.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2016, 2015, 2014, 2013, 2012]);
        for r in &records {
            assert_eq!(r.loyalty as i32, r.year - 2010);
            assert_eq!(r.promotions, r.loyalty / 4);
            assert!(r.bonus as f64 <= 0.3 * staff[0].salary as f64);
            assert!(r.overtime < 364);
            assert!(r.chargeability < 100);
        }
    }

    #[test]
    fn zero_tenure_yields_no_records() {
        let staff = vec![employee(0, Department::Finance, date(2020, 7, 1))];
        let records = PerformanceGenerator::new(&staff, PerformanceConfig::default())
            .department(Department::Finance);
        assert!(records.is_empty());
    }

    #[test]
    fn empty_department_is_not_an_error() {
        let staff = vec![employee(0, Department::Sales, date(2001, 1, 1))];
        let records = PerformanceGenerator::new(&staff, PerformanceConfig::default())
            .department(Department::Legal);
        assert!(records.is_empty());
    }

    #[test]
    fn extreme_bands_force_the_label() {
        let staff: Vec<Employee> = (0..40)
            .map(|i| employee(i, Department::Technology, date(1995, 1, 1)))
            .collect();
        let records = PerformanceGenerator::new(&staff, PerformanceConfig::default())
            .department(Department::Technology);
        assert_eq!(records.len(), 200);
        for r in records {
            if let Some(level) = r.band.forced_level() {
                assert_eq!(r.performance, level);
            }
        }
    }

    #[test]
    fn rerun_is_identical() {
        let staff: Vec<Employee> = (0..10)
            .map(|i| employee(i, Department::Strategy, date(2008, 1, 1)))
            .collect();
        let catalog = Catalog::default();
        let a = PerformanceGenerator::new(&staff, PerformanceConfig::default()).all(&catalog);
        let b = PerformanceGenerator::new(&staff, PerformanceConfig::default()).all(&catalog);
        assert_eq!(a, b);
        assert_eq!(a.len(), 7);
    }
}
