//! Property tests for the profile and performance generators.
//!
//! Seeds and population sizes are the inputs; every generated dataset must
//! satisfy the cross-field and cross-table rules regardless of the draws.

use proptest::prelude::*;
use std::collections::HashMap;
use workforce_gen::{
    generate_population, run_audit, AuditInput, PerformanceConfig, PerformanceGenerator,
    ProfileConfig,
};
use chrono::NaiveDate;
use workforce_model::{
    AgeBracket, BackgroundMix, Catalog, Department, DepartmentMetrics, Employee,
    PerformanceLevel, PerformanceRecord,
};

const REFERENCE_YEAR: i32 = 2020;

fn profile_config(employees: usize, seed: u64) -> ProfileConfig {
    ProfileConfig {
        employees,
        seed,
        ..ProfileConfig::default()
    }
}

/// HR aggregates recomputed by scanning the whole employee table.
fn scan_recruits(employees: &[Employee], recruiter: &Employee, year: i32) -> (u64, u32) {
    let cutoff = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
    let recruits: Vec<&Employee> = employees
        .iter()
        .filter(|e| e.recruiter.id() == Some(recruiter.id) && e.hire_date <= cutoff)
        .collect();
    let tenure = recruits
        .iter()
        .map(|e| e.tenure_years(REFERENCE_YEAR).max(0) as u64)
        .sum();
    let departed = recruits.iter().filter(|e| !e.works_here).count();
    (tenure, (0.2 * departed as f64).floor() as u32)
}

/// Checks every HR record against a full scan; returns (records, records with fired > 0).
fn check_hr_aggregates(
    employees: &[Employee],
    sheets: &[(Department, Vec<PerformanceRecord>)],
) -> Result<(usize, usize), TestCaseError> {
    let by_id: HashMap<_, &Employee> = employees.iter().map(|e| (e.id, e)).collect();
    let (mut checked, mut with_fired) = (0, 0);
    for (_, records) in sheets.iter().filter(|(d, _)| *d == Department::Hr) {
        for r in records {
            let DepartmentMetrics::Hr {
                recruit_tenure_years,
                employees_fired,
                ..
            } = r.metrics
            else {
                return Err(TestCaseError::fail("HR sheet holds non-HR metrics"));
            };
            let (tenure, fired) = scan_recruits(employees, by_id[&r.employee_id], r.year);
            prop_assert_eq!(recruit_tenure_years, tenure);
            prop_assert_eq!(employees_fired, fired);
            checked += 1;
            if fired > 0 {
                with_fired += 1;
            }
        }
    }
    Ok((checked, with_fired))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 12,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn hr_aggregates_match_a_full_scan(n in 200usize..900, seed in any::<u64>()) {
        let catalog = Catalog::default();
        let population = generate_population(&catalog, profile_config(n, seed)).unwrap();
        let sheets = PerformanceGenerator::new(&population.employees, PerformanceConfig::default())
            .all(&catalog);
        check_hr_aggregates(&population.employees, &sheets)?;
    }
}

#[test]
fn hr_aggregates_include_fired_recruits() {
    let catalog = Catalog::default();
    let population = generate_population(&catalog, profile_config(1500, 3)).unwrap();
    let sheets =
        PerformanceGenerator::new(&population.employees, PerformanceConfig::default()).all(&catalog);
    let (checked, with_fired) = check_hr_aggregates(&population.employees, &sheets).unwrap();
    assert!(checked > 100, "only {checked} HR records");
    assert!(with_fired > 0);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn composites_stay_between_facets(n in 0usize..120, seed in any::<u64>()) {
        let population = generate_population(&Catalog::default(), profile_config(n, seed)).unwrap();
        prop_assert_eq!(population.psychometrics.len(), n);
        for profile in &population.psychometrics {
            for (_, score) in profile.iter() {
                prop_assert!(score.facet_a <= 100 && score.facet_b <= 100);
                prop_assert!(score.facet_a.min(score.facet_b) <= score.composite);
                prop_assert!(score.composite <= score.facet_a.max(score.facet_b));
            }
        }
    }

    #[test]
    fn employees_respect_hire_window(n in 1usize..150, seed in any::<u64>()) {
        let population = generate_population(&Catalog::default(), profile_config(n, seed)).unwrap();
        for e in &population.employees {
            prop_assert!(e.hire_year() >= e.birth_year() + 18 + e.academic_background.study_years());
            prop_assert!(e.hire_year() <= REFERENCE_YEAR - e.time_left as i32);
            prop_assert!(e.time_left < 20);
            if e.works_here {
                prop_assert_eq!(e.time_left, 0);
            }
            prop_assert!(e.salary >= 10_000);
            if e.working_experience == 0 {
                prop_assert_eq!(e.previous_employers, 0);
            }
        }
    }

    #[test]
    fn recruiters_are_earlier_hr_hires(n in 1usize..150, seed in any::<u64>()) {
        let population = generate_population(&Catalog::default(), profile_config(n, seed)).unwrap();
        let by_id: HashMap<_, &Employee> =
            population.employees.iter().map(|e| (e.id, e)).collect();
        for e in &population.employees {
            if let Some(id) = e.recruiter.id() {
                let r = by_id[&id];
                prop_assert_eq!(r.department, Department::Hr);
                prop_assert!(r.hire_date < e.hire_date);
            } else {
                let earlier_hr = population
                    .employees
                    .iter()
                    .any(|c| c.department == Department::Hr && c.hire_date < e.hire_date);
                prop_assert!(!earlier_hr);
            }
        }
        let stats = population.recruiters;
        prop_assert_eq!(stats.searches, n);
        prop_assert_eq!(stats.assigned + stats.unassigned, n);
    }

    #[test]
    fn evaluations_stay_inside_tenure(n in 1usize..100, seed in any::<u64>(), perf_seed in any::<u64>()) {
        let catalog = Catalog::default();
        let population = generate_population(&catalog, profile_config(n, seed)).unwrap();
        let config = PerformanceConfig { seed: perf_seed, ..PerformanceConfig::default() };
        let sheets = PerformanceGenerator::new(&population.employees, config).all(&catalog);

        let by_id: HashMap<_, &Employee> =
            population.employees.iter().map(|e| (e.id, e)).collect();
        let mut per_employee: HashMap<_, usize> = HashMap::new();
        for (dept, records) in &sheets {
            for r in records {
                let e = by_id[&r.employee_id];
                prop_assert_eq!(e.department, *dept);
                prop_assert_eq!(r.metrics.department(), *dept);
                let last_active = e.last_active_year(REFERENCE_YEAR);
                prop_assert!(r.year > e.hire_year() && r.year <= last_active);
                prop_assert!(r.year > last_active - 5);
                prop_assert_eq!(r.promotions, r.loyalty / 4);
                if let Some(level) = r.band.forced_level() {
                    prop_assert_eq!(r.performance, level);
                }
                *per_employee.entry(r.employee_id).or_default() += 1;
            }
        }
        for e in &population.employees {
            let expected = e.tenure_years(REFERENCE_YEAR).clamp(0, 5) as usize;
            prop_assert_eq!(per_employee.get(&e.id).copied().unwrap_or(0), expected);
        }
    }

    #[test]
    fn generated_datasets_pass_the_audit(n in 0usize..80, seed in any::<u64>()) {
        let catalog = Catalog::default();
        let population = generate_population(&catalog, profile_config(n, seed)).unwrap();
        let sheets = PerformanceGenerator::new(&population.employees, PerformanceConfig::default())
            .all(&catalog);
        let report = run_audit(AuditInput {
            reference_year: REFERENCE_YEAR,
            employees: &population.employees,
            psychometrics: &population.psychometrics,
            performance: &sheets,
        });
        prop_assert!(report.is_clean(), "{:?}", report.findings);
    }
}

#[test]
fn performance_rerun_is_identical() {
    let catalog = Catalog::default();
    let population = generate_population(&catalog, profile_config(200, 5)).unwrap();
    let first =
        PerformanceGenerator::new(&population.employees, PerformanceConfig::default()).all(&catalog);
    let second =
        PerformanceGenerator::new(&population.employees, PerformanceConfig::default()).all(&catalog);
    assert_eq!(first, second);
}

#[test]
fn single_still_employed_mid_career_employee() {
    let mut catalog = Catalog::default();
    catalog.age_brackets = vec![AgeBracket {
        min_age: 30,
        max_age: 44,
        weight: 1.0,
        backgrounds: BackgroundMix::Uniform([0.1, 0.45, 0.4, 0.05]),
    }];
    let config = ProfileConfig {
        employees: 1,
        departed_share: 0.0,
        ..ProfileConfig::default()
    };
    let population = generate_population(&catalog, config).unwrap();
    let e = &population.employees[0];
    let age = REFERENCE_YEAR - e.birth_year();
    assert!((30..44).contains(&age));
    assert_eq!(e.time_left, 0);
    assert!(e.works_here);
    assert_eq!(population.recruiters.searches, 1);
    assert_eq!(population.recruiters.unassigned, 1);

    let sheets = PerformanceGenerator::new(&population.employees, PerformanceConfig::default())
        .all(&catalog);
    let records: usize = sheets.iter().map(|(_, r)| r.len()).sum();
    assert_eq!(records, e.tenure_years(REFERENCE_YEAR).clamp(0, 5) as usize);
}

#[test]
fn department_without_employees_yields_empty_sheet() {
    let mut catalog = Catalog::default();
    catalog.departments.retain(|d| d.department == Department::Sales);
    catalog.evaluation_order = vec![Department::Sales];
    let population = generate_population(&catalog, profile_config(30, 8)).unwrap();

    let mut generator =
        PerformanceGenerator::new(&population.employees, PerformanceConfig::default());
    assert!(generator.department(Department::Legal).is_empty());
    assert!(generator.department(Department::Hr).is_empty());
    assert!(!generator.department(Department::Sales).is_empty());
}

#[test]
fn mid_band_labels_cover_all_levels() {
    let catalog = Catalog::default();
    let population = generate_population(&catalog, profile_config(400, 21)).unwrap();
    let sheets =
        PerformanceGenerator::new(&population.employees, PerformanceConfig::default()).all(&catalog);
    let mid: Vec<PerformanceLevel> = sheets
        .iter()
        .flat_map(|(_, r)| r.iter())
        .filter(|r| r.band.forced_level().is_none())
        .map(|r| r.performance)
        .collect();
    for level in PerformanceLevel::ALL {
        assert!(mid.contains(&level), "no mid-band {level:?}");
    }
}
