//! Profile generator: employees, psychometric profiles, then recruiters.

use chrono::NaiveDate;
use workforce_model::{
    AcademicBackground, Catalog, ConfigError, Employee, Gender, MaritalStatus,
    PsychometricProfile, Recruiter, TraitScore, ADULT_AGE,
};

use crate::recruiter::{assign_recruiters, RecruiterStats};
use crate::{CatalogIdentity, DateSource, IdentitySource, ProfileConfig, SeededRng};

/// Output of the profile stage. `psychometrics[i]` belongs to `employees[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    pub employees: Vec<Employee>,
    pub psychometrics: Vec<PsychometricProfile>,
    pub recruiters: RecruiterStats,
}

impl Population {
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

/// Facets are drawn in `0..=100`.
const FACET_CEILING: f64 = 101.0;

/// Child count mean reaches its plateau at this age.
const FERTILITY_PLATEAU_AGE: f64 = 35.0;

/// Pre-hire years count at this rate toward experience and starting pay.
const PRE_HIRE_CREDIT: f64 = 0.8;

pub struct ProfileGenerator<'c, I = CatalogIdentity> {
    catalog: &'c Catalog,
    config: ProfileConfig,
    rng: SeededRng,
    identity: I,
}

impl<'c> ProfileGenerator<'c, CatalogIdentity> {
    pub fn new(catalog: &'c Catalog, config: ProfileConfig) -> Result<Self, ConfigError> {
        let identity = CatalogIdentity::new(config.name_seed);
        Self::with_identity(catalog, config, identity)
    }
}

impl<'c, I: IdentitySource> ProfileGenerator<'c, I> {
    /// Validates `catalog` and `config` before any draw.
    pub fn with_identity(
        catalog: &'c Catalog,
        config: ProfileConfig,
        identity: I,
    ) -> Result<Self, ConfigError> {
        catalog.validate()?;
        config.validate()?;
        let rng = SeededRng::new(config.seed);
        Ok(Self {
            catalog,
            config,
            rng,
            identity,
        })
    }

    pub fn generate(mut self) -> Population {
        let n = self.config.employees;
        let mut employees = Vec::with_capacity(n);
        let mut psychometrics = Vec::with_capacity(n);
        for index in 0..n {
            let employee = self.employee(index as u64);
            psychometrics.push(self.psychometrics(employee.id));
            employees.push(employee);
        }

        let recruiters = assign_recruiters(&mut employees, &mut self.rng);
        tracing::info!(
            employees = employees.len(),
            recruited = recruiters.assigned,
            unrecruited = recruiters.unassigned,
            "generated population"
        );
        Population {
            employees,
            psychometrics,
            recruiters,
        }
    }

    fn employee(&mut self, index: u64) -> Employee {
        let catalog = self.catalog;
        let reference_year = self.config.reference_year;
        let id = self.identity.employee_id(index);
        let first_name = self.identity.first_name();
        let last_name = self.identity.last_name();

        let gender = if self.rng.chance(0.5) {
            Gender::Male
        } else {
            Gender::Female
        };
        let marital_status = if self.rng.chance(0.5) {
            MaritalStatus::Married
        } else {
            MaritalStatus::Single
        };

        let weights: Vec<f64> = catalog.age_brackets.iter().map(|b| b.weight).collect();
        let bracket = &catalog.age_brackets[self.rng.weighted(&weights)];
        let age = self
            .rng
            .uniform_int(bracket.min_age as f64, bracket.max_age as f64) as u32;

        let departed = self.rng.chance(self.config.departed_share);
        let time_left = if departed {
            self.rng.uniform_int(0.0, self.config.max_time_left as f64) as u32
        } else {
            0
        };
        let real_age = age + time_left;
        let last_active_year = reference_year - time_left as i32;

        let birth_year = reference_year - real_age as i32;
        let birthday = self.date_in_year(birth_year);

        let mean_children = 1.5 * (real_age as f64 / FERTILITY_PLATEAU_AGE).min(1.0);
        let children = self.rng.normal(mean_children, 0.5).round().max(0.0) as u32;

        let drawn = Catalog::background_at(self.rng.weighted(bracket.backgrounds.weights_for(age)));
        let academic_background = fit_background(drawn, birth_year, last_active_year);
        let study_years = academic_background.study_years();

        let earliest = (birth_year + ADULT_AGE + study_years).min(last_active_year);
        let hire_year = self
            .rng
            .uniform_int(earliest as f64, last_active_year as f64) as i32;
        let hire_date = self.date_in_year(hire_year);

        let pre_hire = PRE_HIRE_CREDIT * (hire_year - earliest) as f64;
        let years_in_post = (last_active_year - hire_year) as f64;
        let working_experience = (pre_hire + years_in_post).max(0.0).round() as u32;
        let previous_employers = if pre_hire > 0.0 {
            (pre_hire / 3.0).floor() as u32 + 1
        } else {
            0
        };

        let basic = self.config.basic_income as f64;
        let ceiling = basic + pre_hire * 2000.0 + study_years as f64 * 500.0;
        let salary_hired = self.rng.uniform(basic, ceiling.max(basic));
        let raise = (1.0 + self.config.max_annual_raise).powf(years_in_post.max(1.0));
        let salary = self.rng.uniform(salary_hired, salary_hired * raise).trunc() as u64;

        let placement = &catalog.departments[self.rng.index(catalog.departments.len())];
        let job_title = placement.titles[self.rng.index(placement.titles.len())].clone();

        Employee {
            id,
            first_name,
            last_name,
            gender,
            marital_status,
            time_left,
            works_here: time_left == 0,
            birthday,
            children,
            academic_background,
            hire_date,
            working_experience,
            previous_employers,
            salary,
            department: placement.department,
            job_title,
            recruiter: Recruiter::None,
        }
    }

    fn psychometrics(&mut self, id: uuid::Uuid) -> PsychometricProfile {
        let rng = &mut self.rng;
        let scores = std::array::from_fn(|_| {
            let facet_a = rng.uniform_int(0.0, FACET_CEILING) as u8;
            let facet_b = rng.uniform_int(0.0, FACET_CEILING) as u8;
            let (lo, hi) = (facet_a.min(facet_b), facet_a.max(facet_b));
            let composite = rng.uniform_int(lo as f64, hi as f64 + 1.0).min(hi as i64) as u8;
            TraitScore {
                facet_a,
                facet_b,
                composite,
            }
        });
        PsychometricProfile { id, scores }
    }

    fn date_in_year(&mut self, year: i32) -> NaiveDate {
        DateSource::date_in_year(&mut self.rng, year)
    }
}

/// Highest background not above `drawn` whose studies end by `last_active_year`.
///
/// High school always fits because every bracket starts at adult age.
fn fit_background(
    drawn: AcademicBackground,
    birth_year: i32,
    last_active_year: i32,
) -> AcademicBackground {
    AcademicBackground::ALL
        .into_iter()
        .rev()
        .skip_while(|b| *b != drawn)
        .find(|b| birth_year + ADULT_AGE + b.study_years() <= last_active_year)
        .unwrap_or(AcademicBackground::HighSchool)
}

/// Runs the profile stage with the built-in name corpus.
pub fn generate_population(
    catalog: &Catalog,
    config: ProfileConfig,
) -> Result<Population, ConfigError> {
    Ok(ProfileGenerator::new(catalog, config)?.generate())
}

#[cfg(test)]
mod tests {
    use super::*;
    use workforce_model::Department;

    fn config(employees: usize, seed: u64) -> ProfileConfig {
        ProfileConfig {
            employees,
            seed,
            ..Default::default()
        }
    }

    #[test]
    fn zero_employees_is_empty_not_error() {
        let population = generate_population(&Catalog::default(), config(0, 5)).unwrap();
        assert!(population.is_empty());
        assert!(population.psychometrics.is_empty());
        assert_eq!(population.recruiters, RecruiterStats::default());
    }

    #[test]
    fn same_seed_same_population() {
        let catalog = Catalog::default();
        let a = generate_population(&catalog, config(50, 17)).unwrap();
        let b = generate_population(&catalog, config(50, 17)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn ids_depend_on_index_only() {
        let catalog = Catalog::default();
        let a = generate_population(&catalog, config(5, 1)).unwrap();
        let b = generate_population(&catalog, config(5, 2)).unwrap();
        let ids = |p: &Population| p.employees.iter().map(|e| e.id).collect::<Vec<_>>();
        assert_eq!(ids(&a), ids(&b));
    }

    #[test]
    fn records_stay_within_career_window() {
        let catalog = Catalog::default();
        let config = config(300, 5);
        let population = generate_population(&catalog, config.clone()).unwrap();
        for (e, p) in population.employees.iter().zip(&population.psychometrics) {
            assert_eq!(e.id, p.id);
            assert!(e.hire_year() >= e.earliest_hire_year());
            assert!(e.hire_year() <= e.last_active_year(config.reference_year));
            assert_eq!(e.works_here, e.time_left == 0);
            assert!(e.salary >= config.basic_income);
            let titles = &catalog.department(e.department).unwrap().titles;
            assert!(titles.contains(&e.job_title));
            assert!(p.iter().all(|(_, s)| s.is_bounded()));
        }
        assert_eq!(population.recruiters.searches, 300);
    }

    #[test]
    fn background_demotes_until_studies_fit() {
        // Born 1999 and still employed: a PhD would finish in 2026.
        assert_eq!(
            fit_background(AcademicBackground::Phd, 1999, 2020),
            AcademicBackground::Bachelor
        );
        assert_eq!(
            fit_background(AcademicBackground::Msc, 2002, 2020),
            AcademicBackground::HighSchool
        );
        assert_eq!(
            fit_background(AcademicBackground::Msc, 1980, 2020),
            AcademicBackground::Msc
        );
    }

    #[test]
    fn rejects_invalid_catalog_before_drawing() {
        let mut catalog = Catalog::default();
        catalog.departments.clear();
        let err = ProfileGenerator::new(&catalog, config(10, 1)).err();
        assert_eq!(err, Some(ConfigError::EmptyDepartments));
    }

    #[test]
    fn single_department_catalog_puts_everyone_there() {
        let mut catalog = Catalog::default();
        catalog.departments.retain(|d| d.department == Department::Hr);
        catalog.evaluation_order = vec![Department::Hr];
        let population = generate_population(&catalog, config(20, 3)).unwrap();
        assert!(population
            .employees
            .iter()
            .all(|e| e.department == Department::Hr));
    }
}
