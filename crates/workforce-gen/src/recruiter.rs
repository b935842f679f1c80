//! Recruiter assignment.
//!
//! Recruiters are HR employees hired strictly before the employee they
//! recruit. `HireDateIndex` keeps HR rows sorted by hire date so the eligible
//! set for any date is a prefix found by binary search.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use workforce_model::{Department, Employee, Recruiter};

use crate::SeededRng;

/// Read-only view over the HR rows of an employee table, ordered by hire date.
#[derive(Debug)]
pub struct HireDateIndex<'a> {
    employees: &'a [Employee],
    /// Indices into `employees`, sorted by `(hire_date, index)`.
    by_hire_date: Vec<usize>,
}

impl<'a> HireDateIndex<'a> {
    pub fn new(employees: &'a [Employee]) -> Self {
        let mut by_hire_date: Vec<usize> = employees
            .iter()
            .enumerate()
            .filter(|(_, e)| e.department == Department::Hr)
            .map(|(i, _)| i)
            .collect();
        by_hire_date.sort_by_key(|&i| (employees[i].hire_date, i));
        Self {
            employees,
            by_hire_date,
        }
    }

    pub fn len(&self) -> usize {
        self.by_hire_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_hire_date.is_empty()
    }

    /// Table indices of HR employees hired strictly before `date`, in table order.
    pub fn hired_before(&self, date: NaiveDate) -> Vec<usize> {
        let end = self
            .by_hire_date
            .partition_point(|&i| self.employees[i].hire_date < date);
        let mut eligible = self.by_hire_date[..end].to_vec();
        eligible.sort_unstable();
        eligible
    }
}

/// Counters from one assignment pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecruiterStats {
    /// One per employee.
    pub searches: usize,
    pub assigned: usize,
    /// Employees left with the `none` sentinel.
    pub unassigned: usize,
}

/// Picks a recruiter for every employee, in table order.
///
/// The draw is uniform over the eligible set; an empty set consumes no
/// randomness and yields `Recruiter::None`.
pub fn assign_recruiters(employees: &mut [Employee], rng: &mut SeededRng) -> RecruiterStats {
    let mut stats = RecruiterStats::default();
    let picks: Vec<Recruiter> = {
        let index = HireDateIndex::new(employees);
        tracing::debug!(hr_employees = index.len(), "built recruiter index");
        employees
            .iter()
            .map(|employee| {
                stats.searches += 1;
                let eligible = index.hired_before(employee.hire_date);
                if eligible.is_empty() {
                    stats.unassigned += 1;
                    return Recruiter::None;
                }
                let recruiter = &employees[eligible[rng.index(eligible.len())]];
                stats.assigned += 1;
                Recruiter::Assigned {
                    id: recruiter.id,
                    name: recruiter.display_name(),
                }
            })
            .collect()
    };

    for (employee, recruiter) in employees.iter_mut().zip(picks) {
        employee.recruiter = recruiter;
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::employee;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn eligible_prefix_is_strictly_earlier() {
        let staff = vec![
            employee(0, Department::Hr, date(2010, 5, 1)),
            employee(1, Department::Sales, date(2005, 1, 1)),
            employee(2, Department::Hr, date(2008, 3, 1)),
            employee(3, Department::Hr, date(2010, 5, 1)),
        ];
        let index = HireDateIndex::new(&staff);
        assert_eq!(index.len(), 3);
        assert_eq!(index.hired_before(date(2008, 3, 1)), Vec::<usize>::new());
        assert_eq!(index.hired_before(date(2010, 5, 1)), vec![2]);
        assert_eq!(index.hired_before(date(2011, 1, 1)), vec![0, 2, 3]);
    }

    #[test]
    fn nobody_recruits_without_an_earlier_hr_hire() {
        let mut staff = vec![
            employee(0, Department::Hr, date(2015, 1, 1)),
            employee(1, Department::Legal, date(2014, 1, 1)),
        ];
        let stats = assign_recruiters(&mut staff, &mut SeededRng::new(1));
        assert_eq!(
            stats,
            RecruiterStats {
                searches: 2,
                assigned: 0,
                unassigned: 2
            }
        );
        assert!(staff.iter().all(|e| e.recruiter == Recruiter::None));
    }

    #[test]
    fn assigned_recruiter_is_hr_and_hired_earlier() {
        let mut staff = vec![
            employee(0, Department::Hr, date(2001, 1, 1)),
            employee(1, Department::Hr, date(2003, 6, 1)),
            employee(2, Department::Finance, date(2010, 1, 1)),
            employee(3, Department::Technology, date(2002, 1, 1)),
        ];
        let stats = assign_recruiters(&mut staff, &mut SeededRng::new(9));
        assert_eq!(stats.assigned, 3);
        for e in &staff {
            if let Some(id) = e.recruiter.id() {
                let r = staff.iter().find(|c| c.id == id).unwrap();
                assert_eq!(r.department, Department::Hr);
                assert!(r.hire_date < e.hire_date);
                assert_eq!(e.recruiter.name_label(), r.display_name());
            }
        }
        assert_eq!(staff[3].recruiter.id(), Some(staff[0].id));
    }
}
