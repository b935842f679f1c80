//! Consistency audit over a clean generated dataset.
//!
//! Re-checks the cross-field and cross-table rules the generators enforce,
//! so a workbook produced elsewhere (or edited by hand) can be vetted before
//! it goes through the noise stage.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use uuid::Uuid;
use workforce_model::{
    sheets, Department, Employee, PerformanceRecord, PsychometricProfile, Trait,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Error,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditFinding {
    pub level: Level,
    pub code: String,
    pub message: String,
    pub sheet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditSummary {
    pub employees: usize,
    pub psychometric_profiles: usize,
    pub performance_records: usize,
    pub error_count: usize,
    pub warning_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub reference_year: i32,
    pub summary: AuditSummary,
    pub findings: Vec<AuditFinding>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.summary.error_count == 0
    }
}

/// Everything the audit looks at, borrowed from decoded sheets.
#[derive(Debug, Clone, Copy)]
pub struct AuditInput<'a> {
    pub reference_year: i32,
    pub employees: &'a [Employee],
    pub psychometrics: &'a [PsychometricProfile],
    pub performance: &'a [(Department, Vec<PerformanceRecord>)],
}

struct Findings {
    items: Vec<AuditFinding>,
}

impl Findings {
    fn push(
        &mut self,
        level: Level,
        code: &str,
        sheet: &str,
        row: Option<usize>,
        employee_id: Option<Uuid>,
        message: String,
    ) {
        self.items.push(AuditFinding {
            level,
            code: code.to_string(),
            message,
            sheet: sheet.to_string(),
            row,
            employee_id,
        });
    }

    fn error(&mut self, code: &str, sheet: &str, row: usize, id: Uuid, message: String) {
        self.push(Level::Error, code, sheet, Some(row), Some(id), message);
    }
}

pub fn run_audit(input: AuditInput<'_>) -> AuditReport {
    let mut findings = Findings { items: Vec::new() };
    let by_id: HashMap<Uuid, &Employee> = input.employees.iter().map(|e| (e.id, e)).collect();

    check_employees(&input, &by_id, &mut findings);
    check_psychometrics(&input, &by_id, &mut findings);
    check_performance(&input, &by_id, &mut findings);

    let error_count = findings
        .items
        .iter()
        .filter(|f| f.level == Level::Error)
        .count();
    let summary = AuditSummary {
        employees: input.employees.len(),
        psychometric_profiles: input.psychometrics.len(),
        performance_records: input.performance.iter().map(|(_, r)| r.len()).sum(),
        error_count,
        warning_count: findings.items.len() - error_count,
    };
    tracing::info!(
        errors = summary.error_count,
        warnings = summary.warning_count,
        "audit finished"
    );
    AuditReport {
        reference_year: input.reference_year,
        summary,
        findings: findings.items,
    }
}

fn check_employees(input: &AuditInput<'_>, by_id: &HashMap<Uuid, &Employee>, out: &mut Findings) {
    let sheet = sheets::PROFESSIONAL_PROFILE;
    if by_id.len() != input.employees.len() {
        out.push(
            Level::Error,
            "duplicate_id",
            sheet,
            None,
            None,
            format!(
                "{} rows share an id with another row",
                input.employees.len() - by_id.len()
            ),
        );
    }
    if !input.employees.is_empty() && !input.employees.iter().any(|e| e.department == Department::Hr) {
        out.push(
            Level::Warning,
            "no_hr_staff",
            sheet,
            None,
            None,
            "no employee works in HR, so nobody can have a recruiter".to_string(),
        );
    }

    for (row, e) in input.employees.iter().enumerate() {
        let last_active = e.last_active_year(input.reference_year);
        if e.hire_year() < e.earliest_hire_year() || e.hire_year() > last_active {
            out.error(
                "hire_window",
                sheet,
                row,
                e.id,
                format!(
                    "hired in {} outside {}..={}",
                    e.hire_year(),
                    e.earliest_hire_year(),
                    last_active
                ),
            );
        }
        if e.works_here != (e.time_left == 0) {
            out.error(
                "works_here_mismatch",
                sheet,
                row,
                e.id,
                format!("works_here={} with time_left={}", e.works_here, e.time_left),
            );
        }

        let Some(recruiter_id) = e.recruiter.id() else {
            continue;
        };
        match by_id.get(&recruiter_id) {
            None => out.error(
                "unknown_recruiter",
                sheet,
                row,
                e.id,
                format!("recruiter {recruiter_id} is not an employee"),
            ),
            Some(r) if r.department != Department::Hr => out.error(
                "recruiter_not_hr",
                sheet,
                row,
                e.id,
                format!("recruiter {} works in {}", r.display_name(), r.department),
            ),
            Some(r) if r.hire_date >= e.hire_date => out.error(
                "recruiter_hired_later",
                sheet,
                row,
                e.id,
                format!(
                    "recruiter hired {} is not before {}",
                    r.hire_date, e.hire_date
                ),
            ),
            Some(r) if r.display_name() != e.recruiter.name_label() => out.push(
                Level::Warning,
                "recruiter_name_mismatch",
                sheet,
                Some(row),
                Some(e.id),
                format!(
                    "recruiter recorded as `{}` but is `{}`",
                    e.recruiter.name_label(),
                    r.display_name()
                ),
            ),
            Some(_) => {}
        }
    }
}

fn check_psychometrics(
    input: &AuditInput<'_>,
    by_id: &HashMap<Uuid, &Employee>,
    out: &mut Findings,
) {
    let sheet = sheets::PSYCHOMETRIC_INDICATORS;
    if input.psychometrics.len() != input.employees.len() {
        out.push(
            Level::Error,
            "profile_count",
            sheet,
            None,
            None,
            format!(
                "{} psychometric rows for {} employees",
                input.psychometrics.len(),
                input.employees.len()
            ),
        );
    }
    for (row, p) in input.psychometrics.iter().enumerate() {
        if !by_id.contains_key(&p.id) {
            out.error(
                "orphan_profile",
                sheet,
                row,
                p.id,
                "no employee with this id".to_string(),
            );
        }
        for t in Trait::ALL {
            let s = p.score(t);
            if !s.is_bounded() {
                out.error(
                    "composite_out_of_bounds",
                    sheet,
                    row,
                    p.id,
                    format!(
                        "{} = {} outside facets {} and {}",
                        t.label(),
                        s.composite,
                        s.facet_a,
                        s.facet_b
                    ),
                );
            }
        }
    }
}

fn check_performance(
    input: &AuditInput<'_>,
    by_id: &HashMap<Uuid, &Employee>,
    out: &mut Findings,
) {
    for (dept, records) in input.performance {
        let sheet = dept.label();
        let mut seen = HashSet::new();
        for (row, r) in records.iter().enumerate() {
            if !seen.insert((r.employee_id, r.year)) {
                out.push(
                    Level::Warning,
                    "duplicate_evaluation",
                    sheet,
                    Some(row),
                    Some(r.employee_id),
                    format!("second evaluation for {}", r.year),
                );
            }
            if r.promotions != PerformanceRecord::promotions_for(r.loyalty) {
                out.error(
                    "promotion_formula",
                    sheet,
                    row,
                    r.employee_id,
                    format!("{} promotions after {} years", r.promotions, r.loyalty),
                );
            }
            if let Some(level) = r.band.forced_level() {
                if level != r.performance {
                    out.error(
                        "band_label_mismatch",
                        sheet,
                        row,
                        r.employee_id,
                        format!("{} rated {}", r.band.label(), r.performance.label()),
                    );
                }
            }

            let Some(e) = by_id.get(&r.employee_id) else {
                out.error(
                    "unknown_employee",
                    sheet,
                    row,
                    r.employee_id,
                    "no employee with this id".to_string(),
                );
                continue;
            };
            if e.department != *dept {
                out.error(
                    "wrong_department",
                    sheet,
                    row,
                    r.employee_id,
                    format!("employee works in {}", e.department),
                );
            }
            let last_active = e.last_active_year(input.reference_year);
            if r.year <= e.hire_year() || r.year > last_active {
                out.error(
                    "evaluation_outside_tenure",
                    sheet,
                    row,
                    r.employee_id,
                    format!(
                        "evaluated for {} but employed {}..={}",
                        r.year,
                        e.hire_year(),
                        last_active
                    ),
                );
            } else if r.loyalty as i32 != r.year - e.hire_year() {
                out.error(
                    "loyalty_mismatch",
                    sheet,
                    row,
                    r.employee_id,
                    format!("loyalty {} for {} years since hire", r.loyalty, r.year - e.hire_year()),
                );
            }
        }
    }
}
