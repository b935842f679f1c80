//! Noise plans for the sheets of a generated workbook.

use workforce_model::{sheets, Catalog, Department, DepartmentMetrics, MaritalStatus, PerformanceRecord};
use workforce_table::codec::profile_columns as col;

use crate::plan::{ColumnRule, ConfusionRule, NameKind, TablePlan};
use crate::NoiseRates;

/// Professional profile: name and title typos, count and salary typos,
/// name regeneration, marital/department confusion. Rows are never dropped.
pub fn profile_plan(catalog: &Catalog, rates: NoiseRates) -> TablePlan {
    TablePlan::new(sheets::PROFESSIONAL_PROFILE, rates.with_drop(0.0))
        .text(&[col::FIRST_NAME, col::LAST_NAME, col::JOB_TITLE])
        .numeric(&[col::TIME_LEFT, col::CHILDREN, col::PREVIOUS_EMPLOYERS, col::SALARY])
        .confuse(
            ColumnRule::new(col::FIRST_NAME, ConfusionRule::Regenerate(NameKind::First)),
            ColumnRule::new(col::LAST_NAME, ConfusionRule::Regenerate(NameKind::Last)),
        )
        .confuse(
            ColumnRule::new(
                col::MARITAL_STATUS,
                ConfusionRule::toggle(MaritalStatus::Married.label(), MaritalStatus::Single.label()),
            ),
            ColumnRule::new(
                col::DEPARTMENT,
                ConfusionRule::reassign(catalog.department_labels().as_slice()),
            ),
        )
}

pub fn department_plan(dept: Department, rates: NoiseRates) -> TablePlan {
    TablePlan::new(dept.label(), rates)
        .text(&["Performance"])
        .numeric(&PerformanceRecord::SHARED_TYPO_COLUMNS)
        .numeric(DepartmentMetrics::typo_columns(dept))
}

/// Psychometric indicators only lose cells and rows.
pub fn psychometric_plan(rates: NoiseRates) -> TablePlan {
    TablePlan::new(sheets::PSYCHOMETRIC_INDICATORS, rates.missing_and_drop_only())
}

/// Plans in processing order: profile, departments in evaluation order,
/// psychometric indicators.
pub fn workbook_plans(catalog: &Catalog, rates: NoiseRates) -> Vec<TablePlan> {
    let mut plans = vec![profile_plan(catalog, rates)];
    plans.extend(
        catalog
            .evaluation_order
            .iter()
            .map(|&dept| department_plan(dept, rates)),
    );
    plans.push(psychometric_plan(rates));
    plans
}
