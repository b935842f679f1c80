//! Data-quality defect injection.
//!
//! The noise stage turns a clean workbook into a dirty one, sheet by sheet.
//! Each sheet gets a `TablePlan` naming its text, numeric and categorical
//! columns; a single `NoiseInjector` stream runs across all sheets in plan
//! order.

pub mod injector;
pub mod plan;
pub mod presets;
pub mod rates;

pub use injector::{NoiseInjector, NoiseStats};
pub use plan::{ColumnRule, ConfusionPair, ConfusionRule, NameKind, TablePlan};
pub use presets::{department_plan, profile_plan, psychometric_plan, workbook_plans};
pub use rates::{NoiseConfig, NoiseRates};

use workforce_gen::IdentitySource;
use workforce_table::{TableError, Workbook};

/// Corrupts every planned sheet of `src` into `dst`.
///
/// Sheets the source lacks are skipped with a warning. Returns the names of
/// the sheets written.
pub fn corrupt_workbook<S, D, I>(
    src: &S,
    dst: &mut D,
    plans: &[TablePlan],
    injector: &mut NoiseInjector<I>,
) -> Result<Vec<String>, TableError>
where
    S: Workbook + ?Sized,
    D: Workbook + ?Sized,
    I: IdentitySource,
{
    let mut written = Vec::new();
    for plan in plans {
        if !src.has_sheet(&plan.sheet) {
            tracing::warn!(sheet = %plan.sheet, "sheet missing from input, skipping");
            continue;
        }
        let clean = src.read_sheet(&plan.sheet)?;
        let dirty = injector.corrupt(&clean, plan)?;
        dst.write_sheet(dirty)?;
        written.push(plan.sheet.clone());
    }
    let totals = injector.totals();
    tracing::info!(
        sheets = written.len(),
        typos = totals.typos,
        missing = totals.missing,
        confused = totals.confused,
        dropped = totals.dropped,
        "noise injection finished"
    );
    Ok(written)
}
