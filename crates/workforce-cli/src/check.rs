//! `workforce check`: audit a clean workbook and report findings.

use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

use workforce_gen::{run_audit, AuditFinding, AuditInput, AuditReport, Level};
use workforce_model::{sheets, Catalog, Department, PerformanceRecord};
use workforce_table::codec::{decode_employees, decode_performance, decode_psychometrics};
use workforce_table::{JsonWorkbook, Workbook};

pub fn cmd_check(
    input: &Path,
    out: Option<&PathBuf>,
    format: &str,
    reference_year: i32,
    no_fail: bool,
) -> Result<()> {
    let format = format.trim().to_ascii_lowercase();
    if !matches!(format.as_str(), "json" | "text") {
        return Err(anyhow!("unknown --format `{format}` (expected json|text)"));
    }

    let book = JsonWorkbook::open(input)?;
    let report = audit_workbook(&book, &Catalog::default(), reference_year)
        .with_context(|| format!("failed to audit {}", input.display()))?;

    let rendered = match format.as_str() {
        "json" => serde_json::to_string_pretty(&report)?,
        _ => render_report_text(&report, input),
    };
    match out {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        None => println!("{rendered}"),
    }

    if !report.is_clean() && !no_fail {
        return Err(anyhow!(
            "audit found {} error(s)",
            report.summary.error_count
        ));
    }
    Ok(())
}

/// Decodes the clean sheets of `book` and audits them.
///
/// Department sheets the workbook lacks are skipped; the profile and
/// psychometric sheets are required.
pub fn audit_workbook<W: Workbook + ?Sized>(
    book: &W,
    catalog: &Catalog,
    reference_year: i32,
) -> Result<AuditReport> {
    let employees = decode_employees(&book.read_sheet(sheets::PROFESSIONAL_PROFILE)?)?;
    let psychometrics = decode_psychometrics(&book.read_sheet(sheets::PSYCHOMETRIC_INDICATORS)?)?;

    let mut performance: Vec<(Department, Vec<PerformanceRecord>)> = Vec::new();
    for &dept in &catalog.evaluation_order {
        if !book.has_sheet(dept.label()) {
            tracing::warn!(sheet = dept.label(), "department sheet missing, not audited");
            continue;
        }
        let records = decode_performance(dept, &book.read_sheet(dept.label())?)?;
        performance.push((dept, records));
    }

    Ok(run_audit(AuditInput {
        reference_year,
        employees: &employees,
        psychometrics: &psychometrics,
        performance: &performance,
    }))
}

pub fn render_report_text(r: &AuditReport, input: &Path) -> String {
    let mut out = String::new();
    out.push_str("audit\n");
    out.push_str(&format!("  input: {}\n", input.display()));
    out.push_str(&format!("  reference year: {}\n", r.reference_year));
    out.push_str(&format!(
        "  rows: employees={} psychometrics={} evaluations={}\n",
        r.summary.employees, r.summary.psychometric_profiles, r.summary.performance_records
    ));
    out.push_str(&format!(
        "  summary: errors={} warnings={}\n",
        r.summary.error_count, r.summary.warning_count
    ));

    if r.findings.is_empty() {
        out.push_str("  (no findings)\n");
        return out;
    }

    for (level, title) in [(Level::Error, "error"), (Level::Warning, "warning")] {
        let items: Vec<&AuditFinding> = r.findings.iter().filter(|f| f.level == level).collect();
        if items.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{title}\n"));
        for f in items {
            let mut ctx = format!(" sheet={}", f.sheet);
            if let Some(row) = f.row {
                ctx.push_str(&format!(" row={row}"));
            }
            if let Some(id) = f.employee_id {
                ctx.push_str(&format!(" id={id}"));
            }
            out.push_str(&format!("  - {}: {}{}\n", f.code, f.message, ctx));
        }
    }
    out
}
