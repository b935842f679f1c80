//! Workforce Synth CLI
//!
//! One subcommand per pipeline stage, plus an audit:
//! - `profiles`: generate employees + psychometric indicators
//! - `performance`: add one evaluation sheet per department
//! - `noise`: write a corrupted copy of a workbook
//! - `check`: audit a clean workbook for consistency

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use workforce_gen::{generate_population, PerformanceGenerator};
use workforce_model::{sheets, Catalog};
use workforce_noise::{corrupt_workbook, workbook_plans, NoiseInjector};
use workforce_table::codec::{
    decode_employees, encode_employees, encode_performance, encode_psychometrics,
};
use workforce_table::{JsonWorkbook, Workbook};

mod check;
mod config;

use config::WorkforceConfig;

#[derive(Parser)]
#[command(name = "workforce")]
#[command(author, version, about = "Workforce Synth: reproducible synthetic workforce datasets")]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug). `RUST_LOG` wins when set.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// JSON config file with `profiles`, `performance` and `noise` sections.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the professional profile and psychometric sheets.
    Profiles {
        /// Output workbook (created or updated in place).
        #[arg(short, long)]
        out: PathBuf,
        #[arg(long)]
        employees: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate one performance sheet per department from a profile workbook.
    Performance {
        /// Workbook containing `Professional_Profile`.
        input: PathBuf,
        /// Output workbook; defaults to updating the input.
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Write a corrupted copy of every known sheet.
    Noise {
        /// Clean workbook.
        input: PathBuf,
        /// Dirty workbook (must differ from the input).
        #[arg(short, long)]
        out: PathBuf,
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Audit a clean workbook.
    Check {
        input: PathBuf,
        /// Output format: `text` or `json`.
        #[arg(long, default_value = "text")]
        format: String,
        /// Write the report to a file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Exit 0 even when errors are found.
        #[arg(long)]
        no_fail: bool,
    },

    /// Run profiles, performance and noise in one go.
    All {
        /// Clean workbook.
        #[arg(long)]
        clean: PathBuf,
        /// Dirty workbook.
        #[arg(long)]
        dirty: PathBuf,
        #[arg(long)]
        employees: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn setup_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let config = WorkforceConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Profiles {
            out,
            employees,
            seed,
        } => cmd_profiles(&config.with_overrides(employees, seed), &out),
        Commands::Performance { input, out, seed } => {
            let out = out.unwrap_or_else(|| input.clone());
            cmd_performance(&config.with_overrides(None, seed), &input, &out)
        }
        Commands::Noise { input, out, seed } => {
            cmd_noise(&config.with_overrides(None, seed), &input, &out)
        }
        Commands::Check {
            input,
            format,
            out,
            no_fail,
        } => check::cmd_check(
            &input,
            out.as_ref(),
            &format,
            config.profiles.reference_year,
            no_fail,
        ),
        Commands::All {
            clean,
            dirty,
            employees,
            seed,
        } => {
            let config = config.with_overrides(employees, seed);
            cmd_profiles(&config, &clean)?;
            cmd_performance(&config, &clean, &clean)?;
            cmd_noise(&config, &clean, &dirty)
        }
    }
}

/// Compares resolved paths when both exist, raw paths otherwise.
fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn cmd_profiles(config: &WorkforceConfig, out: &Path) -> Result<()> {
    config.validate()?;
    let catalog = Catalog::default();
    println!(
        "{} {} employees (seed {})",
        "Generating".green().bold(),
        config.profiles.employees,
        config.profiles.seed
    );

    let population = generate_population(&catalog, config.profiles.clone())
        .context("invalid generator configuration")?;

    let mut book = JsonWorkbook::open_or_create(out)?;
    book.write_sheet(encode_employees(&population.employees))
        .with_context(|| format!("failed to write {}", sheets::PROFESSIONAL_PROFILE))?;
    book.write_sheet(encode_psychometrics(&population.psychometrics))
        .with_context(|| format!("failed to write {}", sheets::PSYCHOMETRIC_INDICATORS))?;

    println!(
        "  {} {} ({} recruited, {} without recruiter)",
        "→".cyan(),
        out.display(),
        population.recruiters.assigned,
        population.recruiters.unassigned
    );
    Ok(())
}

fn cmd_performance(config: &WorkforceConfig, input: &Path, out: &Path) -> Result<()> {
    let catalog = Catalog::default();
    catalog.validate().context("invalid catalog")?;
    println!(
        "{} performance records from {}",
        "Generating".green().bold(),
        input.display()
    );

    let source = JsonWorkbook::open(input)?;
    let profile = source
        .read_sheet(sheets::PROFESSIONAL_PROFILE)
        .with_context(|| format!("{} has no profile sheet", input.display()))?;
    let employees = decode_employees(&profile)?;

    let mut book = if same_file(input, out) {
        source
    } else {
        JsonWorkbook::open_or_create(out)?
    };
    let mut generator = PerformanceGenerator::new(&employees, config.performance.clone());
    for (dept, records) in generator.all(&catalog) {
        book.write_sheet(encode_performance(dept, &records))
            .with_context(|| format!("failed to write sheet {dept}"))?;
        println!("  {} {:<12} {} records", "→".cyan(), dept.label(), records.len());
    }
    println!("  {} {}", "→".cyan(), out.display());
    Ok(())
}

fn cmd_noise(config: &WorkforceConfig, input: &Path, out: &Path) -> Result<()> {
    config.validate()?;
    if same_file(input, out) {
        anyhow::bail!("noise output must differ from the clean input");
    }
    println!(
        "{} {} (seed {})",
        "Corrupting".green().bold(),
        input.display(),
        config.noise.seed
    );

    let catalog = Catalog::default();
    let source = JsonWorkbook::open(input)?;
    let mut dirty = JsonWorkbook::create(out);
    let mut injector = NoiseInjector::new(&config.noise);
    let plans = workbook_plans(&catalog, config.noise.rates);
    let written = corrupt_workbook(&source, &mut dirty, &plans, &mut injector)
        .with_context(|| format!("failed to corrupt {}", input.display()))?;

    let totals = injector.totals();
    println!(
        "  {} {} sheets, {} typos, {} blanks, {} confusions, {} dropped rows",
        "→".cyan(),
        written.len(),
        totals.typos,
        totals.missing,
        totals.confused,
        totals.dropped
    );
    println!("  {} {}", "→".cyan(), out.display());
    Ok(())
}
