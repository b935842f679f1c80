//! The corruption pass.
//!
//! Operators run in a fixed order against one running stream: typos, then
//! missing values, then categorical confusion, then row drops. Each operator
//! walks the table row-major, so the same seed and plan sequence always
//! produce the same dirty workbook.

use workforce_gen::{CatalogIdentity, IdentitySource, SeededRng};
use workforce_table::{Cell, Table, TableError};

use crate::plan::{ColumnRule, ConfusionRule, NameKind, TablePlan};
use crate::NoiseConfig;

/// Counts of applied corruptions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoiseStats {
    pub typos: usize,
    pub missing: usize,
    pub confused: usize,
    pub dropped: usize,
}

impl NoiseStats {
    fn absorb(&mut self, other: NoiseStats) {
        self.typos += other.typos;
        self.missing += other.missing;
        self.confused += other.confused;
        self.dropped += other.dropped;
    }
}

pub struct NoiseInjector<I = CatalogIdentity> {
    rng: SeededRng,
    identity: I,
    totals: NoiseStats,
}

impl NoiseInjector<CatalogIdentity> {
    pub fn new(config: &NoiseConfig) -> Self {
        Self::with_identity(config.seed, CatalogIdentity::new(config.name_seed))
    }
}

struct ResolvedRule<'p> {
    col: usize,
    rule: &'p ConfusionRule,
}

impl<I: IdentitySource> NoiseInjector<I> {
    pub fn with_identity(seed: u64, identity: I) -> Self {
        Self {
            rng: SeededRng::new(seed),
            identity,
            totals: NoiseStats::default(),
        }
    }

    /// Corruptions applied by every `corrupt` call so far.
    pub fn totals(&self) -> NoiseStats {
        self.totals
    }

    /// Returns a corrupted copy of `table`; the input is never modified.
    ///
    /// Fails with `MissingColumn` if the plan names a column the table lacks.
    pub fn corrupt(&mut self, table: &Table, plan: &TablePlan) -> Result<Table, TableError> {
        let text = resolve(table, &plan.text_columns)?;
        let numeric = resolve(table, &plan.numeric_columns)?;
        let pairs = plan
            .confusions
            .iter()
            .map(|pair| Ok((resolve_rule(table, &pair.low)?, resolve_rule(table, &pair.high)?)))
            .collect::<Result<Vec<_>, TableError>>()?;

        let rates = plan.rates;
        let mut out = table.clone();
        let mut stats = NoiseStats::default();

        for row in out.rows.iter_mut() {
            for &col in &text {
                if self.rng.chance(rates.typo) && self.text_typo(&mut row[col]) {
                    stats.typos += 1;
                }
            }
            for &col in &numeric {
                if self.rng.chance(rates.typo) && self.digit_typo(&mut row[col]) {
                    stats.typos += 1;
                }
            }
        }

        for row in out.rows.iter_mut() {
            for cell in row.iter_mut() {
                if self.rng.chance(rates.missing) {
                    *cell = Cell::Missing;
                    stats.missing += 1;
                }
            }
        }

        let p = rates.confusion;
        for row in out.rows.iter_mut() {
            for (low, high) in &pairs {
                let u = self.rng.unit();
                let target = if u < p {
                    low
                } else if u > 1.0 - p {
                    high
                } else {
                    continue;
                };
                if self.confuse(&mut row[target.col], target.rule) {
                    stats.confused += 1;
                }
            }
        }

        let before = out.rows.len();
        let rng = &mut self.rng;
        out.rows.retain(|_| !rng.chance(rates.drop));
        stats.dropped = before - out.rows.len();

        tracing::debug!(
            sheet = %plan.sheet,
            rows = out.len(),
            typos = stats.typos,
            missing = stats.missing,
            confused = stats.confused,
            dropped = stats.dropped,
            "corrupted sheet"
        );
        self.totals.absorb(stats);
        Ok(out)
    }

    /// Replaces one character with a random lowercase letter.
    fn text_typo(&mut self, cell: &mut Cell) -> bool {
        let Cell::Text(s) = cell else {
            return false;
        };
        let mut chars: Vec<char> = s.chars().collect();
        if chars.is_empty() {
            return false;
        }
        let at = self.rng.index(chars.len());
        chars[at] = self.rng.lowercase_letter();
        *s = chars.into_iter().collect();
        true
    }

    /// Replaces one decimal digit with a random digit and re-parses.
    fn digit_typo(&mut self, cell: &mut Cell) -> bool {
        let Cell::Int(v) = cell else {
            return false;
        };
        let mut digits: Vec<char> = v.to_string().chars().collect();
        let positions: Vec<usize> = digits
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_ascii_digit())
            .map(|(i, _)| i)
            .collect();
        let at = positions[self.rng.index(positions.len())];
        digits[at] = self.rng.digit();
        match digits.into_iter().collect::<String>().parse::<i64>() {
            Ok(parsed) => {
                *v = parsed;
                true
            }
            Err(_) => false,
        }
    }

    fn confuse(&mut self, cell: &mut Cell, rule: &ConfusionRule) -> bool {
        match rule {
            ConfusionRule::Toggle(a, b) => {
                let next = if cell.as_str() == Some(a.as_str()) { b } else { a };
                *cell = Cell::text(next.as_str());
                true
            }
            ConfusionRule::Reassign(choices) => {
                let current = cell.as_str();
                let candidates: Vec<&String> = choices
                    .iter()
                    .filter(|c| Some(c.as_str()) != current)
                    .collect();
                if candidates.is_empty() {
                    return false;
                }
                let pick = candidates[self.rng.index(candidates.len())].clone();
                *cell = Cell::Text(pick);
                true
            }
            ConfusionRule::Regenerate(kind) => {
                let name = match kind {
                    NameKind::First => self.identity.first_name(),
                    NameKind::Last => self.identity.last_name(),
                };
                *cell = Cell::Text(name);
                true
            }
        }
    }
}

fn resolve(table: &Table, columns: &[String]) -> Result<Vec<usize>, TableError> {
    columns.iter().map(|c| table.require_column(c)).collect()
}

fn resolve_rule<'p>(table: &Table, column_rule: &'p ColumnRule) -> Result<ResolvedRule<'p>, TableError> {
    Ok(ResolvedRule {
        col: table.require_column(&column_rule.column)?,
        rule: &column_rule.rule,
    })
}
