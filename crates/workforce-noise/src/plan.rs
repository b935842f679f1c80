//! Column classification and confusion rules for one sheet.

use crate::NoiseRates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    First,
    Last,
}

/// How a confused categorical cell changes.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfusionRule {
    /// The first value becomes the second; anything else, missing
    /// included, becomes the first.
    Toggle(String, String),
    /// Replaces the value with a different one from the list.
    Reassign(Vec<String>),
    /// Draws a fresh name from the identity source.
    Regenerate(NameKind),
}

impl ConfusionRule {
    pub fn toggle(a: impl Into<String>, b: impl Into<String>) -> Self {
        ConfusionRule::Toggle(a.into(), b.into())
    }

    pub fn reassign<S: AsRef<str>>(choices: &[S]) -> Self {
        ConfusionRule::Reassign(choices.iter().map(|c| c.as_ref().to_string()).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnRule {
    pub column: String,
    pub rule: ConfusionRule,
}

impl ColumnRule {
    pub fn new(column: impl Into<String>, rule: ConfusionRule) -> Self {
        Self {
            column: column.into(),
            rule,
        }
    }
}

/// Two rules sharing one draw per row.
///
/// With confusion rate `p`, a draw below `p` applies `low` and a draw above
/// `1 - p` applies `high`; `low` wins where the tails overlap, so a row is
/// confused at most once per pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfusionPair {
    pub low: ColumnRule,
    pub high: ColumnRule,
}

/// Everything the injector needs to corrupt one sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePlan {
    pub sheet: String,
    /// Character-level typos.
    pub text_columns: Vec<String>,
    /// Digit-level typos; non-integer cells are left alone.
    pub numeric_columns: Vec<String>,
    pub confusions: Vec<ConfusionPair>,
    pub rates: NoiseRates,
}

impl TablePlan {
    pub fn new(sheet: impl Into<String>, rates: NoiseRates) -> Self {
        Self {
            sheet: sheet.into(),
            text_columns: Vec::new(),
            numeric_columns: Vec::new(),
            confusions: Vec::new(),
            rates,
        }
    }

    pub fn text<S: AsRef<str>>(mut self, columns: &[S]) -> Self {
        self.text_columns
            .extend(columns.iter().map(|c| c.as_ref().to_string()));
        self
    }

    pub fn numeric<S: AsRef<str>>(mut self, columns: &[S]) -> Self {
        self.numeric_columns
            .extend(columns.iter().map(|c| c.as_ref().to_string()));
        self
    }

    pub fn confuse(mut self, low: ColumnRule, high: ColumnRule) -> Self {
        self.confusions.push(ConfusionPair { low, high });
        self
    }
}
