//! Big Five trait profiles.
//!
//! Each composite trait is bounded by two facets:
//! `min(facet_a, facet_b) <= composite <= max(facet_a, facet_b)`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trait {
    Conscientiousness,
    Neuroticism,
    Extraversion,
    OpennessToExperience,
    Agreeableness,
}

impl Trait {
    /// Generation and column order.
    pub const ALL: [Trait; 5] = [
        Trait::Conscientiousness,
        Trait::Neuroticism,
        Trait::Extraversion,
        Trait::OpennessToExperience,
        Trait::Agreeableness,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Trait::Conscientiousness => "Conscientiousness",
            Trait::Neuroticism => "Neuroticism",
            Trait::Extraversion => "Extraversion",
            Trait::OpennessToExperience => "Openness to Experience",
            Trait::Agreeableness => "Agreeableness",
        }
    }

    pub fn facet_labels(self) -> (&'static str, &'static str) {
        match self {
            Trait::Conscientiousness => ("Orderliness", "Industriousness"),
            Trait::Neuroticism => ("Withdrawal", "Volatility"),
            Trait::Extraversion => ("Enthusiasm", "Assertiveness"),
            Trait::OpennessToExperience => ("Intellect", "Openness"),
            Trait::Agreeableness => ("Compassion", "Politeness"),
        }
    }
}

/// Scores on a 0..=100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScore {
    pub facet_a: u8,
    pub facet_b: u8,
    pub composite: u8,
}

impl TraitScore {
    pub fn is_bounded(&self) -> bool {
        let lo = self.facet_a.min(self.facet_b);
        let hi = self.facet_a.max(self.facet_b);
        (lo..=hi).contains(&self.composite)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PsychometricProfile {
    /// Same id as the owning `Employee`.
    pub id: Uuid,
    /// Indexed like `Trait::ALL`.
    pub scores: [TraitScore; 5],
}

impl PsychometricProfile {
    pub fn score(&self, t: Trait) -> TraitScore {
        let idx = Trait::ALL.iter().position(|x| *x == t).unwrap_or(0);
        self.scores[idx]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Trait, TraitScore)> + '_ {
        Trait::ALL.into_iter().zip(self.scores.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_accepts_either_facet_order() {
        let s = TraitScore { facet_a: 80, facet_b: 20, composite: 20 };
        assert!(s.is_bounded());
        let s = TraitScore { facet_a: 20, facet_b: 80, composite: 80 };
        assert!(s.is_bounded());
        let s = TraitScore { facet_a: 20, facet_b: 80, composite: 81 };
        assert!(!s.is_bounded());
    }
}
