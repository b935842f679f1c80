//! Seeded random stream shared by every draw of a stage.
//!
//! All generators consume one `SeededRng` in a fixed loop order, so the same
//! seed always reproduces the same tables. The stream is ChaCha8 rather than
//! `StdRng` because ChaCha8's output is stable across `rand` releases.

use chrono::{Datelike, Duration, NaiveDate};
use rand::distributions::{Distribution, WeightedIndex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;

#[derive(Debug, Clone)]
pub struct SeededRng {
    inner: ChaCha8Rng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Uniform in `[lo, hi)`; returns `lo` when the interval is empty.
    ///
    /// Unlike `gen_range` this never panics on `lo >= hi`.
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.unit()
    }

    /// Integer part of `uniform(lo, hi)`.
    pub fn uniform_int(&mut self, lo: f64, hi: f64) -> i64 {
        self.uniform(lo, hi).trunc() as i64
    }

    /// Uniform index in `0..len` (0 for an empty range).
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.uniform_int(0.0, len as f64) as usize).min(len - 1)
    }

    /// `true` with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }

    /// Categorical draw over `weights`; weights must not all be zero.
    pub fn weighted(&mut self, weights: &[f64]) -> usize {
        match WeightedIndex::new(weights) {
            Ok(dist) => dist.sample(&mut self.inner),
            Err(_) => 0,
        }
    }

    pub fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        match Normal::new(mean, std_dev) {
            Ok(dist) => dist.sample(&mut self.inner),
            Err(_) => mean,
        }
    }

    pub fn lowercase_letter(&mut self) -> char {
        (b'a' + self.index(26) as u8) as char
    }

    pub fn digit(&mut self) -> char {
        (b'0' + self.index(10) as u8) as char
    }

    /// Uniform calendar date inside `year` (Jan 1 ..= Dec 31).
    pub fn date_in_year(&mut self, year: i32) -> NaiveDate {
        let (Some(start), Some(end)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        ) else {
            return NaiveDate::MIN;
        };
        let days = (end - start).num_days() as usize + 1;
        let date = start + Duration::days(self.index(days) as i64);
        debug_assert_eq!(date.year(), year);
        date
    }
}
