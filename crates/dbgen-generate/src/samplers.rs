use chrono::{Days, NaiveDate};
use rand::Rng;

use dbgen_core::{Amount, BranchCode, Error, PurchaseConfig, Result};

/// Uniform amount in `[min, max]`, rounded to cents.
///
/// Rounding is half away from zero. The rounded value is clamped into the
/// rounded bounds, so `min == max` always yields exactly `min`.
#[derive(Debug, Clone)]
pub struct AmountSampler {
    min: f64,
    max: f64,
    low: Amount,
    high: Amount,
}

impl AmountSampler {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::config("value bounds must be finite numbers"));
        }
        if !Amount::is_representable(min) || !Amount::is_representable(max) {
            return Err(Error::config(format!(
                "value bounds must be within +/-{}",
                Amount::MAX_ABS_VALUE
            )));
        }
        if min > max {
            return Err(Error::config(format!(
                "value_max ({max}) must be >= value_min ({min})"
            )));
        }
        Ok(Self {
            min,
            max,
            low: Amount::round_from_f64(min),
            high: Amount::round_from_f64(max),
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Amount {
        let raw = rng.random_range(self.min..=self.max);
        Amount::round_from_f64(raw).clamp(self.low, self.high)
    }
}

/// Uniform calendar date in `[start, end]`.
#[derive(Debug, Clone)]
pub struct DateSampler {
    start: NaiveDate,
    span_days: u64,
}

impl DateSampler {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(Error::config(format!(
                "end date {end} is earlier than start date {start}"
            )));
        }
        let span_days = (end - start).num_days() as u64;
        Ok(Self { start, span_days })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDate {
        let offset = rng.random_range(0..=self.span_days);
        self.start + Days::new(offset)
    }
}

/// Branch tokens `F001..=F{count}`.
pub fn branch_codes(count: u32) -> Vec<BranchCode> {
    (1..=count).map(BranchCode::sequential).collect()
}

/// Uniform choice over a non-empty set of branches.
#[derive(Debug, Clone)]
pub struct BranchSampler {
    branches: Vec<BranchCode>,
}

impl BranchSampler {
    pub fn new(count: u32) -> Result<Self> {
        if count == 0 {
            return Err(Error::config("branch count must be >= 1"));
        }
        Ok(Self {
            branches: branch_codes(count),
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BranchCode {
        let idx = rng.random_range(0..self.branches.len());
        self.branches[idx].clone()
    }
}

/// Per-row field sampling. Fields are drawn in a fixed order: amount, date,
/// branch.
#[derive(Debug, Clone)]
pub struct PurchaseSampler {
    pub amount: AmountSampler,
    pub date: DateSampler,
    pub branch: BranchSampler,
}

impl PurchaseSampler {
    pub fn from_config(config: &PurchaseConfig) -> Result<Self> {
        Ok(Self {
            amount: AmountSampler::new(config.value_min, config.value_max)?,
            date: DateSampler::new(config.start, config.end)?,
            branch: BranchSampler::new(config.branches)?,
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (Amount, NaiveDate, BranchCode) {
        let amount = self.amount.sample(rng);
        let date = self.date.sample(rng);
        let branch = self.branch.sample(rng);
        (amount, date, branch)
    }
}
