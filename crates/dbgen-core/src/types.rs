use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque, unique client token (e.g. `C00001`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Sequential client code, `C00001` for `index == 1`.
    pub fn sequential(index: u64) -> Self {
        Self(format!("C{index:05}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClientId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Branch token with a fixed-width sequential encoding (`F001`, `F002`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BranchCode(String);

impl BranchCode {
    pub fn sequential(index: u32) -> Self {
        Self(format!("F{index:03}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BranchCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Monetary amount with fixed two-decimal precision, stored as cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// Largest magnitude accepted for a bound or sampled value. Every cent up
    /// to here is exact in an `f64`, and the span between two such values
    /// stays finite.
    pub const MAX_ABS_VALUE: f64 = 90_000_000_000_000.0;

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// True for finite values within [`Amount::MAX_ABS_VALUE`].
    pub fn is_representable(value: f64) -> bool {
        value.is_finite() && value.abs() <= Self::MAX_ABS_VALUE
    }

    /// Rounds `value` to the nearest cent, halves away from zero. Only exact
    /// for values accepted by [`Amount::is_representable`].
    pub fn round_from_f64(value: f64) -> Self {
        Self((value * 100.0).round() as i64)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

/// One fictitious client identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub code: ClientId,
    pub full_name: String,
    pub mobile: String,
    pub cpf: String,
    pub email: String,
}

/// One purchase row. `client_ref` always belongs to the allocator's input set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub client_ref: ClientId,
    pub date: NaiveDate,
    pub amount: Amount,
    pub branch_code: BranchCode,
}
