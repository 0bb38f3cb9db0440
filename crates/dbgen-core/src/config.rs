use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Amount;

/// Options for the client pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    /// Number of client records to generate.
    pub count: u64,
    /// Domain used for generated e-mail addresses.
    pub domain: String,
    /// Seed for the client stream. A fresh seed is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            count: 200,
            domain: "example.com".to_string(),
            seed: None,
        }
    }
}

impl ClientConfig {
    pub fn validate(&self, limits: &Limits) -> Result<()> {
        if self.count < 1 {
            return Err(Error::config("client count must be >= 1"));
        }
        if self.count > limits.max_clients {
            return Err(Error::config(format!(
                "client count exceeds limit ({})",
                limits.max_clients
            )));
        }
        if self.domain.trim().is_empty() || self.domain.contains('@') {
            return Err(Error::config(format!(
                "invalid e-mail domain '{}'",
                self.domain
            )));
        }
        Ok(())
    }
}

/// Options for the purchase pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PurchaseConfig {
    /// Requested number of purchase rows. Raised to the client count when lower.
    pub rows: i64,
    pub value_min: f64,
    pub value_max: f64,
    /// First purchase date (inclusive).
    pub start: NaiveDate,
    /// Last purchase date (inclusive).
    pub end: NaiveDate,
    /// Number of branches purchases are spread across.
    pub branches: u32,
    pub seed: u64,
}

impl Default for PurchaseConfig {
    fn default() -> Self {
        Self {
            rows: 5000,
            value_min: 50.0,
            value_max: 2000.0,
            start: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            end: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default(),
            branches: 5,
            seed: 42,
        }
    }
}

impl PurchaseConfig {
    pub fn validate(&self, limits: &Limits) -> Result<()> {
        if self.rows < 0 {
            return Err(Error::config(format!(
                "row count must be >= 0, got {}",
                self.rows
            )));
        }
        if (self.rows as u64) > limits.max_purchases {
            return Err(Error::config(format!(
                "row count exceeds limit ({})",
                limits.max_purchases
            )));
        }
        if !self.value_min.is_finite() || !self.value_max.is_finite() {
            return Err(Error::config("value bounds must be finite numbers"));
        }
        if !Amount::is_representable(self.value_min) || !Amount::is_representable(self.value_max)
        {
            return Err(Error::config(format!(
                "value bounds must be within +/-{}",
                Amount::MAX_ABS_VALUE
            )));
        }
        if self.value_min > self.value_max {
            return Err(Error::config(format!(
                "value_max ({}) must be >= value_min ({})",
                self.value_max, self.value_min
            )));
        }
        if self.end < self.start {
            return Err(Error::config(format!(
                "end date {} is earlier than start date {}",
                self.end, self.start
            )));
        }
        if self.branches == 0 {
            return Err(Error::config("branch count must be >= 1"));
        }
        Ok(())
    }
}

/// Upper bounds on requested dataset sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Limits {
    pub max_clients: u64,
    pub max_purchases: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_clients: 50_000,
            max_purchases: 200_000,
        }
    }
}

/// Full configuration as read from a `dbgen.toml` file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DbgenConfig {
    pub clients: ClientConfig,
    pub purchases: PurchaseConfig,
    pub limits: Limits,
}

impl DbgenConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| Error::config(format!("invalid config file: {err}")))
    }
}
