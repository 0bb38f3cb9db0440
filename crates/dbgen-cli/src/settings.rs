use std::path::Path;

use dbgen_core::{DbgenConfig, Error, Limits, Result};

pub const MAX_CLIENTS_ENV: &str = "DBGEN_MAX_CLIENTS";
pub const MAX_PURCHASES_ENV: &str = "DBGEN_MAX_PURCHASES";

/// Defaults, overlaid by the TOML file (when given), then by the limit
/// environment variables.
pub fn load_config(path: Option<&Path>) -> Result<DbgenConfig> {
    let mut config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(path).map_err(|err| {
                Error::config(format!("cannot read config file {}: {err}", path.display()))
            })?;
            DbgenConfig::from_toml_str(&content)?
        }
        None => DbgenConfig::default(),
    };
    apply_env_limits(&mut config.limits, |key| std::env::var(key).ok())?;
    Ok(config)
}

pub fn apply_env_limits<F>(limits: &mut Limits, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(MAX_CLIENTS_ENV) {
        limits.max_clients = parse_limit(MAX_CLIENTS_ENV, &value)?;
    }
    if let Some(value) = lookup(MAX_PURCHASES_ENV) {
        limits.max_purchases = parse_limit(MAX_PURCHASES_ENV, &value)?;
    }
    Ok(())
}

fn parse_limit(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::config(format!("{key} must be a non-negative integer, got '{value}'")))
}
