//! Runtime configuration read from the environment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 3010;
pub const DEFAULT_TOP_RISK_LIMIT: usize = 5;

/// Top-level Careerwise configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerwiseConfig {
    /// HTTP server port.
    pub port: u16,
    /// Directory holding alternate `careers.json` / `cautions.json`.
    /// `None` means the compiled-in datasets are used.
    pub data_dir: Option<PathBuf>,
    /// How many entries the top-risk action lists.
    pub top_risk_limit: usize,
}

impl Default for CareerwiseConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_dir: None,
            top_risk_limit: DEFAULT_TOP_RISK_LIMIT,
        }
    }
}

impl CareerwiseConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (the environment in
    /// production, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_or_default(&lookup, "PORT", DEFAULT_PORT);

        let top_risk_limit =
            parse_or_default(&lookup, "CAREERWISE_TOP_RISK_LIMIT", DEFAULT_TOP_RISK_LIMIT);
        if top_risk_limit == 0 {
            return Err(Error::Config(
                "CAREERWISE_TOP_RISK_LIMIT must be at least 1".into(),
            ));
        }

        let data_dir = match lookup("CAREERWISE_DATA_DIR") {
            Some(dir) if !dir.trim().is_empty() => Some(check_data_dir(Path::new(dir.trim()))?),
            _ => None,
        };

        Ok(Self {
            port,
            data_dir,
            top_risk_limit,
        })
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
                default
            }
        },
        None => default,
    }
}

fn check_data_dir(dir: &Path) -> Result<PathBuf> {
    if !dir.is_dir() {
        return Err(Error::Config(format!(
            "CAREERWISE_DATA_DIR {} is not a directory",
            dir.display()
        )));
    }
    Ok(dir.to_path_buf())
}
