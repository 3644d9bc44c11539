//! Configuration types with their defaults.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::company::{DEFAULT_POLICY_PREMIUM, DEFAULT_STARTING_BALANCE};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub company: CompanyConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Money settings of the company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyConfig {
    /// Balance before any action is dispatched (default: 100).
    #[serde(default = "default_starting_balance")]
    pub starting_balance: i64,
    /// Premium paid for each new policy (default: 20).
    #[serde(default = "default_policy_premium")]
    pub policy_premium: i64,
}

/// How state snapshots are written to stdout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One labeled line per state field.
    #[default]
    Pretty,
    /// Pretty-printed JSON object.
    Json,
}

fn default_starting_balance() -> i64 {
    DEFAULT_STARTING_BALANCE
}

fn default_policy_premium() -> i64 {
    DEFAULT_POLICY_PREMIUM
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            starting_balance: default_starting_balance(),
            policy_premium: default_policy_premium(),
        }
    }
}
