//! Advisory rule configuration
//!
//! The thresholds used by the budget evaluator and savings planner live in a
//! TOML file so they can be tuned without rebuilding.
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a three-layer resolution:
//! 1. Explicit path, if given (e.g. `dhan --config rules.toml`)
//! 2. Override in data dir (~/.local/share/dhanmitra/config/advisor.toml)
//! 3. Embedded defaults (compiled into binary)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Embedded default config (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../../../config/advisor.toml");

/// Rules for the budget evaluator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRules {
    /// Savings ratio (percent of income) at or above which a budget is healthy
    pub healthy_savings_ratio: f64,
}

impl Default for BudgetRules {
    fn default() -> Self {
        Self {
            healthy_savings_ratio: 20.0,
        }
    }
}

/// Savings target for everyone younger than `below_age`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeTier {
    pub below_age: u32,
    pub target_pct: u32,
}

/// Rules for the savings planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsRules {
    pub emergency_fund_min_months: u32,
    pub emergency_fund_max_months: u32,
    /// Ascending by `below_age`; the first tier the age falls under wins
    pub age_tiers: Vec<AgeTier>,
    /// Applies once the age is past every tier
    pub senior_savings_pct: u32,
}

impl SavingsRules {
    /// Target savings percentage for an age
    pub fn target_pct_for_age(&self, age: u32) -> u32 {
        self.age_tiers
            .iter()
            .find(|tier| age < tier.below_age)
            .map(|tier| tier.target_pct)
            .unwrap_or(self.senior_savings_pct)
    }
}

impl Default for SavingsRules {
    fn default() -> Self {
        Self {
            emergency_fund_min_months: 3,
            emergency_fund_max_months: 6,
            age_tiers: vec![
                AgeTier {
                    below_age: 30,
                    target_pct: 20,
                },
                AgeTier {
                    below_age: 50,
                    target_pct: 30,
                },
            ],
            senior_savings_pct: 40,
        }
    }
}

/// Complete rule set for an [`Advisor`](crate::Advisor)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub budget: BudgetRules,
    #[serde(default)]
    pub savings: SavingsRules,
}

impl AdvisorConfig {
    /// Load configuration (explicit path, then data dir override, then
    /// embedded default)
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match resolve_path(explicit) {
            Some(path) => {
                let content = fs::read_to_string(&path).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", path.display(), e))
                })?;
                let config = Self::from_toml(&content)?;
                info!(path = %path.display(), "Loaded advisory rules override");
                Ok(config)
            }
            None => {
                debug!("Using embedded advisory rules");
                Self::from_toml(DEFAULT_CONFIG)
            }
        }
    }

    /// Parse and validate a TOML rule set
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AdvisorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the rules are internally consistent
    pub fn validate(&self) -> Result<()> {
        let ratio = self.budget.healthy_savings_ratio;
        if !ratio.is_finite() || !(0.0..=100.0).contains(&ratio) {
            return Err(Error::Config(format!(
                "healthy_savings_ratio must be between 0 and 100, got {}",
                ratio
            )));
        }

        let savings = &self.savings;
        if savings.emergency_fund_min_months > savings.emergency_fund_max_months {
            return Err(Error::Config(format!(
                "emergency_fund_min_months ({}) exceeds emergency_fund_max_months ({})",
                savings.emergency_fund_min_months, savings.emergency_fund_max_months
            )));
        }

        for pair in savings.age_tiers.windows(2) {
            if pair[0].below_age >= pair[1].below_age {
                return Err(Error::Config(format!(
                    "age_tiers must be ascending: {} is not below {}",
                    pair[0].below_age, pair[1].below_age
                )));
            }
        }

        let pcts = savings
            .age_tiers
            .iter()
            .map(|tier| tier.target_pct)
            .chain(std::iter::once(savings.senior_savings_pct));
        for pct in pcts {
            if pct > 100 {
                return Err(Error::Config(format!(
                    "savings percentage must be at most 100, got {}",
                    pct
                )));
            }
        }

        Ok(())
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("dhanmitra").join("config").join("advisor.toml"))
}

/// The file `load` would read, or `None` for the embedded default
pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        warn!(path = %path.display(), "Config file not found, falling back");
    }

    default_config_path().filter(|p| p.exists())
}
