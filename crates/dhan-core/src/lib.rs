//! Dhanmitra Core Library
//!
//! The advisory engine behind the Dhanmitra personal finance tool:
//! - Budget evaluation (savings ratio and health verdict)
//! - Savings planning (emergency fund range, age-tiered savings target)
//! - Investment allocation across risk-tiered instrument classes
//! - Orchestration of the three into a single advisory report
//! - Rule configuration with embedded defaults and file overrides
//!
//! Every evaluation is a pure function of the profile and the rules.
//!
//! ```rust,ignore
//! use dhan_core::{evaluate, FinancialProfile, RiskAppetite};
//!
//! let profile = FinancialProfile::new(100_000.0, 90_000.0, 5_000.0, 28, RiskAppetite::Medium);
//! let report = evaluate(&profile)?;
//! assert_eq!(report.investment_plan.equity_amount(), 5_000.0);
//! ```

pub mod advisor;
pub mod allocation;
pub mod budget;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod savings;

pub use advisor::{evaluate, Advisor};
pub use allocation::{AllocationPolicy, DISCLAIMER};
pub use config::{AdvisorConfig, AgeTier, BudgetRules, SavingsRules};
pub use error::{Error, Result};
pub use models::{
    AdvisoryReport, AllocationBucket, AllocationPlan, AssetClass, BudgetVerdict,
    EmergencyFundRange, FinancialProfile, InvestmentProfile, RawProfile, RiskAppetite,
    SavingsGuidance, Scalar, Severity, Verdict,
};
