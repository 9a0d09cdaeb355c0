//! Domain models for Dhanmitra

use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared tolerance for investment volatility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskAppetite {
    Low,
    #[default]
    Medium,
    High,
    /// Anything that is not one of the known tiers (including empty input)
    Unrecognized,
}

impl RiskAppetite {
    /// Parse a tier name, case-insensitively. Unknown names map to
    /// `Unrecognized` rather than failing.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::Unrecognized,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// All tiers, in policy table order
    pub fn all() -> &'static [RiskAppetite] {
        &[Self::Low, Self::Medium, Self::High, Self::Unrecognized]
    }
}

impl fmt::Display for RiskAppetite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A validated financial profile, the input to one evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialProfile {
    /// Monthly income
    pub income: f64,
    /// Monthly expenses
    pub expenses: f64,
    /// Current savings (carried through, not used by the rules)
    pub savings: f64,
    pub age: u32,
    pub risk_appetite: RiskAppetite,
}

impl FinancialProfile {
    pub fn new(
        income: f64,
        expenses: f64,
        savings: f64,
        age: u32,
        risk_appetite: RiskAppetite,
    ) -> Self {
        Self {
            income,
            expenses,
            savings,
            age,
            risk_appetite,
        }
    }

    /// Income left after expenses; negative when overspending
    pub fn monthly_surplus(&self) -> f64 {
        self.income - self.expenses
    }
}

/// A loosely-typed scalar from JSON-like input: a number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Profile fields as supplied by a caller, before defaults and coercion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub income: Option<Scalar>,
    #[serde(default)]
    pub expenses: Option<Scalar>,
    #[serde(default)]
    pub savings: Option<Scalar>,
    #[serde(default)]
    pub age: Option<Scalar>,
    #[serde(default)]
    pub risk_appetite: Option<String>,
}

impl RawProfile {
    /// Fill every field missing from `self` with the value from `other`
    pub fn or(self, other: RawProfile) -> Self {
        Self {
            income: self.income.or(other.income),
            expenses: self.expenses.or(other.expenses),
            savings: self.savings.or(other.savings),
            age: self.age.or(other.age),
            risk_appetite: self.risk_appetite.or(other.risk_appetite),
        }
    }
}

/// Budget health classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Income is zero, nothing to analyze
    Invalid,
    /// Spending exceeds income
    Critical,
    /// Saving, but below the healthy ratio
    NeedsImprovement,
    Healthy,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invalid => "Invalid",
            Self::Critical => "Critical",
            Self::NeedsImprovement => "NeedsImprovement",
            Self::Healthy => "Healthy",
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::NeedsImprovement => "Needs Improvement",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Display severity attached to a budget verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Red,
    Orange,
    Green,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Green => "green",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of the budget evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetVerdict {
    pub verdict: Verdict,
    /// Percent of income saved, rounded to 2 decimals (0 when income is 0)
    pub savings_ratio: f64,
    /// Income minus expenses; absent for an `Invalid` verdict
    pub savings_amount: Option<f64>,
    /// Amount the healthy ratio asks for; absent for an `Invalid` verdict
    pub recommended_savings: Option<f64>,
    pub advice: String,
    pub severity: Option<Severity>,
}

/// Emergency fund target, in currency units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmergencyFundRange {
    pub low: f64,
    pub high: f64,
}

/// Result of the savings planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsGuidance {
    pub emergency_fund_range: EmergencyFundRange,
    pub emergency_fund_range_display: String,
    pub target_savings_pct: u32,
    pub target_monthly_savings: f64,
    pub target_monthly_savings_display: String,
    pub note: String,
}

/// Investment profile label for an allocation plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvestmentProfile {
    Conservative,
    Balanced,
    Aggressive,
    #[serde(rename = "Safety First")]
    SafetyFirst,
    /// No surplus to allocate
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl InvestmentProfile {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Conservative => "Conservative",
            Self::Balanced => "Balanced",
            Self::Aggressive => "Aggressive",
            Self::SafetyFirst => "Safety First",
            Self::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for InvestmentProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Instrument class of an allocation bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetClass {
    #[serde(rename = "Equity (Growth)")]
    Equity,
    #[serde(rename = "Debt (Stability)")]
    Debt,
}

impl AssetClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equity => "Equity (Growth)",
            Self::Debt => "Debt (Stability)",
        }
    }

    /// UI color hint for the bucket
    pub fn color(&self) -> &'static str {
        match self {
            Self::Equity => "#9c27b0",
            Self::Debt => "#0288d1",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One slice of the investable surplus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationBucket {
    #[serde(rename = "type")]
    pub asset_class: AssetClass,
    pub percentage: u32,
    pub amount: f64,
    pub instruments: Vec<String>,
    pub color: String,
}

/// Result of the allocation planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationPlan {
    pub profile: InvestmentProfile,
    /// Empty when there is no surplus to invest
    pub allocation: Vec<AllocationBucket>,
    pub description: String,
    pub disclaimer: String,
}

impl AllocationPlan {
    /// Total amount allocated to the given class (0 if no such bucket)
    pub fn amount_for(&self, class: AssetClass) -> f64 {
        self.allocation
            .iter()
            .filter(|b| b.asset_class == class)
            .map(|b| b.amount)
            .sum()
    }

    pub fn equity_amount(&self) -> f64 {
        self.amount_for(AssetClass::Equity)
    }

    pub fn debt_amount(&self) -> f64 {
        self.amount_for(AssetClass::Debt)
    }
}

/// The combined result of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisoryReport {
    pub budget: BudgetVerdict,
    pub savings: SavingsGuidance,
    pub investment_plan: AllocationPlan,
}
