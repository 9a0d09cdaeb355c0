//! Advisory orchestrator
//!
//! Validates a profile, runs the budget evaluator, savings planner and
//! allocation planner in sequence, and assembles the combined report.

use tracing::debug;

use crate::allocation;
use crate::budget;
use crate::config::AdvisorConfig;
use crate::error::{Error, Result};
use crate::models::{AdvisoryReport, FinancialProfile, RawProfile, RiskAppetite, Scalar};
use crate::savings;

/// Age assumed when a profile does not supply one
pub const DEFAULT_AGE: u32 = 25;

/// Risk tier name assumed when a profile does not supply one
pub const DEFAULT_RISK_APPETITE: &str = "Medium";

/// Evaluate a profile with the default rules
pub fn evaluate(profile: &FinancialProfile) -> Result<AdvisoryReport> {
    Advisor::default().evaluate(profile)
}

/// Stateless advisory engine over a fixed rule set
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    config: AdvisorConfig,
}

impl Advisor {
    pub fn new(config: AdvisorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Produce the advisory report for a profile.
    ///
    /// Fails with [`Error::NegativeValues`] for negative income or expenses
    /// and [`Error::InvalidData`] for non-finite numbers; nothing is computed
    /// in either case.
    pub fn evaluate(&self, profile: &FinancialProfile) -> Result<AdvisoryReport> {
        validate(profile)?;

        let budget = budget::analyze(profile.income, profile.expenses, &self.config.budget);
        let savings = savings::recommend(profile.income, profile.age, &self.config.savings);

        let surplus = profile.monthly_surplus().max(0.0);
        let investment_plan = allocation::plan(surplus, profile.risk_appetite);

        debug!(
            verdict = %budget.verdict,
            savings_ratio = budget.savings_ratio,
            surplus,
            risk = %profile.risk_appetite,
            profile = %investment_plan.profile,
            "Evaluated financial profile"
        );

        Ok(AdvisoryReport {
            budget,
            savings,
            investment_plan,
        })
    }

    /// Apply defaults and coercion to raw input, then evaluate it
    pub fn evaluate_raw(&self, raw: &RawProfile) -> Result<AdvisoryReport> {
        let profile = coerce(raw)?;
        self.evaluate(&profile)
    }
}

/// Turn loosely-typed input into a profile.
///
/// Missing fields default to income 0, expenses 0, savings 0, age 25 and a
/// medium risk appetite. Numeric strings are accepted; a fractional age is
/// truncated toward zero.
pub fn coerce(raw: &RawProfile) -> Result<FinancialProfile> {
    let income = number(raw.income.as_ref(), "income", 0.0)?;
    let expenses = number(raw.expenses.as_ref(), "expenses", 0.0)?;
    let savings = number(raw.savings.as_ref(), "savings", 0.0)?;
    let age = number(raw.age.as_ref(), "age", DEFAULT_AGE as f64)?.trunc();

    if income < 0.0 || expenses < 0.0 || age < 0.0 {
        return Err(Error::NegativeValues);
    }
    if age > u32::MAX as f64 {
        return Err(Error::InvalidData(format!("age is out of range: {}", age)));
    }

    let risk_appetite =
        RiskAppetite::parse(raw.risk_appetite.as_deref().unwrap_or(DEFAULT_RISK_APPETITE));

    Ok(FinancialProfile {
        income,
        expenses,
        savings,
        age: age as u32,
        risk_appetite,
    })
}

impl TryFrom<&RawProfile> for FinancialProfile {
    type Error = Error;

    fn try_from(raw: &RawProfile) -> Result<Self> {
        coerce(raw)
    }
}

fn number(value: Option<&Scalar>, field: &str, default: f64) -> Result<f64> {
    let n = match value {
        None => default,
        Some(Scalar::Number(n)) => *n,
        Some(Scalar::Text(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::InvalidData(format!("{} must be a number, got {:?}", field, s)))?,
    };

    if !n.is_finite() {
        return Err(Error::InvalidData(format!("{} must be finite", field)));
    }
    Ok(n)
}

fn validate(profile: &FinancialProfile) -> Result<()> {
    for (field, value) in [
        ("income", profile.income),
        ("expenses", profile.expenses),
        ("savings", profile.savings),
    ] {
        if !value.is_finite() {
            return Err(Error::InvalidData(format!("{} must be finite", field)));
        }
    }

    if profile.income < 0.0 || profile.expenses < 0.0 {
        return Err(Error::NegativeValues);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{InvestmentProfile, Verdict};

    fn raw(income: f64, expenses: f64, age: i64, risk: &str) -> RawProfile {
        RawProfile {
            income: Some(Scalar::from(income)),
            expenses: Some(Scalar::from(expenses)),
            savings: Some(Scalar::from(0.0)),
            age: Some(Scalar::from(age)),
            risk_appetite: Some(risk.to_string()),
        }
    }

    #[test]
    fn test_end_to_end_medium_risk() {
        let profile = FinancialProfile::new(100000.0, 90000.0, 5000.0, 28, RiskAppetite::Medium);
        let report = evaluate(&profile).unwrap();

        assert_eq!(report.budget.verdict, Verdict::NeedsImprovement);
        assert_eq!(report.budget.savings_ratio, 10.0);
        assert_eq!(report.savings.target_savings_pct, 20);
        assert_eq!(report.savings.target_monthly_savings, 20000.0);
        assert_eq!(report.investment_plan.profile, InvestmentProfile::Balanced);
        assert_eq!(report.investment_plan.equity_amount(), 5000.0);
        assert_eq!(report.investment_plan.debt_amount(), 5000.0);
    }

    #[test]
    fn test_report_serializes_under_fixed_keys() {
        let profile = FinancialProfile::new(100000.0, 90000.0, 5000.0, 28, RiskAppetite::Medium);
        let json = serde_json::to_value(evaluate(&profile).unwrap()).unwrap();

        assert_eq!(json["budget"]["verdict"], "NeedsImprovement");
        assert_eq!(json["budget"]["severity"], "orange");
        assert_eq!(json["savings"]["target_monthly_savings"], 20000.0);
        assert_eq!(json["investment_plan"]["profile"], "Balanced");
        assert_eq!(json["investment_plan"]["allocation"][0]["type"], "Equity (Growth)");
        assert_eq!(json["investment_plan"]["allocation"][0]["amount"], 5000.0);
    }

    #[test]
    fn test_overspending_gets_no_allocation() {
        let profile = FinancialProfile::new(30000.0, 45000.0, 0.0, 40, RiskAppetite::High);
        let report = evaluate(&profile).unwrap();

        assert_eq!(report.budget.verdict, Verdict::Critical);
        assert_eq!(report.investment_plan.profile, InvestmentProfile::NotApplicable);
        assert!(report.investment_plan.allocation.is_empty());
        assert_eq!(report.savings.target_savings_pct, 30);
    }

    #[test]
    fn test_zero_income_is_not_an_error() {
        let profile = FinancialProfile::new(0.0, 0.0, 0.0, 60, RiskAppetite::Low);
        let report = evaluate(&profile).unwrap();

        assert_eq!(report.budget.verdict, Verdict::Invalid);
        assert_eq!(report.investment_plan.profile, InvestmentProfile::NotApplicable);
        assert_eq!(report.savings.target_monthly_savings, 0.0);
    }

    #[test]
    fn test_negative_income_rejected() {
        let profile = FinancialProfile::new(-1.0, 0.0, 0.0, 30, RiskAppetite::Medium);
        let err = evaluate(&profile).unwrap_err();
        assert!(matches!(err, Error::NegativeValues));
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Negative values are not allowed.");
    }

    #[test]
    fn test_negative_expenses_rejected() {
        let profile = FinancialProfile::new(100.0, -5.0, 0.0, 30, RiskAppetite::Medium);
        assert!(matches!(evaluate(&profile), Err(Error::NegativeValues)));
    }

    #[test]
    fn test_non_finite_rejected() {
        let profile = FinancialProfile::new(f64::NAN, 0.0, 0.0, 30, RiskAppetite::Medium);
        assert!(matches!(evaluate(&profile), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_evaluation_is_reproducible() {
        let profile = FinancialProfile::new(64000.0, 51000.0, 1000.0, 47, RiskAppetite::High);
        assert_eq!(evaluate(&profile).unwrap(), evaluate(&profile).unwrap());
    }

    #[test]
    fn test_coerce_applies_defaults() {
        let profile = coerce(&RawProfile::default()).unwrap();
        assert_eq!(profile.income, 0.0);
        assert_eq!(profile.expenses, 0.0);
        assert_eq!(profile.savings, 0.0);
        assert_eq!(profile.age, DEFAULT_AGE);
        assert_eq!(profile.risk_appetite, RiskAppetite::Medium);
    }

    #[test]
    fn test_coerce_numeric_strings_and_fractional_age() {
        let raw = RawProfile {
            income: Some(Scalar::from(" 52000.5 ")),
            age: Some(Scalar::from(34.9)),
            risk_appetite: Some("HIGH".to_string()),
            ..Default::default()
        };
        let profile = coerce(&raw).unwrap();
        assert_eq!(profile.income, 52000.5);
        assert_eq!(profile.age, 34);
        assert_eq!(profile.risk_appetite, RiskAppetite::High);
    }

    #[test]
    fn test_coerce_rejects_garbage() {
        let raw = RawProfile {
            expenses: Some(Scalar::from("lots")),
            ..Default::default()
        };
        let err = coerce(&raw).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
        assert!(err.to_string().contains("expenses"));

        let raw = RawProfile {
            income: Some(Scalar::from("inf")),
            ..Default::default()
        };
        assert!(matches!(coerce(&raw), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_negative_age_rejected_before_evaluation() {
        let err = Advisor::default()
            .evaluate_raw(&raw(50000.0, 1000.0, -1, "low"))
            .unwrap_err();
        assert!(matches!(err, Error::NegativeValues));
    }

    #[test]
    fn test_negative_raw_income_rejected() {
        let err = Advisor::default()
            .evaluate_raw(&raw(-1.0, 0.0, 30, "medium"))
            .unwrap_err();
        assert!(matches!(err, Error::NegativeValues));
    }

    #[test]
    fn test_evaluate_raw_unknown_risk() {
        let report = Advisor::default()
            .evaluate_raw(&raw(2000.0, 1000.0, 30, "unknown"))
            .unwrap();
        assert_eq!(report.investment_plan.profile, InvestmentProfile::SafetyFirst);
        assert_eq!(report.investment_plan.equity_amount(), 0.0);
        assert_eq!(report.investment_plan.debt_amount(), 1000.0);
    }

    #[test]
    fn test_json_risk_goes_through_parse() {
        let advisor = Advisor::default();
        for (json, expected) in [
            (r#"{"income": 2000, "risk_appetite": "LOW"}"#, InvestmentProfile::Conservative),
            (r#"{"income": 2000, "risk_appetite": "High"}"#, InvestmentProfile::Aggressive),
            (r#"{"income": 2000, "risk_appetite": "unrecognized"}"#, InvestmentProfile::SafetyFirst),
        ] {
            let raw: RawProfile = serde_json::from_str(json).unwrap();
            let report = advisor.evaluate_raw(&raw).unwrap();
            assert_eq!(report.investment_plan.profile, expected, "{}", json);
        }

        let profile = coerce(&RawProfile::default()).unwrap();
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["risk_appetite"], "medium");
    }

    #[test]
    fn test_advisor_uses_configured_rules() {
        let mut config = AdvisorConfig::default();
        config.budget.healthy_savings_ratio = 5.0;
        let advisor = Advisor::new(config);

        let report = advisor
            .evaluate_raw(&raw(100000.0, 90000.0, 28, "medium"))
            .unwrap();
        assert_eq!(report.budget.verdict, Verdict::Healthy);
    }

    #[test]
    fn test_try_from_raw() {
        let profile = FinancialProfile::try_from(&raw(10.0, 2.0, 61, "low")).unwrap();
        assert_eq!(profile.age, 61);
        assert_eq!(profile.risk_appetite, RiskAppetite::Low);
    }
}
