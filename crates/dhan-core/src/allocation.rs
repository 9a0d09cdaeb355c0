//! Allocation Planner
//!
//! Splits the investable surplus between equity (growth) and debt (stability)
//! according to a fixed policy per risk tier.

use crate::models::{
    AllocationBucket, AllocationPlan, AssetClass, InvestmentProfile, RiskAppetite,
};

pub const DISCLAIMER: &str =
    "This is an AI-generated educational plan. Consult a financial advisor.";

const NO_SURPLUS_DESCRIPTION: &str =
    "No surplus available for investment. Focus on reducing expenses first.";

/// Allocation policy for one risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationPolicy {
    pub profile: InvestmentProfile,
    pub equity_pct: u32,
    pub debt_pct: u32,
    pub equity_instruments: &'static [&'static str],
    pub debt_instruments: &'static [&'static str],
    pub description: &'static str,
}

static CONSERVATIVE: AllocationPolicy = AllocationPolicy {
    profile: InvestmentProfile::Conservative,
    equity_pct: 20,
    debt_pct: 80,
    equity_instruments: &["Large Cap Index Fund"],
    debt_instruments: &["Fixed Deposits", "PPF", "Liquid Funds"],
    description: "Priority: Capital Protection. 80% safe instruments, 20% for mild growth.",
};

static BALANCED: AllocationPolicy = AllocationPolicy {
    profile: InvestmentProfile::Balanced,
    equity_pct: 50,
    debt_pct: 50,
    equity_instruments: &["Nifty 50 Index Fund", "Flexi-Cap Fund"],
    debt_instruments: &["Corporate Bond Funds", "PPF", "Debt Mutual Funds"],
    description: "Priority: Growth + Stability. Equal split between Equity and Debt.",
};

static AGGRESSIVE: AllocationPolicy = AllocationPolicy {
    profile: InvestmentProfile::Aggressive,
    equity_pct: 80,
    debt_pct: 20,
    equity_instruments: &["Mid & Small Cap Funds", "Direct Equity", "Nifty Next 50"],
    debt_instruments: &["Liquid Funds (dip buffer)", "Short Duration Debt Funds"],
    description: "Priority: High Growth. 80% Equity for long-term wealth, 20% for stability.",
};

static SAFETY_FIRST: AllocationPolicy = AllocationPolicy {
    profile: InvestmentProfile::SafetyFirst,
    equity_pct: 0,
    debt_pct: 100,
    equity_instruments: &[],
    debt_instruments: &["Fixed Deposits"],
    description: "Focus on assured returns.",
};

impl AllocationPolicy {
    /// Policy for a risk tier
    pub fn for_risk(risk: RiskAppetite) -> &'static AllocationPolicy {
        match risk {
            RiskAppetite::Low => &CONSERVATIVE,
            RiskAppetite::Medium => &BALANCED,
            RiskAppetite::High => &AGGRESSIVE,
            RiskAppetite::Unrecognized => &SAFETY_FIRST,
        }
    }

    fn bucket(&self, class: AssetClass, surplus: f64) -> AllocationBucket {
        let (pct, instruments) = match class {
            AssetClass::Equity => (self.equity_pct, self.equity_instruments),
            AssetClass::Debt => (self.debt_pct, self.debt_instruments),
        };

        AllocationBucket {
            asset_class: class,
            percentage: pct,
            amount: surplus * pct as f64 / 100.0,
            instruments: instruments.iter().map(|s| s.to_string()).collect(),
            color: class.color().to_string(),
        }
    }
}

/// Build an allocation plan for the investable surplus.
///
/// A surplus of zero or less yields an `N/A` plan with no buckets for every
/// risk tier.
pub fn plan(investable_surplus: f64, risk: RiskAppetite) -> AllocationPlan {
    if investable_surplus <= 0.0 {
        return AllocationPlan {
            profile: InvestmentProfile::NotApplicable,
            allocation: Vec::new(),
            description: NO_SURPLUS_DESCRIPTION.to_string(),
            disclaimer: DISCLAIMER.to_string(),
        };
    }

    let policy = AllocationPolicy::for_risk(risk);

    AllocationPlan {
        profile: policy.profile,
        allocation: vec![
            policy.bucket(AssetClass::Equity, investable_surplus),
            policy.bucket(AssetClass::Debt, investable_surplus),
        ],
        description: policy.description.to_string(),
        disclaimer: DISCLAIMER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_splits_sum_to_100() {
        for risk in RiskAppetite::all() {
            let policy = AllocationPolicy::for_risk(*risk);
            assert_eq!(policy.equity_pct + policy.debt_pct, 100, "{}", risk);
        }
    }

    #[test]
    fn test_low_risk_plan() {
        let result = plan(1000.0, RiskAppetite::Low);
        assert_eq!(result.profile, InvestmentProfile::Conservative);
        assert_eq!(result.equity_amount(), 200.0);
        assert_eq!(result.debt_amount(), 800.0);
        assert_eq!(result.allocation[0].instruments, vec!["Large Cap Index Fund"]);
        assert_eq!(
            result.allocation[1].instruments,
            vec!["Fixed Deposits", "PPF", "Liquid Funds"]
        );
    }

    #[test]
    fn test_medium_risk_plan() {
        let result = plan(10000.0, RiskAppetite::Medium);
        assert_eq!(result.profile, InvestmentProfile::Balanced);
        assert_eq!(result.equity_amount(), 5000.0);
        assert_eq!(result.debt_amount(), 5000.0);
    }

    #[test]
    fn test_high_risk_plan() {
        let result = plan(1000.0, RiskAppetite::High);
        assert_eq!(result.profile, InvestmentProfile::Aggressive);
        assert_eq!(result.equity_amount(), 800.0);
        assert_eq!(result.debt_amount(), 200.0);
        assert_eq!(result.allocation[0].instruments.len(), 3);
    }

    #[test]
    fn test_unknown_risk_is_safety_first() {
        let result = plan(1000.0, RiskAppetite::parse("unknown"));
        assert_eq!(result.profile, InvestmentProfile::SafetyFirst);
        assert_eq!(result.equity_amount(), 0.0);
        assert_eq!(result.debt_amount(), 1000.0);
        assert!(result.allocation[0].instruments.is_empty());
        assert_eq!(result.allocation[1].instruments, vec!["Fixed Deposits"]);
    }

    #[test]
    fn test_no_surplus_for_any_risk() {
        for risk in RiskAppetite::all() {
            for surplus in [0.0, -500.0] {
                let result = plan(surplus, *risk);
                assert_eq!(result.profile, InvestmentProfile::NotApplicable);
                assert!(result.allocation.is_empty());
                assert_eq!(result.equity_amount(), 0.0);
                assert!(result.description.contains("reducing expenses"));
            }
        }
    }

    #[test]
    fn test_disclaimer_always_present() {
        assert_eq!(plan(0.0, RiskAppetite::High).disclaimer, DISCLAIMER);
        assert_eq!(plan(100.0, RiskAppetite::Low).disclaimer, DISCLAIMER);
    }

    #[test]
    fn test_bucket_labels_and_colors() {
        let result = plan(100.0, RiskAppetite::Medium);
        assert_eq!(result.allocation[0].asset_class, AssetClass::Equity);
        assert_eq!(result.allocation[0].color, "#9c27b0");
        assert_eq!(result.allocation[1].asset_class, AssetClass::Debt);
        assert_eq!(result.allocation[1].color, "#0288d1");
        assert_eq!(result.allocation[1].percentage, 50);
    }

    #[test]
    fn test_amounts_are_not_rounded() {
        let result = plan(333.33, RiskAppetite::Low);
        assert_eq!(result.equity_amount(), 333.33 * 20.0 / 100.0);
        assert_eq!(result.debt_amount(), 333.33 * 80.0 / 100.0);
    }
}
