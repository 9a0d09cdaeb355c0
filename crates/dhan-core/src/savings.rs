//! Savings Planner
//!
//! Derives the emergency fund range and an age-tiered monthly savings target.

use crate::config::SavingsRules;
use crate::format::{rupee_range, rupees_with_pct};
use crate::models::{EmergencyFundRange, SavingsGuidance};

pub const EMERGENCY_FUND_NOTE: &str =
    "Aim to build an emergency fund covering 3-6 months of income first.";

/// Recommend savings for a monthly income and age
pub fn recommend(income: f64, age: u32, rules: &SavingsRules) -> SavingsGuidance {
    let range = EmergencyFundRange {
        low: income * rules.emergency_fund_min_months as f64,
        high: income * rules.emergency_fund_max_months as f64,
    };

    let pct = rules.target_pct_for_age(age);
    let target = income * pct as f64 / 100.0;

    let note = if rules.emergency_fund_min_months == 3 && rules.emergency_fund_max_months == 6 {
        EMERGENCY_FUND_NOTE.to_string()
    } else {
        format!(
            "Aim to build an emergency fund covering {}-{} months of income first.",
            rules.emergency_fund_min_months, rules.emergency_fund_max_months
        )
    };

    SavingsGuidance {
        emergency_fund_range: range,
        emergency_fund_range_display: rupee_range(range.low, range.high),
        target_savings_pct: pct,
        target_monthly_savings: target,
        target_monthly_savings_display: rupees_with_pct(target, pct),
        note,
    }
}
