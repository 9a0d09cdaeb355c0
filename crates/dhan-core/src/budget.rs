//! Budget Evaluator
//!
//! Classifies spending behavior from income and expenses:
//! - Invalid when there is no income to measure against
//! - Critical when spending exceeds income
//! - Needs Improvement below the healthy savings ratio
//! - Healthy otherwise

use crate::config::BudgetRules;
use crate::format::rupees;
use crate::models::{BudgetVerdict, Severity, Verdict};

/// Evaluate a monthly budget.
///
/// Never fails: zero or negative income yields an `Invalid` verdict instead
/// of dividing by zero.
pub fn analyze(income: f64, expenses: f64, rules: &BudgetRules) -> BudgetVerdict {
    if income <= 0.0 {
        return BudgetVerdict {
            verdict: Verdict::Invalid,
            savings_ratio: 0.0,
            savings_amount: None,
            recommended_savings: None,
            advice: "Income must be greater than zero to analyze budget.".to_string(),
            severity: None,
        };
    }

    let savings = income - expenses;
    // Divide first so large finite incomes cannot overflow to infinity
    let savings_ratio = savings / income * 100.0;
    let recommended = income / 100.0 * rules.healthy_savings_ratio;

    let (verdict, severity, advice) = if expenses > income {
        (
            Verdict::Critical,
            Severity::Red,
            "You are spending more than you earn! Immediate cutbacks required.".to_string(),
        )
    } else if savings_ratio < rules.healthy_savings_ratio {
        (
            Verdict::NeedsImprovement,
            Severity::Orange,
            format!(
                "Try to save at least {}% ({}). Reduce discretionary spending.",
                rules.healthy_savings_ratio,
                rupees(recommended)
            ),
        )
    } else {
        (
            Verdict::Healthy,
            Severity::Green,
            "Great job! You are maintaining a healthy savings rate.".to_string(),
        )
    };

    BudgetVerdict {
        verdict,
        savings_ratio: round2(savings_ratio),
        savings_amount: Some(savings),
        recommended_savings: Some(recommended),
        advice,
        severity: Some(severity),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
