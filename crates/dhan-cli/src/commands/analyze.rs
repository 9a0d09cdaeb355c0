//! Analyze command implementation

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use dhan_core::format::rupees;
use dhan_core::{Advisor, AdvisoryReport, RawProfile};

/// Evaluate a profile from flags and/or a JSON file and print the report
pub fn cmd_analyze(
    advisor: &Advisor,
    flags: RawProfile,
    file: Option<&Path>,
    json: bool,
) -> Result<()> {
    let raw = match file {
        Some(path) => flags.or(read_profile(path)?),
        None => flags,
    };

    let report = advisor.evaluate_raw(&raw)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let mut stdout = std::io::stdout().lock();
        write_report(&mut stdout, &report)?;
    }

    Ok(())
}

/// Read a raw profile from a JSON file, or from stdin when the path is "-"
pub fn read_profile(path: &Path) -> Result<RawProfile> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read profile from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read profile file {}", path.display()))?
    };

    serde_json::from_str(&content).context("Invalid profile JSON")
}

/// Write a report as human-readable text
pub fn write_report<W: Write>(out: &mut W, report: &AdvisoryReport) -> std::io::Result<()> {
    let budget = &report.budget;
    let savings = &report.savings;
    let plan = &report.investment_plan;

    writeln!(out)?;
    writeln!(out, "📊 Financial Health Report")?;
    writeln!(out, "   ─────────────────────────────────────────────────────────────")?;

    let severity = budget
        .severity
        .map(|s| format!(" ({})", s))
        .unwrap_or_default();
    writeln!(out, "   Budget: {}{}", budget.verdict.label(), severity)?;
    writeln!(out, "   Savings Ratio: {}%", budget.savings_ratio)?;
    if let Some(amount) = budget.savings_amount {
        writeln!(out, "   Monthly Potential Savings: {}", rupees(amount))?;
    }
    writeln!(out, "   {}", budget.advice)?;

    writeln!(out)?;
    writeln!(out, "🛡️  Emergency Fund")?;
    writeln!(out, "   Target Fund Size: {}", savings.emergency_fund_range_display)?;
    writeln!(
        out,
        "   Monthly Contribution: {}",
        savings.target_monthly_savings_display
    )?;
    writeln!(out, "   {}", savings.note)?;

    writeln!(out)?;
    writeln!(out, "📈 Investment Plan ({})", plan.profile)?;
    writeln!(out, "   {}", plan.description)?;

    if plan.allocation.is_empty() {
        writeln!(out, "   No surplus available for investment plan.")?;
    } else {
        writeln!(out)?;
        writeln!(
            out,
            "   {:18} │ {:>5} │ {:>12} │ {}",
            "Class", "%", "Amount", "Instruments"
        )?;
        writeln!(
            out,
            "   ───────────────────┼───────┼──────────────┼────────────────"
        )?;
        for bucket in &plan.allocation {
            let instruments = if bucket.instruments.is_empty() {
                "-".to_string()
            } else {
                bucket.instruments.join(", ")
            };
            writeln!(
                out,
                "   {:18} │ {:>5} │ {:>12} │ {}",
                bucket.asset_class.as_str(),
                format!("{}%", bucket.percentage),
                rupees(bucket.amount),
                instruments
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "   ⚠️  {}", plan.disclaimer)?;

    Ok(())
}
