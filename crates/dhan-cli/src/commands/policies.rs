//! Policies command implementation

use std::io::Write;

use anyhow::Result;
use dhan_core::{AllocationPolicy, RiskAppetite};

/// Print the allocation policy for every risk tier
pub fn cmd_policies() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    write_policies(&mut stdout)?;
    Ok(())
}

/// Write the policy table
pub fn write_policies<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out, "Allocation Policies:\n")?;

    writeln!(
        out,
        "{:<14} {:<14} {:>7} {:>5}",
        "RISK", "PROFILE", "EQUITY", "DEBT"
    )?;
    writeln!(out, "{}", "-".repeat(80))?;

    for risk in RiskAppetite::all() {
        let policy = AllocationPolicy::for_risk(*risk);
        let label = match risk {
            RiskAppetite::Unrecognized => "(other)",
            other => other.as_str(),
        };

        writeln!(
            out,
            "{:<14} {:<14} {:>6}% {:>4}%",
            label,
            policy.profile.as_str(),
            policy.equity_pct,
            policy.debt_pct
        )?;
        if !policy.equity_instruments.is_empty() {
            writeln!(out, "   Equity: {}", policy.equity_instruments.join(", "))?;
        }
        writeln!(out, "   Debt:   {}", policy.debt_instruments.join(", "))?;
        writeln!(out, "   {}", policy.description)?;
        writeln!(out)?;
    }

    Ok(())
}
