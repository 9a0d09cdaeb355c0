//! Config-related command implementations

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use dhan_core::config::{default_config_path, resolve_path};
use dhan_core::AdvisorConfig;

/// Show the effective advisory rules
pub fn cmd_config_show(config: &AdvisorConfig, explicit: Option<&Path>) -> Result<()> {
    let source = resolve_path(explicit)
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "Built-in defaults".to_string());

    let mut stdout = std::io::stdout().lock();
    write_config(&mut stdout, config, &source)?;
    Ok(())
}

/// Write the rules of a config, labelled with where they came from
pub fn write_config<W: Write>(
    out: &mut W,
    config: &AdvisorConfig,
    source: &str,
) -> std::io::Result<()> {
    writeln!(out, "Source: {}", source)?;
    writeln!(out)?;
    writeln!(out, "Budget:")?;
    writeln!(
        out,
        "  Healthy savings ratio: {}%",
        config.budget.healthy_savings_ratio
    )?;
    writeln!(out)?;
    writeln!(out, "Savings:")?;
    writeln!(
        out,
        "  Emergency fund: {}-{} months of income",
        config.savings.emergency_fund_min_months, config.savings.emergency_fund_max_months
    )?;

    let mut lower = 0;
    for tier in &config.savings.age_tiers {
        writeln!(
            out,
            "  Age {:>3}-{:<3}: {}%",
            lower,
            tier.below_age.saturating_sub(1),
            tier.target_pct
        )?;
        lower = tier.below_age;
    }
    writeln!(
        out,
        "  Age {:>3}+   : {}%",
        lower, config.savings.senior_savings_pct
    )?;

    Ok(())
}

/// Show the path where a rules override should be placed
pub fn cmd_config_path() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    let mut stderr = std::io::stderr().lock();
    write_config_path(&mut stdout, &mut stderr, default_config_path().as_deref())?;
    Ok(())
}

/// Write the override path to `out`, with hints on `notes`
pub fn write_config_path<W: Write, N: Write>(
    out: &mut W,
    notes: &mut N,
    path: Option<&Path>,
) -> std::io::Result<()> {
    match path {
        Some(path) => {
            writeln!(out, "{}", path.display())?;

            if !path.exists() {
                writeln!(notes)?;
                writeln!(notes, "Note: No override exists yet.")?;
                writeln!(notes, "Copy config/advisor.toml there to customize the rules.")?;
            }
        }
        None => {
            writeln!(notes, "Could not determine config directory.")?;
            writeln!(notes, "The data directory is not available on this system.")?;
        }
    }

    Ok(())
}
