//! Currency formatting for display strings
//!
//! Reports always carry raw numbers; these helpers only build the
//! human-readable strings that accompany them.

/// Format an amount as whole rupees with thousands separators, e.g. `₹150,000`
pub fn rupees(amount: f64) -> String {
    format!("₹{}", group_thousands(amount.round()))
}

/// Format a low-high range, e.g. `₹150,000 - ₹300,000`
pub fn rupee_range(low: f64, high: f64) -> String {
    format!("{} - {}", rupees(low), rupees(high))
}

/// Format an amount with the percentage it represents, e.g. `₹10,000 (20%)`
pub fn rupees_with_pct(amount: f64, pct: u32) -> String {
    format!("{} ({}%)", rupees(amount), pct)
}

fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if value < 0.0 && digits != "0" {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
