//! Display formatting for money, counts and percentages.
//!
//! Formatting is best effort: a value that cannot be shown as money
//! (NaN, infinity) renders as "$ 0" instead of failing the report.

/// Placeholder for cells that have no value (volume of the gateway,
/// customers of a volume-only line).
pub const EMPTY_CELL: &str = "—";

/// `"$ "` + thousands-grouped whole dollars. Ties round half to even.
pub fn fmt_money(x: f64) -> String {
    if !x.is_finite() {
        return "$ 0".to_string();
    }
    let rounded = x.round_ties_even();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("$ {sign}{}", group_thousands(&digits))
}

pub fn fmt_money_opt(x: Option<f64>) -> String {
    x.map(fmt_money).unwrap_or_else(|| EMPTY_CELL.to_string())
}

pub fn fmt_count(x: Option<u64>) -> String {
    x.map(|n| n.to_string()).unwrap_or_else(|| EMPTY_CELL.to_string())
}

/// Percentage with two decimals, e.g. "0.30%".
pub fn fmt_pct(x: f64) -> String {
    format!("{x:.2}%")
}

/// Whole-number percentage for shares, e.g. "30%"; keeps decimals if any.
pub fn fmt_share(x: f64) -> String {
    if x.fract() == 0.0 {
        format!("{x:.0}%")
    } else {
        format!("{x}%")
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
