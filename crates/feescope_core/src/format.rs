//! Shared currency formatting.
//!
//! Hover labels, selection labels, and the chart's y axis all go through one
//! formatter instance so the same balance always renders the same way.

/// Fixed-currency formatter: EUR symbol, en-GB digit grouping, two decimals.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyFormatter {
    symbol: &'static str,
}

impl CurrencyFormatter {
    pub const fn eur() -> Self {
        Self { symbol: "\u{20ac}" }
    }

    /// Full form, e.g. `€1,500.50`.
    pub fn format(&self, value: f64) -> String {
        let sign = if value < 0.0 { "-" } else { "" };
        // Round at the cent level first so carries propagate into the units.
        let total_cents = (value.abs() * 100.0).round() as u64;
        let units = total_cents / 100;
        let cents = total_cents % 100;
        format!("{sign}{}{}.{cents:02}", self.symbol, group_thousands(units))
    }

    /// Compact form for tight axis labels, e.g. `€2.1M`, `€450K`.
    pub fn format_compact(&self, value: f64) -> String {
        let sign = if value < 0.0 { "-" } else { "" };
        let abs = value.abs();
        if abs >= 1_000_000.0 {
            format!("{sign}{}{:.1}M", self.symbol, abs / 1_000_000.0)
        } else if abs >= 1_000.0 {
            format!("{sign}{}{:.0}K", self.symbol, abs / 1_000.0)
        } else {
            format!("{sign}{}{:.0}", self.symbol, abs)
        }
    }

    /// The shared point label used by both hover and click formatting:
    /// `Year 10: €1,500.50`.
    pub fn format_point(&self, year: f64, balance: f64) -> String {
        format!("Year {year}: {}", self.format(balance))
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped.chars().rev().collect()
}
