//! Chart series derivation.
//!
//! A [`SeriesDescriptor`] is a declarative, renderer-agnostic description of
//! one plotted line. Descriptors are recomputed wholesale whenever the result
//! or the fee labels change; nothing here patches previous output.

use crate::result::SimulationResult;

/// Hover text template carried on every descriptor. The renderer substitutes
/// through the shared currency formatter.
pub const HOVER_TEMPLATE: &str = "Year {x}: {y}";

/// Stable role tag for the two fee scenarios. Doubles as the color key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesRole {
    FeeA,
    FeeB,
}

impl SeriesRole {
    pub fn tag(&self) -> &'static str {
        match self {
            SeriesRole::FeeA => "fee-a",
            SeriesRole::FeeB => "fee-b",
        }
    }

    /// Palette from the original explorer: soft blue and orange.
    pub fn color_rgb(&self) -> (u8, u8, u8) {
        match self {
            SeriesRole::FeeA => (96, 165, 250),
            SeriesRole::FeeB => (249, 115, 22),
        }
    }
}

/// One plotted line: points, role/color tag, display label, hover template.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesDescriptor {
    pub role: SeriesRole,
    pub label: String,
    pub hover_template: String,
    pub points: Vec<(f64, f64)>,
}

/// Derive the two chart series from a validated result. Pure: equal inputs
/// give equal descriptors, and `result` is never mutated.
pub fn derive_series(
    result: &SimulationResult,
    fee_rate_a_pct: f64,
    fee_rate_b_pct: f64,
) -> [SeriesDescriptor; 2] {
    let line = |role: SeriesRole, balances: &[f64], pct: f64| SeriesDescriptor {
        role,
        label: match role {
            SeriesRole::FeeA => format!("Fee A ({pct:.2}%)"),
            SeriesRole::FeeB => format!("Fee B ({pct:.2}%)"),
        },
        hover_template: HOVER_TEMPLATE.to_string(),
        points: result
            .years
            .iter()
            .zip(balances)
            .map(|(&x, &y)| (x, y))
            .collect(),
    };

    [
        line(SeriesRole::FeeA, &result.fee_a, fee_rate_a_pct),
        line(SeriesRole::FeeB, &result.fee_b, fee_rate_b_pct),
    ]
}
