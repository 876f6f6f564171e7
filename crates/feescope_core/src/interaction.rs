//! Hover/selection state fed by chart point events.
//!
//! Transient UI-only state: labels are replaced wholesale on every event and
//! cleared whenever the series they refer to goes away.

use crate::format::CurrencyFormatter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointEventKind {
    Hover,
    Click,
    Unhover,
}

/// The currently hovered and selected point labels. Both are formatted
/// through one shared formatter so hover and click always agree.
#[derive(Debug)]
pub struct InteractionState {
    formatter: CurrencyFormatter,
    pub hovered: Option<String>,
    pub selected: Option<String>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            formatter: CurrencyFormatter::eur(),
            hovered: None,
            selected: None,
        }
    }
}

impl InteractionState {
    /// Apply one chart point event. The renderer contract always supplies a
    /// point for Hover/Click, but a missing point is tolerated as a no-op.
    pub fn on_point_event(&mut self, point: Option<(f64, f64)>, kind: PointEventKind) {
        match kind {
            PointEventKind::Hover => {
                if let Some((x, y)) = point {
                    self.hovered = Some(self.formatter.format_point(x, y));
                }
            }
            PointEventKind::Click => {
                // Sticky until the next click.
                if let Some((x, y)) = point {
                    self.selected = Some(self.formatter.format_point(x, y));
                }
            }
            PointEventKind::Unhover => {
                self.hovered = None;
            }
        }
    }

    /// Drop both labels. Called on any transition away from a displayed
    /// series; the labels would refer to points that no longer exist.
    pub fn clear(&mut self) {
        self.hovered = None;
        self.selected = None;
    }

    pub fn formatter(&self) -> &CurrencyFormatter {
        &self.formatter
    }
}
