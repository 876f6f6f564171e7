//! UI-side state: panel focus, field editing, and the chart point cursor.
//!
//! Everything with orchestration semantics (parameters, request lifecycle,
//! hover/selection labels) lives in the core [`Session`]; this module only
//! holds what the widgets need to draw themselves.

use feescope_core::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPanel {
    Controls,
    Chart,
}

impl FocusedPanel {
    pub fn toggle(&mut self) {
        *self = match self {
            FocusedPanel::Controls => FocusedPanel::Chart,
            FocusedPanel::Chart => FocusedPanel::Controls,
        };
    }
}

/// The five editable inputs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamField {
    Initial,
    Growth,
    FeeA,
    FeeB,
    Years,
}

impl ParamField {
    pub const ALL: [ParamField; 5] = [
        ParamField::Initial,
        ParamField::Growth,
        ParamField::FeeA,
        ParamField::FeeB,
        ParamField::Years,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ParamField::Initial => "Initial investment",
            ParamField::Growth => "Annual growth",
            ParamField::FeeA => "Fee A",
            ParamField::FeeB => "Fee B",
            ParamField::Years => "Years",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            ParamField::Initial => "EUR",
            ParamField::Growth | ParamField::FeeA | ParamField::FeeB => "%",
            ParamField::Years => "",
        }
    }
}

/// Editing state for the controls panel. `buffer` is `Some` while the
/// focused field is being retyped; Enter commits it, Esc discards it.
#[derive(Debug, Default)]
pub struct ControlsState {
    pub focus: usize,
    pub buffer: Option<String>,
}

/// Keyboard point cursor over the chart.
#[derive(Debug, Default)]
pub struct ChartState {
    /// 0 = fee A, 1 = fee B.
    pub active_series: usize,
    pub point_index: usize,
}

#[derive(Debug)]
pub struct AppState {
    pub session: Session,
    pub focused_panel: FocusedPanel,
    pub controls: ControlsState,
    pub chart: ChartState,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: Session::default(),
            focused_panel: FocusedPanel::Controls,
            controls: ControlsState::default(),
            chart: ChartState::default(),
            exit: false,
        }
    }
}
