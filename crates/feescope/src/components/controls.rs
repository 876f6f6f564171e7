//! The simulation inputs panel.
//!
//! Numeric fields are retyped into a buffer and committed with Enter; the
//! horizon steps in UI increments with Left/Right. Anything unparseable or
//! non-finite is absorbed by the parameter store and the field snaps back to
//! its last valid value.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use feescope_core::params::{YEARS_MAX, YEARS_MIN, YEARS_STEP};

use super::{Component, EventResult};
use crate::state::{AppState, FocusedPanel, ParamField};

pub struct ControlsPanel;

impl ControlsPanel {
    pub fn new() -> Self {
        Self
    }

    fn field_value(state: &AppState, field: ParamField) -> f64 {
        let params = &state.session.params;
        match field {
            ParamField::Initial => params.initial_investment,
            ParamField::Growth => params.annual_growth_rate_pct,
            ParamField::FeeA => params.fee_rate_a_pct,
            ParamField::FeeB => params.fee_rate_b_pct,
            ParamField::Years => params.years,
        }
    }

    /// Commit the edit buffer into the parameter store. A parse failure
    /// behaves exactly like non-finite input: the prior value stays.
    fn commit(state: &mut AppState) -> EventResult {
        let Some(buffer) = state.controls.buffer.take() else {
            return EventResult::Handled;
        };
        let candidate = buffer.trim().parse::<f64>().unwrap_or(f64::NAN);
        let params = &mut state.session.params;
        let changed = match ParamField::ALL[state.controls.focus] {
            ParamField::Initial => params.set_initial_investment(candidate),
            ParamField::Growth => params.set_annual_growth_rate_pct(candidate),
            ParamField::FeeA => params.set_fee_rate_a_pct(candidate),
            ParamField::FeeB => params.set_fee_rate_b_pct(candidate),
            ParamField::Years => params.set_years(candidate),
        };
        if changed {
            EventResult::Submit
        } else {
            EventResult::Handled
        }
    }

    fn move_focus(state: &mut AppState, delta: isize) {
        // Moving focus discards any half-typed edit.
        state.controls.buffer = None;
        let len = ParamField::ALL.len() as isize;
        let next = (state.controls.focus as isize + delta).rem_euclid(len);
        state.controls.focus = next as usize;
    }

    fn step_years(state: &mut AppState, direction: i8) -> EventResult {
        if state.session.params.step_years(direction) {
            EventResult::Submit
        } else {
            EventResult::Handled
        }
    }
}

impl Component for ControlsPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        let field = ParamField::ALL[state.controls.focus];
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                Self::move_focus(state, -1);
                EventResult::Handled
            }
            KeyCode::Down | KeyCode::Char('j') => {
                Self::move_focus(state, 1);
                EventResult::Handled
            }
            KeyCode::Enter => Self::commit(state),
            KeyCode::Esc => {
                state.controls.buffer = None;
                EventResult::Handled
            }
            KeyCode::Backspace => {
                if let Some(buffer) = state.controls.buffer.as_mut() {
                    buffer.pop();
                }
                EventResult::Handled
            }
            KeyCode::Char(c)
                if field != ParamField::Years && (c.is_ascii_digit() || c == '.') =>
            {
                state.controls.buffer.get_or_insert_with(String::new).push(c);
                EventResult::Handled
            }
            KeyCode::Left | KeyCode::Char('-') if field == ParamField::Years => {
                Self::step_years(state, -1)
            }
            KeyCode::Right | KeyCode::Char('+') if field == ParamField::Years => {
                Self::step_years(state, 1)
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let panel_focused = state.focused_panel == FocusedPanel::Controls;
        let mut lines = Vec::with_capacity(ParamField::ALL.len());

        for (idx, field) in ParamField::ALL.iter().enumerate() {
            let focused = panel_focused && idx == state.controls.focus;
            let marker = if focused { "> " } else { "  " };

            let value_span = if focused && state.controls.buffer.is_some() {
                let buffer = state.controls.buffer.as_deref().unwrap_or_default();
                Span::styled(
                    format!("{buffer}_"),
                    Style::default().fg(Color::Yellow),
                )
            } else {
                let value = Self::field_value(state, *field);
                let text = if *field == ParamField::Years {
                    format!(
                        "{value:.0}  ({YEARS_MIN:.0}-{YEARS_MAX:.0}, \u{00b1}{YEARS_STEP:.0})"
                    )
                } else {
                    format!("{value} {}", field.unit())
                };
                Span::raw(text)
            };

            let name_style = if focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            lines.push(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:<20}", field.name()), name_style),
                value_span,
            ]));
        }

        let border_style = if panel_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .title("Investment assumptions")
            .borders(Borders::ALL)
            .border_style(border_style);

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::state::AppState;

    fn press(panel: &mut ControlsPanel, state: &mut AppState, code: KeyCode) -> EventResult {
        panel.handle_key(KeyEvent::new(code, KeyModifiers::NONE), state)
    }

    fn type_text(panel: &mut ControlsPanel, state: &mut AppState, text: &str) {
        for c in text.chars() {
            press(panel, state, KeyCode::Char(c));
        }
    }

    #[test]
    fn committing_an_edit_requests_a_fetch() {
        let mut panel = ControlsPanel::new();
        let mut state = AppState::default();

        type_text(&mut panel, &mut state, "2500");
        assert_eq!(press(&mut panel, &mut state, KeyCode::Enter), EventResult::Submit);
        assert_eq!(state.session.params.initial_investment, 2500.0);
        assert_eq!(state.controls.buffer, None);
    }

    #[test]
    fn unparseable_input_retains_prior_value() {
        let mut panel = ControlsPanel::new();
        let mut state = AppState::default();

        // Only digits and '.' reach the buffer, but repeated dots still
        // produce an unparseable string.
        type_text(&mut panel, &mut state, "1.2.3");
        assert_eq!(press(&mut panel, &mut state, KeyCode::Enter), EventResult::Handled);
        assert_eq!(state.session.params.initial_investment, 1000.0);
    }

    #[test]
    fn committing_the_same_value_does_not_refetch() {
        let mut panel = ControlsPanel::new();
        let mut state = AppState::default();

        type_text(&mut panel, &mut state, "1000");
        assert_eq!(press(&mut panel, &mut state, KeyCode::Enter), EventResult::Handled);
    }

    #[test]
    fn escape_discards_the_buffer() {
        let mut panel = ControlsPanel::new();
        let mut state = AppState::default();

        type_text(&mut panel, &mut state, "999");
        press(&mut panel, &mut state, KeyCode::Esc);
        assert_eq!(state.controls.buffer, None);
        assert_eq!(state.session.params.initial_investment, 1000.0);
    }

    #[test]
    fn years_step_within_bounds() {
        let mut panel = ControlsPanel::new();
        let mut state = AppState::default();
        state.controls.focus = 4; // Years

        assert_eq!(press(&mut panel, &mut state, KeyCode::Right), EventResult::Submit);
        assert_eq!(state.session.params.years, 35.0);

        // Walk to the ceiling; further steps are inert.
        for _ in 0..10 {
            press(&mut panel, &mut state, KeyCode::Right);
        }
        assert_eq!(state.session.params.years, 60.0);
        assert_eq!(press(&mut panel, &mut state, KeyCode::Right), EventResult::Handled);
    }
}
