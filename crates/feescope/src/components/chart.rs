//! The chart panel: two fee trajectories with a keyboard point cursor.
//!
//! The panel consumes the core's series descriptors and reports point
//! hover/click/unhover events back through `on_point_event`; it has no say
//! in how the labels are formatted or stored.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use feescope_core::{PointEventKind, RequestState, SeriesDescriptor};

use super::{Component, EventResult};
use crate::state::{AppState, FocusedPanel};

pub struct ChartPanel;

impl ChartPanel {
    pub fn new() -> Self {
        Self
    }

    fn series_color(descriptor: &SeriesDescriptor) -> Color {
        let (r, g, b) = descriptor.role.color_rgb();
        Color::Rgb(r, g, b)
    }

    /// Emit a hover event for the point under the cursor. The descriptor may
    /// hold zero points; the core treats a missing point as a no-op.
    fn hover_current(state: &mut AppState) {
        let point = state.session.series().and_then(|series| {
            series[state.chart.active_series % 2]
                .points
                .get(state.chart.point_index)
                .copied()
        });
        state.session.interaction.on_point_event(point, PointEventKind::Hover);
    }

    fn point_count(state: &AppState) -> usize {
        state
            .session
            .series()
            .map(|series| series[state.chart.active_series % 2].points.len())
            .unwrap_or(0)
    }
}

impl Component for ChartPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if !state.session.state().is_ready() {
            // No displayed series, nothing to inspect.
            return EventResult::NotHandled;
        }
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                state.chart.point_index = state.chart.point_index.saturating_sub(1);
                Self::hover_current(state);
                EventResult::Handled
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let last = Self::point_count(state).saturating_sub(1);
                state.chart.point_index = (state.chart.point_index + 1).min(last);
                Self::hover_current(state);
                EventResult::Handled
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('j') => {
                state.chart.active_series = (state.chart.active_series + 1) % 2;
                Self::hover_current(state);
                EventResult::Handled
            }
            KeyCode::Enter => {
                let point = state.session.series().and_then(|series| {
                    series[state.chart.active_series % 2]
                        .points
                        .get(state.chart.point_index)
                        .copied()
                });
                state.session.interaction.on_point_event(point, PointEventKind::Click);
                EventResult::Handled
            }
            KeyCode::Esc => {
                state
                    .session
                    .interaction
                    .on_point_event(None, PointEventKind::Unhover);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let panel_focused = state.focused_panel == FocusedPanel::Chart;
        let border_style = if panel_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .title("Impact of Fees on Investment")
            .borders(Borders::ALL)
            .border_style(border_style);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(2)])
            .split(area);

        match state.session.state() {
            RequestState::Ready(_) => {
                if let Some(series) = state.session.series() {
                    self.render_chart(frame, chunks[0], state, block, &series);
                }
            }
            RequestState::Loading => {
                let message = Paragraph::new("Fetching simulation data\u{2026}")
                    .style(Style::default().fg(Color::Yellow))
                    .block(block);
                frame.render_widget(message, chunks[0]);
            }
            RequestState::Idle | RequestState::Failed(_) => {
                // Explicit no-data state; the status bar carries the reason.
                let message = Paragraph::new("No data available.")
                    .style(Style::default().fg(Color::DarkGray))
                    .block(block);
                frame.render_widget(message, chunks[0]);
            }
        }

        self.render_details(frame, chunks[1], state);
    }
}

impl ChartPanel {
    fn render_chart(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        block: Block,
        series: &[SeriesDescriptor; 2],
    ) {
        let formatter = state.session.interaction.formatter();

        let x_min = series[0].points.first().map(|p| p.0).unwrap_or(0.0);
        let x_max = series[0].points.last().map(|p| p.0).unwrap_or(1.0);
        let y_max = series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.1))
            .fold(f64::NEG_INFINITY, f64::max)
            .max(1.0);
        let y_upper = y_max * 1.1;

        let mut datasets: Vec<Dataset> = series
            .iter()
            .map(|descriptor| {
                Dataset::default()
                    .name(descriptor.label.clone())
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(Self::series_color(descriptor)))
                    .data(&descriptor.points)
            })
            .collect();

        // Cursor overlay: one bright point on the active series.
        let cursor = series[state.chart.active_series % 2]
            .points
            .get(state.chart.point_index)
            .map(|&point| [point]);
        if let Some(cursor) = &cursor {
            datasets.push(
                Dataset::default()
                    .marker(symbols::Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(Color::White))
                    .data(cursor),
            );
        }

        let x_labels = vec![
            Span::raw(format!("{x_min:.0}")),
            Span::raw(format!("{:.0}", (x_min + x_max) / 2.0)),
            Span::raw(format!("{x_max:.0}")),
        ];
        let y_labels = vec![
            Span::raw(formatter.format_compact(0.0)),
            Span::raw(formatter.format_compact(y_upper / 2.0)),
            Span::raw(formatter.format_compact(y_upper)),
        ];

        let x_axis = Axis::default()
            .title("Year".dark_gray())
            .bounds([x_min, x_max])
            .labels(x_labels);
        let y_axis = Axis::default()
            .title("Balance (EUR)".dark_gray())
            .bounds([0.0, y_upper])
            .labels(y_labels);

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis);

        frame.render_widget(chart, area);
    }

    fn render_details(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let interaction = &state.session.interaction;
        let hover = interaction
            .hovered
            .as_deref()
            .unwrap_or("\u{2190}/\u{2192} to inspect points");
        let selected = interaction
            .selected
            .as_deref()
            .unwrap_or("Enter to lock a point");

        let line = Line::from(vec![
            Span::styled("Hover: ", Style::default().fg(Color::DarkGray)),
            Span::raw(hover),
            Span::raw("    "),
            Span::styled("Selected: ", Style::default().fg(Color::DarkGray)),
            Span::raw(selected),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
