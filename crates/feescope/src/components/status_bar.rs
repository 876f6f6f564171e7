use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use feescope_core::RequestState;

use super::{Component, EventResult};
use crate::state::{AppState, FocusedPanel};

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn data_status(state: &AppState) -> Span<'static> {
        match state.session.state() {
            RequestState::Idle => {
                Span::styled("Data: idle", Style::default().fg(Color::DarkGray))
            }
            RequestState::Loading => {
                Span::styled("Data: loading", Style::default().fg(Color::Yellow))
            }
            RequestState::Ready(_) => {
                Span::styled("Data: ready", Style::default().fg(Color::Green))
            }
            RequestState::Failed(error) => {
                Span::styled(format!("Data: {error}"), Style::default().fg(Color::Red))
            }
        }
    }

    fn help_text(state: &AppState) -> &'static str {
        match state.focused_panel {
            FocusedPanel::Controls => {
                "j/k: field | digits: edit | Enter: apply | \u{2190}/\u{2192}: years \u{00b1}5 | Tab: chart | q: quit"
            }
            FocusedPanel::Chart => {
                "\u{2190}/\u{2192}: hover | \u{2191}/\u{2193}: series | Enter: lock | Esc: clear | Tab: inputs | q: quit"
            }
        }
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let line = Line::from(vec![
            Self::data_status(state),
            Span::raw("  |  "),
            Span::styled(Self::help_text(state), Style::default().fg(Color::DarkGray)),
        ]);

        let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}
