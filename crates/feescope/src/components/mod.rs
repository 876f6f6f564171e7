pub mod chart;
pub mod controls;
pub mod status_bar;

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

use crate::state::AppState;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was handled, continue
    Handled,
    /// Event was not handled, pass to parent
    NotHandled,
    /// Parameters changed; a new simulation request must be issued
    Submit,
}

/// Trait for components that can handle input and render
pub trait Component {
    /// Handle a key event
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult;

    /// Render the component
    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState);
}
