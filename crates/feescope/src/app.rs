use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::components::{
    Component, EventResult, chart::ChartPanel, controls::ControlsPanel, status_bar::StatusBar,
};
use crate::fetch::{FetchRequest, FetchWorker};
use crate::state::{AppState, FocusedPanel};

/// How long to wait for a key before checking the fetch worker again.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct App {
    state: AppState,
    worker: FetchWorker,
    controls: ControlsPanel,
    chart: ChartPanel,
    status_bar: StatusBar,
}

impl App {
    pub fn new(api_base: String) -> Self {
        let mut app = Self {
            state: AppState::default(),
            worker: FetchWorker::new(api_base),
            controls: ControlsPanel::new(),
            chart: ChartPanel::new(),
            status_bar: StatusBar::new(),
        };
        // The explorer fetches immediately with the default assumptions.
        app.dispatch_fetch();
        app
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.pump_worker();
            self.handle_events()?;
        }
        // Dropping the worker on the way out cancels any in-flight request.
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(7), // Controls
                Constraint::Min(10),   // Chart + detail lines
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.controls.render(frame, chunks[0], &self.state);
        self.chart.render(frame, chunks[1], &self.state);
        self.status_bar.render(frame, chunks[2], &self.state);
    }

    /// Apply every completed fetch. Stale responses are discarded by the
    /// session's ticket check; a discarded response must not (and does not)
    /// touch any state.
    fn pump_worker(&mut self) {
        while let Some(response) = self.worker.try_recv() {
            let ticket = response.ticket;
            if self.state.session.complete(ticket, response.outcome) {
                tracing::debug!(?ticket, state = ?self.state.session.state(), "request settled");
            } else {
                tracing::debug!(?ticket, "discarded stale fetch response");
            }
        }
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event)
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        let editing = self.state.controls.buffer.is_some();
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() && !editing => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Tab if !editing => {
                self.state.focused_panel.toggle();
                return;
            }
            _ => {}
        }

        let result = match self.state.focused_panel {
            FocusedPanel::Controls => self.controls.handle_key(key_event, &mut self.state),
            FocusedPanel::Chart => self.chart.handle_key(key_event, &mut self.state),
        };

        if result == EventResult::Submit {
            self.dispatch_fetch();
        }
    }

    /// Issue the request for the current parameters, superseding any
    /// in-flight fetch.
    fn dispatch_fetch(&mut self) {
        let (ticket, query) = self.state.session.submit();
        tracing::debug!(?ticket, query = %query.query_string(), "issuing simulation request");
        if !self.worker.send(FetchRequest::Fetch { ticket, query }) {
            tracing::error!("fetch worker is gone; request dropped");
        }
    }
}
