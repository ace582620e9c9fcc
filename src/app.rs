use crate::config::Config;
use crate::state::AppState;
use crate::ui;
use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::ListState,
    DefaultTerminal, Frame,
};
use std::sync::{Arc, RwLock};

#[derive(Debug)]
pub struct App {
    state: Arc<RwLock<AppState>>,
    list_state: ListState,
    base_url: String,
    event_handler: ui::EventHandler,
}

impl Default for App {
    fn default() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        // Load config; fall back to the default service URL on any problem
        let base_url = Config::load()
            .map(|c| c.base_url())
            .unwrap_or_else(|_| crate::config::DEFAULT_BASE_URL.to_string());

        Self {
            state: Arc::new(RwLock::new(AppState::default())),
            list_state,
            base_url,
            event_handler: ui::EventHandler::new(),
        }
    }
}

impl App {
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        // Main UI loop
        while !self.event_handler.should_quit {
            terminal.draw(|frame| self.draw(frame))?;

            self.event_handler.handle_events(
                Arc::clone(&self.state),
                &mut self.list_state,
                &self.base_url,
            )?;
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let state = self.state.read().unwrap();

        // Main layout: Header, Body, Footer
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(main_chunks[1]);

        ui::draw::render_header(frame, main_chunks[0], &self.base_url, &state);
        ui::draw::render_nav_panel(frame, body_chunks[0], &state, &mut self.list_state);
        ui::draw::render_tool_panel(frame, body_chunks[1], &state);
        ui::draw::render_footer(frame, main_chunks[2], &state);
    }
}
