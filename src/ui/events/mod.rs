//! Event handling system for devkit-tui
//!
//! Translates user input into state-changing actions. Two focus contexts:
//! - Nav: moving through the tool list and switching the active tool
//! - Tool: editing the mounted panel's fields, submitting, copying
//!
//! # Architecture
//!
//! Input events generate `AppAction`s applied to `AppState` through
//! `apply_action` in actions.rs; text editing and dispatch go through
//! their own modules. State is shared as `Arc<RwLock<AppState>>` with the
//! dispatcher's background tasks, so handlers keep lock scopes short.

mod clipboard;
mod editing;
mod helpers;
mod navigation;
mod submission;

use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::PanelFocus;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use helpers::apply;
use ratatui::widgets::ListState;
use std::sync::{Arc, RwLock};

/// Event handler for managing user input and state updates
#[derive(Debug)]
pub struct EventHandler {
    pub should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self { should_quit: false }
    }

    /// Main event handling entry - dispatches on panel focus.
    pub fn handle_events(
        &mut self,
        state: Arc<RwLock<AppState>>,
        list_state: &mut ListState,
        base_url: &str,
    ) -> Result<()> {
        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Ctrl+C always quits, whatever has focus
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    self.should_quit = true;
                    return Ok(());
                }

                let panel_focus = state.read().unwrap().panel_focus;

                match panel_focus {
                    PanelFocus::Nav => match key.code {
                        KeyCode::Char('q') => self.should_quit = true,
                        KeyCode::Char('j') | KeyCode::Down => {
                            navigation::handle_down(state.clone(), list_state);
                        }
                        KeyCode::Char('k') | KeyCode::Up => {
                            navigation::handle_up(state.clone(), list_state);
                        }
                        KeyCode::Enter => {
                            navigation::handle_select(state.clone(), list_state);
                        }
                        KeyCode::Tab => {
                            apply(state.clone(), AppAction::FocusPanel(PanelFocus::Tool));
                        }
                        // dismiss a pending diagnostic
                        KeyCode::Esc => {
                            apply(state.clone(), AppAction::ClearDiagnostic);
                        }
                        _ => {}
                    },

                    PanelFocus::Tool => match key.code {
                        // submit the panel's input
                        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            submission::handle_submit(state.clone(), base_url.to_string());
                        }
                        // copy a displayed mock URL
                        KeyCode::Char('y') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            clipboard::handle_copy_mock_url(state.clone());
                        }
                        KeyCode::Esc => {
                            apply(state.clone(), AppAction::FocusPanel(PanelFocus::Nav));
                        }
                        KeyCode::Tab => {
                            apply(state.clone(), AppAction::FocusNextField);
                        }
                        KeyCode::BackTab => {
                            apply(state.clone(), AppAction::FocusPrevField);
                        }
                        KeyCode::Up => {
                            apply(state.clone(), AppAction::FocusPrevField);
                        }
                        KeyCode::Down => {
                            apply(state.clone(), AppAction::FocusNextField);
                        }
                        _ => {
                            editing::handle_field_key(state.clone(), key);
                        }
                    },
                }
            }
        }
        Ok(())
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
