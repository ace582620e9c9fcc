//! Navigation handlers
//!
//! Moving through the tool list and switching the active tool.

use super::helpers::{apply, log_debug};
use crate::actions::AppAction;
use crate::state::AppState;
use ratatui::widgets::ListState;
use std::sync::{Arc, RwLock};

/// Move the navigation highlight up.
pub fn handle_up(state: Arc<RwLock<AppState>>, list_state: &mut ListState) {
    apply(state.clone(), AppAction::NavUp);
    sync_cursor(state, list_state);
}

/// Move the navigation highlight down.
pub fn handle_down(state: Arc<RwLock<AppState>>, list_state: &mut ListState) {
    apply(state.clone(), AppAction::NavDown);
    sync_cursor(state, list_state);
}

/// Switch to the tool under the navigation highlight.
pub fn handle_select(state: Arc<RwLock<AppState>>, list_state: &mut ListState) {
    let target = {
        let s = state.read().unwrap();
        s.registry.specs().get(s.nav_cursor).map(|spec| spec.id)
    };

    if let Some(id) = target {
        log_debug(&format!("Switching to tool: {id:?}"));
        apply(state.clone(), AppAction::SwitchTool(id));
        sync_cursor(state, list_state);
    }
}

fn sync_cursor(state: Arc<RwLock<AppState>>, list_state: &mut ListState) {
    let cursor = state.read().unwrap().nav_cursor;
    list_state.select(Some(cursor));
}
