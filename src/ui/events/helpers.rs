//! Helper functions for event handling
//!
//! State locking helpers for applying actions, plus debug logging.

use crate::actions::{apply_action, AppAction};
use crate::state::AppState;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::{Arc, RwLock};

/// Apply a single action to state
pub fn apply(state: Arc<RwLock<AppState>>, action: AppAction) {
    let mut s = state.write().unwrap();
    apply_action(action, &mut s);
}

/// Log debug message to /tmp/devkit-tui.log
pub fn log_debug(msg: &str) {
    let _ = OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/devkit-tui.log")
        .and_then(|mut f| writeln!(f, "{msg}"));
}
