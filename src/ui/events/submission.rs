//! Submission handler
//!
//! Gathers the active panel's input and hands it to the dispatcher. A
//! panel whose submit control is busy refuses re-entry; a local validation
//! failure is rendered straight away and never reaches the network.

use super::helpers::log_debug;
use crate::dispatch::dispatch_background;
use crate::state::AppState;
use std::sync::{Arc, RwLock};

pub fn handle_submit(state: Arc<RwLock<AppState>>, base_url: String) {
    let (tool, endpoint, request) = {
        let s = state.read().unwrap();

        if s.panel.submit.is_busy() {
            log_debug("Submission refused: request already in flight");
            return;
        }

        let Some(spec) = s.registry.get(s.active_tool) else {
            // Cannot happen with a mounted panel, but never swallow it
            log_debug(&format!("No descriptor for active tool {:?}", s.active_tool));
            return;
        };

        (s.panel.tool, spec.endpoint, s.panel.build_request())
    };

    match request {
        Ok(body) => {
            log_debug(&format!("Dispatching {tool:?} -> {endpoint}"));
            dispatch_background(state, base_url, endpoint, tool, body);
        }
        Err(message) => {
            // Local validation failure; same error path, no dispatch
            log_debug(&format!("Local validation failed: {message}"));
            let mut s = state.write().unwrap();
            s.panel.apply_input_error(message);
        }
    }
}
