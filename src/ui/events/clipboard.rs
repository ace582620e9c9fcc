//! Clipboard handlers
//!
//! Copies a displayed mock URL to the system clipboard. Feedback is a
//! label swap to `Copied!` that reverts on its own after a fixed delay.

use super::helpers::log_debug;
use crate::actions::{apply_action, AppAction};
use crate::state::AppState;
use crate::ui::draw::styling::COPY_FEEDBACK_MILLIS;
use arboard::Clipboard;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// Copy the mock URL currently on display, if any.
pub fn handle_copy_mock_url(state: Arc<RwLock<AppState>>) {
    let url = {
        let s = state.read().unwrap();
        s.panel.output.mock_url().map(|u| u.to_string())
    };

    let Some(url) = url else {
        log_debug("No mock URL on display to copy");
        return;
    };

    match Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(url.clone()) {
            Ok(_) => {
                log_debug(&format!("Copied mock URL: {url}"));

                {
                    let mut s = state.write().unwrap();
                    apply_action(AppAction::SetCopied(true), &mut s);
                }

                // Revert the label after the feedback delay, independent of
                // further user action
                let state_clone = state.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_millis(COPY_FEEDBACK_MILLIS)).await;
                    let mut s = state_clone.write().unwrap();
                    apply_action(AppAction::SetCopied(false), &mut s);
                });
            }
            Err(e) => {
                log_debug(&format!("Failed to copy to clipboard: {e}"));
            }
        },
        Err(e) => {
            log_debug(&format!("Failed to access clipboard: {e}"));
        }
    }
}
