//! Field editing handlers
//!
//! Keystrokes aimed at the mounted tool panel: text input into the focused
//! editor, cursor movement, and cycling a focused format selector group.

use super::helpers::apply;
use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::PanelField;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, RwLock};

/// Route a key to the focused field. Returns true if consumed.
pub fn handle_field_key(state: Arc<RwLock<AppState>>, key: KeyEvent) -> bool {
    // Selector groups take arrow/vi-style cycling instead of text editing
    let on_selector = {
        let s = state.read().unwrap();
        matches!(
            s.panel.focused_field(),
            PanelField::FromFormat | PanelField::ToFormat
        )
    };

    if on_selector {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                apply(state, AppAction::CycleFormatPrev);
                return true;
            }
            KeyCode::Right | KeyCode::Char('l') => {
                apply(state, AppAction::CycleFormatNext);
                return true;
            }
            _ => return false,
        }
    }

    let mut s = state.write().unwrap();
    let Some(editor) = s.panel.focused_editor_mut() else {
        return false;
    };

    match key.code {
        // Plain characters batch up so terminal paste lands in one write
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            editor.handle_paste_batch(c);
            true
        }
        _ => editor.handle_key_event(key),
    }
}
