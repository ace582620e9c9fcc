use crate::state::AppState;
use crate::types::{PanelFocus, ToolId};

/// State-changing actions. Input handling produces these; `apply_action`
/// is the single place panel and navigation state gets mutated outside of
/// text editing and dispatch settling.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Deactivate the current tool and activate another.
    SwitchTool(ToolId),

    // Navigation list
    NavUp,
    NavDown,
    FocusPanel(PanelFocus),

    // Within the mounted tool panel
    FocusNextField,
    FocusPrevField,
    CycleFormatNext,
    CycleFormatPrev,

    // Copy affordance label on the mock result
    SetCopied(bool),

    ClearDiagnostic,
}

pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        AppAction::SwitchTool(id) => match state.switch_tool(id) {
            Ok(()) => {
                state.diagnostic = None;
                state.panel_focus = PanelFocus::Tool;
            }
            Err(err) => {
                // Wiring bug; report it, keep the current tool live.
                state.diagnostic = Some(err.to_string());
            }
        },

        AppAction::NavUp => {
            state.nav_cursor = state.nav_cursor.saturating_sub(1);
        }
        AppAction::NavDown => {
            let max = state.registry.specs().len().saturating_sub(1);
            if state.nav_cursor < max {
                state.nav_cursor += 1;
            }
        }
        AppAction::FocusPanel(panel) => {
            state.panel_focus = panel;
        }

        AppAction::FocusNextField => {
            state.panel.focus_next();
        }
        AppAction::FocusPrevField => {
            state.panel.focus_prev();
        }
        AppAction::CycleFormatNext => {
            if let Some(group) = state.panel.focused_selector_mut() {
                group.cycle_next();
            }
        }
        AppAction::CycleFormatPrev => {
            if let Some(group) = state.panel.focused_selector_mut() {
                group.cycle_prev();
            }
        }

        AppAction::SetCopied(value) => {
            state.panel.output.set_copied(value);
        }

        AppAction::ClearDiagnostic => {
            state.diagnostic = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FormatChoice, PanelField};

    #[test]
    fn test_switch_tool_action() {
        let mut state = AppState::default();
        apply_action(AppAction::SwitchTool(ToolId::Sql), &mut state);
        assert_eq!(state.active_tool, ToolId::Sql);
        assert_eq!(state.panel_focus, PanelFocus::Tool);
        assert!(state.diagnostic.is_none());
    }

    #[test]
    fn test_nav_cursor_stays_in_bounds() {
        let mut state = AppState::default();
        apply_action(AppAction::NavUp, &mut state);
        assert_eq!(state.nav_cursor, 0);

        for _ in 0..10 {
            apply_action(AppAction::NavDown, &mut state);
        }
        assert_eq!(state.nav_cursor, state.registry.specs().len() - 1);
    }

    #[test]
    fn test_cycle_format_only_touches_selectors() {
        let mut state = AppState::default();
        apply_action(AppAction::SwitchTool(ToolId::Config), &mut state);

        // Input field focused: cycling is a no-op
        apply_action(AppAction::CycleFormatNext, &mut state);
        assert_eq!(
            state.panel.from_format.as_ref().unwrap().active(),
            FormatChoice::Json
        );

        // Move to the "to" group and cycle yaml -> toml
        apply_action(AppAction::FocusNextField, &mut state);
        apply_action(AppAction::FocusNextField, &mut state);
        assert_eq!(state.panel.focused_field(), PanelField::ToFormat);
        apply_action(AppAction::CycleFormatNext, &mut state);
        assert_eq!(
            state.panel.to_format.as_ref().unwrap().active(),
            FormatChoice::Toml
        );
        // Sibling group untouched
        assert_eq!(
            state.panel.from_format.as_ref().unwrap().active(),
            FormatChoice::Json
        );
    }

    #[test]
    fn test_clear_diagnostic() {
        let mut state = AppState::default();
        state.diagnostic = Some("No tool registered for Sql".to_string());

        apply_action(AppAction::ClearDiagnostic, &mut state);
        assert!(state.diagnostic.is_none());
    }

    #[test]
    fn test_set_copied_flag() {
        let mut state = AppState::default();
        state.panel.output.show(crate::render::OutputContent::MockUrl {
            url: "https://mock.example/abc123".to_string(),
            copied: false,
        });

        apply_action(AppAction::SetCopied(true), &mut state);
        match state.panel.output.content() {
            Some(crate::render::OutputContent::MockUrl { copied, .. }) => assert!(copied),
            other => panic!("unexpected content: {other:?}"),
        }
    }
}
