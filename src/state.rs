use crate::panel::ToolPanel;
use crate::tools::ToolRegistry;
use crate::types::{PanelFocus, ToolId};
use std::fmt;

/// Navigation to a tool id with no registered descriptor. A wiring bug,
/// not a user error; surfaced on the diagnostic line instead of being
/// swallowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwitchError {
    Unregistered(ToolId),
}

impl fmt::Display for SwitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwitchError::Unregistered(id) => {
                write!(f, "No tool registered for {id:?}")
            }
        }
    }
}

/// Shared application state, owned behind `Arc<RwLock<..>>` by the event
/// loop and the dispatcher's background tasks.
///
/// `active_tool` is the single source of truth for which tool is live;
/// only `switch_tool` mutates it, and every switch replaces `panel` with
/// freshly mounted state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: ToolRegistry,
    pub active_tool: ToolId,
    pub panel: ToolPanel,
    /// Page heading, mirrors the active tool's label.
    pub heading: String,
    /// Cursor in the navigation list (which entry is highlighted, not
    /// which tool is active).
    pub nav_cursor: usize,
    pub panel_focus: PanelFocus,
    /// Last configuration diagnostic, shown in the footer area.
    pub diagnostic: Option<String>,
}

impl AppState {
    /// Build startup state with the default tool already switched in.
    pub fn new(registry: ToolRegistry) -> Self {
        let default_tool = ToolId::Mock;
        let spec = registry
            .get(default_tool)
            .expect("standard registry carries the default tool");
        let panel = ToolPanel::mount(spec);
        let heading = spec.label.to_string();

        Self {
            registry,
            active_tool: default_tool,
            panel,
            heading,
            nav_cursor: 0,
            panel_focus: PanelFocus::Nav,
            diagnostic: None,
        }
    }

    /// Deactivate the current tool and activate `id`: mount a fresh panel,
    /// sync the navigation highlight and the heading.
    ///
    /// On an unregistered id nothing changes; the caller reports the error.
    pub fn switch_tool(&mut self, id: ToolId) -> Result<(), SwitchError> {
        let spec = self
            .registry
            .get(id)
            .ok_or(SwitchError::Unregistered(id))?;

        self.panel = ToolPanel::mount(spec);
        self.active_tool = id;
        self.heading = spec.label.to_string();
        self.nav_cursor = self
            .registry
            .specs()
            .iter()
            .position(|t| t.id == id)
            .unwrap_or(0);
        Ok(())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ToolRegistry::standard())
    }
}
