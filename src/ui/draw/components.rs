//! Reusable UI components
//!
//! Shared chrome around the two main panels:
//! - Header (app name, service URL, active tool heading)
//! - Footer (command help, configuration diagnostics)

use crate::state::AppState;
use crate::types::PanelFocus;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::styling;

/// Render the application header with the service URL and the active tool
/// heading.
pub fn render_header(frame: &mut Frame, area: Rect, base_url: &str, state: &AppState) {
    let header_text = format!("devkit - {base_url} | {}", state.heading);

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the footer with command help; a pending configuration diagnostic
/// takes the line over until the next successful switch or Esc dismisses it.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    if let Some(diagnostic) = &state.diagnostic {
        let footer = Paragraph::new(diagnostic.as_str())
            .style(styling::error_style())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Diagnostic (Esc to dismiss)"),
            );
        frame.render_widget(footer, area);
        return;
    }

    let footer_text = match state.panel_focus {
        PanelFocus::Nav => "j/k/↑/↓:Navigate Enter:Open tool Tab:Panel | q:Quit",
        PanelFocus::Tool => {
            "↑/↓:Field ←/→:Cursor/Choice Ctrl+S:Submit Ctrl+Y:Copy URL Esc:Back | Ctrl+C:Quit"
        }
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Commands"));

    frame.render_widget(footer, area);
}
