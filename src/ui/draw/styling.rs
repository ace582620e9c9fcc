//! Styling utilities and color schemes
//!
//! Color helpers and style constants used throughout the UI.

use ratatui::style::{Color, Modifier, Style};

pub fn focused_border() -> Color {
    Color::Cyan
}

pub fn unfocused_border() -> Color {
    Color::DarkGray
}

/// Fixed treatment for failure messages in result regions.
pub fn error_style() -> Style {
    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
}

/// Active button in a format selector group.
pub fn active_choice_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

pub fn inactive_choice_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Delay before the copy affordance label reverts from `Copied!`.
pub const COPY_FEEDBACK_MILLIS: u64 = 2000;
