//! Main panel rendering
//!
//! - Navigation panel (left): the five tools, exactly one marked active
//! - Tool panel (right): the mounted panel's fields, submit control and
//!   result region

use super::styling;
use crate::editor::FieldEditor;
use crate::panel::ToolPanel;
use crate::render::{OutputContent, OutputPane};
use crate::state::AppState;
use crate::types::{PanelField, PanelFocus, SelectorGroup, ToolId};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Render the left panel with the tool list. The active tool carries a
/// marker; the list cursor is the navigation highlight.
pub fn render_nav_panel(frame: &mut Frame, area: Rect, state: &AppState, list_state: &mut ListState) {
    let items: Vec<ListItem> = state
        .registry
        .specs()
        .iter()
        .map(|spec| {
            let is_active = spec.id == state.active_tool;
            let marker = if is_active { "● " } else { "  " };

            let style = if is_active {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::styled(spec.label, style),
            ]))
        })
        .collect();

    let border_color = if state.panel_focus == PanelFocus::Nav {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .title("[1] Tools")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    frame.render_stateful_widget(list, area, list_state);
}

/// Render the right panel: the mounted tool panel.
pub fn render_tool_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let border_color = if state.panel_focus == PanelFocus::Tool {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    };

    let block = Block::default()
        .title(format!("[2] {}", state.heading))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let panel = &state.panel;
    let panel_focused = state.panel_focus == PanelFocus::Tool;
    let focused_field = panel.focused_field();
    let is_focused = |field: PanelField| panel_focused && focused_field == field;

    match panel.tool {
        ToolId::Mock | ToolId::Regex | ToolId::Json => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(5),    // input
                    Constraint::Length(1), // submit
                    Constraint::Length(8), // result
                ])
                .split(inner_area);

            let input_title = match panel.tool {
                ToolId::Mock => "Response JSON",
                ToolId::Regex => "Description",
                _ => "JSON Input",
            };
            render_editor(frame, chunks[0], input_title, &panel.input, is_focused(PanelField::Input));
            render_submit(frame, chunks[1], panel);
            render_output(frame, chunks[2], &panel.output);
        }
        ToolId::Sql => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(4),    // schema
                    Constraint::Min(4),    // description
                    Constraint::Length(1), // submit
                    Constraint::Length(7), // result
                ])
                .split(inner_area);

            render_editor(
                frame,
                chunks[0],
                "Schema",
                panel.schema.as_ref().expect("sql panel carries a schema field"),
                is_focused(PanelField::Schema),
            );
            render_editor(frame, chunks[1], "Description", &panel.input, is_focused(PanelField::Input));
            render_submit(frame, chunks[2], panel);
            render_output(frame, chunks[3], &panel.output);
        }
        ToolId::Config => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(4),    // input
                    Constraint::Length(3), // from group
                    Constraint::Length(3), // to group
                    Constraint::Length(1), // submit
                    Constraint::Min(4),    // output field
                ])
                .split(inner_area);

            render_editor(frame, chunks[0], "Input", &panel.input, is_focused(PanelField::Input));
            render_selector(
                frame,
                chunks[1],
                "From",
                panel.from_format.as_ref().expect("config panel carries a from group"),
                is_focused(PanelField::FromFormat),
            );
            render_selector(
                frame,
                chunks[2],
                "To",
                panel.to_format.as_ref().expect("config panel carries a to group"),
                is_focused(PanelField::ToFormat),
            );
            render_submit(frame, chunks[3], panel);
            render_editor(
                frame,
                chunks[4],
                "Output",
                panel.output_field.as_ref().expect("config panel carries an output field"),
                is_focused(PanelField::Output),
            );
        }
    }
}

// ============================================================================
// Private Helper Functions
// ============================================================================

/// Render a text field. The focused field shows a trailing cursor mark.
fn render_editor(frame: &mut Frame, area: Rect, title: &str, editor: &FieldEditor, focused: bool) {
    let border_style = if focused {
        Style::default().fg(styling::focused_border())
    } else {
        Style::default().fg(styling::unfocused_border())
    };

    let text = if focused {
        format!("{}_", editor.content())
    } else {
        editor.content().to_string()
    };

    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {title} ")),
    );

    frame.render_widget(paragraph, area);
}

/// Render a mutually exclusive format button group.
fn render_selector(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    group: &SelectorGroup,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(styling::focused_border())
    } else {
        Style::default().fg(styling::unfocused_border())
    };

    let mut spans = Vec::new();
    for choice in crate::types::FormatChoice::ALL {
        let style = if choice == group.active() {
            styling::active_choice_style()
        } else {
            styling::inactive_choice_style()
        };
        spans.push(Span::styled(format!("[ {} ]", choice.label()), style));
        spans.push(Span::raw(" "));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {title} ")),
    );

    frame.render_widget(paragraph, area);
}

/// Render the submit control with its current label and busy state.
fn render_submit(frame: &mut Frame, area: Rect, panel: &ToolPanel) {
    let style = if panel.submit.is_busy() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };

    let line = Line::from(vec![
        Span::styled(format!("[ {} ]", panel.submit.label()), style),
        Span::styled("  (Ctrl+S)", Style::default().fg(Color::DarkGray)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the result region. Hidden until something has been shown.
fn render_output(frame: &mut Frame, area: Rect, output: &OutputPane) {
    let Some(content) = output.content() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(styling::unfocused_border()))
        .title(" Result ");

    let paragraph = match content {
        // Literal text, no styling or interpretation
        OutputContent::Verbatim(text) => {
            Paragraph::new(text.as_str()).wrap(Wrap { trim: false })
        }
        OutputContent::MockUrl { url, copied } => {
            let copy_label = if *copied { "[ Copied! ]" } else { "[ Copy ]" };
            let copy_style = if *copied {
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Cyan)
            };

            Paragraph::new(Line::from(vec![
                Span::styled(
                    format!(" {url} "),
                    Style::default().fg(Color::White).bg(Color::DarkGray),
                ),
                Span::raw("  "),
                Span::styled(copy_label, copy_style),
                Span::styled("  (Ctrl+Y)", Style::default().fg(Color::DarkGray)),
            ]))
        }
        OutputContent::RegexPair { regex, explanation } => Paragraph::new(vec![
            Line::from(Span::styled(
                regex.as_str(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::raw(explanation.as_str())),
        ])
        .wrap(Wrap { trim: false }),
        OutputContent::Error(message) => {
            Paragraph::new(message.as_str())
                .style(styling::error_style())
                .wrap(Wrap { trim: false })
        }
    };

    frame.render_widget(paragraph.block(block), area);
}
