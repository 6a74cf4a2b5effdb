//! Vendor form rendering: three numbered sections in one scrollable panel

use super::field_renderer::{error_line, field_line, FieldStyle};
use crate::state::{AppState, FocusTarget, Section};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Pre-rendered form content
pub struct FormLines {
    pub lines: Vec<Line<'static>>,
    /// Line holding the focused field, if a field has focus
    pub focus_line: Option<usize>,
}

fn section_header(section: Section) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {} ", section.number()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", section.title()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", section.description()),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

/// Lay out every section, field and inline error
pub fn build_form_lines(state: &AppState) -> FormLines {
    let focused = match state.focused() {
        FocusTarget::Field(field) => Some(field),
        _ => None,
    };
    let mut lines = Vec::new();
    let mut focus_line = None;

    for (i, section) in Section::ALL.into_iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(section_header(section));

        for field in section.fields() {
            let error = state.error_for(field);
            if focused == Some(field) {
                focus_line = Some(lines.len());
            }
            lines.push(field_line(
                field,
                state.form.get(field),
                FieldStyle {
                    is_focused: focused == Some(field),
                    is_disabled: state.is_loading(),
                    has_error: error.is_some(),
                },
            ));
            if let Some(message) = error {
                lines.push(error_line(message));
            }
        }
    }

    FormLines { lines, focus_line }
}

/// First visible line so the focused field (and its error) stay on screen
pub fn scroll_offset(focus_line: Option<usize>, total: usize, visible: usize) -> usize {
    let max_offset = total.saturating_sub(visible);
    match focus_line {
        Some(line) => (line + 2).saturating_sub(visible).min(max_offset),
        // Buttons have focus: show the end of the form
        None => max_offset,
    }
}

/// Draw the form panel
pub fn draw_form(frame: &mut Frame, area: Rect, state: &AppState) {
    let FormLines { lines, focus_line } = build_form_lines(state);

    let border_color = if state.is_loading() {
        Color::DarkGray
    } else {
        Color::Gray
    };
    let block = Block::default()
        .title(" Vendor Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let visible = block.inner(area).height as usize;
    let offset = scroll_offset(focus_line, lines.len(), visible);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((offset.min(u16::MAX as usize) as u16, 0));
    frame.render_widget(paragraph, area);
}
