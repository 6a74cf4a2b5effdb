//! Layout components (header, action row, status bar)

use super::components::{render_button, BUTTON_HEIGHT};
use crate::agent::AGENT_NAME;
use crate::platform::{GENERATE_SHORTCUT, RESET_SHORTCUT, SAMPLE_SHORTCUT};
use crate::state::{AppState, FocusTarget};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const HEADER_HEIGHT: u16 = 3;

pub const GENERATE_LABEL: &str = "Generate Vendor Onboarding PDF";
pub const GENERATING_LABEL: &str = "Generating PDF...";
pub const RESET_LABEL: &str = "Reset form and start over";

/// Screen regions, top to bottom
pub struct LayoutAreas {
    pub header: Rect,
    pub banner: Rect,
    pub form: Rect,
    pub actions: Rect,
    pub status: Rect,
}

/// Split the screen. `banner_height` is zero when there is nothing to report.
pub fn create_layout(area: Rect, banner_height: u16) -> LayoutAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(banner_height),
            Constraint::Min(0),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1),
        ])
        .split(area);

    LayoutAreas {
        header: chunks[0],
        banner: chunks[1],
        form: chunks[2],
        actions: chunks[3],
        status: chunks[4],
    }
}

/// Title, subtitle and the sample-data switch
pub fn draw_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let switch = if state.sample_data_on() {
        Span::styled("● ON ", Style::default().fg(Color::Green))
    } else {
        Span::styled("○ OFF", Style::default().fg(Color::DarkGray))
    };
    let switch_style = if state.is_loading() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    let switch_line = Line::from(vec![
        Span::styled("Sample Data ", switch_style),
        switch,
        Span::styled(
            format!(" ({SAMPLE_SHORTCUT})"),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let switch_width = switch_line.width() as u16;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(switch_width + 1)])
        .split(inner);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            " Vendor Onboarding",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Generate professional onboarding documents",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(title, chunks[0]);
    frame.render_widget(Paragraph::new(switch_line), chunks[1]);
}

/// Generate button, plus the reset action once there is an outcome
pub fn draw_actions(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focused();
    let generate_label = if state.is_loading() {
        format!("⟳ {GENERATING_LABEL}")
    } else {
        format!("{GENERATE_LABEL} ({GENERATE_SHORTCUT})")
    };

    if !state.submission.has_outcome() {
        let width = (generate_label.chars().count() as u16 + 6).min(area.width);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(width), Constraint::Min(0)])
            .split(area);
        render_button(
            frame,
            chunks[0],
            &generate_label,
            focused == FocusTarget::GenerateButton,
            !state.is_loading(),
            Some(Color::Green),
        );
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    render_button(
        frame,
        chunks[0],
        &generate_label,
        focused == FocusTarget::GenerateButton,
        true,
        Some(Color::Green),
    );
    render_button(
        frame,
        chunks[1],
        &format!("{RESET_LABEL} ({RESET_SHORTCUT})"),
        focused == FocusTarget::ResetButton,
        true,
        None,
    );
}

/// Agent status line with key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let (dot, label) = if state.is_loading() {
        (Color::Yellow, "Processing")
    } else {
        (Color::Green, "Ready")
    };

    let mut spans = vec![
        Span::styled(" ● ", Style::default().fg(dot)),
        Span::styled(AGENT_NAME, Style::default().fg(Color::White)),
        Span::raw(" "),
        Span::styled(label, Style::default().fg(dot)),
        Span::raw(" | "),
        Span::styled(key_hints(state), Style::default().fg(Color::Gray)),
    ];

    if let Some(msg) = &state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

fn key_hints(state: &AppState) -> String {
    if state.is_loading() {
        return "Waiting for the agent...  ^Q:quit".to_string();
    }
    let mut hints = format!("Tab:next  ←/→:choose  {GENERATE_SHORTCUT}:generate");
    if state.submission.has_outcome() {
        hints.push_str("  Esc:dismiss");
    }
    hints.push_str("  ^Q:quit");
    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AgentResult, SubmissionState};

    #[test]
    fn test_layout_without_banner() {
        let areas = create_layout(Rect::new(0, 0, 100, 40), 0);
        assert_eq!(areas.header.height, HEADER_HEIGHT);
        assert_eq!(areas.banner.height, 0);
        assert_eq!(areas.actions.height, BUTTON_HEIGHT);
        assert_eq!(areas.status.height, 1);
        assert_eq!(areas.form.height, 40 - HEADER_HEIGHT - BUTTON_HEIGHT - 1);
    }

    #[test]
    fn test_layout_with_banner() {
        let areas = create_layout(Rect::new(0, 0, 100, 40), 5);
        assert_eq!(areas.banner.height, 5);
        assert_eq!(areas.banner.y, HEADER_HEIGHT);
        assert_eq!(areas.form.y, HEADER_HEIGHT + 5);
    }

    #[test]
    fn test_hints_while_loading() {
        let mut state = AppState::default();
        state.submission = SubmissionState::Loading;
        assert!(key_hints(&state).starts_with("Waiting"));
    }

    #[test]
    fn test_hints_offer_dismiss_after_outcome() {
        let mut state = AppState::default();
        assert!(!key_hints(&state).contains("Esc"));
        state.submission = SubmissionState::Succeeded {
            result: AgentResult::default(),
            pdf_url: None,
        };
        assert!(key_hints(&state).contains("Esc:dismiss"));
    }
}
